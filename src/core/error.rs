use thiserror::Error;

/// Contract violations raised by the match engine.
///
/// Empty label collections and empty result sets are never errors.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum MatchError {
    #[error("Candidate identifier is missing")]
    MissingCandidateId,

    #[error("Invalid {name} weight: {value} (must be finite and non-negative)")]
    InvalidWeight { name: &'static str, value: f64 },
}
