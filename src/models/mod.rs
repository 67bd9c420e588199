// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Profile, ProfileId, ProfileLabels, ProfileFilter, MatchResult, ScoredMatch, ScoringWeights};
pub use requests::FindMatchesQuery;
pub use responses::{FindMatchesResponse, HealthResponse, ErrorResponse};
