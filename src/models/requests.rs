use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::models::domain::ProfileFilter;

/// Query parameters for the find matches endpoint
///
/// List filters (`locations`, `skills`, `resources`, `values`) are
/// comma-separated.
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
pub struct FindMatchesQuery {
    #[validate(custom(function = "validate_finite"), range(min = 0.0))]
    #[serde(rename = "minScore")]
    pub min_score: Option<f64>,
    #[validate(custom(function = "validate_finite"), range(exclusive_min = 0.0))]
    #[serde(rename = "maxPossibleScore")]
    pub max_possible_score: Option<f64>,
    #[validate(range(min = 1))]
    pub limit: Option<u16>,
    pub offset: Option<usize>,
    pub search: Option<String>,
    pub locations: Option<String>,
    pub skills: Option<String>,
    pub resources: Option<String>,
    pub values: Option<String>,
}

impl FindMatchesQuery {
    /// Build the browse filter described by this query
    pub fn profile_filter(&self) -> ProfileFilter {
        ProfileFilter {
            search: self
                .search
                .as_deref()
                .map(str::trim)
                .filter(|s| !s.is_empty())
                .map(str::to_string),
            locations: split_terms(self.locations.as_deref()),
            skills: split_terms(self.skills.as_deref()),
            resources: split_terms(self.resources.as_deref()),
            values: split_terms(self.values.as_deref()),
        }
    }
}

/// Reject NaN and infinities, which slip past plain range checks
fn validate_finite(value: f64) -> Result<(), ValidationError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(ValidationError::new("not_finite"))
    }
}

fn split_terms(raw: Option<&str>) -> Vec<String> {
    raw.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|term| !term.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
