// Core algorithm exports
pub mod error;
pub mod filters;
pub mod labels;
pub mod matcher;
pub mod scoring;

pub use error::MatchError;
pub use filters::{
    filter_by_min_score, matches_profile_filter, sort_by_score_descending, to_percentage,
    DEFAULT_MAX_POSSIBLE_SCORE, DEFAULT_MIN_SCORE,
};
pub use labels::{label_set, ordered_difference, ordered_intersection};
pub use matcher::{MatchEngine, MatchOptions, MatchPage};
pub use scoring::calculate_match_score;
