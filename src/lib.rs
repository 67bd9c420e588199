//! Coop Match - complementary-matching service for a community collaboration platform
//!
//! The core ranks candidate collaborators for a reference profile by
//! complementary skills, complementary resources and shared values. It is
//! pure and synchronous; the service layer around it loads profiles and
//! exposes the ranking over HTTP.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use crate::core::{MatchEngine, MatchError, MatchOptions, MatchPage, calculate_match_score, to_percentage};
pub use crate::models::{Profile, ProfileId, MatchResult, ScoredMatch, ScoringWeights, FindMatchesQuery, FindMatchesResponse};
