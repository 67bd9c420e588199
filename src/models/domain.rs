use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque profile identifier: serial integer ids from the relational store,
/// or free-form string ids from seed data and other sources.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ProfileId {
    Int(i64),
    Text(String),
}

impl ProfileId {
    /// Parse a raw identifier (e.g. a path segment), preferring the integer form
    pub fn parse(raw: &str) -> Self {
        let raw = raw.trim();
        raw.parse::<i64>()
            .map(ProfileId::Int)
            .unwrap_or_else(|_| ProfileId::Text(raw.to_string()))
    }

    /// Whether both ids name the same profile, so `7` and `"7"` match
    pub fn refers_to(&self, other: &ProfileId) -> bool {
        match (self, other) {
            (ProfileId::Int(a), ProfileId::Int(b)) => a == b,
            (ProfileId::Text(a), ProfileId::Text(b)) => a.trim() == b.trim(),
            (ProfileId::Int(n), ProfileId::Text(text)) | (ProfileId::Text(text), ProfileId::Int(n)) => {
                text.trim().parse::<i64>() == Ok(*n)
            }
        }
    }

    /// A blank string id is treated as an absent identifier
    pub fn is_missing(&self) -> bool {
        matches!(self, ProfileId::Text(text) if text.trim().is_empty())
    }
}

impl fmt::Display for ProfileId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProfileId::Int(id) => write!(f, "{}", id),
            ProfileId::Text(id) => f.write_str(id),
        }
    }
}

impl From<i64> for ProfileId {
    fn from(id: i64) -> Self {
        ProfileId::Int(id)
    }
}

impl From<&str> for ProfileId {
    fn from(id: &str) -> Self {
        ProfileId::Text(id.to_string())
    }
}

/// Profile of a person or entity seeking collaborators.
///
/// Only `skills`, `resources` and `values` take part in scoring; the
/// descriptive fields are carried through to responses untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub id: ProfileId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(rename = "profileImage", default)]
    pub profile_image: Option<String>,
    #[serde(default)]
    pub skills: Vec<String>,
    #[serde(default)]
    pub resources: Vec<String>,
    #[serde(default)]
    pub values: Vec<String>,
}

impl Profile {
    /// Borrow the three label collections used for scoring
    pub fn labels(&self) -> ProfileLabels<'_> {
        ProfileLabels {
            skills: &self.skills,
            resources: &self.resources,
            values: &self.values,
        }
    }
}

/// The scored side of a profile: its skill, resource and value labels
#[derive(Debug, Clone, Copy)]
pub struct ProfileLabels<'a> {
    pub skills: &'a [String],
    pub resources: &'a [String],
    pub values: &'a [String],
}

/// Outcome of scoring one candidate against a reference profile
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    #[serde(rename = "candidateId")]
    pub candidate_id: ProfileId,
    #[serde(rename = "totalScore")]
    pub total_score: f64,
    /// Candidate skills the reference lacks, in the candidate's order
    #[serde(rename = "complementarySkills")]
    pub complementary_skills: Vec<String>,
    /// Candidate resources the reference lacks, in the candidate's order
    #[serde(rename = "complementaryResources")]
    pub complementary_resources: Vec<String>,
    /// Values held by both sides, in the reference's order
    #[serde(rename = "sharedValues")]
    pub shared_values: Vec<String>,
}

/// Ranked match as returned to clients
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScoredMatch {
    #[serde(rename = "userId")]
    pub user_id: ProfileId,
    pub name: String,
    pub location: Option<String>,
    pub bio: Option<String>,
    #[serde(rename = "profileImage")]
    pub profile_image: Option<String>,
    #[serde(rename = "totalScore")]
    pub total_score: f64,
    #[serde(rename = "matchPercentage")]
    pub match_percentage: u8,
    #[serde(rename = "complementarySkills")]
    pub complementary_skills: Vec<String>,
    #[serde(rename = "complementaryResources")]
    pub complementary_resources: Vec<String>,
    #[serde(rename = "sharedValues")]
    pub shared_values: Vec<String>,
}

/// Browse filters applied to the candidate pool before scoring.
///
/// Terms are matched case-insensitively as substrings. Empty fields accept
/// every profile.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileFilter {
    pub search: Option<String>,
    pub locations: Vec<String>,
    pub skills: Vec<String>,
    pub resources: Vec<String>,
    pub values: Vec<String>,
}

impl ProfileFilter {
    pub fn is_empty(&self) -> bool {
        self.search.as_deref().map_or(true, |s| s.trim().is_empty())
            && self.locations.is_empty()
            && self.skills.is_empty()
            && self.resources.is_empty()
            && self.values.is_empty()
    }
}

/// Scoring weights
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoringWeights {
    pub skills: f64,
    pub resources: f64,
    pub values: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skills: 2.0,
            resources: 3.0,
            values: 1.5,
        }
    }
}
