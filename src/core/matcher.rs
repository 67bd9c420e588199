use crate::models::{MatchResult, Profile, ProfileFilter, ScoredMatch, ScoringWeights};
use crate::core::{
    error::MatchError,
    filters::{
        matches_profile_filter, score_descending, to_percentage, DEFAULT_MAX_POSSIBLE_SCORE,
        DEFAULT_MIN_SCORE,
    },
    scoring::calculate_match_score,
};

/// Threshold, display and paging parameters for [`MatchEngine::find_matches`]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MatchOptions {
    pub min_score: f64,
    pub max_possible_score: f64,
    pub offset: usize,
    pub limit: usize,
}

impl Default for MatchOptions {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
            max_possible_score: DEFAULT_MAX_POSSIBLE_SCORE,
            offset: 0,
            limit: 20,
        }
    }
}

/// One page of ranked matches
#[derive(Debug)]
pub struct MatchPage {
    pub matches: Vec<ScoredMatch>,
    /// Number of candidates that passed the score threshold
    pub total_results: usize,
    pub next_offset: Option<usize>,
}

/// Complementary-matching engine
///
/// Stateless apart from its weights: every call reads only its arguments,
/// so a single engine can be shared freely between request handlers.
///
/// # Pipeline Stages
/// 1. Self-exclusion and browse filtering (`find_matches` only)
/// 2. Scoring
/// 3. Stable sort by score
/// 4. Threshold filtering
/// 5. Percentage normalization and paging
#[derive(Debug, Clone)]
pub struct MatchEngine {
    weights: ScoringWeights,
}

impl MatchEngine {
    /// Create an engine with custom weights
    ///
    /// Weights must be finite and non-negative so that scores stay >= 0.
    pub fn new(weights: ScoringWeights) -> Result<Self, MatchError> {
        for (name, value) in [
            ("skills", weights.skills),
            ("resources", weights.resources),
            ("values", weights.values),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(MatchError::InvalidWeight { name, value });
            }
        }

        Ok(Self { weights })
    }

    pub fn with_default_weights() -> Self {
        Self {
            weights: ScoringWeights::default(),
        }
    }

    pub fn weights(&self) -> &ScoringWeights {
        &self.weights
    }

    /// Score a single candidate against the reference profile
    pub fn score(&self, reference: &Profile, candidate: &Profile) -> Result<MatchResult, MatchError> {
        calculate_match_score(reference.labels(), &candidate.id, candidate.labels(), &self.weights)
    }

    /// Score every candidate, one result per candidate in input order.
    ///
    /// The reference profile is not excluded if it appears among the
    /// candidates.
    pub fn rank_all(&self, reference: &Profile, candidates: &[Profile]) -> Result<Vec<MatchResult>, MatchError> {
        self.rank(reference, candidates.iter())
    }

    /// Find ranked matches for a reference profile
    ///
    /// Excludes the reference itself and profiles rejected by `filter`, then
    /// scores, sorts, applies the threshold and returns the requested page.
    /// No surviving candidates is a normal, empty outcome.
    pub fn find_matches(
        &self,
        reference: &Profile,
        candidates: &[Profile],
        filter: &ProfileFilter,
        options: &MatchOptions,
    ) -> Result<MatchPage, MatchError> {
        let eligible: Vec<&Profile> = candidates
            .iter()
            .filter(|candidate| !candidate.id.refers_to(&reference.id))
            .filter(|candidate| filter.is_empty() || matches_profile_filter(candidate, filter))
            .collect();

        // results stay paired with their profile so duplicate ids keep their own details
        let mut scored: Vec<(MatchResult, &Profile)> = self
            .rank(reference, eligible.iter().copied())?
            .into_iter()
            .zip(eligible)
            .collect();
        scored.sort_by(|(a, _), (b, _)| score_descending(a.total_score, b.total_score));
        scored.retain(|(result, _)| result.total_score >= options.min_score);
        let total_results = scored.len();

        let matches: Vec<ScoredMatch> = scored
            .into_iter()
            .skip(options.offset)
            .take(options.limit)
            .map(|(result, profile)| {
                let percentage = to_percentage(result.total_score, options.max_possible_score);
                into_scored_match(result, profile, percentage)
            })
            .collect();

        let consumed = options.offset.saturating_add(matches.len());
        let next_offset = (!matches.is_empty() && consumed < total_results).then_some(consumed);

        Ok(MatchPage {
            matches,
            total_results,
            next_offset,
        })
    }

    fn rank<'a, I>(&self, reference: &Profile, candidates: I) -> Result<Vec<MatchResult>, MatchError>
    where
        I: Iterator<Item = &'a Profile>,
    {
        candidates
            .map(|candidate| self.score(reference, candidate))
            .collect()
    }
}

impl Default for MatchEngine {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

fn into_scored_match(result: MatchResult, profile: &Profile, match_percentage: u8) -> ScoredMatch {
    ScoredMatch {
        user_id: result.candidate_id,
        name: profile.name.clone(),
        location: profile.location.clone(),
        bio: profile.bio.clone(),
        profile_image: profile.profile_image.clone(),
        total_score: result.total_score,
        match_percentage,
        complementary_skills: result.complementary_skills,
        complementary_resources: result.complementary_resources,
        shared_values: result.shared_values,
    }
}
