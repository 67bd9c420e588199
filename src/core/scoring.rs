use crate::models::{MatchResult, ProfileId, ProfileLabels, ScoringWeights};
use crate::core::{
    error::MatchError,
    labels::{label_set, ordered_difference, ordered_intersection},
};

/// Score a candidate against a reference profile.
///
/// Scoring formula:
/// score = (
///     |candidate.skills - reference.skills| * 2 +       # complementary skills
///     |candidate.resources - reference.resources| * 3 + # complementary resources
///     |reference.values & candidate.values| * 1.5       # shared values
/// )
///
/// The multipliers come from `weights`; the defaults are shown above. Label
/// comparison is exact and case-sensitive. Self-comparison is not filtered
/// here.
///
/// # Errors
/// `MatchError::MissingCandidateId` when the candidate id is blank.
pub fn calculate_match_score(
    reference: ProfileLabels<'_>,
    candidate_id: &ProfileId,
    candidate: ProfileLabels<'_>,
    weights: &ScoringWeights,
) -> Result<MatchResult, MatchError> {
    if candidate_id.is_missing() {
        return Err(MatchError::MissingCandidateId);
    }

    let reference_skills = label_set(reference.skills);
    let reference_resources = label_set(reference.resources);
    let candidate_values = label_set(candidate.values);

    let complementary_skills = ordered_difference(candidate.skills, &reference_skills);
    let complementary_resources = ordered_difference(candidate.resources, &reference_resources);
    let shared_values = ordered_intersection(reference.values, &candidate_values);

    let skills_score = complementary_skills.len() as f64 * weights.skills;
    let resources_score = complementary_resources.len() as f64 * weights.resources;
    let values_score = shared_values.len() as f64 * weights.values;

    Ok(MatchResult {
        candidate_id: candidate_id.clone(),
        total_score: skills_score + resources_score + values_score,
        complementary_skills,
        complementary_resources,
        shared_values,
    })
}
