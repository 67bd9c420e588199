use crate::models::{MatchResult, Profile, ProfileFilter};

/// Default threshold for [`filter_by_min_score`]
pub const DEFAULT_MIN_SCORE: f64 = 5.0;

/// Default calibration for [`to_percentage`]
pub const DEFAULT_MAX_POSSIBLE_SCORE: f64 = 30.0;

/// Order results by total score, highest first.
///
/// The sort is stable: results with equal scores keep their input order.
pub fn sort_by_score_descending(mut results: Vec<MatchResult>) -> Vec<MatchResult> {
    results.sort_by(|a, b| score_descending(a.total_score, b.total_score));
    results
}

/// Descending score order; incomparable scores count as ties
pub(crate) fn score_descending(a: f64, b: f64) -> std::cmp::Ordering {
    b.partial_cmp(&a).unwrap_or(std::cmp::Ordering::Equal)
}

/// Keep results scoring at least `min_score`, preserving input order
pub fn filter_by_min_score(results: Vec<MatchResult>, min_score: f64) -> Vec<MatchResult> {
    results
        .into_iter()
        .filter(|result| result.total_score >= min_score)
        .collect()
}

/// Map a raw score onto a 0-100 display scale.
///
/// Computes `round(score / max_possible_score * 100)` and clamps it to
/// `[0, 100]`. Rounding is half away from zero (`f64::round`), so 12.5
/// becomes 13. A non-numeric ratio (e.g. `0 / 0`) maps to 0.
pub fn to_percentage(score: f64, max_possible_score: f64) -> u8 {
    let percentage = (score / max_possible_score * 100.0).round();
    if percentage.is_nan() {
        return 0;
    }

    percentage.clamp(0.0, 100.0) as u8
}

/// Check if a profile passes the browse filters
///
/// Every non-empty filter field must match. Matching is a case-insensitive
/// substring test, unlike scoring which compares labels exactly.
pub fn matches_profile_filter(profile: &Profile, filter: &ProfileFilter) -> bool {
    if let Some(term) = filter.search.as_deref() {
        let term = term.trim().to_lowercase();
        if !term.is_empty() {
            let found = contains_term(&profile.name, &term)
                || profile.bio.as_deref().is_some_and(|bio| contains_term(bio, &term))
                || profile.skills.iter().any(|skill| contains_term(skill, &term))
                || profile.resources.iter().any(|resource| contains_term(resource, &term));
            if !found {
                return false;
            }
        }
    }

    if !filter.locations.is_empty() {
        let location = profile.location.as_deref().unwrap_or_default();
        if !any_term(location, &filter.locations) {
            return false;
        }
    }

    any_label_matches(&profile.skills, &filter.skills)
        && any_label_matches(&profile.resources, &filter.resources)
        && any_label_matches(&profile.values, &filter.values)
}

#[inline]
fn contains_term(haystack: &str, lowercase_term: &str) -> bool {
    haystack.to_lowercase().contains(lowercase_term)
}

fn any_term(haystack: &str, terms: &[String]) -> bool {
    terms
        .iter()
        .any(|term| contains_term(haystack, &term.to_lowercase()))
}

fn any_label_matches(labels: &[String], terms: &[String]) -> bool {
    terms.is_empty() || labels.iter().any(|label| any_term(label, terms))
}
