// Unit tests for Coop Match

use coop_match::core::{
    filters::{filter_by_min_score, sort_by_score_descending, to_percentage, DEFAULT_MIN_SCORE},
    scoring::calculate_match_score,
    MatchEngine, MatchError,
};
use coop_match::models::{MatchResult, Profile, ProfileId, ProfileLabels, ScoringWeights};

fn labels(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn create_profile(id: i64, skills: &[&str], resources: &[&str], values: &[&str]) -> Profile {
    Profile {
        id: ProfileId::Int(id),
        name: format!("User {}", id),
        location: None,
        bio: None,
        profile_image: None,
        skills: labels(skills),
        resources: labels(resources),
        values: labels(values),
    }
}

fn result(id: i64, score: f64) -> MatchResult {
    MatchResult {
        candidate_id: ProfileId::Int(id),
        total_score: score,
        complementary_skills: vec![],
        complementary_resources: vec![],
        shared_values: vec![],
    }
}

fn scores(results: &[MatchResult]) -> Vec<(ProfileId, f64)> {
    results
        .iter()
        .map(|r| (r.candidate_id.clone(), r.total_score))
        .collect()
}

#[test]
fn test_complementary_scoring_example() {
    let engine = MatchEngine::with_default_weights();
    let reference = create_profile(1, &["Design"], &[], &["Sustainability"]);
    let candidate = create_profile(
        2,
        &["Design", "Marketing"],
        &["Land"],
        &["Sustainability", "Innovation"],
    );

    let result = engine.score(&reference, &candidate).unwrap();

    assert_eq!(result.candidate_id, ProfileId::Int(2));
    assert_eq!(result.complementary_skills, vec!["Marketing"]);
    assert_eq!(result.complementary_resources, vec!["Land"]);
    assert_eq!(result.shared_values, vec!["Sustainability"]);
    assert_eq!(result.total_score, 6.5);
}

#[test]
fn test_disjoint_values_identical_labels_score_zero() {
    let engine = MatchEngine::with_default_weights();
    let reference = create_profile(1, &["Finance"], &["Capital"], &["Innovation"]);
    let candidate = create_profile(2, &["Finance"], &["Capital"], &["Tradition"]);

    let result = engine.score(&reference, &candidate).unwrap();

    assert!(result.shared_values.is_empty());
    assert_eq!(result.total_score, 0.0);
}

#[test]
fn test_identical_profiles_score_zero() {
    let engine = MatchEngine::with_default_weights();
    let reference = create_profile(1, &["Legal", "Sales"], &["Network"], &[]);
    let twin = create_profile(2, &["Sales", "Legal"], &["Network"], &[]);

    let result = engine.score(&reference, &twin).unwrap();

    assert_eq!(result.total_score, 0.0);
    assert!(result.complementary_skills.is_empty());
    assert!(result.complementary_resources.is_empty());
    assert!(result.shared_values.is_empty());
}

#[test]
fn test_empty_profiles_are_valid() {
    let engine = MatchEngine::with_default_weights();
    let empty = create_profile(1, &[], &[], &[]);
    let candidate = create_profile(2, &["Design"], &[], &["Equity"]);

    // reference empty: every candidate label is complementary, nothing is shared
    let result = engine.score(&empty, &candidate).unwrap();
    assert_eq!(result.total_score, 2.0);

    // candidate empty: nothing to offer
    let result = engine.score(&candidate, &empty).unwrap();
    assert_eq!(result.total_score, 0.0);
}

#[test]
fn test_scoring_is_case_sensitive() {
    let engine = MatchEngine::with_default_weights();
    let reference = create_profile(1, &["design"], &[], &["equity"]);
    let candidate = create_profile(2, &["Design"], &[], &["Equity"]);

    let result = engine.score(&reference, &candidate).unwrap();

    assert_eq!(result.complementary_skills, vec!["Design"]);
    assert!(result.shared_values.is_empty());
}

#[test]
fn test_blank_candidate_id_rejected() {
    let empty = labels(&[]);
    let skills = labels(&["Design"]);

    let outcome = calculate_match_score(
        ProfileLabels { skills: &empty, resources: &empty, values: &empty },
        &ProfileId::Text("   ".to_string()),
        ProfileLabels { skills: &skills, resources: &empty, values: &empty },
        &ScoringWeights::default(),
    );

    assert_eq!(outcome, Err(MatchError::MissingCandidateId));
}

#[test]
fn test_filter_by_min_score_example() {
    let filtered = filter_by_min_score(vec![result(1, 4.0), result(2, 6.0), result(3, 5.0)], DEFAULT_MIN_SCORE);

    assert_eq!(
        scores(&filtered),
        vec![(ProfileId::Int(2), 6.0), (ProfileId::Int(3), 5.0)]
    );
}

#[test]
fn test_filter_by_min_score_no_matches_is_empty() {
    let filtered = filter_by_min_score(vec![result(1, 1.5), result(2, 2.0)], DEFAULT_MIN_SCORE);
    assert!(filtered.is_empty());
}

#[test]
fn test_to_percentage_examples() {
    assert_eq!(to_percentage(15.0, 30.0), 50);
    assert_eq!(to_percentage(45.0, 30.0), 100);
    assert_eq!(to_percentage(-1.0, 30.0), 0);
}

#[test]
fn test_to_percentage_rounding() {
    // 12.5 rounds half away from zero
    assert_eq!(to_percentage(1.0, 8.0), 13);
    assert_eq!(to_percentage(6.5, 30.0), 22);
    assert_eq!(to_percentage(10.0, 30.0), 33);
}

#[test]
fn test_sort_by_score_descending_example() {
    let sorted = sort_by_score_descending(vec![result(1, 5.0), result(2, 5.0), result(3, 9.0)]);

    assert_eq!(
        scores(&sorted),
        vec![
            (ProfileId::Int(3), 9.0),
            (ProfileId::Int(1), 5.0),
            (ProfileId::Int(2), 5.0),
        ]
    );
}

#[test]
fn test_full_pipeline_ordering() {
    let engine = MatchEngine::with_default_weights();
    let reference = create_profile(1, &["Design"], &[], &["Sustainability"]);
    let candidates = vec![
        create_profile(2, &["Design"], &[], &["Sustainability"]),            // 1.5
        create_profile(3, &["Marketing"], &["Land"], &["Sustainability"]),   // 6.5
        create_profile(4, &["Finance", "Legal"], &["Tools", "Vehicle"], &[]), // 10
    ];

    let ranked = sort_by_score_descending(engine.rank_all(&reference, &candidates).unwrap());
    let qualified = filter_by_min_score(ranked, DEFAULT_MIN_SCORE);

    assert_eq!(
        scores(&qualified),
        vec![(ProfileId::Int(4), 10.0), (ProfileId::Int(3), 6.5)]
    );
}
