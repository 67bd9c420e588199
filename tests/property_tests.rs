//! Invariant checks for the match engine over generated profiles.
//!
//! Profiles are drawn from a small label vocabulary with a seeded RNG, so
//! overlaps and duplicates are frequent and every run sees the same data.

use std::collections::HashSet;

use coop_match::core::{filter_by_min_score, sort_by_score_descending, to_percentage, MatchEngine};
use coop_match::models::{MatchResult, Profile, ProfileId};

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

// ============================================================================
// TEST CONSTANTS
// ============================================================================

const SEED: u64 = 0x00C0_FFEE;

/// Number of profile pairs to check per invariant
const PAIR_COUNT: usize = 500;

const SKILLS: &[&str] = &[
    "Design", "Marketing", "Finance", "Legal", "Permaculture", "Engineering",
    "Sales", "design", "Web Development",
];
const RESOURCES: &[&str] = &["Land", "Tools", "Capital", "Vehicle", "Workspace", "Network"];
const VALUES: &[&str] = &[
    "Sustainability", "Innovation", "Equity", "Community Focus", "Circular Economy",
];

// ============================================================================
// HELPER FUNCTIONS
// ============================================================================

/// Pick up to `max` labels, duplicates allowed
fn pick_labels(rng: &mut ChaCha8Rng, vocabulary: &[&str], max: usize) -> Vec<String> {
    let count = rng.gen_range(0..=max);
    (0..count)
        .map(|_| vocabulary[rng.gen_range(0..vocabulary.len())].to_string())
        .collect()
}

fn generate_profile(rng: &mut ChaCha8Rng, id: i64) -> Profile {
    Profile {
        id: ProfileId::Int(id),
        name: format!("User {}", id),
        location: None,
        bio: None,
        profile_image: None,
        skills: pick_labels(rng, SKILLS, 6),
        resources: pick_labels(rng, RESOURCES, 4),
        values: pick_labels(rng, VALUES, 4),
    }
}

fn generate_pairs(seed: u64, count: usize) -> Vec<(Profile, Profile)> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..count)
        .map(|i| {
            let a = generate_profile(&mut rng, (2 * i) as i64);
            let b = generate_profile(&mut rng, (2 * i + 1) as i64);
            (a, b)
        })
        .collect()
}

fn set(labels: &[String]) -> HashSet<&str> {
    labels.iter().map(String::as_str).collect()
}

fn generate_results(rng: &mut ChaCha8Rng, count: usize) -> Vec<MatchResult> {
    // few distinct scores so ties are common
    const SCORES: &[f64] = &[0.0, 1.5, 2.0, 3.0, 5.0, 6.5, 10.0];
    (0..count)
        .map(|i| MatchResult {
            candidate_id: ProfileId::Int(i as i64),
            total_score: SCORES[rng.gen_range(0..SCORES.len())],
            complementary_skills: vec![],
            complementary_resources: vec![],
            shared_values: vec![],
        })
        .collect()
}

fn index_of(result: &MatchResult) -> i64 {
    match result.candidate_id {
        ProfileId::Int(i) => i,
        ProfileId::Text(_) => unreachable!("generated ids are integers"),
    }
}

// ============================================================================
// SCORING INVARIANTS
// ============================================================================

#[test]
fn prop_score_is_non_negative() {
    let engine = MatchEngine::with_default_weights();
    for (a, b) in generate_pairs(SEED, PAIR_COUNT) {
        let result = engine.score(&a, &b).unwrap();
        assert!(result.total_score >= 0.0, "negative score for {:?} vs {:?}", a, b);
    }
}

/// Against itself a profile offers nothing new but shares all of its values
#[test]
fn prop_self_score_counts_only_own_values() {
    let engine = MatchEngine::with_default_weights();
    for (a, _) in generate_pairs(SEED, PAIR_COUNT) {
        let result = engine.score(&a, &a).unwrap();
        let distinct_values = set(&a.values);

        assert!(result.complementary_skills.is_empty());
        assert!(result.complementary_resources.is_empty());
        assert_eq!(set(&result.shared_values), distinct_values);
        assert_eq!(result.shared_values.len(), distinct_values.len());
        assert_eq!(result.total_score, 1.5 * distinct_values.len() as f64);

        if a.values.is_empty() {
            assert_eq!(result.total_score, 0.0);
        }
    }
}

#[test]
fn prop_complementary_labels_are_new_to_reference() {
    let engine = MatchEngine::with_default_weights();
    for (a, b) in generate_pairs(SEED + 1, PAIR_COUNT) {
        let result = engine.score(&a, &b).unwrap();
        let (a_skills, a_resources) = (set(&a.skills), set(&a.resources));
        let (b_skills, b_resources) = (set(&b.skills), set(&b.resources));

        for skill in &result.complementary_skills {
            assert!(!a_skills.contains(skill.as_str()));
            assert!(b_skills.contains(skill.as_str()));
        }
        for resource in &result.complementary_resources {
            assert!(!a_resources.contains(resource.as_str()));
            assert!(b_resources.contains(resource.as_str()));
        }
    }
}

#[test]
fn prop_shared_values_in_both_profiles() {
    let engine = MatchEngine::with_default_weights();
    for (a, b) in generate_pairs(SEED + 2, PAIR_COUNT) {
        let result = engine.score(&a, &b).unwrap();
        let (a_values, b_values) = (set(&a.values), set(&b.values));

        for value in &result.shared_values {
            assert!(a_values.contains(value.as_str()));
            assert!(b_values.contains(value.as_str()));
        }
    }
}

#[test]
fn prop_total_score_matches_weighted_counts() {
    let engine = MatchEngine::with_default_weights();
    for (a, b) in generate_pairs(SEED + 3, PAIR_COUNT) {
        let result = engine.score(&a, &b).unwrap();

        let s = set(&b.skills).difference(&set(&a.skills)).count();
        let r = set(&b.resources).difference(&set(&a.resources)).count();
        let v = set(&a.values).intersection(&set(&b.values)).count();

        assert_eq!(result.complementary_skills.len(), s);
        assert_eq!(result.complementary_resources.len(), r);
        assert_eq!(result.shared_values.len(), v);
        assert_eq!(
            result.total_score,
            2.0 * s as f64 + 3.0 * r as f64 + 1.5 * v as f64
        );
    }
}

#[test]
fn prop_scoring_is_deterministic() {
    let engine = MatchEngine::with_default_weights();
    let first = generate_pairs(SEED + 4, 50);
    let second = generate_pairs(SEED + 4, 50);

    for ((a1, b1), (a2, b2)) in first.iter().zip(second.iter()) {
        assert_eq!(engine.score(a1, b1).unwrap(), engine.score(a2, b2).unwrap());
    }
}

// ============================================================================
// PIPELINE INVARIANTS
// ============================================================================

#[test]
fn prop_sort_is_stable_and_descending() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED + 5);
    for _ in 0..50 {
        let count = rng.gen_range(0..40);
        let sorted = sort_by_score_descending(generate_results(&mut rng, count));

        assert_eq!(sorted.len(), count);
        for pair in sorted.windows(2) {
            assert!(pair[0].total_score >= pair[1].total_score);
            if pair[0].total_score == pair[1].total_score {
                assert!(index_of(&pair[0]) < index_of(&pair[1]), "tie order changed");
            }
        }
    }
}

#[test]
fn prop_zero_threshold_keeps_everything() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED + 6);
    for _ in 0..50 {
        let count = rng.gen_range(0..40);
        let results = generate_results(&mut rng, count);
        assert_eq!(filter_by_min_score(results.clone(), 0.0), results);
    }
}

#[test]
fn prop_threshold_keeps_order_and_only_qualified() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED + 7);
    for _ in 0..50 {
        let results = generate_results(&mut rng, 30);
        let min_score = rng.gen_range(0.0..12.0);
        let filtered = filter_by_min_score(results.clone(), min_score);

        let expected: Vec<MatchResult> = results
            .into_iter()
            .filter(|r| r.total_score >= min_score)
            .collect();
        assert_eq!(filtered, expected);
    }
}

#[test]
fn prop_percentage_is_monotonic_and_bounded() {
    let mut rng = ChaCha8Rng::seed_from_u64(SEED + 8);
    for _ in 0..200 {
        let max_possible_score = rng.gen_range(0.001..100.0);
        let mut scores: Vec<f64> = (0..20).map(|_| rng.gen_range(-50.0..500.0)).collect();
        scores.sort_by(|a, b| a.partial_cmp(b).unwrap());

        let percentages: Vec<u8> = scores
            .iter()
            .map(|&score| to_percentage(score, max_possible_score))
            .collect();

        for pair in percentages.windows(2) {
            assert!(pair[0] <= pair[1], "percentage decreased");
        }
        assert!(percentages.iter().all(|&p| p <= 100));
    }

    for score in [f64::MAX, 1e300, 0.0, -1e300, f64::MIN] {
        for max_possible_score in [f64::MIN_POSITIVE, 1e-12, 1.0, 30.0] {
            assert!(to_percentage(score, max_possible_score) <= 100);
        }
    }
}
