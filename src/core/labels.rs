use std::collections::HashSet;

/// Convert a label collection into a set.
///
/// Labels compare by exact string equality: case-sensitive, no trimming.
#[inline]
pub fn label_set(labels: &[String]) -> HashSet<&str> {
    labels.iter().map(String::as_str).collect()
}

/// Labels of `ordered` that are not in `exclude`.
///
/// Keeps the order of `ordered` and only the first occurrence of a repeated
/// label, so the length equals the size of the set difference.
pub fn ordered_difference(ordered: &[String], exclude: &HashSet<&str>) -> Vec<String> {
    retain_ordered(ordered, |label| !exclude.contains(label))
}

/// Labels of `ordered` that are also in `include`.
///
/// Same ordering and de-duplication rules as [`ordered_difference`].
pub fn ordered_intersection(ordered: &[String], include: &HashSet<&str>) -> Vec<String> {
    retain_ordered(ordered, |label| include.contains(label))
}

fn retain_ordered<F>(ordered: &[String], keep: F) -> Vec<String>
where
    F: Fn(&str) -> bool,
{
    let mut seen = HashSet::with_capacity(ordered.len());
    let mut kept = Vec::new();

    for label in ordered {
        let label = label.as_str();
        if keep(label) && seen.insert(label) {
            kept.push(label.to_string());
        }
    }

    kept
}
