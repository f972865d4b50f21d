//! Skill-list normalization.
//!
//! Requester profiles and job postings both carry skills as free-form
//! comma-separated text. Matching treats each side as an unordered set of
//! lowercase, trimmed tokens, so overlap counting is symmetric.

use std::collections::HashSet;

/// Split a comma-separated skill list into a lowercase, trimmed,
/// de-duplicated token set. `None` and blank input yield an empty set.
pub fn skill_token_set(skills: Option<&str>) -> HashSet<String> {
    skills
        .map(|raw| {
            raw.split(',')
                .map(|token| token.trim().to_lowercase())
                .filter(|token| !token.is_empty())
                .collect()
        })
        .unwrap_or_default()
}

/// Number of tokens the two lists share.
pub fn skill_overlap(left: Option<&str>, right: Option<&str>) -> usize {
    let left = skill_token_set(left);
    if left.is_empty() {
        return 0;
    }
    let right = skill_token_set(right);
    left.intersection(&right).count()
}
