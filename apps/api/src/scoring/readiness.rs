use std::collections::HashSet;

use indexmap::IndexMap;

/// Comparison key for a skill: trimmed and lowercased.
pub fn skill_key(skill: &str) -> String {
    skill.trim().to_lowercase()
}

pub fn skill_set<S: AsRef<str>>(skills: &[S]) -> HashSet<String> {
    skills.iter().map(|s| skill_key(s.as_ref())).collect()
}

/// Percentage of the required skills the user already has, rounded to 2 decimals.
///
/// Both sides are compared as trimmed lowercase sets, so "SQL" and " sql " count once.
/// An empty required set scores 0.0.
pub fn calculate_readiness<U: AsRef<str>, R: AsRef<str>>(user_skills: &[U], required: &[R]) -> f64 {
    let required = skill_set(required);
    if required.is_empty() {
        return 0.0;
    }
    let user = skill_set(user_skills);
    let matched = required.intersection(&user).count();
    round2(matched as f64 / required.len() as f64 * 100.0)
}

/// Per-skill coverage: 100.0 if the user has the skill, else 0.0.
///
/// Keys are the required skills in input order with their original casing.
pub fn category_progress<U: AsRef<str>, R: AsRef<str>>(
    user_skills: &[U],
    required: &[R],
) -> IndexMap<String, f64> {
    let user = skill_set(user_skills);
    required
        .iter()
        .map(|skill| {
            let skill = skill.as_ref();
            let covered = if user.contains(&skill_key(skill)) { 100.0 } else { 0.0 };
            (skill.to_string(), covered)
        })
        .collect()
}

/// Two-decimal rounding on the exact binary value, ties to even.
fn round2(value: f64) -> f64 {
    format!("{value:.2}").parse().unwrap_or(value)
}
