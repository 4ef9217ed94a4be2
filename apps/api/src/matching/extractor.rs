//! Skill extraction: finds catalog skills mentioned in free text.
//!
//! The containment test is pluggable through [`SkillMatcher`]. `AppState` holds an
//! `Arc<dyn SkillMatcher>` chosen at startup from `SKILL_MATCHER`.
//!
//! - [`SubstringMatcher`] (default): the lowercased skill name must occur anywhere in the
//!   normalized text. Lossy on purpose: "java" matches inside "javascript", and skills
//!   whose punctuation is stripped by normalization ("CI/CD") never match.
//! - [`WordBoundaryMatcher`]: normalizes the skill name as well and requires the match to
//!   sit between non-alphanumeric neighbours.

use std::collections::BTreeSet;
use std::str::FromStr;
use std::sync::Arc;

use tracing::debug;

use crate::catalog::model::Catalog;
use crate::matching::normalizer::normalize;

/// Decides whether a skill name occurs in already-normalized text.
pub trait SkillMatcher: Send + Sync {
    fn matches(&self, normalized_text: &str, skill: &str) -> bool;

    /// Short label surfaced in responses, e.g. "substring".
    fn backend(&self) -> &'static str;
}

pub struct SubstringMatcher;

impl SkillMatcher for SubstringMatcher {
    fn matches(&self, normalized_text: &str, skill: &str) -> bool {
        normalized_text.contains(&skill.to_lowercase())
    }

    fn backend(&self) -> &'static str {
        "substring"
    }
}

pub struct WordBoundaryMatcher;

impl SkillMatcher for WordBoundaryMatcher {
    fn matches(&self, normalized_text: &str, skill: &str) -> bool {
        let needle = normalize(skill);
        if needle.is_empty() {
            return false;
        }

        normalized_text.match_indices(&needle).any(|(start, found)| {
            let before = normalized_text[..start].chars().next_back();
            let after = normalized_text[start + found.len()..].chars().next();
            !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
        })
    }

    fn backend(&self) -> &'static str {
        "word_boundary"
    }
}

/// Matcher selection, parsed from configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SkillMatcherKind {
    #[default]
    Substring,
    WordBoundary,
}

impl SkillMatcherKind {
    pub fn build(self) -> Arc<dyn SkillMatcher> {
        match self {
            SkillMatcherKind::Substring => Arc::new(SubstringMatcher),
            SkillMatcherKind::WordBoundary => Arc::new(WordBoundaryMatcher),
        }
    }
}

impl FromStr for SkillMatcherKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "substring" => Ok(Self::Substring),
            "word_boundary" | "word-boundary" => Ok(Self::WordBoundary),
            other => Err(format!(
                "unknown skill matcher '{other}' (expected 'substring' or 'word_boundary')"
            )),
        }
    }
}

/// Returns the canonical (catalog-cased) names of every catalog skill found in `text`,
/// sorted and deduplicated.
///
/// Skills shared by several roles collapse to one entry. Blank skill names in the
/// catalog are ignored. Empty or whitespace-only text yields an empty list.
pub fn extract_skills(text: &str, catalog: &Catalog, matcher: &dyn SkillMatcher) -> Vec<String> {
    let normalized = normalize(text);
    if normalized.is_empty() {
        return Vec::new();
    }

    let found: BTreeSet<&str> = catalog
        .skill_names()
        .filter(|skill| !skill.trim().is_empty())
        .filter(|skill| matcher.matches(&normalized, skill))
        .collect();

    debug!(
        "Extracted {} skills from {} normalized chars via {} matcher",
        found.len(),
        normalized.len(),
        matcher.backend()
    );

    found.into_iter().map(String::from).collect()
}
