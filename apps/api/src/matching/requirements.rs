//! Required-skill resolution from a role, a job description, or both.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::catalog::model::Catalog;
use crate::errors::AppError;
use crate::matching::extractor::{extract_skills, SkillMatcher};

/// Where the required skills come from. Each variant has exactly one resolution path.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum SkillQuery {
    /// Catalog skills of one role, in catalog order.
    RoleOnly { role: String },
    /// Skills extracted from a job description, sorted.
    TextOnly { text: String },
    /// Sorted union of both. An unknown role contributes nothing.
    RoleAndText { role: String, text: String },
}

/// Resolves a [`SkillQuery`] against the catalog.
///
/// `RoleOnly` with an unknown role is `NotFound`. In `RoleAndText` the same miss is
/// silent and only the extracted skills remain.
pub fn required_skills(
    query: &SkillQuery,
    catalog: &Catalog,
    matcher: &dyn SkillMatcher,
) -> Result<Vec<String>, AppError> {
    match query {
        SkillQuery::RoleOnly { role } => catalog
            .role(role)
            .map(<[String]>::to_vec)
            .ok_or_else(|| AppError::NotFound(format!("Role '{role}' not found in catalog"))),
        SkillQuery::TextOnly { text } => Ok(extract_skills(text, catalog, matcher)),
        SkillQuery::RoleAndText { role, text } => {
            let role_skills = catalog.role(role).unwrap_or_else(|| {
                debug!("Role '{role}' not in catalog; using extracted skills only");
                &[]
            });
            let text_skills = extract_skills(text, catalog, matcher);
            Ok(merge_required(role_skills, &text_skills))
        }
    }
}

/// Set union of two skill lists, sorted as raw strings. Only exact duplicates collapse.
pub fn merge_required(role_skills: &[String], text_skills: &[String]) -> Vec<String> {
    role_skills
        .iter()
        .chain(text_skills)
        .map(String::as_str)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::model::fixtures::sample_catalog;
    use crate::matching::extractor::SubstringMatcher;

    const JD: &str = "We are looking for Python, Docker and CI/CD experience and familiarity with APIs and SQL.";

    fn resolve(query: SkillQuery) -> Result<Vec<String>, AppError> {
        required_skills(&query, &sample_catalog(), &SubstringMatcher)
    }

    #[test]
    fn test_role_only_keeps_catalog_order() {
        let skills = resolve(SkillQuery::RoleOnly {
            role: "Python Developer".into(),
        })
        .unwrap();
        assert_eq!(skills, vec!["Python", "Django", "SQL", "Docker", "Git"]);
    }

    #[test]
    fn test_role_only_unknown_is_not_found() {
        let err = resolve(SkillQuery::RoleOnly {
            role: "Astronaut".into(),
        })
        .unwrap_err();
        assert!(matches!(err, AppError::NotFound(_)));
    }

    #[test]
    fn test_text_only_extracts() {
        let skills = resolve(SkillQuery::TextOnly { text: JD.into() }).unwrap();
        assert_eq!(skills, vec!["Docker", "Python", "SQL"]);
    }

    #[test]
    fn test_role_and_text_is_sorted_union() {
        let skills = resolve(SkillQuery::RoleAndText {
            role: "DevOps Engineer".into(),
            text: JD.into(),
        })
        .unwrap();
        assert_eq!(
            skills,
            vec!["CI/CD", "Docker", "Kubernetes", "Linux", "Python", "SQL", "Terraform"]
        );
    }

    #[test]
    fn test_role_and_text_unknown_role_contributes_nothing() {
        let skills = resolve(SkillQuery::RoleAndText {
            role: "Astronaut".into(),
            text: JD.into(),
        })
        .unwrap();
        assert_eq!(skills, vec!["Docker", "Python", "SQL"]);
    }

    #[test]
    fn test_role_and_empty_text() {
        let skills = resolve(SkillQuery::RoleAndText {
            role: "Data Analyst".into(),
            text: "  ".into(),
        })
        .unwrap();
        assert_eq!(skills, vec!["Excel", "Pandas", "Python", "SQL", "Tableau"]);
    }

    #[test]
    fn test_merge_keeps_case_variants_apart() {
        let merged = merge_required(
            &["SQL".to_string(), "Python".to_string()],
            &["sql".to_string(), "Python".to_string()],
        );
        assert_eq!(merged, vec!["Python", "SQL", "sql"]);
    }

    #[test]
    fn test_query_serde_tagging() {
        let query: SkillQuery =
            serde_json::from_str(r#"{"kind": "role_and_text", "role": "Data Analyst", "text": "sql"}"#)
                .unwrap();
        assert_eq!(
            query,
            SkillQuery::RoleAndText {
                role: "Data Analyst".into(),
                text: "sql".into()
            }
        );
        assert!(serde_json::from_str::<SkillQuery>(r#"{"kind": "role_only"}"#).is_err());
    }
}
