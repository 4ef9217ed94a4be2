use std::collections::BTreeSet;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Role → ordered list of required skills.
///
/// Key order is the order the roles were authored in the source file and is
/// preserved; role ranking uses it to break similarity ties.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    roles: IndexMap<String, Vec<String>>,
}

impl Catalog {
    /// Skills for a role, by exact role name.
    pub fn role(&self, name: &str) -> Option<&[String]> {
        self.roles.get(name).map(Vec::as_slice)
    }

    /// Iterates roles in catalog order.
    pub fn roles(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.roles
            .iter()
            .map(|(name, skills)| (name.as_str(), skills.as_slice()))
    }

    pub fn role_names(&self) -> Vec<String> {
        self.roles.keys().cloned().collect()
    }

    /// Every skill name across every role, as authored. May repeat.
    pub fn skill_names(&self) -> impl Iterator<Item = &str> {
        self.roles.values().flatten().map(String::as_str)
    }

    /// Flattened, deduplicated, sorted list of every skill in the catalog.
    pub fn all_skills(&self) -> Vec<String> {
        self.skill_names()
            .collect::<BTreeSet<_>>()
            .into_iter()
            .map(String::from)
            .collect()
    }

    pub fn len(&self) -> usize {
        self.roles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.roles.is_empty()
    }
}

impl FromIterator<(String, Vec<String>)> for Catalog {
    fn from_iter<T: IntoIterator<Item = (String, Vec<String>)>>(iter: T) -> Self {
        Self {
            roles: iter.into_iter().collect(),
        }
    }
}


#[cfg(test)]
mod tests {
    use super::fixtures::{catalog_of, sample_catalog};
    use super::*;

    #[test]
    fn test_role_lookup_is_exact() {
        let catalog = sample_catalog();
        assert_eq!(catalog.role("Data Analyst").map(|s| s.len()), Some(5));
        assert!(catalog.role("data analyst").is_none());
    }

    #[test]
    fn test_role_names_keep_authored_order() {
        let catalog = sample_catalog();
        assert_eq!(
            catalog.role_names(),
            vec![
                "Python Developer",
                "Data Analyst",
                "QA Automation Engineer",
                "DevOps Engineer"
            ]
        );
    }

    #[test]
    fn test_all_skills_sorted_and_deduplicated() {
        let catalog = catalog_of(&[("A", &["SQL", "Python"]), ("B", &["Python", "Docker"])]);
        assert_eq!(catalog.all_skills(), vec!["Docker", "Python", "SQL"]);
    }

    #[test]
    fn test_all_skills_sorts_as_raw_strings() {
        // Uppercase sorts before lowercase in byte order.
        let catalog = catalog_of(&[("A", &["pandas", "SQL", "Excel"])]);
        assert_eq!(catalog.all_skills(), vec!["Excel", "SQL", "pandas"]);
    }

    #[test]
    fn test_deserialize_preserves_role_order() {
        let json = r#"{"Zeta": ["Rust"], "Alpha": ["Go"], "Mid": []}"#;
        let catalog: Catalog = serde_json::from_str(json).unwrap();
        assert_eq!(catalog.role_names(), vec!["Zeta", "Alpha", "Mid"]);
        assert_eq!(catalog.role("Mid"), Some(&[][..]));
    }

    #[test]
    fn test_empty_catalog() {
        let catalog = Catalog::default();
        assert!(catalog.is_empty());
        assert!(catalog.all_skills().is_empty());
    }
}
