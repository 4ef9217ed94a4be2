use std::collections::HashMap;

/// Prefix of the generated fallback link for skills with no curated resource.
pub const SEARCH_FALLBACK_PREFIX: &str = "https://www.google.com/search?q=learn+";

/// Curated learning resources, keyed by the skill name exactly as it appears in the catalog.
const BUILTIN_RESOURCES: &[(&str, &str)] = &[
    ("Python", "https://www.python.org/about/gettingstarted/"),
    ("Docker", "https://docs.docker.com/get-started/"),
    ("Kubernetes", "https://kubernetes.io/docs/tutorials/"),
    ("Selenium", "https://www.selenium.dev/documentation/"),
    ("Playwright", "https://playwright.dev/docs/intro"),
    ("SQL", "https://www.w3schools.com/sql/"),
    ("CI/CD", "https://www.atlassian.com/continuous-delivery/ci-vs-cd"),
    ("API Testing", "https://www.postman.com/"),
    ("Pandas", "https://pandas.pydata.org/docs/getting_started/index.html"),
    ("TensorFlow", "https://www.tensorflow.org/tutorials"),
];

/// Skill → learning resource URL. Immutable after construction.
#[derive(Debug, Clone)]
pub struct ResourceMap {
    urls: HashMap<String, String>,
}

impl ResourceMap {
    pub fn builtin() -> Self {
        Self {
            urls: BUILTIN_RESOURCES
                .iter()
                .map(|(skill, url)| (skill.to_string(), url.to_string()))
                .collect(),
        }
    }

    /// Curated URL for a skill. Lookup is case-sensitive.
    pub fn get(&self, skill: &str) -> Option<&str> {
        self.urls.get(skill).map(String::as_str)
    }

    /// Curated URL if present, otherwise a generated search link.
    pub fn url_for(&self, skill: &str) -> String {
        self.get(skill)
            .map(String::from)
            .unwrap_or_else(|| search_url(skill))
    }

    pub fn len(&self) -> usize {
        self.urls.len()
    }
}

pub fn search_url(skill: &str) -> String {
    format!("{SEARCH_FALLBACK_PREFIX}{}", skill.replace(' ', "+"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_has_curated_entries() {
        let resources = ResourceMap::builtin();
        assert_eq!(resources.len(), BUILTIN_RESOURCES.len());
        assert_eq!(resources.get("Docker"), Some("https://docs.docker.com/get-started/"));
    }

    #[test]
    fn test_lookup_is_case_sensitive() {
        let resources = ResourceMap::builtin();
        assert!(resources.get("docker").is_none());
        assert_eq!(
            resources.url_for("docker"),
            "https://www.google.com/search?q=learn+docker"
        );
    }

    #[test]
    fn test_fallback_replaces_spaces_with_plus() {
        assert_eq!(
            search_url("Machine Learning Ops"),
            "https://www.google.com/search?q=learn+Machine+Learning+Ops"
        );
    }

    #[test]
    fn test_curated_url_wins_over_fallback() {
        let resources = ResourceMap::builtin();
        assert_eq!(resources.url_for("API Testing"), "https://www.postman.com/");
    }
}
