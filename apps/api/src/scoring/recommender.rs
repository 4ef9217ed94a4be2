use serde::{Deserialize, Serialize};

use crate::catalog::resources::ResourceMap;
use crate::scoring::readiness::{skill_key, skill_set};

/// A missing skill paired with where to learn it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LearningResource {
    pub skill: String,
    pub url: String,
}

/// Learning links for the first `limit` required skills the user lacks.
///
/// Walks `required` in order and stops once `limit` entries are collected. URLs come
/// from the resource map by exact skill name, falling back to a generated search link.
pub fn recommend_learning<U: AsRef<str>, R: AsRef<str>>(
    user_skills: &[U],
    required: &[R],
    limit: usize,
    resources: &ResourceMap,
) -> Vec<LearningResource> {
    let user = skill_set(user_skills);
    required
        .iter()
        .map(|skill| skill.as_ref())
        .filter(|skill| !user.contains(&skill_key(skill)))
        .take(limit)
        .map(|skill| LearningResource {
            skill: skill.to_string(),
            url: resources.url_for(skill),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const NONE: &[&str] = &[];

    #[test]
    fn test_limit_truncates_in_order() {
        let resources = ResourceMap::builtin();
        let recs = recommend_learning(NONE, &["Python", "Docker", "SQL"], 2, &resources);
        assert_eq!(
            recs,
            vec![
                LearningResource {
                    skill: "Python".into(),
                    url: "https://www.python.org/about/gettingstarted/".into(),
                },
                LearningResource {
                    skill: "Docker".into(),
                    url: "https://docs.docker.com/get-started/".into(),
                },
            ]
        );
    }

    #[test]
    fn test_skips_skills_user_has() {
        let resources = ResourceMap::builtin();
        let recs = recommend_learning(&[" python ", "SQL"], &["Python", "Docker", "SQL"], 5, &resources);
        let skills: Vec<&str> = recs.iter().map(|r| r.skill.as_str()).collect();
        assert_eq!(skills, vec!["Docker"]);
    }

    #[test]
    fn test_fallback_search_link() {
        let resources = ResourceMap::builtin();
        let recs = recommend_learning(NONE, &["Power BI"], 5, &resources);
        assert_eq!(recs[0].url, "https://www.google.com/search?q=learn+Power+BI");
    }

    #[test]
    fn test_never_exceeds_limit_and_never_recommends_owned() {
        let resources = ResourceMap::builtin();
        let user = ["docker", "git"];
        let required = ["Python", "Docker", "SQL", "Git", "Kubernetes", "Linux"];
        for limit in 0..8 {
            let recs = recommend_learning(&user, &required, limit, &resources);
            assert!(recs.len() <= limit);
            assert!(recs
                .iter()
                .all(|r| !user.contains(&skill_key(&r.skill).as_str())));
        }
    }

    #[test]
    fn test_nothing_missing() {
        let resources = ResourceMap::builtin();
        assert!(recommend_learning(&["sql"], &["SQL"], 3, &resources).is_empty());
    }
}
