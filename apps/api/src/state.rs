use std::sync::Arc;

use crate::catalog::model::Catalog;
use crate::catalog::resources::ResourceMap;
use crate::config::Config;
use crate::matching::extractor::SkillMatcher;
use crate::scoring::evaluation::EvaluationContext;

/// Shared application state injected into all route handlers via Axum extractors.
///
/// Everything here is built once in `main` and never mutated, so handlers share it
/// without locks.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    pub catalog: Arc<Catalog>,
    pub resources: Arc<ResourceMap>,
    /// Pluggable skill matcher. Default: SubstringMatcher. Swap via SKILL_MATCHER env.
    pub matcher: Arc<dyn SkillMatcher>,
}

impl AppState {
    pub fn evaluation_context(&self) -> EvaluationContext<'_> {
        EvaluationContext {
            catalog: &self.catalog,
            resources: &self.resources,
            matcher: self.matcher.as_ref(),
            default_recommend_limit: self.config.default_recommend_limit,
            default_top_roles: self.config.default_top_roles,
        }
    }
}

#[cfg(test)]
pub fn test_state(catalog: Catalog) -> AppState {
    use crate::matching::extractor::SkillMatcherKind;

    AppState {
        config: Config {
            catalog_path: "data/skills.json".into(),
            port: 0,
            rust_log: "debug".to_string(),
            skill_matcher: SkillMatcherKind::Substring,
            default_recommend_limit: 8,
            default_top_roles: 3,
            max_upload_bytes: 1024 * 1024,
        },
        catalog: Arc::new(catalog),
        resources: Arc::new(ResourceMap::builtin()),
        matcher: SkillMatcherKind::Substring.build(),
    }
}
