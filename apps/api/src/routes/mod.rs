pub mod health;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};

use crate::catalog::handlers as catalog;
use crate::matching::handlers as matching;
use crate::scoring::handlers as scoring;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    let upload_limit = state.config.max_upload_bytes;

    Router::new()
        .route("/health", get(health::health_handler))
        // Catalog API
        .route("/api/v1/catalog/roles", get(catalog::handle_list_roles))
        .route("/api/v1/catalog/roles/:name", get(catalog::handle_get_role))
        .route("/api/v1/catalog/skills", get(catalog::handle_all_skills))
        // Skill extraction API
        .route("/api/v1/skills/extract", post(matching::handle_extract))
        .route(
            "/api/v1/skills/extract/pdf",
            post(matching::handle_extract_pdf),
        )
        .route("/api/v1/skills/required", post(matching::handle_required))
        // Readiness API
        .route("/api/v1/readiness", post(scoring::handle_readiness))
        .route(
            "/api/v1/readiness/progress",
            post(scoring::handle_progress),
        )
        .route(
            "/api/v1/readiness/recommendations",
            post(scoring::handle_recommend_learning),
        )
        .route("/api/v1/roles/recommend", post(scoring::handle_recommend_roles))
        .route("/api/v1/evaluations", post(scoring::handle_evaluate))
        .route("/api/v1/evaluations/export", post(scoring::handle_export))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}
