//! Axum route handlers for readiness scoring, recommendations and evaluations.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::errors::AppError;
use crate::scoring::evaluation::{evaluate, positive_or_default, EvaluationReport, EvaluationRequest};
use crate::scoring::export::{progress_csv, EXPORT_FILE_NAME};
use crate::scoring::readiness::{calculate_readiness, category_progress};
use crate::scoring::recommender::{recommend_learning, LearningResource};
use crate::scoring::similarity::{rank_roles, RoleMatch};
use crate::state::AppState;

// ────────────────────────────────────────────────────────────────────────────
// Request / Response types
// ────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Deserialize)]
pub struct SkillComparisonRequest {
    #[serde(default)]
    pub user_skills: Vec<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct ReadinessResponse {
    pub readiness: f64,
}

#[derive(Debug, Serialize)]
pub struct ProgressResponse {
    pub progress: IndexMap<String, f64>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendLearningRequest {
    #[serde(default)]
    pub user_skills: Vec<String>,
    #[serde(default)]
    pub required_skills: Vec<String>,
    pub limit: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendLearningResponse {
    pub recommendations: Vec<LearningResource>,
}

#[derive(Debug, Deserialize)]
pub struct RecommendRolesRequest {
    #[serde(default)]
    pub user_skills: Vec<String>,
    pub top_n: Option<usize>,
}

#[derive(Debug, Serialize)]
pub struct RecommendRolesResponse {
    pub roles: Vec<RoleMatch>,
}

// ────────────────────────────────────────────────────────────────────────────
// Handlers
// ────────────────────────────────────────────────────────────────────────────

/// POST /api/v1/readiness
pub async fn handle_readiness(Json(request): Json<SkillComparisonRequest>) -> Json<ReadinessResponse> {
    Json(ReadinessResponse {
        readiness: calculate_readiness(&request.user_skills, &request.required_skills),
    })
}

/// POST /api/v1/readiness/progress
pub async fn handle_progress(Json(request): Json<SkillComparisonRequest>) -> Json<ProgressResponse> {
    Json(ProgressResponse {
        progress: category_progress(&request.user_skills, &request.required_skills),
    })
}

/// POST /api/v1/readiness/recommendations
pub async fn handle_recommend_learning(
    State(state): State<AppState>,
    Json(request): Json<RecommendLearningRequest>,
) -> Result<Json<RecommendLearningResponse>, AppError> {
    let limit = positive_or_default(request.limit, state.config.default_recommend_limit, "limit")?;
    let recommendations = recommend_learning(
        &request.user_skills,
        &request.required_skills,
        limit,
        &state.resources,
    );
    Ok(Json(RecommendLearningResponse { recommendations }))
}

/// POST /api/v1/roles/recommend
pub async fn handle_recommend_roles(
    State(state): State<AppState>,
    Json(request): Json<RecommendRolesRequest>,
) -> Result<Json<RecommendRolesResponse>, AppError> {
    let top_n = positive_or_default(request.top_n, state.config.default_top_roles, "top_n")?;
    Ok(Json(RecommendRolesResponse {
        roles: rank_roles(&request.user_skills, &state.catalog, top_n),
    }))
}

/// POST /api/v1/evaluations
///
/// Full evaluation: required skills → readiness → progress → learning → role suggestions.
pub async fn handle_evaluate(
    State(state): State<AppState>,
    Json(request): Json<EvaluationRequest>,
) -> Result<Json<EvaluationReport>, AppError> {
    let report = evaluate(&request, &state.evaluation_context())?;
    Ok(Json(report))
}

/// POST /api/v1/evaluations/export
///
/// Same input as an evaluation; returns its category progress as a CSV download.
pub async fn handle_export(
    State(state): State<AppState>,
    Json(request): Json<EvaluationRequest>,
) -> Result<Response, AppError> {
    let report = evaluate(&request, &state.evaluation_context())?;
    let csv = progress_csv(&report.category_progress)?;

    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{EXPORT_FILE_NAME}\""),
            ),
        ],
        csv,
    )
        .into_response())
}
