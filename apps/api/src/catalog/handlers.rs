use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::errors::AppError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RoleListResponse {
    pub roles: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct RoleSkillsResponse {
    pub role: String,
    pub skills: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct SkillListResponse {
    pub skills: Vec<String>,
}

/// GET /api/v1/catalog/roles
pub async fn handle_list_roles(State(state): State<AppState>) -> Json<RoleListResponse> {
    Json(RoleListResponse {
        roles: state.catalog.role_names(),
    })
}

/// GET /api/v1/catalog/roles/:name
pub async fn handle_get_role(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<RoleSkillsResponse>, AppError> {
    let skills = state
        .catalog
        .role(&name)
        .ok_or_else(|| AppError::NotFound(format!("Role '{name}' not found in catalog")))?
        .to_vec();
    Ok(Json(RoleSkillsResponse { role: name, skills }))
}

/// GET /api/v1/catalog/skills
///
/// Every skill across every role, deduplicated and sorted. Feeds the skill picker.
pub async fn handle_all_skills(State(state): State<AppState>) -> Json<SkillListResponse> {
    Json(SkillListResponse {
        skills: state.catalog.all_skills(),
    })
}
