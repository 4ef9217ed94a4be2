//! Evaluation session: one request-scoped readiness check.
//!
//! Resolves the required skills from a role and/or a job description, folds the
//! user's 0 to 5 self-ratings and explicit selections into one skill list, then runs
//! readiness, per-skill progress, learning recommendations and role suggestions.
//! Nothing is retained after the report is built.

use std::collections::{BTreeMap, BTreeSet};

use chrono::{DateTime, Utc};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, info};
use uuid::Uuid;

use crate::catalog::model::Catalog;
use crate::catalog::resources::ResourceMap;
use crate::errors::AppError;
use crate::matching::extractor::SkillMatcher;
use crate::matching::requirements::{merge_required, required_skills, SkillQuery};
use crate::scoring::readiness::{calculate_readiness, category_progress, skill_key, skill_set};
use crate::scoring::recommender::{recommend_learning, LearningResource};
use crate::scoring::similarity::{rank_roles, RoleMatch};

pub const MAX_RATING: u8 = 5;
/// Ratings at or above this count as having the skill.
pub const PROFICIENCY_THRESHOLD: u8 = 3;

#[derive(Debug, Clone, Default, Deserialize)]
pub struct EvaluationRequest {
    pub role: Option<String>,
    pub job_description: Option<String>,
    #[serde(default)]
    pub selected_skills: Vec<String>,
    /// Self-rating per required skill, 0 to 5.
    #[serde(default)]
    pub ratings: BTreeMap<String, u8>,
    pub recommend_limit: Option<usize>,
    pub top_roles: Option<usize>,
}

#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub evaluation_id: Uuid,
    pub evaluated_at: DateTime<Utc>,
    pub required_skills: Vec<String>,
    pub user_skills: Vec<String>,
    pub readiness: f64,
    pub category_progress: IndexMap<String, f64>,
    pub learning: Vec<LearningResource>,
    pub suggested_roles: Vec<RoleMatch>,
    pub matcher_backend: String,
}

/// Read-only collaborators for an evaluation, borrowed from app state.
pub struct EvaluationContext<'a> {
    pub catalog: &'a Catalog,
    pub resources: &'a ResourceMap,
    pub matcher: &'a dyn SkillMatcher,
    pub default_recommend_limit: usize,
    pub default_top_roles: usize,
}

pub fn evaluate(
    request: &EvaluationRequest,
    ctx: &EvaluationContext<'_>,
) -> Result<EvaluationReport, AppError> {
    validate_ratings(&request.ratings)?;
    let recommend_limit = positive_or_default(request.recommend_limit, ctx.default_recommend_limit, "recommend_limit")?;
    let top_roles = positive_or_default(request.top_roles, ctx.default_top_roles, "top_roles")?;

    let query = build_query(request)?;
    let resolved = required_skills(&query, ctx.catalog, ctx.matcher)?;
    let required = merge_required(&resolved, &[]);

    let user_skills = effective_user_skills(&request.ratings, &request.selected_skills, &required);

    let readiness = calculate_readiness(&user_skills, &required);
    let category_progress = category_progress(&user_skills, &required);
    let learning = recommend_learning(&user_skills, &required, recommend_limit, ctx.resources);
    let suggested_roles = rank_roles(&request.selected_skills, ctx.catalog, top_roles);

    let report = EvaluationReport {
        evaluation_id: Uuid::new_v4(),
        evaluated_at: Utc::now(),
        required_skills: required,
        user_skills,
        readiness,
        category_progress,
        learning,
        suggested_roles,
        matcher_backend: ctx.matcher.backend().to_string(),
    };

    info!(
        "Evaluation {}: readiness {}% over {} required skills",
        report.evaluation_id,
        report.readiness,
        report.required_skills.len()
    );

    Ok(report)
}

/// Required skills rated at or above [`PROFICIENCY_THRESHOLD`] plus explicit
/// selections, sorted and deduplicated.
///
/// Only required skills are rated; a rating for anything else is ignored.
pub fn effective_user_skills(
    ratings: &BTreeMap<String, u8>,
    selected: &[String],
    required: &[String],
) -> Vec<String> {
    let required = skill_set(required);
    ratings
        .iter()
        .filter(|&(skill, _)| {
            let rated_required = required.contains(&skill_key(skill));
            if !rated_required {
                debug!("Ignoring rating for '{skill}': not a required skill");
            }
            rated_required
        })
        .filter(|&(_, &rating)| rating >= PROFICIENCY_THRESHOLD)
        .map(|(skill, _)| skill.as_str())
        .chain(selected.iter().map(String::as_str))
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(String::from)
        .collect()
}

fn build_query(request: &EvaluationRequest) -> Result<SkillQuery, AppError> {
    let role = request
        .role
        .as_deref()
        .map(str::trim)
        .filter(|r| !r.is_empty());
    let text = request
        .job_description
        .as_deref()
        .filter(|t| !t.trim().is_empty());

    match (role, text) {
        (Some(role), Some(text)) => Ok(SkillQuery::RoleAndText {
            role: role.to_string(),
            text: text.to_string(),
        }),
        (Some(role), None) => Ok(SkillQuery::RoleOnly {
            role: role.to_string(),
        }),
        (None, Some(text)) => Ok(SkillQuery::TextOnly {
            text: text.to_string(),
        }),
        (None, None) => Err(AppError::Validation(
            "Provide a role, a job_description, or both".to_string(),
        )),
    }
}

fn validate_ratings(ratings: &BTreeMap<String, u8>) -> Result<(), AppError> {
    match ratings.iter().find(|&(_, &rating)| rating > MAX_RATING) {
        Some((skill, rating)) => Err(AppError::Validation(format!(
            "Rating for '{skill}' is {rating}; ratings must be between 0 and {MAX_RATING}"
        ))),
        None => Ok(()),
    }
}

pub fn positive_or_default(value: Option<usize>, default: usize, field: &str) -> Result<usize, AppError> {
    match value {
        Some(0) => Err(AppError::Validation(format!("{field} must be at least 1"))),
        Some(n) => Ok(n),
        None => Ok(default),
    }
}
