//! Axum route handlers for skill extraction and required-skill resolution.

use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::errors::AppError;
use crate::matching::extractor::extract_skills;
use crate::matching::requirements::{required_skills, SkillQuery};
use crate::state::AppState;

const PDF_MAGIC: &[u8] = b"%PDF-";
const UPLOAD_FIELD: &str = "file";

#[derive(Debug, Deserialize)]
pub struct ExtractRequest {
    pub text: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractResponse {
    pub skills: Vec<String>,
    pub matcher: String,
}

#[derive(Debug, Serialize)]
pub struct ExtractPdfResponse {
    pub skills: Vec<String>,
    pub matcher: String,
    pub extracted_chars: usize,
}

#[derive(Debug, Serialize)]
pub struct RequiredSkillsResponse {
    pub skills: Vec<String>,
}

/// POST /api/v1/skills/extract
///
/// Empty or whitespace-only text is not an error; it simply yields no skills.
pub async fn handle_extract(
    State(state): State<AppState>,
    Json(request): Json<ExtractRequest>,
) -> Json<ExtractResponse> {
    let skills = extract_skills(&request.text, &state.catalog, state.matcher.as_ref());
    Json(ExtractResponse {
        skills,
        matcher: state.matcher.backend().to_string(),
    })
}

/// POST /api/v1/skills/extract/pdf
///
/// Multipart upload with a single `file` field holding a PDF job description.
pub async fn handle_extract_pdf(
    State(state): State<AppState>,
    mut multipart: Multipart,
) -> Result<Json<ExtractPdfResponse>, AppError> {
    let pdf = read_upload(&mut multipart).await?;
    info!("Received PDF job description ({} bytes)", pdf.len());

    let text = pdf_to_text(pdf).await?;
    let skills = extract_skills(&text, &state.catalog, state.matcher.as_ref());

    Ok(Json(ExtractPdfResponse {
        skills,
        matcher: state.matcher.backend().to_string(),
        extracted_chars: text.chars().count(),
    }))
}

/// POST /api/v1/skills/required
pub async fn handle_required(
    State(state): State<AppState>,
    Json(query): Json<SkillQuery>,
) -> Result<Json<RequiredSkillsResponse>, AppError> {
    if let SkillQuery::RoleOnly { role } | SkillQuery::RoleAndText { role, .. } = &query {
        if role.trim().is_empty() {
            return Err(AppError::Validation("role cannot be empty".to_string()));
        }
    }

    let skills = required_skills(&query, &state.catalog, state.matcher.as_ref())?;
    Ok(Json(RequiredSkillsResponse { skills }))
}

async fn read_upload(multipart: &mut Multipart) -> Result<Bytes, AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart body: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        if data.is_empty() {
            return Err(AppError::Validation("Uploaded file is empty".to_string()));
        }
        if !data.starts_with(PDF_MAGIC) {
            return Err(AppError::Validation(
                "Uploaded file is not a PDF".to_string(),
            ));
        }
        return Ok(data);
    }

    Err(AppError::Validation(format!(
        "Missing multipart field '{UPLOAD_FIELD}'"
    )))
}

/// PDF parsing is CPU-bound; keep it off the async workers.
async fn pdf_to_text(pdf: Bytes) -> Result<String, AppError> {
    tokio::task::spawn_blocking(move || pdf_extract::extract_text_from_mem(&pdf))
        .await
        .map_err(|e| {
            warn!("PDF extraction task failed: {e}");
            AppError::UnprocessableEntity("Could not read text from PDF".to_string())
        })?
        .map_err(|e| {
            warn!("PDF extraction error: {e}");
            AppError::UnprocessableEntity("Could not read text from PDF".to_string())
        })
}
