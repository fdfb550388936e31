use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::errors::AppError;
use crate::models::career::CareerRecommendation;
use crate::models::evaluation::EvaluationSummary;
use crate::narrative::defaults::software_development_path;
use crate::narrative::evaluation_parser::parse_evaluation;
use crate::state::AppState;
use crate::upstream::Upload;

const PDF: &str = "application/pdf";
const DOCX: &str = "application/vnd.openxmlformats-officedocument.wordprocessingml.document";

#[derive(Deserialize)]
pub struct ParseCareerRequest {
    pub career_path: String,
}

#[derive(Deserialize)]
pub struct ParseEvaluationRequest {
    pub response: String,
}

#[derive(Serialize)]
pub struct RecommendationsResponse {
    pub recommendations: Vec<CareerRecommendation>,
}

/// POST /api/v1/career/parse
pub async fn handle_parse_career(
    State(state): State<AppState>,
    Json(req): Json<ParseCareerRequest>,
) -> Result<Json<CareerRecommendation>, AppError> {
    if req.career_path.trim().is_empty() {
        return Err(AppError::Validation("career_path must not be empty".to_string()));
    }
    Ok(Json(state.parser.parse(&req.career_path)))
}

/// POST /api/v1/career/recommend
/// Sends the uploaded resume to the recommendation service and returns the
/// parsed path followed by the default Software Development path.
pub async fn handle_recommend(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<RecommendationsResponse>, AppError> {
    let mut form = read_form(multipart).await?;
    let resume = form
        .take_file("file")
        .ok_or_else(|| AppError::Validation("a resume must be uploaded as 'file'".to_string()))?;
    require_type(&resume, &[PDF, DOCX], "Please upload a PDF or DOCX file")?;

    let narrative = state.upstream.career_narrative(resume).await?;
    let parsed = state.parser.parse(&narrative);
    info!(
        title = %parsed.title,
        fallbacks = parsed.extraction.fallback_fields.len(),
        "career recommendation parsed"
    );

    Ok(Json(RecommendationsResponse {
        recommendations: vec![parsed, software_development_path()],
    }))
}

/// GET /api/v1/career/default
pub async fn handle_default_path() -> Json<CareerRecommendation> {
    Json(software_development_path())
}

/// POST /api/v1/resume/evaluation/parse
pub async fn handle_parse_evaluation(
    Json(req): Json<ParseEvaluationRequest>,
) -> Json<EvaluationSummary> {
    Json(parse_evaluation(&req.response))
}

/// POST /api/v1/resume/evaluate
pub async fn handle_evaluate(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<EvaluationSummary>, AppError> {
    let mut form = read_form(multipart).await?;
    let resume = form
        .take_file("resume")
        .ok_or_else(|| AppError::Validation("a resume must be uploaded as 'resume'".to_string()))?;
    require_type(&resume, &[PDF], "Please upload a PDF resume")?;
    let job_description = form
        .take_text("job_description")
        .filter(|jd| !jd.trim().is_empty())
        .ok_or_else(|| AppError::Validation("job_description must not be empty".to_string()))?;

    let narrative = state.upstream.evaluation_narrative(resume, &job_description).await?;
    Ok(Json(parse_evaluation(&narrative)))
}

// ──────────────────────────────────────────────
// Multipart helpers
// ──────────────────────────────────────────────

#[derive(Default)]
struct FormFields {
    files: Vec<(String, Upload)>,
    texts: Vec<(String, String)>,
}

impl FormFields {
    fn take_file(&mut self, name: &str) -> Option<Upload> {
        let at = self.files.iter().position(|(n, _)| n == name)?;
        Some(self.files.swap_remove(at).1)
    }

    fn take_text(&mut self, name: &str) -> Option<String> {
        let at = self.texts.iter().position(|(n, _)| n == name)?;
        Some(self.texts.swap_remove(at).1)
    }
}

async fn read_form(mut multipart: Multipart) -> Result<FormFields, AppError> {
    let mut form = FormFields::default();
    while let Some(field) = multipart.next_field().await? {
        let name = field.name().unwrap_or_default().to_string();
        match field.file_name().map(str::to_string) {
            Some(file_name) => {
                let content_type = field.content_type().unwrap_or_default().to_string();
                let bytes: Bytes = field.bytes().await?;
                form.files.push((
                    name,
                    Upload {
                        content_type: resolve_content_type(&content_type, &file_name),
                        file_name,
                        bytes,
                    },
                ));
            }
            None => {
                let text = field.text().await?;
                form.texts.push((name, text));
            }
        }
    }
    Ok(form)
}

/// Browsers sometimes send `application/octet-stream`; fall back to the
/// file extension in that case.
fn resolve_content_type(declared: &str, file_name: &str) -> String {
    if !declared.is_empty() && declared != "application/octet-stream" {
        return declared.to_string();
    }
    let lower = file_name.to_ascii_lowercase();
    if lower.ends_with(".pdf") {
        PDF.to_string()
    } else if lower.ends_with(".docx") {
        DOCX.to_string()
    } else {
        "application/octet-stream".to_string()
    }
}

fn require_type(upload: &Upload, allowed: &[&str], message: &str) -> Result<(), AppError> {
    if upload.bytes.is_empty() {
        return Err(AppError::Validation(format!("{} is empty", upload.file_name)));
    }
    if !allowed.contains(&upload.content_type.as_str()) {
        return Err(AppError::UnsupportedMediaType(message.to_string()));
    }
    Ok(())
}
