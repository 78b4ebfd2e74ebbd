use axum::extract::Multipart;
use axum::Json;
use tracing::info;

use crate::errors::AppError;
use crate::extract::{extract_text, ALLOWED_MIME_TYPES, MAX_UPLOAD_BYTES};
use crate::models::resume::ParsedResume;
use crate::parser::parse_resume_text;

/// POST /api/v1/resumes/parse
///
/// Accepts one document upload (multipart field `resume`), extracts its text,
/// and returns the structured parse result. Boundary checks (file present,
/// allowed MIME type, size cap, non-empty extracted text) happen here before
/// the parsing core runs.
pub async fn handle_parse_resume(
    mut multipart: Multipart,
) -> Result<Json<ParsedResume>, AppError> {
    let mut upload: Option<(String, Vec<u8>)> = None;

    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Malformed multipart request: {e}")))?
    {
        if field.name() != Some("resume") {
            continue;
        }
        let mime_type = field.content_type().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read upload: {e}")))?;
        upload = Some((mime_type, bytes.to_vec()));
        break;
    }

    let (mime_type, bytes) =
        upload.ok_or_else(|| AppError::Validation("No file uploaded".to_string()))?;

    if !ALLOWED_MIME_TYPES.contains(&mime_type.as_str()) {
        return Err(AppError::UnsupportedType(
            "Unsupported file type. Please upload PDF or Word document.".to_string(),
        ));
    }

    if bytes.len() > MAX_UPLOAD_BYTES {
        return Err(AppError::TooLarge(
            "File too large. Please upload a file smaller than 10MB.".to_string(),
        ));
    }

    // pdf-extract is CPU-bound; keep it off the async worker threads.
    let text = tokio::task::spawn_blocking(move || extract_text(&bytes, &mime_type))
        .await
        .map_err(|e| AppError::Internal(e.into()))?
        .map_err(|e| AppError::Extraction(e.to_string()))?;

    if text.trim().is_empty() {
        return Err(AppError::Extraction("extracted text was empty".to_string()));
    }

    let parsed = parse_resume_text(&text);
    info!(
        skills = parsed.skills.len(),
        experience = parsed.experience.len(),
        education = parsed.education.len(),
        projects = parsed.projects.len(),
        "Parsed resume upload"
    );

    Ok(Json(parsed))
}
