use axum::{
    extract::{Multipart, State},
    Json,
};
use bytes::Bytes;
use tracing::{info, warn, Instrument};
use uuid::Uuid;

use crate::analysis::analyze_text;
use crate::analysis::extractor::{extract_text, DocumentKind};
use crate::analysis::models::AnalysisResponse;
use crate::errors::AppError;
use crate::state::AppState;

/// Multipart field carrying the résumé.
pub const UPLOAD_FIELD: &str = "file";

/// POST /analyze-resume
pub async fn handle_analyze_resume(
    State(state): State<AppState>,
    multipart: Multipart,
) -> Result<Json<AnalysisResponse>, AppError> {
    let (file_name, data) = read_upload(multipart).await?;
    let request_id = Uuid::new_v4();
    let span = tracing::info_span!("analyze_resume", %request_id, file_name = %file_name);

    analyze_upload(&state, request_id, &file_name, data)
        .instrument(span)
        .await
        .map(Json)
}

async fn analyze_upload(
    state: &AppState,
    request_id: Uuid,
    file_name: &str,
    data: Bytes,
) -> Result<AnalysisResponse, AppError> {
    let kind = DocumentKind::from_file_name(file_name);

    // Removed when dropped, whichever way this function returns
    let staged = state
        .storage
        .stage(request_id, kind.extension(), data)
        .await?;

    if kind == DocumentKind::Unsupported {
        warn!("Rejected upload with unsupported file type");
        staged.discard();
        return Err(AppError::UnsupportedFileType);
    }

    let text = extract_text(kind, staged.path().to_path_buf()).await?;
    staged.discard();

    let analysis = analyze_text(&text);
    info!(
        chars = text.len(),
        skills = analysis.skills.len(),
        feedback = analysis.feedback.len(),
        "Resume analyzed"
    );
    Ok(analysis)
}

/// Pulls the first `file` field out of the multipart body.
async fn read_upload(mut multipart: Multipart) -> Result<(String, Bytes), AppError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| AppError::Validation(format!("Invalid multipart payload: {e}")))?
    {
        if field.name() != Some(UPLOAD_FIELD) {
            continue;
        }

        let file_name = field
            .file_name()
            .map(str::to_string)
            .ok_or_else(|| AppError::Validation("Uploaded file has no filename".to_string()))?;
        let data = field
            .bytes()
            .await
            .map_err(|e| AppError::Validation(format!("Failed to read uploaded file: {e}")))?;

        return Ok((file_name, data));
    }

    Err(AppError::Validation(format!(
        "Multipart field '{UPLOAD_FIELD}' is required"
    )))
}
