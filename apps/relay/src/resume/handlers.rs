use axum::{extract::State, Json};
use serde::Serialize;

use crate::errors::ApiError;
use crate::models::resume::ResumeSummary;
use crate::resume::form::ResumeForm;
use crate::resume::upload::store_upload;
use crate::state::AppState;

const UPLOAD_FAILED: &str = "Failed to upload resume";

#[derive(Debug, Serialize)]
pub struct UploadResponse {
    pub message: &'static str,
    pub resume: ResumeSummary,
}

/// POST /resume/upload
pub async fn handle_upload(
    State(state): State<AppState>,
    form: ResumeForm,
) -> Result<Json<UploadResponse>, ApiError> {
    let row = store_upload(state.store.as_ref(), form)
        .await
        .map_err(|e| e.summarized(UPLOAD_FAILED))?;

    Ok(Json(UploadResponse {
        message: "Resume uploaded successfully",
        resume: ResumeSummary::from(&row),
    }))
}
