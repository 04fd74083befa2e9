use tracing::info;

use crate::errors::AppError;
use crate::models::resume::ResumeRow;
use crate::resume::form::ResumeForm;
use crate::store::{NewResume, ResumeStore};

/// Stores the uploaded resume for its email, replacing any previous one.
/// An empty file counts as missing and never reaches the store.
pub async fn store_upload(
    store: &dyn ResumeStore,
    form: ResumeForm,
) -> Result<ResumeRow, AppError> {
    let (email, file) = match (form.email, form.file) {
        (Some(email), Some(file)) if !file.bytes.is_empty() => (email, file),
        _ => {
            return Err(AppError::Validation("Email and resume required".to_string()))
        }
    };

    let row = store
        .upsert(NewResume {
            email: &email,
            file_data: &file.bytes,
            content_type: &file.content_type,
            original_file_name: file.file_name.as_deref(),
        })
        .await?;

    info!(email = %row.email, bytes = row.file_data.len(), "Resume stored");
    Ok(row)
}
