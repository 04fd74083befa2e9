use chrono::{DateTime, Utc};
use serde::Serialize;
use sqlx::FromRow;
use uuid::Uuid;

/// One stored resume per email. `email` is the uniqueness key.
#[derive(Debug, Clone, FromRow)]
pub struct ResumeRow {
    pub id: Uuid,
    pub email: String,
    pub file_data: Vec<u8>,
    pub file_content_type: String,
    pub original_file_name: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

/// Public view of a stored resume. The file bytes are never echoed back.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ResumeSummary {
    pub id: Uuid,
    pub email: String,
    pub file_content_type: String,
    pub file_size: usize,
    pub original_file_name: Option<String>,
    pub uploaded_at: DateTime<Utc>,
}

impl From<&ResumeRow> for ResumeSummary {
    fn from(row: &ResumeRow) -> Self {
        Self {
            id: row.id,
            email: row.email.clone(),
            file_content_type: row.file_content_type.clone(),
            file_size: row.file_data.len(),
            original_file_name: row.original_file_name.clone(),
            uploaded_at: row.uploaded_at,
        }
    }
}
