use bytes::Bytes;
use reqwest::{
    header::ACCEPT,
    multipart::{Form, Part},
    Client,
};
use serde_json::Value;
use tracing::{info, warn};

use super::RelayError;
use crate::errors::AppError;
use crate::resume::form::{ResumeForm, PDF_CONTENT_TYPE};
use crate::store::ResumeStore;

/// Number of matches requested from the job-matching service.
pub const TOP_MATCHES: u32 = 3;
const ATTACHMENT_FIELD: &str = "file";
const ATTACHMENT_NAME: &str = "resume.pdf";

/// Picks the resume to forward. An attached file wins and never touches the
/// store; otherwise the stored resume for `email` is used.
pub async fn resolve_resume(
    store: &dyn ResumeStore,
    form: ResumeForm,
) -> Result<Bytes, AppError> {
    let bytes = match (form.file, form.email) {
        (Some(file), _) => file.bytes,
        (None, Some(email)) => {
            let row = store
                .find_by_email(&email)
                .await?
                .ok_or_else(|| AppError::NotFound("Resume not found".to_string()))?;
            Bytes::from(row.file_data)
        }
        (None, None) => {
            return Err(AppError::Validation("Resume or email required".to_string()))
        }
    };

    if bytes.is_empty() {
        return Err(AppError::Validation("Resume file is empty or invalid".to_string()));
    }
    Ok(bytes)
}

#[derive(Clone)]
pub struct JobRelay {
    client: Client,
    endpoint: String,
}

impl JobRelay {
    pub fn new(client: Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// Uploads the resume as `resume.pdf` and returns the upstream JSON untouched.
    pub async fn match_jobs(&self, resume: Bytes) -> Result<Value, RelayError> {
        let size = resume.len();
        let part = Part::bytes(resume.to_vec())
            .file_name(ATTACHMENT_NAME)
            .mime_str(PDF_CONTENT_TYPE)?;
        let form = Form::new().part(ATTACHMENT_FIELD, part);

        let response = self
            .client
            .post(&self.endpoint)
            .query(&[("top_k", TOP_MATCHES)])
            .header(ACCEPT, "application/json")
            .multipart(form)
            .send()
            .await?;

        let status = response.status();
        let body = response.text().await?;
        if !status.is_success() {
            warn!(status = status.as_u16(), "Job-matching service rejected resume");
            return Err(RelayError::Upstream {
                status: status.as_u16(),
                body,
            });
        }

        info!(bytes = size, "Job matches fetched");
        Ok(serde_json::from_str(&body)?)
    }
}
