//! Request body decoding shared by `/resume/upload` and `/fetchJobs`.
//!
//! Accepts `multipart/form-data` (a `resume` file part and an `email` text
//! part) or a JSON body carrying only `email`. Upload constraints are applied
//! while the multipart stream is read:
//! 1. the `resume` part must declare `application/pdf`, checked before any of
//!    its bytes are read
//! 2. the part may not exceed `MAX_RESUME_BYTES`; reading stops at the first
//!    chunk past the limit
//!
//! Presence checks are left to the handlers, which differ in what they need.

use axum::{
    async_trait,
    extract::{multipart::MultipartError, FromRequest, Multipart, Request},
    http::{header::CONTENT_TYPE, StatusCode},
    Json,
};
use bytes::{Bytes, BytesMut};
use serde::Deserialize;

use crate::errors::AppError;

pub const PDF_CONTENT_TYPE: &str = "application/pdf";
pub const MAX_RESUME_BYTES: usize = 5 * 1024 * 1024;
/// Router body limit: one maximal resume plus multipart framing and an email.
pub const BODY_LIMIT_BYTES: usize = MAX_RESUME_BYTES + 64 * 1024;

const RESUME_FIELD: &str = "resume";
const EMAIL_FIELD: &str = "email";

#[derive(Debug, Clone)]
pub struct ResumeFile {
    pub bytes: Bytes,
    pub content_type: String,
    pub file_name: Option<String>,
}

#[derive(Debug, Default)]
pub struct ResumeForm {
    pub email: Option<String>,
    pub file: Option<ResumeFile>,
}

#[derive(Deserialize)]
struct EmailBody {
    #[serde(default)]
    email: Option<String>,
}

#[async_trait]
impl<S> FromRequest<S> for ResumeForm
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|v| v.to_str().ok())
            .map(str::to_ascii_lowercase)
            .unwrap_or_default();

        if content_type.starts_with("multipart/form-data") {
            let multipart = Multipart::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            read_multipart(multipart, MAX_RESUME_BYTES).await
        } else if content_type.starts_with("application/json") {
            let Json(body) = Json::<EmailBody>::from_request(req, state)
                .await
                .map_err(|e| AppError::Validation(e.body_text()))?;
            Ok(ResumeForm {
                email: non_blank(body.email),
                file: None,
            })
        } else {
            Ok(ResumeForm::default())
        }
    }
}

async fn read_multipart(
    mut multipart: Multipart,
    max_bytes: usize,
) -> Result<ResumeForm, AppError> {
    let mut form = ResumeForm::default();

    while let Some(mut field) = multipart.next_field().await.map_err(multipart_error)? {
        let name = field.name().unwrap_or_default().to_string();
        // A `resume` part without a filename is a plain text field.
        let is_file = field.file_name().is_some();
        match name.as_str() {
            RESUME_FIELD if is_file => {
                if form.file.is_some() {
                    return Err(AppError::Validation(
                        "Only one resume file may be attached".to_string(),
                    ));
                }
                let content_type = field.content_type().unwrap_or_default().to_string();
                if !is_pdf(&content_type) {
                    return Err(AppError::Validation("Only PDF files are allowed".to_string()));
                }
                let file_name = field.file_name().map(str::to_string);

                let mut bytes = BytesMut::new();
                while let Some(chunk) = field.chunk().await.map_err(multipart_error)? {
                    if bytes.len() + chunk.len() > max_bytes {
                        return Err(file_too_large());
                    }
                    bytes.extend_from_slice(&chunk);
                }

                form.file = Some(ResumeFile {
                    bytes: bytes.freeze(),
                    content_type,
                    file_name,
                });
            }
            EMAIL_FIELD => {
                let text = field.text().await.map_err(multipart_error)?;
                form.email = non_blank(Some(text));
            }
            _ => {}
        }
    }

    Ok(form)
}

/// The declared type must be exactly `application/pdf`, without parameters.
fn is_pdf(content_type: &str) -> bool {
    content_type == PDF_CONTENT_TYPE
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn file_too_large() -> AppError {
    AppError::Validation("Resume exceeds the 5 MiB limit".to_string())
}

fn multipart_error(e: MultipartError) -> AppError {
    if e.status() == StatusCode::PAYLOAD_TOO_LARGE {
        file_too_large()
    } else {
        AppError::Validation(e.body_text())
    }
}
