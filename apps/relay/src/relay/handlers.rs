use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::{json, Value};
use tracing::error;

use crate::errors::{ApiError, AppError};
use crate::relay::auth::AuthRequest;
use crate::relay::jobs::resolve_resume;
use crate::resume::form::ResumeForm;
use crate::state::AppState;

const AUTH_UNAVAILABLE: &str = "Auth service unavailable";
const FETCH_JOBS_FAILED: &str = "Failed to fetch jobs";

/// POST /auth
/// Relays the upstream status and JSON body verbatim.
pub async fn handle_auth(
    State(state): State<AppState>,
    payload: Result<Json<AuthRequest>, JsonRejection>,
) -> Response {
    let request = match payload {
        Ok(Json(request)) => request,
        // Non-JSON bodies carry no fields; the auth service still decides.
        Err(JsonRejection::MissingJsonContentType(_)) => AuthRequest::default(),
        Err(rejection) => return AppError::Validation(rejection.body_text()).into_response(),
    };

    match state.auth.forward(request).await {
        Ok(reply) => {
            let status = StatusCode::from_u16(reply.status).unwrap_or(StatusCode::BAD_GATEWAY);
            (status, Json(reply.body)).into_response()
        }
        Err(e) => {
            error!("Auth relay failed: {e}");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(json!({
                    "message": AUTH_UNAVAILABLE,
                    "error": e.to_string(),
                })),
            )
                .into_response()
        }
    }
}

/// POST /fetchJobs
pub async fn handle_fetch_jobs(
    State(state): State<AppState>,
    form: ResumeForm,
) -> Result<Json<Value>, ApiError> {
    let resume = resolve_resume(state.store.as_ref(), form)
        .await
        .map_err(|e| e.summarized(FETCH_JOBS_FAILED))?;

    let matches = state
        .jobs
        .match_jobs(resume)
        .await
        .map_err(|e| AppError::from(e).summarized(FETCH_JOBS_FAILED))?;

    Ok(Json(matches))
}
