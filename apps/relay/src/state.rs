use std::sync::Arc;

use crate::relay::auth::AuthRelay;
use crate::relay::jobs::JobRelay;
use crate::store::ResumeStore;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Injected at startup; Postgres in production, in-memory in tests.
    pub store: Arc<dyn ResumeStore>,
    pub auth: AuthRelay,
    pub jobs: JobRelay,
}
