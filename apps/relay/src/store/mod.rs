//! Resume Store: the only component that reads or writes persisted resumes.
//!
//! `AppState` holds an `Arc<dyn ResumeStore>`. Production uses `PgResumeStore`;
//! tests swap in `InMemoryResumeStore`.

use async_trait::async_trait;
use thiserror::Error;

use crate::models::resume::ResumeRow;

pub mod postgres;

#[cfg(test)]
pub mod memory;

pub use postgres::PgResumeStore;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// Fields written by an upload. `uploaded_at` is stamped by the store.
#[derive(Debug, Clone, Copy)]
pub struct NewResume<'a> {
    pub email: &'a str,
    pub file_data: &'a [u8],
    pub content_type: &'a str,
    pub original_file_name: Option<&'a str>,
}

#[async_trait]
pub trait ResumeStore: Send + Sync {
    /// Creates or replaces the record for `resume.email`. Last write wins.
    async fn upsert(&self, resume: NewResume<'_>) -> Result<ResumeRow, StoreError>;

    async fn find_by_email(&self, email: &str) -> Result<Option<ResumeRow>, StoreError>;
}
