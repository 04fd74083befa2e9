use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;
use chrono::Utc;
use uuid::Uuid;

use super::{NewResume, ResumeStore, StoreError};
use crate::models::resume::ResumeRow;

/// In-process store used by the router and handler tests.
#[derive(Default)]
pub struct InMemoryResumeStore {
    rows: Mutex<HashMap<String, ResumeRow>>,
    lookups: AtomicUsize,
}

impl InMemoryResumeStore {
    /// Inserts a row as-is, bypassing upload validation.
    pub fn seed(&self, row: ResumeRow) {
        self.rows.lock().unwrap().insert(row.email.clone(), row);
    }

    pub fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }

    pub fn get(&self, email: &str) -> Option<ResumeRow> {
        self.rows.lock().unwrap().get(email).cloned()
    }

    /// Number of `find_by_email` calls served.
    pub fn lookups(&self) -> usize {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ResumeStore for InMemoryResumeStore {
    async fn upsert(&self, resume: NewResume<'_>) -> Result<ResumeRow, StoreError> {
        let mut rows = self.rows.lock().unwrap();
        let id = rows
            .get(resume.email)
            .map(|existing| existing.id)
            .unwrap_or_else(Uuid::new_v4);
        let row = ResumeRow {
            id,
            email: resume.email.to_string(),
            file_data: resume.file_data.to_vec(),
            file_content_type: resume.content_type.to_string(),
            original_file_name: resume.original_file_name.map(str::to_string),
            uploaded_at: Utc::now(),
        };
        rows.insert(row.email.clone(), row.clone());
        Ok(row)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<ResumeRow>, StoreError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);
        Ok(self.get(email))
    }
}

/// Store whose every call fails, for exercising the 500 paths.
pub struct FailingResumeStore;

#[async_trait]
impl ResumeStore for FailingResumeStore {
    async fn upsert(&self, _resume: NewResume<'_>) -> Result<ResumeRow, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }

    async fn find_by_email(&self, _email: &str) -> Result<Option<ResumeRow>, StoreError> {
        Err(StoreError::Database(sqlx::Error::PoolClosed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pdf<'a>(email: &'a str, bytes: &'static [u8]) -> NewResume<'a> {
        NewResume {
            email,
            file_data: bytes,
            content_type: "application/pdf",
            original_file_name: Some("cv.pdf"),
        }
    }

    #[tokio::test]
    async fn test_upsert_creates_then_overwrites_single_record() {
        let store = InMemoryResumeStore::default();

        let first = store.upsert(pdf("a@x.com", b"one")).await.unwrap();
        let second = store.upsert(pdf("a@x.com", b"two")).await.unwrap();

        assert_eq!(store.len(), 1);
        assert_eq!(first.id, second.id);
        let found = store.find_by_email("a@x.com").await.unwrap().unwrap();
        assert_eq!(found.file_data, b"two");
    }

    #[tokio::test]
    async fn test_find_by_email_missing() {
        let store = InMemoryResumeStore::default();
        assert!(store.find_by_email("nobody@x.com").await.unwrap().is_none());
        assert_eq!(store.lookups(), 1);
    }
}
