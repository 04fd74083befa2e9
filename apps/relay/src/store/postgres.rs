use async_trait::async_trait;
use sqlx::PgPool;
use tracing::info;
use uuid::Uuid;

use super::{NewResume, ResumeStore, StoreError};
use crate::models::resume::ResumeRow;

/// Postgres-backed store. The pool is connected by `db::create_pool` and
/// closed through `close` once the server has drained.
#[derive(Clone)]
pub struct PgResumeStore {
    pool: PgPool,
}

impl PgResumeStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn close(&self) {
        self.pool.close().await;
        info!("PostgreSQL connection pool closed");
    }
}

#[async_trait]
impl ResumeStore for PgResumeStore {
    async fn upsert(&self, resume: NewResume<'_>) -> Result<ResumeRow, StoreError> {
        // Single statement so concurrent uploads for one email cannot interleave.
        // The row id survives overwrites.
        let row = sqlx::query_as::<_, ResumeRow>(
            r#"
            INSERT INTO resumes
                (id, email, file_data, file_content_type, original_file_name, uploaded_at)
            VALUES ($1, $2, $3, $4, $5, NOW())
            ON CONFLICT (email) DO UPDATE SET
                file_data = EXCLUDED.file_data,
                file_content_type = EXCLUDED.file_content_type,
                original_file_name = EXCLUDED.original_file_name,
                uploaded_at = EXCLUDED.uploaded_at
            RETURNING id, email, file_data, file_content_type, original_file_name, uploaded_at
            "#,
        )
        .bind(Uuid::new_v4())
        .bind(resume.email)
        .bind(resume.file_data)
        .bind(resume.content_type)
        .bind(resume.original_file_name)
        .fetch_one(&self.pool)
        .await?;

        Ok(row)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<ResumeRow>, StoreError> {
        let row = sqlx::query_as::<_, ResumeRow>(
            "SELECT id, email, file_data, file_content_type, original_file_name, uploaded_at
             FROM resumes WHERE email = $1",
        )
        .bind(email)
        .fetch_optional(&self.pool)
        .await?;

        Ok(row)
    }
}
