use std::str::FromStr;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::PgPool;
use tokio::sync::broadcast;
use tracing::instrument;
use uuid::Uuid;

use crate::application::ports::{JobStore, StoreError};
use crate::domain::{Job, JobId, JobStatus, Language, UserId};

/// Postgres-backed job store. The `seq` column records insertion order so
/// listings can honor the same ordering contract as the in-memory store.
/// Change notifications are fanned out in-process after each
/// acknowledged write.
pub struct PgJobStore {
    pool: PgPool,
    changes: broadcast::Sender<()>,
}

impl PgJobStore {
    pub fn new(pool: PgPool) -> Self {
        let (changes, _) = broadcast::channel(64);
        Self { pool, changes }
    }

    fn notify(&self) {
        let _ = self.changes.send(());
    }
}

#[derive(sqlx::FromRow)]
struct JobRow {
    id: Uuid,
    owner_id: String,
    file_name: String,
    file_size: i64,
    source_language: String,
    target_language: String,
    status: String,
    upload_date: DateTime<Utc>,
    completed_date: Option<DateTime<Utc>>,
    error_message: Option<String>,
}

impl TryFrom<JobRow> for Job {
    type Error = StoreError;

    fn try_from(row: JobRow) -> Result<Self, Self::Error> {
        let status = JobStatus::from_str(&row.status).map_err(StoreError::QueryFailed)?;
        let source_language =
            Language::from_str(&row.source_language).map_err(StoreError::QueryFailed)?;
        let target_language =
            Language::from_str(&row.target_language).map_err(StoreError::QueryFailed)?;

        Ok(Job {
            id: JobId::from_uuid(row.id),
            owner_id: UserId::new(row.owner_id),
            file_name: row.file_name,
            file_size: row.file_size as u64,
            source_language,
            target_language,
            status,
            upload_date: row.upload_date,
            completed_date: row.completed_date,
            error_message: row.error_message,
        })
    }
}

const SELECT_COLUMNS: &str = "SELECT id, owner_id, file_name, file_size, source_language, \
     target_language, status, upload_date, completed_date, error_message FROM jobs";

#[async_trait]
impl JobStore for PgJobStore {
    #[instrument(skip(self, job), fields(job_id = %job.id))]
    async fn insert(&self, job: &Job) -> Result<(), StoreError> {
        sqlx::query(
            r#"
            INSERT INTO jobs (id, owner_id, file_name, file_size, source_language,
                              target_language, status, upload_date, completed_date, error_message)
            VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $10)
            "#,
        )
        .bind(job.id.as_uuid())
        .bind(job.owner_id.as_str())
        .bind(&job.file_name)
        .bind(job.file_size as i64)
        .bind(job.source_language.as_str())
        .bind(job.target_language.as_str())
        .bind(job.status.as_str())
        .bind(job.upload_date)
        .bind(job.completed_date)
        .bind(&job.error_message)
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::QueryFailed(e.to_string()))?;

        self.notify();
        Ok(())
    }

    #[instrument(skip(self), fields(job_id = %id))]
    async fn get(&self, id: JobId) -> Result<Option<Job>, StoreError> {
        let row: Option<JobRow> =
            sqlx::query_as(&format!("{} WHERE id = $1", SELECT_COLUMNS))
                .bind(id.as_uuid())
                .fetch_optional(&self.pool)
                .await
                .map_err(|e| StoreError::QueryFailed(e.to_string()))?;

        row.map(Job::try_from).transpose()
    }

    #[instrument(skip(self))]
    async fn list_all(&self) -> Result<Vec<Job>, StoreError> {
        let rows: Vec<JobRow> = sqlx::query_as(&format!("{} ORDER BY seq ASC", SELECT_COLUMNS))
            .fetch_all(&self.pool)
            .await
            .map_err(|e| StoreError::QueryFailed(e.to_string()))?;

        rows.into_iter().map(Job::try_from).collect()
    }

    #[instrument(skip(self), fields(owner_id = %owner_id))]
    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Job>, StoreError> {
        let rows: Vec<JobRow> = sqlx::query_as(&format!(
            "{} WHERE owner_id = $1 ORDER BY seq ASC",
            SELECT_COLUMNS
        ))
        .bind(owner_id.as_str())
        .fetch_all(&self.pool)
        .await
        .map_err(|e| StoreError::QueryFailed(e.to_string()))?;

        rows.into_iter().map(Job::try_from).collect()
    }

    #[instrument(skip(self, error_message), fields(job_id = %id, from = %from, to = %to))]
    async fn advance_status(
        &self,
        id: JobId,
        from: JobStatus,
        to: JobStatus,
        error_message: Option<&str>,
    ) -> Result<(), StoreError> {
        // Single conditional UPDATE: the status column is only rewritten
        // when it still holds the expected predecessor.
        let result = sqlx::query(
            r#"
            UPDATE jobs
            SET status = $1,
                completed_date = CASE WHEN $1 = 'completed' THEN now() ELSE NULL END,
                error_message = $2
            WHERE id = $3 AND status = $4
            "#,
        )
        .bind(to.as_str())
        .bind(error_message)
        .bind(id.as_uuid())
        .bind(from.as_str())
        .execute(&self.pool)
        .await
        .map_err(|e| StoreError::QueryFailed(e.to_string()))?;

        if result.rows_affected() == 0 {
            return match self.get(id).await? {
                Some(job) => Err(StoreError::Conflict(format!(
                    "job {} is {}, expected {}",
                    id, job.status, from
                ))),
                None => Err(StoreError::NotFound(format!("job {}", id))),
            };
        }

        self.notify();
        Ok(())
    }

    fn subscribe(&self) -> broadcast::Receiver<()> {
        self.changes.subscribe()
    }
}
