use async_trait::async_trait;
use tokio::sync::broadcast;

use crate::domain::{Job, JobId, JobStatus, UserId};

use super::StoreError;

/// Persistent collection of job records.
///
/// `advance_status` is a per-record compare-and-set: the write is applied
/// only if the stored status still equals `from`, which is what keeps two
/// concurrent writers for the same job from producing lost updates or
/// impossible transitions. Listings return records in insertion order.
#[async_trait]
pub trait JobStore: Send + Sync {
    async fn insert(&self, job: &Job) -> Result<(), StoreError>;

    async fn get(&self, id: JobId) -> Result<Option<Job>, StoreError>;

    async fn list_all(&self) -> Result<Vec<Job>, StoreError>;

    async fn list_by_owner(&self, owner_id: &UserId) -> Result<Vec<Job>, StoreError>;

    /// Conditionally advance `status` from `from` to `to`.
    ///
    /// Entering `Completed` sets `completed_date`; entering `Error` stores
    /// `error_message`. All other fields are left untouched. Fails with
    /// `StoreError::Conflict` when the stored status is not `from`, and
    /// `StoreError::NotFound` when the job does not exist.
    async fn advance_status(
        &self,
        id: JobId,
        from: JobStatus,
        to: JobStatus,
        error_message: Option<&str>,
    ) -> Result<(), StoreError>;

    /// Change-notification channel: one signal per acknowledged write.
    /// Signals carry no payload; receivers re-fetch. Delivery may be
    /// coalesced under lag.
    fn subscribe(&self) -> broadcast::Receiver<()>;
}
