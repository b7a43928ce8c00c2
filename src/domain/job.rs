use chrono::{DateTime, Utc};

use super::{JobId, JobStatus, Language, UserId};

/// One user's request to translate one file.
///
/// `status`, `completed_date` and `error_message` are the only fields that
/// change after creation, and only through a store-level conditional
/// status advance. `completed_date` is present iff the job completed;
/// `error_message` is present only for failed jobs.
#[derive(Debug, Clone)]
pub struct Job {
    pub id: JobId,
    pub owner_id: UserId,
    pub file_name: String,
    pub file_size: u64,
    pub source_language: Language,
    pub target_language: Language,
    pub status: JobStatus,
    pub upload_date: DateTime<Utc>,
    pub completed_date: Option<DateTime<Utc>>,
    pub error_message: Option<String>,
}

impl Job {
    pub fn new(
        owner_id: UserId,
        file_name: String,
        file_size: u64,
        source_language: Language,
        target_language: Language,
    ) -> Self {
        Self {
            id: JobId::new(),
            owner_id,
            file_name,
            file_size,
            source_language,
            target_language,
            status: JobStatus::Queued,
            upload_date: Utc::now(),
            completed_date: None,
            error_message: None,
        }
    }
}
