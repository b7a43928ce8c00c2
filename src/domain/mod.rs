mod job;
mod job_id;
mod job_status;
mod language;
mod user;

pub use job::Job;
pub use job_id::JobId;
pub use job_status::JobStatus;
pub use language::Language;
pub use user::{CurrentUser, Role, UserId};
