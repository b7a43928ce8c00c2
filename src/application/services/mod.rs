mod auth;
mod job_service;
mod translation_worker;

pub use auth::AuthContext;
pub use job_service::{JobService, JobServiceError, LanguageOptions, NewJobRequest};
pub use translation_worker::{PipelineTiming, TranslationMessage, TranslationWorker};
