use std::fmt;
use std::str::FromStr;

/// Lifecycle status of a translation job.
///
/// The only permitted transitions are single forward steps:
/// `Queued → Processing → Translating → {Completed | Error}`.
/// `Completed` and `Error` are terminal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum JobStatus {
    Queued,
    Processing,
    Translating,
    Completed,
    Error,
}

impl JobStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            JobStatus::Queued => "queued",
            JobStatus::Processing => "processing",
            JobStatus::Translating => "translating",
            JobStatus::Completed => "completed",
            JobStatus::Error => "error",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, JobStatus::Completed | JobStatus::Error)
    }

    /// Whether `next` is a valid single forward step from `self`.
    ///
    /// No transition skips a state, returns to an earlier state, or leaves
    /// a terminal state. A no-op transition is not a valid step.
    pub fn can_advance_to(&self, next: JobStatus) -> bool {
        matches!(
            (*self, next),
            (JobStatus::Queued, JobStatus::Processing)
                | (JobStatus::Processing, JobStatus::Translating)
                | (JobStatus::Translating, JobStatus::Completed)
                | (JobStatus::Translating, JobStatus::Error)
        )
    }
}

impl FromStr for JobStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "queued" => Ok(JobStatus::Queued),
            "processing" => Ok(JobStatus::Processing),
            "translating" => Ok(JobStatus::Translating),
            "completed" => Ok(JobStatus::Completed),
            "error" => Ok(JobStatus::Error),
            _ => Err(format!("Invalid job status: {}", s)),
        }
    }
}

impl fmt::Display for JobStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
