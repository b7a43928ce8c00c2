use std::sync::Arc;

use crate::application::services::{AuthContext, JobService};

#[derive(Clone)]
pub struct AppState {
    pub job_service: Arc<JobService>,
    pub auth: AuthContext,
}
