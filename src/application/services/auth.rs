use std::sync::Arc;

use crate::application::ports::IdentityProvider;
use crate::domain::{CurrentUser, Role};

/// Authorization boundary around the identity provider.
///
/// All role comparisons in the application go through here; job logic
/// never inspects `Role` directly.
#[derive(Clone)]
pub struct AuthContext {
    provider: Arc<dyn IdentityProvider>,
}

impl AuthContext {
    pub fn new(provider: Arc<dyn IdentityProvider>) -> Self {
        Self { provider }
    }

    /// Resolve the caller from a bearer token, if any.
    pub async fn current_user(&self, token: Option<&str>) -> Option<CurrentUser> {
        match token {
            Some(t) => self.provider.resolve(t).await,
            None => None,
        }
    }

    pub fn has_role(&self, user: &CurrentUser, role: Role) -> bool {
        user.role == role
    }
}
