use async_trait::async_trait;

use crate::domain::CurrentUser;

/// External identity source. Resolves a bearer token to the authenticated
/// user, or `None` when the token is missing from the provider.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    async fn resolve(&self, token: &str) -> Option<CurrentUser>;
}
