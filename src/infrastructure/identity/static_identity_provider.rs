use std::collections::HashMap;

use async_trait::async_trait;

use crate::application::ports::IdentityProvider;
use crate::domain::{CurrentUser, Role, UserId};

/// Identity provider backed by a fixed token table, seeded at startup.
/// Credential storage proper lives outside this service; this adapter only
/// maps already-issued bearer tokens to identities.
pub struct StaticIdentityProvider {
    users: HashMap<String, CurrentUser>,
}

impl StaticIdentityProvider {
    pub fn new(users: impl IntoIterator<Item = (String, CurrentUser)>) -> Self {
        Self {
            users: users.into_iter().collect(),
        }
    }

    /// The two demo accounts: a regular user and an admin.
    pub fn demo() -> Self {
        Self::new([
            (
                "user-token".to_string(),
                CurrentUser {
                    id: UserId::new("1"),
                    username: "user".to_string(),
                    role: Role::User,
                },
            ),
            (
                "admin-token".to_string(),
                CurrentUser {
                    id: UserId::new("2"),
                    username: "admin".to_string(),
                    role: Role::Admin,
                },
            ),
        ])
    }
}

#[async_trait]
impl IdentityProvider for StaticIdentityProvider {
    async fn resolve(&self, token: &str) -> Option<CurrentUser> {
        self.users.get(token).cloned()
    }
}
