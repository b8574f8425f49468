#[cfg(test)]
#[path = "auth_test.rs"]
mod auth_test;

use crate::net::types::User;

/// Authentication state: the bearer token and the loaded profile.
///
/// Invariant: `is_authenticated()` exactly when the token is
/// non-empty. The profile arrives from a separate `/users/me` fetch
/// and may lag behind the token.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub token: String,
    pub user: Option<User>,
}

impl AuthState {
    #[must_use]
    pub fn is_authenticated(&self) -> bool {
        !self.token.is_empty()
    }

    /// Whether the loaded profile carries the admin role.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.user.as_ref().and_then(|u| u.role.as_deref()) == Some("admin")
    }

    /// Install a freshly issued bearer token. The previous profile is
    /// dropped; the caller refetches `/users/me`.
    pub fn apply_token(&mut self, token: String) {
        self.token = token;
        self.user = None;
    }

    /// End the session.
    pub fn logout(&mut self) {
        self.token.clear();
        self.user = None;
    }

    /// The profile's user id, once loaded.
    #[must_use]
    pub fn user_id(&self) -> Option<uuid::Uuid> {
        self.user.as_ref().and_then(|u| u.id)
    }
}
