//! # Identity Issuance
//!
//! Signing in is delegated to an [`IdentityProvider`]. The session never builds a
//! [`User`] itself, so a provider backed by a real identity service can replace the
//! mocked one without touching the session's transaction logic.
//!
//! - [`MockIdentityProvider`]: accepts any email, issues random ids. This is what the
//!   terminal client runs with.
//! - [`SequentialIdentityProvider`]: accepts any email, issues `user-1`, `user-2`, ...
//!   Useful wherever output must be reproducible.

use crate::error::Result;
use crate::model::{Role, User};
use std::collections::HashSet;
use uuid::Uuid;

/// Email used by the mocked Google sign-in.
pub const GOOGLE_MOCK_EMAIL: &str = "user@gmail.com";

/// Avatar assigned to mocked users when no other is configured.
pub const DEFAULT_AVATAR_URL: &str =
    "https://images.unsplash.com/photo-1438761681033-6461ffad8d80?auto=format&fit=crop&q=80&w=100";

pub trait IdentityProvider {
    /// Produce a user for the given email and role.
    ///
    /// Every user returned must carry an id never issued before by this provider.
    fn authenticate(&mut self, email: &str, role: Role) -> Result<User>;
}

/// Accepts every sign-in. Ids are the first 9 hex digits of a v4 UUID, re-drawn
/// on the rare collision with an id this provider already handed out.
pub struct MockIdentityProvider {
    avatar_url: String,
    issued: HashSet<String>,
}

impl Default for MockIdentityProvider {
    fn default() -> Self {
        Self::new(DEFAULT_AVATAR_URL)
    }
}

impl MockIdentityProvider {
    pub fn new(avatar_url: impl Into<String>) -> Self {
        Self {
            avatar_url: avatar_url.into(),
            issued: HashSet::new(),
        }
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let mut id = Uuid::new_v4().simple().to_string();
            id.truncate(9);
            if self.issued.insert(id.clone()) {
                return id;
            }
        }
    }
}

impl IdentityProvider for MockIdentityProvider {
    fn authenticate(&mut self, email: &str, role: Role) -> Result<User> {
        let id = self.fresh_id();
        Ok(User::new(id, email, role).with_profile_image(self.avatar_url.clone()))
    }
}

#[derive(Default)]
pub struct SequentialIdentityProvider {
    next: u64,
}

impl SequentialIdentityProvider {
    pub fn new() -> Self {
        Self::default()
    }
}

impl IdentityProvider for SequentialIdentityProvider {
    fn authenticate(&mut self, email: &str, role: Role) -> Result<User> {
        self.next += 1;
        Ok(User::new(format!("user-{}", self.next), email, role))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mock_provider_builds_user_from_email() {
        let mut provider = MockIdentityProvider::default();
        let user = provider.authenticate("jo@example.com", Role::Owner).unwrap();
        assert_eq!(user.name, "jo");
        assert_eq!(user.email, "jo@example.com");
        assert_eq!(user.role, Role::Owner);
        assert_eq!(user.id.len(), 9);
        assert_eq!(user.profile_image.as_deref(), Some(DEFAULT_AVATAR_URL));
    }

    #[test]
    fn mock_provider_never_repeats_ids() {
        let mut provider = MockIdentityProvider::new("avatar");
        let ids: HashSet<String> = (0..500)
            .map(|_| provider.authenticate("a@x.com", Role::Adopter).unwrap().id)
            .collect();
        assert_eq!(ids.len(), 500);
    }

    #[test]
    fn sequential_provider_counts_up() {
        let mut provider = SequentialIdentityProvider::new();
        let first = provider.authenticate("a@x.com", Role::Adopter).unwrap();
        let second = provider.authenticate("a@x.com", Role::Adopter).unwrap();
        assert_eq!(first.id, "user-1");
        assert_eq!(second.id, "user-2");
        assert_eq!(second.profile_image, None);
    }
}
