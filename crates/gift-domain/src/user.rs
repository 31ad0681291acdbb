//! Registered storefront accounts.

use serde::{Deserialize, Serialize};

/// An account in the session's user directory. Passwords are plain text.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct User {
    pub username: String,
    pub password: String,
    pub display_name: String,
}

impl User {
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
            display_name: display_name.into(),
        }
    }

    pub fn password_matches(&self, candidate: &str) -> bool {
        self.password == candidate
    }
}
