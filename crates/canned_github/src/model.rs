//! Validated models handed to callers.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A GitHub user with the fields a profile card needs.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, Getters, derive_new::new)]
pub struct UserProfile {
    /// Account login
    login: String,
    /// Avatar image URL
    avatar_url: String,
    /// Profile page URL
    html_url: String,
    /// Display name, when the user has set one
    name: Option<String>,
}

impl std::fmt::Display for UserProfile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} ({}) {}", name, self.login, self.html_url),
            None => write!(f, "{} {}", self.login, self.html_url),
        }
    }
}
