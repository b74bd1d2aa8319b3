//! # Auth State

use serde::{Deserialize, Serialize};

/// Authenticated identity.
///
/// Compared structurally; two records with the same fields are the same user
/// for change detection.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct User {
    /// Account identifier
    pub id: u64,
    /// Display name
    pub name: String,
    /// Contact email, if the account exposes one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

impl User {
    /// Create a user without an email.
    pub fn new(id: u64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            email: None,
        }
    }
}

/// The `auth` branch of the application state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AuthState {
    /// Signed-in user; absent when unauthenticated
    #[serde(default)]
    pub current_user: Option<User>,
    /// True while an auth operation is in flight
    pub loading: bool,
    /// Message from the last failed auth operation
    #[serde(default)]
    pub error: Option<String>,
}

impl AuthState {
    /// Whether a user is signed in.
    pub fn is_authenticated(&self) -> bool {
        self.current_user.is_some()
    }
}
