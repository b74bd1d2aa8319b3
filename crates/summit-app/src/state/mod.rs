//! # Application State
//!
//! The statically typed snapshot schema. Every value of [`AppState`] is a
//! complete, consistent snapshot; reducers replace it wholesale.
//!
//! The JSON form uses camelCase keys (`currentUser`) and rejects unknown
//! fields. `auth` is required; the other branches default when absent.

mod auth;
mod conference;
mod tutorial;

pub use auth::{AuthState, User};
pub use conference::{ConferenceState, Session, Speaker};
pub use tutorial::{Slide, TutorialState};

use serde::{Deserialize, Serialize};
use summit_core::{decode_snapshot, StateError};

/// Root of the application state tree.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct AppState {
    /// Authentication branch
    pub auth: AuthState,
    /// Speakers and sessions
    #[serde(default)]
    pub conference: ConferenceState,
    /// Onboarding slideshow
    #[serde(default)]
    pub tutorial: TutorialState,
}

impl AppState {
    /// Decode and validate a snapshot from JSON.
    pub fn from_json(json: &str) -> Result<Self, StateError> {
        decode_snapshot(json)
    }

    /// Encode as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> String {
        // Plain data with string keys; serialization cannot fail.
        serde_json::to_string_pretty(self).unwrap_or_default()
    }
}
