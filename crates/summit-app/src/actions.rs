//! # Actions
//!
//! Everything that can change the application state. Frontends and services
//! dispatch these; [`reduce`](crate::reducer::reduce) turns them into the
//! next snapshot.
//!
//! Actions serialize in serde's externally tagged form so that replay
//! scripts stay readable:
//!
//! ```json
//! [
//!   { "auth": "checkToken" },
//!   { "auth": { "loginFailed": "Invalid credentials" } },
//!   { "tutorial": { "slideChanged": 2 } }
//! ]
//! ```

use serde::{Deserialize, Serialize};

use crate::state::{Speaker, User};

/// Authentication lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum AuthAction {
    /// Validate a stored token (dispatched when the user leaves the tutorial)
    CheckToken,
    /// Interactive sign-in started
    LoginRequested,
    /// Sign-in finished
    LoginSucceeded(User),
    /// Sign-in or token check failed
    LoginFailed(String),
    /// Sign out and clear the auth branch
    Logout,
}

/// Speaker data lifecycle.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ConferenceAction {
    /// Fetch started
    SpeakersRequested,
    /// Fetch finished
    SpeakersLoaded(Vec<Speaker>),
    /// Fetch failed
    SpeakersFailed(String),
}

/// Onboarding slideshow events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum TutorialAction {
    /// The slider moved to this index
    SlideChanged(usize),
    /// The user left the tutorial
    Completed,
}

/// A state transition request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Action {
    /// Auth branch
    Auth(AuthAction),
    /// Conference branch
    Conference(ConferenceAction),
    /// Tutorial branch
    Tutorial(TutorialAction),
}

impl From<AuthAction> for Action {
    fn from(action: AuthAction) -> Self {
        Self::Auth(action)
    }
}

impl From<ConferenceAction> for Action {
    fn from(action: ConferenceAction) -> Self {
        Self::Conference(action)
    }
}

impl From<TutorialAction> for Action {
    fn from(action: TutorialAction) -> Self {
        Self::Tutorial(action)
    }
}
