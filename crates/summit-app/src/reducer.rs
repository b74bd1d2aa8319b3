//! # State Reducer
//!
//! Pure transition function from `(snapshot, action)` to the next snapshot:
//! ```text
//! Action → [Reduce] → AppState snapshot → Store → Selectors → UI
//! ```
//!
//! Branches an action does not touch are cloned unchanged, so selectors
//! over those branches see equal values and stay quiet.

use crate::actions::{Action, AuthAction, ConferenceAction, TutorialAction};
use crate::state::{AppState, AuthState, ConferenceState, TutorialState};

/// Compute the snapshot that follows `state` after `action`.
pub fn reduce(state: &AppState, action: &Action) -> AppState {
    match action {
        Action::Auth(a) => AppState {
            auth: reduce_auth(&state.auth, a),
            ..state.clone()
        },
        Action::Conference(a) => AppState {
            conference: reduce_conference(&state.conference, a),
            ..state.clone()
        },
        Action::Tutorial(a) => AppState {
            tutorial: reduce_tutorial(&state.tutorial, a),
            ..state.clone()
        },
    }
}

/// Auth branch transitions.
pub fn reduce_auth(state: &AuthState, action: &AuthAction) -> AuthState {
    match action {
        AuthAction::CheckToken | AuthAction::LoginRequested => AuthState {
            current_user: state.current_user.clone(),
            loading: true,
            error: None,
        },
        AuthAction::LoginSucceeded(user) => AuthState {
            current_user: Some(user.clone()),
            loading: false,
            error: None,
        },
        AuthAction::LoginFailed(message) => AuthState {
            current_user: None,
            loading: false,
            error: Some(message.clone()),
        },
        AuthAction::Logout => AuthState::default(),
    }
}

/// Conference branch transitions.
pub fn reduce_conference(state: &ConferenceState, action: &ConferenceAction) -> ConferenceState {
    match action {
        ConferenceAction::SpeakersRequested => ConferenceState {
            loading: true,
            error: None,
            ..state.clone()
        },
        ConferenceAction::SpeakersLoaded(speakers) => {
            let mut speakers = speakers.clone();
            speakers.sort_by(|a, b| a.name.cmp(&b.name));
            ConferenceState {
                speakers,
                loading: false,
                error: None,
            }
        }
        ConferenceAction::SpeakersFailed(message) => ConferenceState {
            loading: false,
            error: Some(message.clone()),
            ..state.clone()
        },
    }
}

/// Tutorial branch transitions.
pub fn reduce_tutorial(state: &TutorialState, action: &TutorialAction) -> TutorialState {
    match action {
        TutorialAction::SlideChanged(index) => TutorialState {
            current: (*index).min(state.slides.len().saturating_sub(1)),
            ..state.clone()
        },
        TutorialAction::Completed => TutorialState {
            completed: true,
            ..state.clone()
        },
    }
}
