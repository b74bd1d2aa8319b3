//! Conference branch selectors.

use once_cell::sync::Lazy;
use summit_core::{compose, Selector};

use crate::state::{AppState, ConferenceState, Session, Speaker};

static CONFERENCE_STATE: Lazy<Selector<AppState, ConferenceState>> =
    Lazy::new(|| Selector::map("conference", |s: &AppState| s.conference.clone()));

static SPEAKERS: Lazy<Selector<AppState, Vec<Speaker>>> = Lazy::new(|| {
    compose!(
        select_conference_state(),
        Selector::map("speakers", |c: &ConferenceState| c.speakers.clone()),
    )
});

static SPEAKERS_LOADING: Lazy<Selector<AppState, bool>> = Lazy::new(|| {
    compose!(
        select_conference_state(),
        Selector::map("loading", |c: &ConferenceState| c.loading),
    )
});

/// The `conference` branch.
pub fn select_conference_state() -> Selector<AppState, ConferenceState> {
    CONFERENCE_STATE.clone()
}

/// All speakers, ordered by name.
pub fn select_speakers() -> Selector<AppState, Vec<Speaker>> {
    SPEAKERS.clone()
}

/// Whether a speaker fetch is in flight.
pub fn select_speakers_loading() -> Selector<AppState, bool> {
    SPEAKERS_LOADING.clone()
}

/// One speaker by name, for the speaker detail page.
pub fn select_speaker_by_name(name: impl Into<String>) -> Selector<AppState, Option<Speaker>> {
    let name = name.into();
    compose!(
        select_conference_state(),
        Selector::map(format!("speaker[{name}]"), move |c: &ConferenceState| {
            c.speaker(&name).cloned()
        }),
    )
}

/// Sessions presented by one speaker; empty when the speaker is unknown.
pub fn select_speaker_sessions(name: impl Into<String>) -> Selector<AppState, Vec<Session>> {
    let name = name.into();
    compose!(
        select_conference_state(),
        Selector::map(format!("sessions[{name}]"), move |c: &ConferenceState| {
            c.speaker(&name)
                .map(|s| s.sessions.clone())
                .unwrap_or_default()
        }),
    )
}
