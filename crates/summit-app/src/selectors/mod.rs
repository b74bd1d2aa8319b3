//! # Selectors
//!
//! Read-only projections of [`AppState`](crate::state::AppState) streams.
//!
//! Each branch exposes one root selector (`select_*_state`) that lifts the
//! branch out of the global snapshot. Leaf selectors are composed after it
//! with [`compose!`](summit_core::compose), left to right, so the global
//! state is always the first stage and the field projection the last.
//!
//! Selectors without parameters are process-lifetime statics; the public
//! functions hand out cheap clones.

pub mod auth;
pub mod conference;
pub mod tutorial;

pub use auth::{select_auth_state, select_current_user, select_error_message, select_is_loading};
pub use conference::{
    select_conference_state, select_speaker_by_name, select_speaker_sessions, select_speakers,
    select_speakers_loading,
};
pub use tutorial::{select_current_slide, select_show_skip, select_slides, select_tutorial_state};
