//! # Summit App
//!
//! Headless core of the conference-companion application.
//!
//! ```text
//! Action → reduce → AppState snapshot → AppStore → Selector → UI
//! ```
//!
//! - [`state`]: the typed snapshot schema (`auth`, `conference`, `tutorial`)
//! - [`actions`] and [`reducer`]: the only write path
//! - [`store`]: [`AppStore`], the upstream snapshot stream
//! - [`selectors`]: composable read-only views for presentation code
//! - [`config`]: TOML configuration with environment overrides
//!
//! Rendering, navigation, platform bridges and network fetching live in the
//! frontends. They dispatch actions and subscribe to selectors; nothing here
//! reaches back into them.

#![forbid(unsafe_code)]

pub mod actions;
pub mod config;
pub mod errors;
pub mod reducer;
pub mod selectors;
pub mod state;
pub mod store;

pub use actions::{Action, AuthAction, ConferenceAction, TutorialAction};
pub use config::AppConfig;
pub use errors::AppError;
pub use reducer::reduce;
pub use state::{AppState, AuthState, ConferenceState, Session, Slide, Speaker, TutorialState, User};
pub use store::AppStore;

// The reactive primitives consumers need alongside the selectors.
pub use summit_core::{compose, Selector, StateStream};
