//! Auth branch selectors.
//!
//! Child projections know nothing about the global tree; wrapping them after
//! [`select_auth_state`] makes them usable against the store.

use once_cell::sync::Lazy;
use summit_core::{compose, Selector};

use crate::state::{AppState, AuthState, User};

static AUTH_STATE: Lazy<Selector<AppState, AuthState>> =
    Lazy::new(|| Selector::map("auth", |s: &AppState| s.auth.clone()));

static ERROR_MESSAGE: Lazy<Selector<AppState, Option<String>>> = Lazy::new(|| {
    compose!(
        select_auth_state(),
        Selector::map("error", |a: &AuthState| a.error.clone()),
    )
});

static CURRENT_USER: Lazy<Selector<AppState, Option<User>>> = Lazy::new(|| {
    compose!(
        select_auth_state(),
        Selector::map("current_user", |a: &AuthState| a.current_user.clone()),
    )
});

static IS_LOADING: Lazy<Selector<AppState, bool>> = Lazy::new(|| {
    compose!(
        select_auth_state(),
        Selector::map("loading", |a: &AuthState| a.loading),
    )
});

/// The `auth` branch.
pub fn select_auth_state() -> Selector<AppState, AuthState> {
    AUTH_STATE.clone()
}

/// `auth.error`, emitted on each distinct change.
pub fn select_error_message() -> Selector<AppState, Option<String>> {
    ERROR_MESSAGE.clone()
}

/// `auth.current_user`, emitted on each distinct change.
pub fn select_current_user() -> Selector<AppState, Option<User>> {
    CURRENT_USER.clone()
}

/// `auth.loading`, emitted on each distinct change.
pub fn select_is_loading() -> Selector<AppState, bool> {
    IS_LOADING.clone()
}
