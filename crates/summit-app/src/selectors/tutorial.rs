//! Tutorial branch selectors.

use once_cell::sync::Lazy;
use summit_core::{compose, Selector};

use crate::state::{AppState, Slide, TutorialState};

static TUTORIAL_STATE: Lazy<Selector<AppState, TutorialState>> =
    Lazy::new(|| Selector::map("tutorial", |s: &AppState| s.tutorial.clone()));

static SLIDES: Lazy<Selector<AppState, Vec<Slide>>> = Lazy::new(|| {
    compose!(
        select_tutorial_state(),
        Selector::map("slides", |t: &TutorialState| t.slides.clone()),
    )
});

static CURRENT_SLIDE: Lazy<Selector<AppState, Option<Slide>>> = Lazy::new(|| {
    compose!(
        select_tutorial_state(),
        Selector::map("current_slide", |t: &TutorialState| t.current_slide().cloned()),
    )
});

static SHOW_SKIP: Lazy<Selector<AppState, bool>> = Lazy::new(|| {
    compose!(
        select_tutorial_state(),
        Selector::map("show_skip", TutorialState::show_skip),
    )
});

/// The `tutorial` branch.
pub fn select_tutorial_state() -> Selector<AppState, TutorialState> {
    TUTORIAL_STATE.clone()
}

/// Slides in display order.
pub fn select_slides() -> Selector<AppState, Vec<Slide>> {
    SLIDES.clone()
}

/// The visible slide.
pub fn select_current_slide() -> Selector<AppState, Option<Slide>> {
    CURRENT_SLIDE.clone()
}

/// Whether the skip button is shown; false once the last slide is reached.
pub fn select_show_skip() -> Selector<AppState, bool> {
    SHOW_SKIP.clone()
}
