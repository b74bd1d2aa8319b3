//! # Tutorial State
//!
//! The onboarding slideshow shown on first launch.

use serde::{Deserialize, Serialize};

/// One onboarding slide.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Slide {
    /// Headline
    pub title: String,
    /// Body text
    pub description: String,
    /// Illustration asset path
    pub image: String,
}

impl Slide {
    fn new(title: &str, description: &str, image: &str) -> Self {
        Self {
            title: title.to_string(),
            description: description.to_string(),
            image: image.to_string(),
        }
    }
}

fn default_slides() -> Vec<Slide> {
    vec![
        Slide::new(
            "Welcome to ICA",
            "The Ionic Conference App is a practical preview of the Ionic Framework in action, \
             and a demonstration of proper code use.",
            "img/ica-slidebox-img-1.png",
        ),
        Slide::new(
            "What is Ionic?",
            "Ionic Framework is an open source SDK that enables developers to build high quality \
             mobile apps with web technologies like HTML, CSS, and JavaScript.",
            "img/ica-slidebox-img-2.png",
        ),
        Slide::new(
            "What is Ionic Platform?",
            "The Ionic Platform is a cloud platform for managing and scaling Ionic apps with \
             integrated services like push notifications, native builds, user auth, and live updating.",
            "img/ica-slidebox-img-3.png",
        ),
    ]
}

fn enabled() -> bool {
    true
}

/// The `tutorial` branch of the application state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct TutorialState {
    /// Slides in display order
    #[serde(default = "default_slides")]
    pub slides: Vec<Slide>,
    /// Index of the visible slide
    #[serde(default)]
    pub current: usize,
    /// Set once the user leaves the tutorial
    #[serde(default)]
    pub completed: bool,
    /// Whether the skip button may be shown at all
    #[serde(default = "enabled")]
    pub skip_enabled: bool,
}

impl Default for TutorialState {
    fn default() -> Self {
        Self {
            slides: default_slides(),
            current: 0,
            completed: false,
            skip_enabled: true,
        }
    }
}

impl TutorialState {
    /// The visible slide, if any.
    pub fn current_slide(&self) -> Option<&Slide> {
        self.slides.get(self.current)
    }

    /// True when the visible slide is the final one (or there are none).
    pub fn is_end(&self) -> bool {
        self.current.saturating_add(1) >= self.slides.len()
    }

    /// Skip is offered until the last slide is reached.
    pub fn show_skip(&self) -> bool {
        self.skip_enabled && !self.completed && !self.is_end()
    }
}
