//! # Conference State
//!
//! Speakers and the sessions they present. Populated by the conference
//! service through [`ConferenceAction`](crate::actions::ConferenceAction).

use serde::{Deserialize, Serialize};

const TWITTER_BASE: &str = "https://twitter.com/";

/// A scheduled talk.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Session {
    /// Session identifier
    pub id: String,
    /// Talk title
    pub name: String,
    /// Start time as shown in the schedule (e.g. "09:30")
    #[serde(default)]
    pub time_start: String,
    /// End time as shown in the schedule
    #[serde(default)]
    pub time_end: String,
    /// Room or venue
    #[serde(default)]
    pub location: String,
}

/// A conference speaker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct Speaker {
    /// Full name; unique within a conference
    pub name: String,
    /// Avatar image path
    #[serde(default)]
    pub profile_pic: String,
    /// Twitter handle without the leading `@`
    #[serde(default)]
    pub twitter: String,
    /// Short biography
    #[serde(default)]
    pub about: String,
    /// Sessions this speaker presents
    #[serde(default)]
    pub sessions: Vec<Session>,
}

impl Speaker {
    /// Profile URL used by the share sheet and the open-profile action.
    ///
    /// `None` when the speaker has no handle.
    pub fn twitter_url(&self) -> Option<String> {
        let handle = self.twitter.trim().trim_start_matches('@');
        if handle.is_empty() {
            None
        } else {
            Some(format!("{TWITTER_BASE}{handle}"))
        }
    }
}

/// The `conference` branch of the application state.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ConferenceState {
    /// Speakers, ordered by name
    #[serde(default)]
    pub speakers: Vec<Speaker>,
    /// True while speakers are being fetched
    #[serde(default)]
    pub loading: bool,
    /// Message from the last failed fetch
    #[serde(default)]
    pub error: Option<String>,
}

impl ConferenceState {
    /// Look up a speaker by exact name.
    pub fn speaker(&self, name: &str) -> Option<&Speaker> {
        self.speakers.iter().find(|s| s.name == name)
    }
}
