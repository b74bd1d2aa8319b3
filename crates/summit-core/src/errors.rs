//! Error types for the reactive core
//!
//! Selectors themselves never fail. The errors here belong to the edges:
//! decoding a snapshot from its wire form, and writing to a closed store.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

/// A snapshot did not match the declared state schema.
///
/// This is a precondition failure at the point where a snapshot stream
/// originates. Nothing downstream recovers from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum StateError {
    /// A branch or field is missing, unknown, or has the wrong type
    #[error("Shape violation{}: {message}", at_field(.field))]
    Shape {
        /// Offending field or branch name, when it can be identified
        field: Option<String>,
        /// Error message describing the mismatch
        message: String,
    },
}

impl StateError {
    /// Create a shape violation error
    pub fn shape(field: Option<String>, message: impl Into<String>) -> Self {
        Self::Shape {
            field,
            message: message.into(),
        }
    }

    /// Name of the offending field, if known.
    pub fn field(&self) -> Option<&str> {
        match self {
            Self::Shape { field, .. } => field.as_deref(),
        }
    }
}

impl From<serde_json::Error> for StateError {
    fn from(err: serde_json::Error) -> Self {
        let message = err.to_string();
        Self::shape(backticked(&message), message)
    }
}

fn at_field(field: &Option<String>) -> String {
    field
        .as_ref()
        .map(|f| format!(" at `{f}`"))
        .unwrap_or_default()
}

/// serde reports `missing field `auth`` and `unknown field `x``; pull the name out.
fn backticked(message: &str) -> Option<String> {
    let start = message.find('`')? + 1;
    let len = message[start..].find('`')?;
    Some(message[start..start + len].to_string())
}

/// Decode a snapshot from JSON, rejecting anything that does not match `S`.
///
/// Pair with `#[serde(deny_unknown_fields)]` on the state types so that
/// misspelled branches fail here instead of being silently dropped.
pub fn decode_snapshot<S: DeserializeOwned>(json: &str) -> Result<S, StateError> {
    Ok(serde_json::from_str(json)?)
}

/// Errors raised by [`Store`](crate::Store) writes.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// The store was closed; no further snapshots are accepted
    #[error("Store closed at version {version}")]
    Closed {
        /// Last committed version
        version: u64,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    #[serde(deny_unknown_fields)]
    #[allow(dead_code)]
    struct Root {
        auth: Branch,
    }

    #[derive(Debug, Deserialize)]
    #[serde(deny_unknown_fields)]
    #[allow(dead_code)]
    struct Branch {
        loading: bool,
    }

    #[test]
    fn test_missing_branch_names_field() {
        let err = decode_snapshot::<Root>("{}").unwrap_err();
        assert_eq!(err.field(), Some("auth"));
        assert!(err.to_string().contains("Shape violation at `auth`"));
    }

    #[test]
    fn test_unknown_field_names_field() {
        let err = decode_snapshot::<Root>(r#"{"auth":{"loading":true,"token":"x"}}"#).unwrap_err();
        assert_eq!(err.field(), Some("token"));
    }

    #[test]
    fn test_wrong_type_is_shape_violation() {
        let err = decode_snapshot::<Root>(r#"{"auth":{"loading":"yes"}}"#).unwrap_err();
        assert!(matches!(err, StateError::Shape { .. }));
    }

    #[test]
    fn test_valid_snapshot_decodes() {
        assert!(decode_snapshot::<Root>(r#"{"auth":{"loading":false}}"#).is_ok());
    }

    #[test]
    fn test_store_closed_display() {
        let err = StoreError::Closed { version: 4 };
        assert_eq!(err.to_string(), "Store closed at version 4");
    }
}
