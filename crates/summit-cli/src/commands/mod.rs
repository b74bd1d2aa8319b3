//! Subcommand handlers.

pub mod replay;
pub mod state;

use std::path::Path;

use anyhow::{Context, Result};
use summit_app::Action;

/// Read and decode an action script.
pub fn load_script(path: &Path) -> Result<Vec<Action>> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read script {}", path.display()))?;
    let actions: Vec<Action> = serde_json::from_str(&text)
        .with_context(|| format!("Invalid script {}", path.display()))?;
    tracing::debug!(path = %path.display(), actions = actions.len(), "script loaded");
    Ok(actions)
}
