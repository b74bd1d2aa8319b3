//! `summit state`: print a snapshot.

use std::io::Write;
use std::path::Path;

use anyhow::Result;
use summit_app::{AppConfig, AppStore};

/// Print the initial snapshot, or the snapshot after `script` if given.
pub fn run(config: &AppConfig, script: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let store = AppStore::from_config(config)?;
    if let Some(script) = script {
        for action in super::load_script(script)? {
            store.dispatch(action)?;
        }
    }
    writeln!(out, "{}", store.snapshot().to_json_pretty())?;
    Ok(())
}
