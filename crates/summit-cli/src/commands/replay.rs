//! `summit replay`: dispatch a script and report selector emissions.

use std::fmt::Debug;
use std::io::Write;
use std::path::Path;

use anyhow::Result;
use futures::{FutureExt, StreamExt};
use summit_app::selectors::{
    select_auth_state, select_current_slide, select_current_user, select_error_message,
    select_is_loading, select_show_skip, select_speakers,
};
use summit_app::{AppConfig, AppState, AppStore, AuthState, Selector, Slide, Speaker, StateStream};

/// A selector stream rendered to text for printing.
struct Watch {
    name: &'static str,
    stream: StateStream<String>,
}

impl Watch {
    fn new<T>(store: &AppStore, name: &'static str, selector: Selector<AppState, T>) -> Self
    where
        T: Debug + Send + 'static,
    {
        Self {
            name,
            stream: store
                .select(&selector)
                .map(|value| format!("{value:?}"))
                .boxed(),
        }
    }

    /// Everything emitted since the last drain.
    fn drain(&mut self) -> Vec<String> {
        let mut out = Vec::new();
        while let Some(Some(value)) = self.stream.next().now_or_never() {
            out.push(value);
        }
        out
    }
}

fn watches(store: &AppStore) -> Vec<Watch> {
    vec![
        Watch::new(store, "auth.loading", select_is_loading()),
        Watch::new(store, "auth.currentUser", select_current_user()),
        Watch::new(store, "auth.error", select_error_message()),
        Watch::new(
            store,
            "auth.authenticated",
            select_auth_state().then(Selector::map("authenticated", AuthState::is_authenticated)),
        ),
        Watch::new(
            store,
            "conference.speakers",
            select_speakers().then(Selector::map("count", |s: &Vec<Speaker>| s.len())),
        ),
        Watch::new(
            store,
            "tutorial.slide",
            select_current_slide().then(Selector::map("title", |s: &Option<Slide>| {
                s.as_ref().map(|slide| slide.title.clone())
            })),
        ),
        Watch::new(store, "tutorial.showSkip", select_show_skip()),
    ]
}

fn report(out: &mut impl Write, label: &str, watches: &mut [Watch]) -> Result<()> {
    writeln!(out, "{label}")?;
    for watch in watches.iter_mut() {
        for value in watch.drain() {
            writeln!(out, "  {} = {}", watch.name, value)?;
        }
    }
    Ok(())
}

/// Replay `script` against a store built from `config`.
pub fn run(config: &AppConfig, script: &Path, out: &mut impl Write) -> Result<()> {
    let actions = super::load_script(script)?;
    let store = AppStore::from_config(config)?;
    let mut watches = watches(&store);

    report(out, "[initial]", &mut watches)?;
    for (step, action) in actions.into_iter().enumerate() {
        let label = format!("[{}] {:?}", step + 1, action);
        store.dispatch(action)?;
        report(out, &label, &mut watches)?;
    }

    store.close();
    tracing::info!(version = store.version(), "replay finished");
    Ok(())
}
