//! # Application Store
//!
//! [`AppStore`] owns the snapshot [`Store`] and is the only place where
//! actions become state. Consumers read through selectors:
//!
//! ```rust,ignore
//! let store = AppStore::new(AppState::default());
//! let mut loading = store.select(&select_is_loading());
//!
//! store.dispatch(AuthAction::CheckToken)?;
//! assert_eq!(loading.next().await, Some(false)); // initial snapshot
//! assert_eq!(loading.next().await, Some(true));
//! ```

use summit_core::{Selector, StateStream, Store};

use crate::actions::Action;
use crate::config::AppConfig;
use crate::errors::AppError;
use crate::reducer::reduce;
use crate::state::AppState;

/// Snapshot store for [`AppState`] with a reducer-driven write path.
#[derive(Clone, Debug)]
pub struct AppStore {
    store: Store<AppState>,
}

impl AppStore {
    /// Create a store starting at `initial`.
    pub fn new(initial: AppState) -> Self {
        Self {
            store: Store::new(initial),
        }
    }

    /// Create a store from configuration.
    pub fn from_config(config: &AppConfig) -> Result<Self, AppError> {
        Ok(Self::new(config.initial_state()?))
    }

    /// Apply `action` through the reducer and publish the result.
    ///
    /// Returns the new store version.
    pub fn dispatch(&self, action: impl Into<Action>) -> Result<u64, AppError> {
        let action = action.into();
        let version = self.store.update(|state| reduce(state, &action))?;
        tracing::debug!(?action, version, "action dispatched");
        Ok(version)
    }

    /// Apply `selector` to a fresh subscription.
    pub fn select<T>(&self, selector: &Selector<AppState, T>) -> StateStream<T>
    where
        T: Send + 'static,
    {
        selector.apply(self.store.subscribe())
    }

    /// Raw snapshot stream.
    pub fn subscribe(&self) -> StateStream<AppState> {
        self.store.subscribe()
    }

    /// Current snapshot.
    pub fn snapshot(&self) -> AppState {
        self.store.snapshot()
    }

    /// Number of committed transitions.
    pub fn version(&self) -> u64 {
        self.store.version()
    }

    /// Live subscriptions.
    pub fn subscriber_count(&self) -> usize {
        self.store.subscriber_count()
    }

    /// Complete every subscription; later dispatches fail.
    pub fn close(&self) {
        self.store.close();
    }
}

impl Default for AppStore {
    fn default() -> Self {
        Self::new(AppState::default())
    }
}
