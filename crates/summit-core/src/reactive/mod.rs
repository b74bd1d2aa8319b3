//! # Reactive Primitives for Snapshot Projection
//!
//! ## Core Types
//!
//! - [`StateStream<T>`]: a boxed, lazy `futures::Stream` of snapshots or
//!   values derived from them.
//!
//! - [`Store<S>`]: the upstream snapshot source. Pushes every committed
//!   snapshot, in order, to each subscriber.
//!
//! - [`Selector<S, T>`]: a reusable, pure projection from `StateStream<S>`
//!   to `StateStream<T>`. Leaf selectors suppress consecutive equal values.
//!
//! - [`compose!`](crate::compose): left-to-right chaining of selectors.
//!
//! ## Design Principles
//!
//! 1. **Runtime-agnostic**: built on `futures` only. Any executor can drive
//!    the streams; nothing here spawns tasks.
//!
//! 2. **Deferred**: composing or applying a selector runs no projection.
//!    Work happens per item, when the consumer polls.
//!
//! 3. **Drop-scoped**: a subscription lives exactly as long as its stream.
//!
//! ## Usage
//!
//! ```rust,ignore
//! use summit_core::{compose, Selector, Store};
//!
//! let store = Store::new((0u32, false));
//! let flag = compose!(
//!     Selector::map("pair", |s: &(u32, bool)| *s),
//!     Selector::map("flag", |p: &(u32, bool)| p.1),
//! );
//!
//! let mut flags = flag.apply(store.subscribe());
//! store.commit((1, false))?; // unrelated change, `flags` stays quiet
//! ```

mod selector;
mod store;
mod stream;

pub use selector::Selector;
pub use store::Store;
pub use stream::{DistinctUntilChanged, EqFn, SelectExt, StateStream};
