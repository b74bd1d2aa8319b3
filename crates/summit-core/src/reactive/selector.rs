//! Selector<S, T> - typed, composable projections over snapshot streams
//!
//! A selector turns a [`StateStream<S>`] into a [`StateStream<T>`]. Selectors
//! hold no per-subscription state, so one value can be built once (usually a
//! process-lifetime static) and applied to any number of streams.
//!
//! # Composition order
//!
//! Composition reads left to right: the first selector receives the raw
//! input, the last one produces the output.
//!
//! ```rust,ignore
//! use summit_core::{compose, Selector};
//!
//! let auth = Selector::map("auth", |s: &AppState| s.auth.clone());
//! let loading = Selector::map("loading", |a: &AuthState| a.loading);
//!
//! // AppState -> AuthState -> bool
//! let is_loading = compose!(auth, loading);
//! let stream = is_loading.apply(store.subscribe());
//! ```
//!
//! Mismatched chains (`Selector<A, B>` followed by `Selector<C, D>` with
//! `B != C`) do not type-check, so no runtime validation exists.

use std::fmt;
use std::sync::Arc;

use futures::stream::StreamExt;

use super::stream::{DistinctUntilChanged, EqFn, StateStream};

type Projection<S, T> = dyn Fn(StateStream<S>) -> StateStream<T> + Send + Sync;

/// A pure, reusable projection from a stream of `S` to a stream of `T`.
pub struct Selector<S, T> {
    name: Arc<str>,
    project: Arc<Projection<S, T>>,
}

impl<S, T> Clone for Selector<S, T> {
    fn clone(&self) -> Self {
        Self {
            name: self.name.clone(),
            project: self.project.clone(),
        }
    }
}

impl<S, T> fmt::Debug for Selector<S, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Selector")
            .field("name", &self.name)
            .field("input", &std::any::type_name::<S>())
            .field("output", &std::any::type_name::<T>())
            .finish()
    }
}

impl<S, T> Selector<S, T>
where
    S: Send + 'static,
    T: Send + 'static,
{
    /// Build a selector from a raw stream transformation.
    ///
    /// `f` is invoked once per [`apply`](Self::apply) call. It must only wire
    /// adapters together; all per-item work belongs inside the returned stream
    /// so evaluation stays deferred until the stream is polled.
    pub fn from_fn<F>(name: impl Into<Arc<str>>, f: F) -> Self
    where
        F: Fn(StateStream<S>) -> StateStream<T> + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            project: Arc::new(f),
        }
    }

    /// Diagnostic label of this selector.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Apply this selector to a snapshot stream.
    ///
    /// Nothing is evaluated here; the returned stream is lazy. Each call
    /// produces an independent stream with its own distinct-value state.
    pub fn apply(&self, input: StateStream<S>) -> StateStream<T> {
        (self.project)(input)
    }

    /// Chain `next` after this selector.
    ///
    /// `a.then(b)` feeds the output of `a` into `b`. The chain is associative:
    /// `a.then(b).then(c)` and `a.then(b.then(c))` produce identical streams.
    pub fn then<U>(self, next: Selector<T, U>) -> Selector<S, U>
    where
        U: Send + 'static,
    {
        let name: Arc<str> = format!("{} > {}", self.name, next.name).into();
        let first = self.project;
        let second = next.project;
        Selector {
            name,
            project: Arc::new(move |input: StateStream<S>| second(first(input))),
        }
    }
}

impl<S, T> Selector<S, T>
where
    S: Send + 'static,
    T: Clone + PartialEq + Send + 'static,
{
    /// Leaf projection with structural distinct-value suppression.
    ///
    /// Equivalent to `map(f)` followed by `distinct_until_changed()`.
    pub fn map<F>(name: impl Into<Arc<str>>, f: F) -> Self
    where
        F: Fn(&S) -> T + Send + Sync + 'static,
    {
        fn structural<T: PartialEq>(a: &T, b: &T) -> bool {
            a == b
        }
        Self::map_with(name, f, structural::<T>)
    }
}

impl<S, T> Selector<S, T>
where
    S: Send + 'static,
    T: Clone + Send + 'static,
{
    /// Leaf projection with a caller-supplied equality.
    ///
    /// Use this for reference equality, e.g. `|a, b| Arc::ptr_eq(a, b)`.
    pub fn map_with<F>(name: impl Into<Arc<str>>, f: F, eq: EqFn<T>) -> Self
    where
        F: Fn(&S) -> T + Send + Sync + 'static,
    {
        let f = Arc::new(f);
        Self::from_fn(name, move |input: StateStream<S>| {
            let f = f.clone();
            DistinctUntilChanged::with_eq(input.map(move |s| f(&s)).boxed(), eq).boxed()
        })
    }
}

impl<S: Send + 'static> Selector<S, S> {
    /// The selector that forwards its input unchanged.
    pub fn identity() -> Self {
        Self::from_fn("identity", |input| input)
    }
}

/// Compose selectors left to right.
///
/// `compose!(a, b, c)` is `a.then(b).then(c)`: `a` sees the raw input and
/// `c` produces the output. A single argument is returned as-is.
#[macro_export]
macro_rules! compose {
    ($only:expr $(,)?) => {
        $only
    };
    ($first:expr, $($rest:expr),+ $(,)?) => {
        $first$(.then($rest))+
    };
}
