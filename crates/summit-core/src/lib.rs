//! # Summit Core
//!
//! Runtime-agnostic building blocks for projecting an application-state
//! stream into narrow, typed, read-only views.
//!
//! - [`reactive`]: snapshot [`Store`], [`Selector`], [`compose!`] and
//!   distinct-value suppression.
//! - [`errors`]: [`StateError`] for snapshot decoding and [`StoreError`] for
//!   store writes.
//!
//! Selectors are pure: they perform no I/O, hold no per-call state, and
//! never log. Shape correctness is enforced by the type system plus a single
//! strict decode where a snapshot enters the process.

#![forbid(unsafe_code)]

pub mod errors;
pub mod reactive;

pub use errors::{decode_snapshot, StateError, StoreError};
pub use reactive::{DistinctUntilChanged, EqFn, SelectExt, Selector, StateStream, Store};
