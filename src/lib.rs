//! A persistent, radix-balanced indexed sequence.
//!
//! [`RadixVector`] is an immutable ordered collection supporting logarithmic
//! indexed read, update, append-at-end, remove-at-end, and right-truncation,
//! with structural sharing between successive versions — the same shape of
//! data structure as Clojure's `PersistentVector`, implemented here over a
//! compile-time branching factor `B` (the const generic parameter on
//! [`RadixVector<T, B>`]).
//!
//! See [`config`] for the supported branch-width presets and [`error`] for
//! the failure taxonomy of the five persistent operations.

pub mod config;
pub mod error;
mod node;
mod transient;
mod vector;

pub use error::VectorError;
pub use transient::TransientVector;
pub use vector::{Iter, RadixVector};

/// [`RadixVector`] at the classical branching factor (`B = 32`, `b = 5`).
pub type Vector32<T> = RadixVector<T, { config::CLASSICAL_BRANCHING }>;

/// [`RadixVector`] at the small branching factor (`B = 4`, `b = 2`), handy
/// for exercising shape transitions (root growth/collapse) with few
/// elements.
pub type VectorSmall<T> = RadixVector<T, { config::SMALL_BRANCHING }>;
