//! Ordering and identity primitives for flag declarations.
//!
//! This crate provides the foundational types a flag registry builds on:
//! - [`FlagKey`]: Namespaced canonical identifier (`PREFIX_ID`)
//! - [`FlagView`]: Read-only capability trait for flag-like entities
//! - [`Comparator`]: Configured (field, direction) ordering strategy
//! - [`catalog`]: Pre-built named strategies plus the declaration-order
//!   sentinel
//! - [`sanitize`]: Identifier segment normalization
//!
//! Everything here is pure in-memory computation over small strings and
//! booleans. All types are immutable after their single configuration
//! step, so values may be shared freely across threads.

pub mod catalog;
mod flag;
mod key;
mod order;
mod sanitize;

pub use flag::FlagView;
pub use key::FlagKey;
pub use order::{Comparator, Direction, TextField, ToggleField};
pub use sanitize::sanitize;
