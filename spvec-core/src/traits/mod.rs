//! Element type abstractions for sparse containers
//!
//! These are pure interfaces with no concrete container types.

pub mod element;

pub use element::{ValueKind, VectorElement};
