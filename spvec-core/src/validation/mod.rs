//! Well-formedness validation for sparse containers
//!
//! This module contains pure validation functions with no I/O dependencies.
//! The operational layer uses these inside fail-fast assertions; callers
//! receiving containers from outside can use them directly.

#[cfg(feature = "alloc")]
pub mod containers;
pub mod ordering;

#[cfg(feature = "alloc")]
pub use containers::{validate_filter, validate_sparse_matrix, validate_sparse_vector};
pub use ordering::{is_strictly_increasing, validate_filtered_ids, validate_ids};
