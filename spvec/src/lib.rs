//! SPVEC - Sparse Vector Filtering and Compaction
//!
//! This library filters and compacts the sparse vector containers exchanged
//! between an optimization solver and its caller.
//!
//! ## Architecture
//!
//! SPVEC follows a clean specification/implementation separation:
//!
//! - **spvec-core**: Container definitions, element traits, and validation (no operations)
//! - **spvec**: The operations - zero compaction, filter predicates, event extraction
//!
//! ## Quick Start
//!
//! ```rust
//! use spvec::{remove_sparse_vector_zeros, filter_sparse_vector};
//! use spvec::{SparseDoubleVector, SparseVectorFilter};
//!
//! // Drop exact zeros from a solver result in place
//! let mut solution = SparseDoubleVector {
//!     ids: vec![0, 3, 7],
//!     values: vec![1.5, 0.0, -2.0],
//! };
//! remove_sparse_vector_zeros(&mut solution);
//! assert_eq!(solution.ids, vec![0, 7]);
//!
//! // Keep only the ids the caller asked for
//! let filter = SparseVectorFilter::new().with_filtered_ids(vec![7]);
//! let kept = filter_sparse_vector(&solution, &filter);
//! assert_eq!(kept.values, vec![-2.0]);
//! ```
//!
//! ## Features
//!
//! - **In-place compaction**: Removes exact-zero entries without reallocating
//! - **Merge-style filtering**: One predicate call per entry, O(n + m) over a scan
//! - **Debug contract checks**: Scan-order violations fail fast in debug builds only
//! - **Type safety**: One generic implementation over the closed double/bool value set

// Re-export core containers, traits, and validation
pub use spvec_core::{
    // Containers
    CallbackEvent, CallbackRegistration, SparseBoolVector, SparseDoubleMatrix,
    SparseDoubleVector, SparseVector, SparseVectorFilter,
    // Element traits
    ValueKind, VectorElement,
    // Error handling
    Result, SpvecError,
    // Validation utilities
    validate_filter, validate_sparse_matrix, validate_sparse_vector,
};

// Operation modules
pub mod apply;
pub mod compact;
pub mod events;
pub mod predicate;

// Public exports
pub use apply::filter_sparse_vector;
pub use compact::{remove_sparse_double_vector_zeros, remove_sparse_vector_zeros};
pub use events::event_set;
pub use predicate::SparseVectorFilterPredicate;
