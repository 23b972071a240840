//! In-place zero compaction for sparse vectors
//!
//! A sparse vector's missing ids are implicitly zero, so stored entries
//! whose value is exactly zero carry no information and can be dropped
//! before handing results back to a caller.

use spvec_core::{SparseDoubleVector, SparseVector, VectorElement};

/// Remove all entries whose value is the exact zero of its type
///
/// Surviving entries keep their relative order and their id/value pairing.
/// NaN values are kept in place. The vector is mutated in place; no new
/// allocation is made.
///
/// # Panics
///
/// Panics if the ids and values sequences have different lengths.
pub fn remove_sparse_vector_zeros<V: VectorElement>(vector: &mut SparseVector<V>) {
    assert_eq!(
        vector.ids.len(),
        vector.values.len(),
        "sparse vector ids and values must have the same length"
    );

    // Single forward pass; survivors are written back contiguously.
    let mut keep = 0;
    for read in 0..vector.values.len() {
        if vector.values[read].is_zero() {
            continue;
        }
        vector.ids[keep] = vector.ids[read];
        vector.values[keep] = vector.values[read];
        keep += 1;
    }
    vector.ids.truncate(keep);
    vector.values.truncate(keep);
}

/// Remove exact-zero entries from a double-valued sparse vector
///
/// Convenience wrapper for the most common interchange case.
pub fn remove_sparse_double_vector_zeros(vector: &mut SparseDoubleVector) {
    remove_sparse_vector_zeros(vector);
}
