//! Whole-vector filter application
//!
//! The scan loop a result-extraction layer runs: one predicate, one pass
//! over the vector's entries in id order, survivors collected into a fresh
//! vector.

use spvec_core::{validate_sparse_vector, SparseVector, SparseVectorFilter, VectorElement};

use crate::predicate::SparseVectorFilterPredicate;

/// Copy the entries of a sparse vector that pass the filter
///
/// The input is read once in id order and left untouched. Debug builds
/// check that the input is a well-formed sparse vector.
pub fn filter_sparse_vector<V: VectorElement>(
    vector: &SparseVector<V>,
    filter: &SparseVectorFilter,
) -> SparseVector<V> {
    debug_assert!(
        validate_sparse_vector(vector).is_ok(),
        "input must be a well-formed sparse vector"
    );

    let mut predicate = SparseVectorFilterPredicate::new(filter);
    let mut filtered = SparseVector::with_capacity(vector.len());
    for (id, value) in vector.entries() {
        if predicate.accepts_and_update(id, value) {
            filtered.push(id, value);
        }
    }
    filtered
}
