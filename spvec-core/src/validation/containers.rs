//! Container-level validation
//!
//! Combines length and ordering checks for the interchange containers.

use crate::containers::{SparseDoubleMatrix, SparseVector, SparseVectorFilter};
use crate::error::{Result, SpvecError};
use crate::traits::VectorElement;
use crate::validation::ordering::{validate_filtered_ids, validate_ids};

/// Validate a sparse vector
///
/// Checks that the parallel sequences have the same length and that ids are
/// non-negative and strictly increasing.
pub fn validate_sparse_vector<V: VectorElement>(vector: &SparseVector<V>) -> Result<()> {
    if vector.ids.len() != vector.values.len() {
        return Err(SpvecError::MismatchedLengths);
    }
    validate_ids(&vector.ids)
}

/// Validate a filter specification
///
/// The allow-list is only constrained when id filtering is requested.
pub fn validate_filter(filter: &SparseVectorFilter) -> Result<()> {
    if filter.filter_by_ids {
        validate_filtered_ids(&filter.filtered_ids)?;
    }
    Ok(())
}

/// Validate a sparse matrix
///
/// Checks that the three parallel sequences have the same length, that ids
/// are non-negative, and that entries are sorted by `(row_id, column_id)`
/// with no duplicate coordinate.
pub fn validate_sparse_matrix(matrix: &SparseDoubleMatrix) -> Result<()> {
    let nnz = matrix.row_ids.len();
    if matrix.column_ids.len() != nnz || matrix.coefficients.len() != nnz {
        return Err(SpvecError::MismatchedLengths);
    }

    for i in 0..nnz {
        if matrix.row_ids[i] < 0 || matrix.column_ids[i] < 0 {
            return Err(SpvecError::NegativeId);
        }
        if i > 0 {
            let previous = (matrix.row_ids[i - 1], matrix.column_ids[i - 1]);
            let current = (matrix.row_ids[i], matrix.column_ids[i]);
            if previous >= current {
                return Err(SpvecError::UnorderedMatrixEntries);
            }
        }
    }
    Ok(())
}
