//! Id ordering validation
//!
//! Slice-level checks shared by the container validators. Both sparse
//! vector ids and filter allow-lists must be strictly increasing, which is
//! what makes the merge-style scan of the filtering layer linear.

use crate::error::{Result, SpvecError};

/// Check that a sequence of ids is strictly increasing
///
/// Strictly increasing implies duplicate-free. Empty and single-element
/// sequences are trivially ordered.
pub fn is_strictly_increasing(ids: &[i64]) -> bool {
    ids.windows(2).all(|pair| pair[0] < pair[1])
}

/// Validate the id sequence of a sparse vector
///
/// Ids must be non-negative and strictly increasing.
pub fn validate_ids(ids: &[i64]) -> Result<()> {
    if ids.first().is_some_and(|&id| id < 0) {
        return Err(SpvecError::NegativeId);
    }
    if !is_strictly_increasing(ids) {
        return Err(SpvecError::UnorderedIds);
    }
    Ok(())
}

/// Validate a filter allow-list
///
/// Allow-listed ids must be strictly increasing with no duplicates.
pub fn validate_filtered_ids(filtered_ids: &[i64]) -> Result<()> {
    if !is_strictly_increasing(filtered_ids) {
        return Err(SpvecError::UnorderedFilterIds);
    }
    Ok(())
}
