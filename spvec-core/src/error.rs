//! Error types for sparse container validation

/// Errors reported when a sparse container fails validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpvecError {
    /// Parallel id/value sequences have different lengths
    MismatchedLengths,
    /// An id is negative
    NegativeId,
    /// Vector ids are not strictly increasing
    UnorderedIds,
    /// Filter allow-list ids are not strictly increasing
    UnorderedFilterIds,
    /// Matrix entries are not in row-major coordinate order
    UnorderedMatrixEntries,
}

impl core::fmt::Display for SpvecError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let msg = match self {
            SpvecError::MismatchedLengths => "Parallel sequences have mismatched lengths",
            SpvecError::NegativeId => "Ids must be non-negative",
            SpvecError::UnorderedIds => "Ids must be strictly increasing",
            SpvecError::UnorderedFilterIds => "Filter ids must be strictly increasing",
            SpvecError::UnorderedMatrixEntries => "Matrix entries must be in row-major order",
        };
        write!(f, "{msg}")
    }
}

/// Result type for sparse container validation
pub type Result<T> = core::result::Result<T, SpvecError>;
