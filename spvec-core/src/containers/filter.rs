//! Sparse vector filter specification
//!
//! Describes which `(id, value)` pairs of a sparse vector a caller wants to
//! receive: optionally only an allow-list of ids, optionally no exact zeros.

use alloc::vec::Vec;

/// Filter specification for scanning a sparse vector
///
/// Invariant (validated, not enforced by construction): when
/// `filter_by_ids` is set, `filtered_ids` is strictly increasing with no
/// duplicates. See [`crate::validation::validate_filter`].
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SparseVectorFilter {
    /// Whether to keep only the ids listed in `filtered_ids`
    pub filter_by_ids: bool,
    /// Allow-listed ids, strictly increasing; ignored unless
    /// `filter_by_ids` is set
    pub filtered_ids: Vec<i64>,
    /// Whether to drop entries whose value is the exact zero of its type
    pub skip_zero_values: bool,
}

impl SparseVectorFilter {
    /// Create a filter that accepts every entry
    pub const fn new() -> Self {
        Self {
            filter_by_ids: false,
            filtered_ids: Vec::new(),
            skip_zero_values: false,
        }
    }

    /// Set whether exact-zero values are dropped
    pub fn with_skip_zero_values(mut self, skip_zero_values: bool) -> Self {
        self.skip_zero_values = skip_zero_values;
        self
    }

    /// Restrict the filter to an allow-list of ids
    ///
    /// The ids must be sorted in strictly increasing order.
    pub fn with_filtered_ids(mut self, filtered_ids: Vec<i64>) -> Self {
        self.filter_by_ids = true;
        self.filtered_ids = filtered_ids;
        self
    }
}
