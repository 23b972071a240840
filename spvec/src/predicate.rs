//! Scanning filter predicate for sparse vectors
//!
//! The predicate answers keep-or-drop for each `(id, value)` pair of a
//! sparse vector scanned in strictly increasing id order. Because both the
//! input stream and the filter allow-list are sorted, a single forward
//! cursor over the allow-list decides every pair in O(1) amortized.

use spvec_core::{validate_filter, SparseVectorFilter, VectorElement};

/// Stateful keep-or-drop decision over one increasing-id scan
///
/// The predicate borrows the filter for its whole lifetime and never
/// mutates it; distinct predicates over the same filter can run
/// independent scans. A predicate is consumed by one scan - there is no
/// cursor reset, a second scan takes a fresh predicate.
///
/// Callers must present ids in strictly increasing order. Debug builds
/// check this and panic on violation; release builds skip the check.
#[derive(Debug)]
pub struct SparseVectorFilterPredicate<'a> {
    filter: &'a SparseVectorFilter,

    /// Index of the next candidate in `filter.filtered_ids`; only moves
    /// forward.
    next_filtered_id_index: usize,

    /// Invariant: the next input id must be >= this bound. Starts at 0
    /// since all ids are non-negative.
    #[cfg(debug_assertions)]
    next_input_id_lower_bound: i64,
}

impl<'a> SparseVectorFilterPredicate<'a> {
    /// Build a predicate for one scan under the given filter
    ///
    /// The allow-list must be sorted in strictly increasing order with no
    /// duplicates. Debug builds check this and panic on violation.
    pub fn new(filter: &'a SparseVectorFilter) -> Self {
        debug_assert!(
            validate_filter(filter).is_ok(),
            "filtered_ids must be sorted in strictly increasing order"
        );

        Self {
            filter,
            next_filtered_id_index: 0,
            #[cfg(debug_assertions)]
            next_input_id_lower_bound: 0,
        }
    }

    /// Decide whether the pair is kept, advancing internal state
    ///
    /// Zero suppression is independent of id filtering and is checked
    /// first; `false` is the zero of boolean vectors.
    pub fn accepts_and_update<V: VectorElement>(&mut self, id: i64, value: V) -> bool {
        #[cfg(debug_assertions)]
        {
            assert!(
                id >= self.next_input_id_lower_bound,
                "this predicate must be called with strictly increasing ids"
            );
            self.next_input_id_lower_bound = id + 1;
        }

        if self.filter.skip_zero_values && value.is_zero() {
            return false;
        }

        if !self.filter.filter_by_ids {
            return true;
        }

        // Skip all allow-listed ids smaller than the input id. The cursor
        // never moves backward, so each allow-listed id is examined at most
        // once across the whole scan.
        let filtered_ids = &self.filter.filtered_ids;
        while self.next_filtered_id_index < filtered_ids.len()
            && filtered_ids[self.next_filtered_id_index] < id
        {
            self.next_filtered_id_index += 1;
        }

        if self.next_filtered_id_index == filtered_ids.len() {
            // No remaining allow-listed id can ever match.
            return false;
        }

        // The loop above left the cursor on the first allow-listed id >= id.
        filtered_ids[self.next_filtered_id_index] == id
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pass_all_filter_accepts_everything() {
        let filter = SparseVectorFilter::new();
        let mut predicate = SparseVectorFilterPredicate::new(&filter);

        assert!(predicate.accepts_and_update(0, 0.0));
        assert!(predicate.accepts_and_update(3, -1.5));
        assert!(predicate.accepts_and_update(10, f64::NAN));
    }

    #[test]
    fn test_skip_zero_values_rejects_zeros() {
        let filter = SparseVectorFilter::new().with_skip_zero_values(true);
        let mut predicate = SparseVectorFilterPredicate::new(&filter);

        assert!(!predicate.accepts_and_update(0, 0.0));
        assert!(predicate.accepts_and_update(1, 2.5));
        assert!(!predicate.accepts_and_update(2, -0.0));
        assert!(predicate.accepts_and_update(3, f64::NAN));
    }

    #[test]
    fn test_skip_zero_values_rejects_false() {
        let filter = SparseVectorFilter::new().with_skip_zero_values(true);
        let mut predicate = SparseVectorFilterPredicate::new(&filter);

        assert!(!predicate.accepts_and_update(4, false));
        assert!(predicate.accepts_and_update(7, true));
    }

    #[test]
    fn test_allow_list_merge_scan() {
        let filter = SparseVectorFilter::new().with_filtered_ids(vec![2, 5, 9]);
        let mut predicate = SparseVectorFilterPredicate::new(&filter);

        let input_ids = [1, 2, 3, 5, 6, 9, 10];
        let expected = [false, true, false, true, false, true, false];
        for (id, want) in input_ids.iter().zip(expected) {
            assert_eq!(predicate.accepts_and_update(*id, 1.0), want, "id {id}");
        }
    }

    #[test]
    fn test_allow_list_exhaustion_rejects_rest() {
        // Every input id is below the single allow-listed id, then past it.
        let filter = SparseVectorFilter::new().with_filtered_ids(vec![4]);
        let mut predicate = SparseVectorFilterPredicate::new(&filter);

        assert!(!predicate.accepts_and_update(1, 1.0));
        assert!(!predicate.accepts_and_update(2, 1.0));
        assert!(!predicate.accepts_and_update(3, 1.0));
        assert!(predicate.accepts_and_update(4, 1.0));
        assert!(!predicate.accepts_and_update(5, 1.0));
        assert!(!predicate.accepts_and_update(100, 1.0));
    }

    #[test]
    fn test_input_below_entire_allow_list() {
        let filter = SparseVectorFilter::new().with_filtered_ids(vec![4]);
        let mut predicate = SparseVectorFilterPredicate::new(&filter);

        for id in [1, 2, 3] {
            assert!(!predicate.accepts_and_update(id, 1.0));
        }
    }

    #[test]
    fn test_zero_suppression_combines_with_allow_list() {
        let filter = SparseVectorFilter::new()
            .with_filtered_ids(vec![2, 5])
            .with_skip_zero_values(true);
        let mut predicate = SparseVectorFilterPredicate::new(&filter);

        // Allow-listed but zero: rejected by the zero check first.
        assert!(!predicate.accepts_and_update(2, 0.0));
        assert!(predicate.accepts_and_update(5, 3.0));
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "strictly increasing")]
    fn test_decreasing_ids_panic_in_debug() {
        let filter = SparseVectorFilter::new();
        let mut predicate = SparseVectorFilterPredicate::new(&filter);

        predicate.accepts_and_update(5, 1.0);
        predicate.accepts_and_update(4, 1.0);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "strictly increasing")]
    fn test_repeated_id_panics_in_debug() {
        let filter = SparseVectorFilter::new();
        let mut predicate = SparseVectorFilterPredicate::new(&filter);

        predicate.accepts_and_update(5, 1.0);
        predicate.accepts_and_update(5, 1.0);
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "strictly increasing")]
    fn test_malformed_allow_list_panics_in_debug() {
        let filter = SparseVectorFilter::new().with_filtered_ids(vec![5, 2]);
        let _ = SparseVectorFilterPredicate::new(&filter);
    }
}
