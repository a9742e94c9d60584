//! Identifier gap allocation.
//!
//! Chain-assigned identifier spaces are sparse: destroying a collection or
//! burning an item leaves a hole in an otherwise dense run of ids. When a
//! caller needs a fresh identifier it must pick one that is not currently
//! assigned, and [`first_gap`] makes that choice deterministic: always the
//! smallest unassigned non-negative integer, so holes are refilled before
//! the space grows past its current maximum.
//!
//! The input is expected to come from
//! [`enumerate`](crate::keyspace::enumerate), which guarantees a sorted,
//! duplicate-free sequence. Because the scan's correctness depends
//! entirely on that shape, a violation fails with
//! [`UniquesError::Precondition`] instead of producing a silently wrong
//! identifier.

use crate::error::{Result, UniquesError};

/// Returns the smallest non-negative integer absent from `ids`.
///
/// `ids` must be sorted ascending with no duplicates. The scan compares
/// each element to its zero-based position: the first position where the
/// two differ is a gap, and the missing identifier is that position. When
/// every element matches its position the sequence is the dense run
/// `0, 1, …, n-1` and the result is `n` — including `n = 0` for an empty
/// sequence.
///
/// | Input | Result |
/// |-------|--------|
/// | `[]` | `0` |
/// | `[0, 1, 2]` | `3` |
/// | `[1, 2, 3]` | `0` |
/// | `[0, 2, 3]` | `1` |
///
/// # Errors
///
/// Returns [`UniquesError::Precondition`] when `ids` is not strictly
/// increasing.
///
/// # Examples
///
/// ```
/// use uniques_client::alloc::first_gap;
///
/// assert_eq!(first_gap(&[0, 1, 3, 4]).unwrap(), 2);
/// assert_eq!(first_gap(&[]).unwrap(), 0);
/// ```
pub fn first_gap(ids: &[u32]) -> Result<u32> {
    if let Some(position) = ids.windows(2).position(|pair| pair[0] >= pair[1]) {
        return Err(UniquesError::precondition(format!(
            "sequence not strictly increasing at position {position}: \
             {} followed by {}",
            ids[position],
            ids[position + 1],
        )));
    }

    for (index, &id) in ids.iter().enumerate() {
        // Positions are bounded by the number of distinct u32 values, so
        // the cast cannot truncate.
        let index = index as u32;
        if id != index {
            return Ok(index);
        }
    }

    Ok(ids.len() as u32)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_empty_sequence_allocates_zero() {
        assert_eq!(first_gap(&[]).unwrap(), 0);
    }

    #[test]
    fn test_dense_prefix_appends_past_maximum() {
        assert_eq!(first_gap(&[0, 1, 2]).unwrap(), 3);
        assert_eq!(first_gap(&[0, 1, 2, 3]).unwrap(), 4);
        assert_eq!(first_gap(&[0]).unwrap(), 1);
    }

    #[test]
    fn test_gap_at_start() {
        assert_eq!(first_gap(&[1, 2, 3]).unwrap(), 0);
    }

    #[test]
    fn test_gap_in_middle() {
        assert_eq!(first_gap(&[0, 2, 3]).unwrap(), 1);
        assert_eq!(first_gap(&[0, 1, 3, 4]).unwrap(), 2);
    }

    #[test]
    fn test_unsorted_input_is_rejected() {
        let err = first_gap(&[2, 1, 3]).unwrap_err();
        assert!(matches!(err, UniquesError::Precondition { .. }));
    }

    #[test]
    fn test_duplicate_input_is_rejected() {
        let err = first_gap(&[0, 1, 1, 2]).unwrap_err();
        assert!(matches!(err, UniquesError::Precondition { .. }));
    }

    /// Strategy producing sorted, duplicate-free id sequences.
    fn sorted_unique_ids() -> impl Strategy<Value = Vec<u32>> {
        proptest::collection::btree_set(0u32..10_000, 0..64)
            .prop_map(|set| set.into_iter().collect())
    }

    proptest! {
        /// The allocated id is never present in the input.
        #[test]
        fn allocated_id_is_absent(ids in sorted_unique_ids()) {
            let gap = first_gap(&ids).unwrap();
            prop_assert!(!ids.contains(&gap));
        }

        /// No smaller non-negative integer is absent from the input:
        /// allocation is minimal.
        #[test]
        fn allocated_id_is_minimal(ids in sorted_unique_ids()) {
            let gap = first_gap(&ids).unwrap();
            for candidate in 0..gap {
                prop_assert!(ids.contains(&candidate));
            }
        }

        /// Allocation is deterministic.
        #[test]
        fn allocation_is_deterministic(ids in sorted_unique_ids()) {
            prop_assert_eq!(first_gap(&ids).unwrap(), first_gap(&ids).unwrap());
        }
    }
}
