//! Swap and insert moves.

/// Returns a copy of `seq` with the elements at positions `i` and `j`
/// exchanged. Order elsewhere is unchanged.
///
/// # Panics
///
/// Panics if `i` or `j` is out of bounds.
pub fn swap(seq: &[usize], i: usize, j: usize) -> Vec<usize> {
    let mut new_seq = seq.to_vec();
    new_seq.swap(i, j);
    new_seq
}

/// Returns a copy of `seq` with the element at position `i` removed and
/// re-inserted at position `j`.
///
/// The removal happens first, so `j` addresses a position in the
/// shortened sequence: every element between the two positions shifts
/// by one.
///
/// # Panics
///
/// Panics if `i` is out of bounds or `j` exceeds the shortened length.
pub fn insert(seq: &[usize], i: usize, j: usize) -> Vec<usize> {
    let mut new_seq = seq.to_vec();
    let job = new_seq.remove(i);
    new_seq.insert(j, job);
    new_seq
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_swap_exchanges_two_positions() {
        let seq = vec![0, 1, 2, 3, 4];
        assert_eq!(swap(&seq, 1, 3), vec![0, 3, 2, 1, 4]);
        // Input untouched
        assert_eq!(seq, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_insert_forward_shifts_left() {
        let seq = vec![0, 1, 2, 3, 4];
        assert_eq!(insert(&seq, 0, 3), vec![1, 2, 3, 0, 4]);
        assert_eq!(seq, vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_insert_backward_shifts_right() {
        let seq = vec![0, 1, 2, 3, 4];
        assert_eq!(insert(&seq, 4, 1), vec![0, 4, 1, 2, 3]);
    }

    #[test]
    fn test_insert_identity_position() {
        let seq = vec![0, 1, 2];
        assert_eq!(insert(&seq, 1, 1), vec![0, 1, 2]);
    }

    fn seq_and_indices() -> impl Strategy<Value = (Vec<usize>, usize, usize)> {
        proptest::collection::vec(0usize..1000, 2..24).prop_flat_map(|seq| {
            let n = seq.len();
            (Just(seq), 0..n, 0..n)
        })
    }

    fn sorted(mut seq: Vec<usize>) -> Vec<usize> {
        seq.sort_unstable();
        seq
    }

    proptest! {
        #[test]
        fn prop_swap_preserves_multiset((seq, i, j) in seq_and_indices()) {
            let out = swap(&seq, i, j);
            prop_assert_eq!(out.len(), seq.len());
            prop_assert_eq!(sorted(out), sorted(seq));
        }

        #[test]
        fn prop_insert_preserves_multiset((seq, i, j) in seq_and_indices()) {
            let out = insert(&seq, i, j);
            prop_assert_eq!(out.len(), seq.len());
            prop_assert_eq!(sorted(out), sorted(seq));
        }

        #[test]
        fn prop_swap_is_involutive((seq, i, j) in seq_and_indices()) {
            let twice = swap(&swap(&seq, i, j), i, j);
            prop_assert_eq!(twice, seq);
        }

        #[test]
        fn prop_swap_leaves_other_positions_unchanged((seq, i, j) in seq_and_indices()) {
            let out = swap(&seq, i, j);
            for k in 0..seq.len() {
                if k != i && k != j {
                    prop_assert_eq!(out[k], seq[k]);
                }
            }
        }
    }
}
