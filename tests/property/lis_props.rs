//! Property tests for the LIS solver.

use crate::oracles::{oracle_is_subsequence, oracle_lis_length};
use charalign::{lis_length, longest_increasing_subsequence};
use proptest::prelude::*;

fn sequence_strategy() -> impl Strategy<Value = Vec<u16>> {
    prop::collection::vec(0u16..50, 0..60)
}

proptest! {
    #[test]
    fn lis_is_strictly_increasing(sequence in sequence_strategy()) {
        let lis = longest_increasing_subsequence(&sequence);
        prop_assert!(lis.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn lis_is_a_subsequence(sequence in sequence_strategy()) {
        let lis = longest_increasing_subsequence(&sequence);
        prop_assert!(oracle_is_subsequence(&lis, &sequence));
    }

    #[test]
    fn lis_length_matches_quadratic_oracle(sequence in sequence_strategy()) {
        let expected = oracle_lis_length(&sequence);
        prop_assert_eq!(longest_increasing_subsequence(&sequence).len(), expected);
        prop_assert_eq!(lis_length(&sequence), expected);
    }

    #[test]
    fn lis_is_deterministic(sequence in sequence_strategy()) {
        prop_assert_eq!(
            longest_increasing_subsequence(&sequence),
            longest_increasing_subsequence(&sequence)
        );
    }

    #[test]
    fn sorted_distinct_input_is_its_own_lis(mut sequence in sequence_strategy()) {
        sequence.sort_unstable();
        sequence.dedup();
        prop_assert_eq!(longest_increasing_subsequence(&sequence), sequence);
    }

    #[test]
    fn descending_input_has_lis_of_one(mut sequence in sequence_strategy()) {
        prop_assume!(!sequence.is_empty());
        sequence.sort_unstable_by(|a, b| b.cmp(a));
        prop_assert_eq!(longest_increasing_subsequence(&sequence).len(), 1);
    }

    #[test]
    fn appending_a_new_maximum_extends_the_lis(sequence in sequence_strategy()) {
        let before = longest_increasing_subsequence(&sequence);
        let mut extended = sequence.clone();
        extended.push(u16::MAX);
        let after = longest_increasing_subsequence(&extended);
        prop_assert_eq!(after.len(), before.len() + 1);
        prop_assert_eq!(after.last().copied(), Some(u16::MAX));
    }
}
