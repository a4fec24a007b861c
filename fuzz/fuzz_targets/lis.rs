// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the LIS solver.
//!
//! Cross-checks the O(n log n) solver against its own length-only variant and
//! the quadratic DP on short inputs.

#![no_main]

use charalign::{lis_length, longest_increasing_subsequence};
use libfuzzer_sys::fuzz_target;

fn quadratic_lis_length(sequence: &[u16]) -> usize {
    let mut best = vec![1usize; sequence.len()];
    for i in 0..sequence.len() {
        for j in 0..i {
            if sequence[j] < sequence[i] {
                best[i] = best[i].max(best[j] + 1);
            }
        }
    }
    best.into_iter().max().unwrap_or(0)
}

fuzz_target!(|sequence: Vec<u16>| {
    let lis = longest_increasing_subsequence(&sequence);

    assert!(lis.windows(2).all(|w| w[0] < w[1]), "not increasing: {:?}", lis);

    let mut remaining = sequence.iter();
    assert!(
        lis.iter().all(|wanted| remaining.any(|x| x == wanted)),
        "not a subsequence: {:?} of {:?}",
        lis,
        sequence
    );

    assert_eq!(lis.len(), lis_length(&sequence));
    if sequence.len() <= 256 {
        assert_eq!(lis.len(), quadratic_lis_length(&sequence));
    }
});
