// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Kani model checking proofs for the charalign LIS solver.
//!
//! This standalone crate extracts the longest increasing subsequence solver
//! and proves its properties for every input up to a small bound.
//!
//! Run with: `cargo kani`
//!
//! ## Verified Properties
//!
//! 1. **No panics**: the solver never panics, including on empty input
//! 2. **Increasing**: the output is strictly increasing
//! 3. **Subsequence**: the output occurs in the input, in order
//! 4. **Optimal**: the output is as long as the quadratic DP says it can be

/// Largest input the proofs cover.
pub const MAX_LEN: usize = 5;

// ============================================================================
// LIS SOLVER (copied from src/lis.rs, contracts stripped)
// ============================================================================

/// Longest strictly increasing subsequence, keeping one run per length.
pub fn longest_increasing_subsequence(sequence: &[u8]) -> Vec<u8> {
    let Some((&first, rest)) = sequence.split_first() else {
        return Vec::new();
    };
    if rest.is_empty() {
        return vec![first];
    }

    let mut runs: Vec<Vec<u8>> = vec![vec![first]];

    for &element in rest {
        let index = find_run(&runs, element);
        let longest = runs.len() - 1;

        if index == longest && element > tail(&runs[longest]) {
            let mut extended = runs[longest].clone();
            extended.push(element);
            runs.push(extended);
        } else if index == 0 {
            runs[0] = vec![element];
        } else {
            let mut replaced = Vec::with_capacity(index + 1);
            replaced.extend_from_slice(&runs[index - 1]);
            replaced.push(element);
            runs[index] = replaced;
        }
    }

    runs.pop().unwrap_or_default()
}

fn find_run(runs: &[Vec<u8>], element: u8) -> usize {
    let mut lower = 0;
    let mut upper = runs.len() - 1;

    while lower < upper {
        let middle = lower + (upper - lower) / 2;
        let middle_tail = tail(&runs[middle]);
        if middle_tail == element {
            return middle;
        }
        if middle_tail > element {
            upper = middle;
        } else {
            lower = middle + 1;
        }
    }
    lower
}

fn tail(run: &[u8]) -> u8 {
    run[run.len() - 1]
}

/// Quadratic DP reference: length of the longest strictly increasing subsequence.
pub fn lis_length_quadratic(sequence: &[u8]) -> usize {
    let mut best = [0usize; MAX_LEN];
    let mut overall = 0;
    for i in 0..sequence.len() {
        best[i] = 1;
        for j in 0..i {
            if sequence[j] < sequence[i] && best[j] + 1 > best[i] {
                best[i] = best[j] + 1;
            }
        }
        if best[i] > overall {
            overall = best[i];
        }
    }
    overall
}

/// Does `sub` occur in `sequence` in order?
pub fn is_subsequence(sub: &[u8], sequence: &[u8]) -> bool {
    let mut remaining = sequence.iter();
    sub.iter().all(|wanted| remaining.any(|x| x == wanted))
}

// ============================================================================
// KANI MODEL CHECKING PROOFS
// ============================================================================

#[cfg(kani)]
mod kani_proofs {
    use super::*;

    fn any_sequence() -> ([u8; MAX_LEN], usize) {
        let len: usize = kani::any_where(|&n| n <= MAX_LEN);
        let mut values = [0u8; MAX_LEN];
        for i in 0..len {
            values[i] = kani::any();
        }
        (values, len)
    }

    /// The solver never panics, on any input up to MAX_LEN.
    #[kani::proof]
    #[kani::unwind(7)]
    fn verify_lis_no_panic() {
        let (values, len) = any_sequence();
        let lis = longest_increasing_subsequence(&values[..len]);
        kani::assert(lis.len() <= len, "LIS cannot be longer than its input");
    }

    /// The output is strictly increasing.
    #[kani::proof]
    #[kani::unwind(7)]
    fn verify_lis_strictly_increasing() {
        let (values, len) = any_sequence();
        let lis = longest_increasing_subsequence(&values[..len]);
        for i in 1..lis.len() {
            kani::assert(lis[i - 1] < lis[i], "LIS must be strictly increasing");
        }
    }

    /// The output is drawn from the input, in order.
    #[kani::proof]
    #[kani::unwind(7)]
    fn verify_lis_is_subsequence() {
        let (values, len) = any_sequence();
        let sequence = &values[..len];
        let lis = longest_increasing_subsequence(sequence);
        kani::assert(is_subsequence(&lis, sequence), "LIS must be a subsequence");
    }

    /// The output is as long as the quadratic DP says is possible.
    #[kani::proof]
    #[kani::unwind(7)]
    fn verify_lis_optimal() {
        let (values, len) = any_sequence();
        let sequence = &values[..len];
        let lis = longest_increasing_subsequence(sequence);
        kani::assert(
            lis.len() == lis_length_quadratic(sequence),
            "LIS length must match the quadratic DP",
        );
    }

    /// A non-empty input always yields a non-empty LIS.
    #[kani::proof]
    #[kani::unwind(7)]
    fn verify_lis_non_empty() {
        let (values, len) = any_sequence();
        kani::assume(len > 0);
        let lis = longest_increasing_subsequence(&values[..len]);
        kani::assert(!lis.is_empty(), "Non-empty input must give a non-empty LIS");
    }
}
