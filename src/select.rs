// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Picking the best candidate.
//!
//! Each candidate is paired with its longest increasing subsequence. Only pairs
//! whose subsequence reaches the maximum length across all candidates survive,
//! and among those the one with the smallest subsequence sum wins: matching the
//! earliest accurate positions reads as "fewest characters skipped forward" when
//! highlighted. Ties go to the candidate generated first.
//!
//! ```text
//! accurate "abab", compared "baba"
//!
//!  Sequences    Subsequences
//!  1 0 1 0        0 1
//! [1 0 1 2]      [0 1 2]   <- length 3, sum 3
//!  1 2 3 2        1 2 3    <- length 3, sum 6
//!  ...
//! ```

use crate::lis::longest_increasing_subsequence;
use crate::types::{matched_indices, Pair, Slot};
use crate::verify::contracts::check_is_subsequence;

/// Accumulates pairs while the generator runs, keeping only the longest.
///
/// Pairs shorter than the current maximum are dropped on arrival; when a longer
/// one shows up everything kept so far is discarded.
#[derive(Debug, Default)]
pub struct PairSelector {
    pairs: Vec<Pair>,
    max_len: usize,
}

impl PairSelector {
    pub fn new() -> Self {
        Self::default()
    }

    /// Compute the LIS of `candidate` and keep the pair if it is long enough.
    pub fn offer(&mut self, candidate: &[Slot]) {
        let matched = matched_indices(candidate);
        let subsequence = longest_increasing_subsequence(&matched);
        check_is_subsequence(&subsequence, &matched);
        let len = subsequence.len();

        if len > self.max_len {
            self.pairs.clear();
            self.max_len = len;
        }
        if len == self.max_len {
            self.pairs.push(Pair::new(candidate.to_vec(), subsequence));
        }
    }

    /// Length shared by every kept subsequence.
    pub fn max_len(&self) -> usize {
        self.max_len
    }

    /// Kept pairs, in the order they were offered.
    pub fn into_pairs(self) -> Vec<Pair> {
        self.pairs
    }
}

/// Pair every candidate with its LIS and keep the ones of maximal length.
///
/// ```
/// use charalign::{make_pairs, Slot::*};
///
/// let candidates = vec![
///     vec![Unmatched, Matched(1), Matched(2), Matched(4), Matched(1)],
///     vec![Unmatched, Matched(1), Matched(2), Matched(4), Matched(3)],
///     vec![Unmatched, Matched(3), Matched(2), Matched(4), Matched(3)],
/// ];
/// let pairs = make_pairs(&candidates);
/// assert_eq!(pairs.len(), 2);
/// assert_eq!(pairs[0].subsequence, vec![1, 2, 4]);
/// assert_eq!(pairs[1].subsequence, vec![1, 2, 3]);
/// ```
pub fn make_pairs<S: AsRef<[Slot]>>(candidates: &[S]) -> Vec<Pair> {
    let mut selector = PairSelector::new();
    for candidate in candidates {
        selector.offer(candidate.as_ref());
    }
    selector.into_pairs()
}

/// Pick the pair with the smallest subsequence sum; the first one on ties.
///
/// All pairs are expected to have subsequences of the same length, which is
/// what [`make_pairs`] produces. An empty input yields an empty pair.
pub fn pick_best_pair(pairs: &[Pair]) -> Pair {
    let mut best: Option<(&Pair, usize)> = None;
    for pair in pairs {
        let sum = pair.subsequence_sum();
        match best {
            Some((_, best_sum)) if sum >= best_sum => {}
            _ => best = Some((pair, sum)),
        }
    }
    best.map(|(pair, _)| pair.clone()).unwrap_or_default()
}
