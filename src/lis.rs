// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Longest strictly increasing subsequence in O(n log n) comparisons.
//!
//! Patience sorting, except that each pile keeps the whole run ending in it
//! instead of a back-pointer. `runs[k]` is an increasing run of length `k + 1`,
//! and the runs are ordered by their last element. For every new element a
//! binary search picks the run it extends; that slot is replaced by the
//! shorter run plus the element. The last run at the end is the answer.
//!
//! ```text
//! sequence = [0, 8, 4, 12, 2, 10, 6, 14, 1, 9, 5, 13, 3, 11, 7]
//!
//! runs at the end:
//!   [0]
//!   [0, 1]
//!   [0, 1, 3]
//!   [0, 1, 3, 7]
//!   [0, 2, 6, 9, 11]   <- answer
//! ```
//!
//! # Determinism
//!
//! The binary search stops on an exact match and otherwise settles on the first
//! run whose tail is larger. Among several longest subsequences this picks the
//! one built from the smallest tails, so `[2, 6, 0, 8, 1, 3, 1]` yields
//! `[0, 1, 3]` rather than `[2, 6, 8]`. Same input, same output, always.

use std::fmt::Debug;

use crate::verify::contracts::check_strictly_increasing;

/// Find the longest strictly increasing subsequence of `sequence`.
///
/// Sequences of length 0 or 1 are returned unchanged.
///
/// ```
/// use charalign::longest_increasing_subsequence;
///
/// assert_eq!(longest_increasing_subsequence(&[2, 6, 0, 8, 1, 3, 1]), vec![0, 1, 3]);
/// assert_eq!(longest_increasing_subsequence::<usize>(&[]), Vec::<usize>::new());
/// ```
pub fn longest_increasing_subsequence<T: Copy + Ord + Debug>(sequence: &[T]) -> Vec<T> {
    let Some((&first, rest)) = sequence.split_first() else {
        return Vec::new();
    };
    if rest.is_empty() {
        return vec![first];
    }

    let mut runs: Vec<Vec<T>> = vec![vec![first]];

    for &element in rest {
        let index = find_run(&runs, element);
        let longest = runs.len() - 1;

        if index == longest && element > tail(&runs[longest]) {
            // Larger than every tail: a new, longer run.
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

    let lis = runs.pop().unwrap_or_default();
    check_strictly_increasing(&lis);
    lis
}

/// Length of the longest strictly increasing subsequence, without building it.
pub fn lis_length<T: Copy + Ord>(sequence: &[T]) -> usize {
    let mut tails: Vec<T> = Vec::with_capacity(sequence.len());
    for &element in sequence {
        let pos = tails.partition_point(|&t| t < element);
        if pos == tails.len() {
            tails.push(element);
        } else {
            tails[pos] = element;
        }
    }
    tails.len()
}

/// Index of the run `element` should extend.
///
/// Stops at an exact tail match; otherwise returns the first run whose tail is
/// larger than `element`, or the last run if none is.
fn find_run<T: Copy + Ord>(runs: &[Vec<T>], element: T) -> usize {
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

#[inline]
fn tail<T: Copy>(run: &[T]) -> T {
    run[run.len() - 1]
}
