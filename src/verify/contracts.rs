// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Runtime contracts for the alignment pipeline.
//!
//! Debug-mode assertions that the engine's outputs satisfy their invariants:
//!
//! 1. **Zero-cost in release builds** (`debug_assert!` / `cfg!(debug_assertions)`)
//! 2. **Early failure** the moment a stage produces something malformed
//!
//! # INVARIANTS (DO NOT REMOVE THESE CHECKS)
//!
//! | Contract Function             | Invariant                                          |
//! |-------------------------------|----------------------------------------------------|
//! | `check_strictly_increasing`   | every LIS is strictly increasing                   |
//! | `check_is_subsequence`        | a LIS is drawn from its sequence, in order         |
//! | `check_basis_well_formed`     | lengths, bounds, and the subsequence/missing split |

use std::fmt::Debug;

use crate::types::Basis;
use crate::verify::invariants::validate_basis;

/// Check that `values` is strictly increasing.
///
/// # Panics (debug builds only)
/// Panics on the first adjacent pair that is not strictly increasing.
#[inline]
pub fn check_strictly_increasing<T: Ord + Debug>(values: &[T]) {
    for (i, pair) in values.windows(2).enumerate() {
        debug_assert!(
            pair[0] < pair[1],
            "Contract violation: StrictlyIncreasing - values[{}] {:?} >= values[{}] {:?}",
            i,
            pair[0],
            i + 1,
            pair[1]
        );
    }
}

/// Check that `sub` occurs in `sequence` in order.
///
/// # Panics (debug builds only)
/// Panics if some element of `sub` cannot be matched.
#[inline]
pub fn check_is_subsequence<T: PartialEq + Debug>(sub: &[T], sequence: &[T]) {
    if cfg!(debug_assertions) {
        let mut remaining = sequence.iter();
        for (i, wanted) in sub.iter().enumerate() {
            assert!(
                remaining.any(|x| x == wanted),
                "Contract violation: Subsequence - sub[{}] {:?} not found in order",
                i,
                wanted
            );
        }
    }
}

/// Check every invariant of a finished basis.
///
/// # Panics (debug builds only)
/// Panics with the first violated invariant.
#[inline]
pub fn check_basis_well_formed(basis: &Basis, compared_len: usize) {
    if cfg!(debug_assertions) {
        if let Err(err) = validate_basis(basis, compared_len) {
            panic!("Contract violation: Basis.WellFormed - {}", err);
        }
    }
}
