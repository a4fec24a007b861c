// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Checked invariants of a [`Basis`].
//!
//! A basis that came out of `calculate_basis` always passes. These checks are
//! for bases that came from somewhere else: deserialized from JSON, built by
//! hand in a test, or handed to the highlighter alongside texts that may not
//! be the ones it was computed from.
//!
//! | Invariant               | What's Guaranteed                                     |
//! |-------------------------|-------------------------------------------------------|
//! | `SourceSequence`        | `source_sequence == 0..accurate.len()`                |
//! | `LengthMatches`         | one slot per compared character                       |
//! | `IndicesInBounds`       | every matched slot points inside the accurate text    |
//! | `StrictlyIncreasing`    | the subsequence never repeats or goes back            |
//! | `Subsequence`           | the subsequence is drawn from the matched slots       |
//! | `Partition`             | subsequence and missing elements split the source     |

use thiserror::Error;

use crate::types::{Basis, Slot};

/// Error type for invariant violations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum InvariantError {
    /// `source_sequence` is not `0..n`.
    #[error("source_sequence[{position}] is {found}, expected {position}")]
    MalformedSourceSequence { position: usize, found: usize },
    /// `sequence` length differs from the compared text.
    #[error("sequence.len() {sequence_len} != compared.len() {compared_len}")]
    LengthMismatch {
        sequence_len: usize,
        compared_len: usize,
    },
    /// A matched slot points past the end of the accurate text.
    #[error("sequence[{position}] = {index} >= accurate.len() {accurate_len}")]
    IndexOutOfBounds {
        position: usize,
        index: usize,
        accurate_len: usize,
    },
    /// The subsequence is not strictly increasing.
    #[error("subsequence not strictly increasing at position {position}")]
    NotStrictlyIncreasing { position: usize },
    /// A subsequence element cannot be found, in order, among the matched slots.
    #[error("subsequence[{position}] = {index} is not drawn from sequence in order")]
    NotASubsequence { position: usize, index: usize },
    /// `missing_elements` is not `source_sequence` minus `subsequence`.
    #[error("missing_elements is not source_sequence minus subsequence")]
    NotAPartition,
}

/// Validate every invariant of `basis` for a compared text of `compared_len`
/// characters.
pub fn validate_basis(basis: &Basis, compared_len: usize) -> Result<(), InvariantError> {
    let accurate_len = basis.source_sequence.len();

    if let Some((position, &found)) = basis
        .source_sequence
        .iter()
        .enumerate()
        .find(|&(i, &v)| i != v)
    {
        return Err(InvariantError::MalformedSourceSequence { position, found });
    }

    if basis.sequence.len() != compared_len {
        return Err(InvariantError::LengthMismatch {
            sequence_len: basis.sequence.len(),
            compared_len,
        });
    }

    for (position, slot) in basis.sequence.iter().enumerate() {
        if let Slot::Matched(index) = *slot {
            if index >= accurate_len {
                return Err(InvariantError::IndexOutOfBounds {
                    position,
                    index,
                    accurate_len,
                });
            }
        }
    }

    if let Some(position) = basis
        .subsequence
        .windows(2)
        .position(|pair| pair[0] >= pair[1])
    {
        return Err(InvariantError::NotStrictlyIncreasing {
            position: position + 1,
        });
    }

    let mut matched = basis.sequence.iter().filter_map(|slot| slot.index());
    for (position, &index) in basis.subsequence.iter().enumerate() {
        if !matched.any(|m| m == index) {
            return Err(InvariantError::NotASubsequence { position, index });
        }
    }

    let expected = Basis::new(
        basis.source_sequence.clone(),
        Vec::new(),
        basis.subsequence.clone(),
    )
    .missing_elements;
    if expected != basis.missing_elements {
        return Err(InvariantError::NotAPartition);
    }

    Ok(())
}
