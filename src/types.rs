// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The values the alignment engine passes around.
//!
//! Every number in here is an index into the *accurate* text, counted in
//! characters. Nothing points into the compared text: a compared character is
//! identified by its position in [`Basis::sequence`].
//!
//! # Invariants (the stuff that breaks if you ignore it)
//!
//! - **Pair**: `subsequence` is a longest strictly increasing subsequence of the
//!   matched entries of `sequence`.
//!
//! - **Basis**: `sequence.len() == compared.len()`, every matched entry is below
//!   `accurate.len()`, `subsequence` is strictly increasing, and
//!   `subsequence ⊎ missing_elements == source_sequence`.
//!
//! `verify::validate_basis` checks all of these for a finished basis.

use serde::{Deserialize, Serialize};

use crate::verify::{validate_basis, InvariantError};

/// One entry of a candidate sequence: where a compared character landed.
///
/// Serializes as a plain number or `null`, which is what downstream
/// highlighting code expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "Option<usize>", into = "Option<usize>")]
pub enum Slot {
    /// The character matches the accurate character at this index.
    Matched(usize),
    /// The character has no counterpart in the accurate text.
    Unmatched,
}

impl Slot {
    #[inline]
    pub fn index(self) -> Option<usize> {
        match self {
            Slot::Matched(index) => Some(index),
            Slot::Unmatched => None,
        }
    }

    /// Move a matched index by `offset`. Unmatched stays unmatched.
    #[inline]
    pub fn shifted(self, offset: usize) -> Slot {
        match self {
            Slot::Matched(index) => Slot::Matched(index + offset),
            Slot::Unmatched => Slot::Unmatched,
        }
    }
}

impl From<Option<usize>> for Slot {
    fn from(value: Option<usize>) -> Self {
        match value {
            Some(index) => Slot::Matched(index),
            None => Slot::Unmatched,
        }
    }
}

impl From<Slot> for Option<usize> {
    fn from(slot: Slot) -> Self {
        slot.index()
    }
}

/// Matched indices of a candidate sequence, in order.
pub fn matched_indices(sequence: &[Slot]) -> Vec<usize> {
    sequence.iter().filter_map(|slot| slot.index()).collect()
}

/// A candidate sequence together with its longest increasing subsequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Pair {
    pub sequence: Vec<Slot>,
    pub subsequence: Vec<usize>,
}

impl Pair {
    pub fn new(sequence: Vec<Slot>, subsequence: Vec<usize>) -> Self {
        Self {
            sequence,
            subsequence,
        }
    }

    /// Sum of the subsequence, used to break ties between equally long pairs.
    #[inline]
    pub fn subsequence_sum(&self) -> usize {
        self.subsequence.iter().sum()
    }
}

/// The finished alignment of a compared text against an accurate text.
///
/// ```
/// use charalign::{calculate_basis, Slot};
///
/// let basis = calculate_basis("hola", "Hello").unwrap();
/// assert_eq!(basis.source_sequence, vec![0, 1, 2, 3, 4]);
/// assert_eq!(
///     basis.sequence,
///     vec![Slot::Matched(0), Slot::Matched(4), Slot::Matched(2), Slot::Unmatched]
/// );
/// assert_eq!(basis.subsequence, vec![0, 2]);
/// assert_eq!(basis.missing_elements, vec![1, 3, 4]);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Basis {
    /// `0..accurate.len()`.
    pub source_sequence: Vec<usize>,
    /// One slot per compared character.
    pub sequence: Vec<Slot>,
    /// The accurate indices the compared text got right, strictly increasing.
    pub subsequence: Vec<usize>,
    /// `source_sequence` minus `subsequence`, ascending.
    pub missing_elements: Vec<usize>,
}

impl Basis {
    /// Build a basis, deriving `missing_elements`.
    ///
    /// `source_sequence` and `subsequence` are both sorted, so the difference is
    /// a single merge pass.
    pub fn new(source_sequence: Vec<usize>, sequence: Vec<Slot>, subsequence: Vec<usize>) -> Self {
        let mut missing_elements =
            Vec::with_capacity(source_sequence.len().saturating_sub(subsequence.len()));
        let mut kept = subsequence.iter().peekable();
        for &element in &source_sequence {
            while kept.next_if(|&&k| k < element).is_some() {}
            if kept.next_if_eq(&&element).is_none() {
                missing_elements.push(element);
            }
        }

        Self {
            source_sequence,
            sequence,
            subsequence,
            missing_elements,
        }
    }

    /// Compared characters that landed on the right accurate character.
    pub fn correct_count(&self) -> usize {
        self.subsequence.len()
    }

    /// Compared characters that are wrong or out of place.
    pub fn extra_count(&self) -> usize {
        self.sequence.len() - self.subsequence.len()
    }

    /// Accurate characters the compared text never produced.
    pub fn missing_count(&self) -> usize {
        self.missing_elements.len()
    }

    /// True when the compared text equals the accurate text up to case.
    pub fn is_correct(&self) -> bool {
        self.missing_elements.is_empty() && self.extra_count() == 0
    }

    /// Check every invariant against a compared text of `compared_len` characters.
    pub fn validate(&self, compared_len: usize) -> Result<(), InvariantError> {
        validate_basis(self, compared_len)
    }
}
