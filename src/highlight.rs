// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Turning a basis into highlightable spans.
//!
//! The basis only holds indices. This module maps them back onto the original,
//! un-folded texts and groups consecutive characters of the same kind, which is
//! what a renderer wants: a list of runs to style.
//!
//! - Compared text: a character is **correct** if it carries the next
//!   subsequence index, otherwise **extra**.
//! - Accurate text: a character is **correct** if its index is in the
//!   subsequence, otherwise **missing**.
//!
//! ```text
//! accurate "Hello", compared "hola"
//!
//! compared:  h   o   l   a
//!            ✓   ✗   ✓   ✗        correct "h", extra "o", correct "l", extra "a"
//! accurate:  H   e   l   l   o
//!            ✓   ·   ✓   ·   ·    correct "H", missing "e", correct "l", missing "lo"
//! ```

use std::ops::Range;

use serde::Serialize;

use crate::types::Basis;
use crate::verify::{validate_basis, InvariantError};

/// How a run of characters should be shown.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum SpanKind {
    Correct,
    Extra,
    Missing,
}

/// A run of consecutive characters of one kind.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Span {
    pub kind: SpanKind,
    pub text: String,
    /// Character range in the original text.
    pub range: Range<usize>,
}

/// Spans over both texts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Highlight {
    /// The compared text as correct/extra runs.
    pub compared: Vec<Span>,
    /// The accurate text as correct/missing runs.
    pub accurate: Vec<Span>,
}

/// Build spans for `compared` and `accurate` from their basis.
///
/// The basis is validated against the texts first, so a basis computed for
/// different texts is rejected instead of producing garbage.
///
/// ```
/// use charalign::{calculate_basis, highlight, SpanKind};
///
/// let basis = calculate_basis("hola", "Hello").unwrap();
/// let spans = highlight("hola", "Hello", &basis).unwrap();
/// let kinds: Vec<_> = spans.compared.iter().map(|s| (s.kind, s.text.as_str())).collect();
/// assert_eq!(
///     kinds,
///     vec![
///         (SpanKind::Correct, "h"),
///         (SpanKind::Extra, "o"),
///         (SpanKind::Correct, "l"),
///         (SpanKind::Extra, "a"),
///     ]
/// );
/// ```
pub fn highlight(compared: &str, accurate: &str, basis: &Basis) -> Result<Highlight, InvariantError> {
    let compared_chars: Vec<char> = compared.chars().collect();
    let accurate_chars: Vec<char> = accurate.chars().collect();

    validate_basis(basis, compared_chars.len())?;
    if basis.source_sequence.len() != accurate_chars.len() {
        return Err(InvariantError::LengthMismatch {
            sequence_len: basis.source_sequence.len(),
            compared_len: accurate_chars.len(),
        });
    }

    // Greedy left-to-right: the first slot carrying the next wanted index wins.
    let mut wanted = basis.subsequence.iter().peekable();
    let compared_kinds = basis.sequence.iter().map(|slot| {
        match (slot.index(), wanted.peek()) {
            (Some(index), Some(&&next)) if index == next => {
                wanted.next();
                SpanKind::Correct
            }
            _ => SpanKind::Extra,
        }
    });
    let compared_spans = group(&compared_chars, compared_kinds);

    let mut kept = basis.subsequence.iter().peekable();
    let accurate_kinds = (0..accurate_chars.len()).map(|index| {
        if kept.next_if_eq(&&index).is_some() {
            SpanKind::Correct
        } else {
            SpanKind::Missing
        }
    });
    let accurate_spans = group(&accurate_chars, accurate_kinds);

    Ok(Highlight {
        compared: compared_spans,
        accurate: accurate_spans,
    })
}

/// Group characters into runs of equal kind.
fn group(chars: &[char], kinds: impl Iterator<Item = SpanKind>) -> Vec<Span> {
    let mut spans: Vec<Span> = Vec::new();
    for (index, (kind, &c)) in kinds.zip(chars).enumerate() {
        match spans.last_mut() {
            Some(span) if span.kind == kind => {
                span.text.push(c);
                span.range.end = index + 1;
            }
            _ => spans.push(Span {
                kind,
                text: c.to_string(),
                range: index..index + 1,
            }),
        }
    }
    spans
}
