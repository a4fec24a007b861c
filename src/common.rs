// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Shared-content measurements between two texts.
//!
//! Neither function is part of `calculate_basis`. They are building blocks for
//! callers that segment input before aligning it: `find_common_part` locates a
//! long shared run that can serve as a split point, so each side of it can be
//! aligned separately, and `count_common_chars` is a cheap upper bound on how
//! many characters any alignment can get right.
//!
//! ```text
//! accurate: "123" [ "a"  ] "456" [ "bc" ] "789"
//! compared: "123" [ "bc" ] "456" [ "a"  ] "789"
//!                           ^^^
//!                       common part
//! ```

use crate::positions::CharPositionMap;
use crate::utils::{common_prefix_len, fold};

/// A run of characters shared by two texts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CommonPart {
    /// Start of the run in the first text.
    pub index_a: usize,
    /// Start of the run in the second text.
    pub index_b: usize,
    /// Length of the run, in characters.
    pub len: usize,
}

/// Count characters the two texts have in common, case-insensitively.
///
/// For every character, the smaller of its two occurrence counts.
///
/// ```
/// use charalign::count_common_chars;
///
/// assert_eq!(count_common_chars("Abcde", "aDftb"), 3);
/// ```
pub fn count_common_chars(a: &str, b: &str) -> usize {
    let positions_a = CharPositionMap::from_text(a);
    let positions_b = CharPositionMap::from_text(b);
    positions_a
        .iter()
        .map(|(c, positions)| positions.len().min(positions_b.count(c)))
        .sum()
}

/// Find a shared run at least half as long as the shorter text.
///
/// Scans start positions in the first text, then the second, and returns the
/// first run that qualifies; it is not necessarily the longest one.
///
/// ```
/// use charalign::{find_common_part, CommonPart};
///
/// assert_eq!(
///     find_common_part("ab123", "a123"),
///     Some(CommonPart { index_a: 2, index_b: 1, len: 3 })
/// );
/// ```
pub fn find_common_part(a: &str, b: &str) -> Option<CommonPart> {
    find_common_part_chars(&fold(a), &fold(b))
}

/// [`find_common_part`] over already-folded characters.
pub fn find_common_part_chars(a: &[char], b: &[char]) -> Option<CommonPart> {
    let half = a.len().min(b.len()) / 2;

    for index_a in 0..a.len() - half {
        for index_b in 0..b.len() - half {
            if a[index_a] != b[index_b] {
                continue;
            }
            let len = common_prefix_len(&a[index_a..], &b[index_b..]);
            if len >= half {
                return Some(CommonPart {
                    index_a,
                    index_b,
                    len,
                });
            }
        }
    }
    None
}
