// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Common prefix/suffix trimming.
//!
//! Whatever the two texts share at the start and at the end is aligned
//! one-to-one without any search. Only the middle goes to the candidate
//! generator, which is the part whose cost explodes, so this is the single
//! most effective optimization in the engine.
//!
//! The prefix is taken first; the suffix is measured on what remains, so the
//! two never overlap even when one text is a prefix of the other.

use crate::utils::{common_prefix_len, common_suffix_len};

/// Two folded texts with their shared affixes split off.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Trimmed<'a> {
    /// Characters shared at the start of both texts.
    pub prefix_len: usize,
    /// Characters shared at the end, measured after removing the prefix.
    pub suffix_len: usize,
    /// The compared text between the affixes.
    pub compared: &'a [char],
    /// The accurate text between the affixes.
    pub accurate: &'a [char],
}

impl Trimmed<'_> {
    /// True when nothing is left to search for.
    pub fn is_trivial(&self) -> bool {
        self.compared.is_empty() || self.accurate.is_empty()
    }
}

/// Split the common prefix and suffix off two folded texts.
///
/// ```
/// use charalign::{trim_common_affixes, utils::fold};
///
/// let accurate = fold("123a456bc789");
/// let compared = fold("123bc456a789");
/// let trimmed = trim_common_affixes(&compared, &accurate);
/// assert_eq!(trimmed.prefix_len, 3);
/// assert_eq!(trimmed.suffix_len, 3);
/// assert_eq!(trimmed.compared.iter().collect::<String>(), "bc456a");
/// ```
pub fn trim_common_affixes<'a>(compared: &'a [char], accurate: &'a [char]) -> Trimmed<'a> {
    let prefix_len = common_prefix_len(compared, accurate);
    let compared = &compared[prefix_len..];
    let accurate = &accurate[prefix_len..];

    let suffix_len = common_suffix_len(compared, accurate);
    let compared = &compared[..compared.len() - suffix_len];
    let accurate = &accurate[..accurate.len() - suffix_len];

    Trimmed {
        prefix_len,
        suffix_len,
        compared,
        accurate,
    }
}
