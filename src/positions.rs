// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Character position index: every character of a text mapped to the ascending
//! list of positions where it occurs.
//!
//! Built once per text in a single pass. Positions are pushed in scan order, so
//! each list is sorted for free.

use std::collections::HashMap;

use crate::utils::fold;

/// Character → ascending occurrence positions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CharPositionMap {
    positions: HashMap<char, Vec<usize>>,
}

impl CharPositionMap {
    /// Index already-folded characters.
    ///
    /// ```
    /// use charalign::{utils::fold, CharPositionMap};
    ///
    /// let map = CharPositionMap::from_chars(&fold("baaaac"));
    /// assert_eq!(map.get('a'), Some(&[1, 2, 3, 4][..]));
    /// assert_eq!(map.count('b'), 1);
    /// ```
    pub fn from_chars(chars: &[char]) -> Self {
        let mut positions: HashMap<char, Vec<usize>> = HashMap::new();
        for (index, &c) in chars.iter().enumerate() {
            positions.entry(c).or_default().push(index);
        }
        Self { positions }
    }

    /// Case-fold `text` and index it.
    ///
    /// ```
    /// use charalign::CharPositionMap;
    ///
    /// let map = CharPositionMap::from_text("Robot");
    /// assert_eq!(map.get('o'), Some(&[1, 3][..]));
    /// assert_eq!(map.get('r'), Some(&[0][..]));
    /// assert_eq!(map.get('x'), None);
    /// ```
    pub fn from_text(text: &str) -> Self {
        Self::from_chars(&fold(text))
    }

    /// Positions of `c`, or `None` if it never occurs.
    #[inline]
    pub fn get(&self, c: char) -> Option<&[usize]> {
        self.positions.get(&c).map(Vec::as_slice)
    }

    #[inline]
    pub fn contains(&self, c: char) -> bool {
        self.positions.contains_key(&c)
    }

    /// Number of occurrences of `c`.
    #[inline]
    pub fn count(&self, c: char) -> usize {
        self.positions.get(&c).map_or(0, Vec::len)
    }

    /// Number of distinct characters.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (char, &[usize])> {
        self.positions.iter().map(|(&c, p)| (c, p.as_slice()))
    }
}

/// Shorthand for [`CharPositionMap::from_text`].
pub fn char_positions(text: &str) -> CharPositionMap {
    CharPositionMap::from_text(text)
}
