// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Basis calculation: the whole pipeline, and putting the pieces back together.
//!
//! ```text
//!  fold ──▶ trim affixes ──▶ generate ──▶ LIS per ──▶ best ──▶ reattach
//!                            candidates   candidate    pair     affixes
//! ```
//!
//! The trimmed prefix and suffix are matched one-to-one, so reattaching them is
//! pure index arithmetic: the middle's accurate indices shift right by the
//! prefix length, and the suffix maps onto the last accurate indices.

use tracing::debug;

use crate::affix::trim_common_affixes;
use crate::config::AlignConfig;
use crate::error::Result;
use crate::generator::visit_candidates;
use crate::select::{pick_best_pair, PairSelector};
use crate::types::{Basis, Pair, Slot};
use crate::utils::fold;
use crate::verify::contracts::check_basis_well_formed;

/// Reattach the trimmed affixes to the best pair of the middle.
///
/// `accurate_len` is the length of the full accurate text; `prefix_len` and
/// `suffix_len` come from [`trim_common_affixes`].
///
/// [`trim_common_affixes`]: crate::trim_common_affixes
pub fn assemble_basis(accurate_len: usize, prefix_len: usize, suffix_len: usize, middle: Pair) -> Basis {
    let source_sequence: Vec<usize> = (0..accurate_len).collect();
    let suffix_start = accurate_len - suffix_len;

    let mut sequence = Vec::with_capacity(prefix_len + middle.sequence.len() + suffix_len);
    sequence.extend((0..prefix_len).map(Slot::Matched));
    sequence.extend(middle.sequence.iter().map(|slot| slot.shifted(prefix_len)));
    sequence.extend((suffix_start..accurate_len).map(Slot::Matched));

    let mut subsequence = Vec::with_capacity(prefix_len + middle.subsequence.len() + suffix_len);
    subsequence.extend(0..prefix_len);
    subsequence.extend(middle.subsequence.iter().map(|index| index + prefix_len));
    subsequence.extend(suffix_start..accurate_len);

    Basis::new(source_sequence, sequence, subsequence)
}

/// Align `compared` against `accurate` with the default ceilings.
///
/// Comparison is case-insensitive; the indices in the result refer to
/// character positions of the original texts.
///
/// ```
/// use charalign::{calculate_basis, Slot::*};
///
/// let basis = calculate_basis("baba", "abab").unwrap();
/// assert_eq!(basis.sequence, vec![Matched(1), Matched(0), Matched(1), Matched(2)]);
/// assert_eq!(basis.subsequence, vec![0, 1, 2]);
/// assert_eq!(basis.missing_elements, vec![3]);
/// ```
pub fn calculate_basis(compared: &str, accurate: &str) -> Result<Basis> {
    calculate_basis_with(compared, accurate, &AlignConfig::default())
}

/// Align `compared` against `accurate` under explicit ceilings.
pub fn calculate_basis_with(compared: &str, accurate: &str, config: &AlignConfig) -> Result<Basis> {
    config.validate()?;

    let compared = fold(compared);
    let accurate = fold(accurate);
    let trimmed = trim_common_affixes(&compared, &accurate);

    debug!(
        compared_len = compared.len(),
        accurate_len = accurate.len(),
        prefix_len = trimmed.prefix_len,
        suffix_len = trimmed.suffix_len,
        middle_len = trimmed.compared.len(),
        "trimmed common affixes"
    );

    let mut selector = PairSelector::new();
    let candidates = visit_candidates(trimmed.compared, trimmed.accurate, config, |candidate| {
        selector.offer(candidate)
    })?;

    let max_len = selector.max_len();
    let pairs = selector.into_pairs();
    let best = pick_best_pair(&pairs);

    debug!(
        candidates,
        longest = max_len,
        tied = pairs.len(),
        "selected best pair"
    );

    let basis = assemble_basis(accurate.len(), trimmed.prefix_len, trimmed.suffix_len, best);
    check_basis_well_formed(&basis, compared.len());
    Ok(basis)
}

/// A reusable aligner carrying its ceilings.
///
/// ```
/// use charalign::{AlignConfig, Aligner};
///
/// let aligner = Aligner::new(AlignConfig::default().with_max_candidates(1_000));
/// let basis = aligner.align("Helo", "Hello").unwrap();
/// assert_eq!(basis.missing_elements, vec![3]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Aligner {
    config: AlignConfig,
}

impl Aligner {
    pub fn new(config: AlignConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &AlignConfig {
        &self.config
    }

    pub fn align(&self, compared: &str, accurate: &str) -> Result<Basis> {
        calculate_basis_with(compared, accurate, &self.config)
    }
}
