// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Candidate sequence generation.
//!
//! Every compared character may land on any occurrence of the same character
//! in the accurate text. The generator enumerates those assignments depth
//! first, left to right, trying occurrences in ascending order, and prunes
//! with three rules:
//!
//! 1. **Unmatched**: a character absent from the accurate text becomes
//!    [`Slot::Unmatched`] and does not branch.
//! 2. **Monotonicity**: a character that already has a position on the current
//!    path may not go below its last used position (it may reuse it).
//! 3. **Repeat runs**: inside a run of the same character (`"aaa"`), a
//!    character whose predecessor is the same character only takes the
//!    position right after the last used one. The one exception is a
//!    predecessor already sitting on the last occurrence, which may be reused.
//!    A character followed by the same character stops after its first
//!    explored branch.
//!
//! Rule 3 is what keeps runs from exploding: without it `"aaaaaa"` against
//! itself would produce 462 candidates instead of one.
//!
//! Rule 3 can dead-end every path (`"baa"` against `"axab"`: the second `'a'`
//! has nowhere to go after position 0). Only then is the search repeated with
//! a lenient run rule that also lets a run character jump to the last
//! occurrence, so every compared character still ends up with a slot.
//!
//! ```text
//! compared "caba", accurate "acab"     positions: a → [0, 2], b → [3], c → [1]
//!
//! (c)   (a)   (b)   (a)
//!  1 ──> 0 ──> 3 ──> 0
//!   │           │
//!   │           └──> 2
//!   │
//!   └──> 2 ──> 3 ──> 2
//!
//! candidates: [1, 0, 3, 0], [1, 0, 3, 2], [1, 2, 3, 2]
//! ```
//!
//! The search is an explicit stack, one frame per compared character, so a
//! long run never touches the call stack. Each frame remembers which
//! occurrence it tries next and what it placed, so backtracking restores the
//! per-character scratch buffer exactly.

use std::collections::HashMap;

use tracing::{debug, trace, warn};

use crate::config::AlignConfig;
use crate::error::{AlignError, Result};
use crate::positions::CharPositionMap;
use crate::types::Slot;

/// Per-character stack of positions used on the current search path.
#[derive(Debug, Default)]
struct ScratchBuffer {
    used: HashMap<char, Vec<usize>>,
}

impl ScratchBuffer {
    #[inline]
    fn last_used(&self, c: char) -> Option<usize> {
        self.used.get(&c).and_then(|positions| positions.last().copied())
    }

    #[inline]
    fn record(&mut self, c: char, position: usize) {
        self.used.entry(c).or_default().push(position);
    }

    #[inline]
    fn release(&mut self, c: char) {
        if let Some(positions) = self.used.get_mut(&c) {
            positions.pop();
        }
    }
}

/// One level of the depth-first search.
#[derive(Debug, Default)]
struct Frame {
    /// Index into the occurrence list of the next position to try.
    cursor: usize,
    /// What this frame currently contributes to the path.
    placed: Option<Slot>,
}

/// How a character continues a run of the same character.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunRule {
    /// Next position, or stay put on the last occurrence.
    Strict,
    /// Next position, or jump to the last occurrence.
    Lenient,
}

/// Can compared character `c` land on accurate position `candidate`?
#[inline]
fn accepts(
    candidate: usize,
    last_used: Option<usize>,
    follows_same: bool,
    last_occurrence: usize,
    rule: RunRule,
) -> bool {
    let Some(last) = last_used else {
        return true;
    };
    if candidate < last {
        return false;
    }
    if !follows_same || candidate == last + 1 {
        return true;
    }
    match rule {
        RunRule::Strict => last == last_occurrence,
        RunRule::Lenient => candidate == last_occurrence,
    }
}

/// Walk every candidate sequence of `compared` against `accurate`, calling
/// `visit` once per complete sequence in generation order.
///
/// Both texts must already be case-folded. Returns the number of candidates
/// visited, or [`AlignError::CandidateLimit`] as soon as `visit` would be
/// called more than `config.max_candidates` times.
pub fn visit_candidates<F>(
    compared: &[char],
    accurate: &[char],
    config: &AlignConfig,
    mut visit: F,
) -> Result<usize>
where
    F: FnMut(&[Slot]),
{
    if compared.len() > config.max_depth {
        warn!(
            depth = compared.len(),
            limit = config.max_depth,
            "compared text too long to search"
        );
        return Err(AlignError::DepthLimit {
            depth: compared.len(),
            limit: config.max_depth,
        });
    }

    let mut emitted = 0usize;
    let mut emit = |path: &[Slot]| -> Result<()> {
        if emitted == config.max_candidates {
            warn!(limit = config.max_candidates, "candidate limit reached");
            return Err(AlignError::CandidateLimit {
                limit: config.max_candidates,
            });
        }
        emitted += 1;
        trace!(candidate = ?path, "candidate");
        visit(path);
        Ok(())
    };

    if compared.is_empty() {
        emit(&[])?;
        return Ok(1);
    }

    let positions = CharPositionMap::from_chars(accurate);
    let found = search(compared, &positions, RunRule::Strict, &mut emit)?;
    if found > 0 {
        return Ok(found);
    }

    debug!(
        compared_len = compared.len(),
        "every path dead-ended in a run, retrying with the lenient run rule"
    );
    search(compared, &positions, RunRule::Lenient, &mut emit)
}

/// One depth-first pass under `rule`. Returns the number of candidates emitted.
fn search<E>(
    compared: &[char],
    positions: &CharPositionMap,
    rule: RunRule,
    emit: &mut E,
) -> Result<usize>
where
    E: FnMut(&[Slot]) -> Result<()>,
{
    let mut found = 0usize;
    let mut scratch = ScratchBuffer::default();
    let mut path: Vec<Slot> = Vec::with_capacity(compared.len());
    let mut stack: Vec<Frame> = Vec::with_capacity(compared.len());
    stack.push(Frame::default());

    while let Some(depth) = stack.len().checked_sub(1) {
        let c = compared[depth];
        let follows_same = depth > 0 && compared[depth - 1] == c;
        let precedes_same = compared.get(depth + 1) == Some(&c);
        let frame = &mut stack[depth];

        // Undo whatever this frame placed on its previous visit.
        if let Some(placed) = frame.placed.take() {
            path.pop();
            match placed {
                Slot::Unmatched => {
                    stack.pop();
                    continue;
                }
                Slot::Matched(_) => {
                    scratch.release(c);
                    if precedes_same {
                        stack.pop();
                        continue;
                    }
                }
            }
        }

        let next = match positions.get(c) {
            None => Some(Slot::Unmatched),
            Some(occurrences) => {
                let last_used = scratch.last_used(c);
                let last_occurrence = occurrences[occurrences.len() - 1];
                let hit = occurrences[frame.cursor..]
                    .iter()
                    .position(|&p| accepts(p, last_used, follows_same, last_occurrence, rule));
                hit.map(|offset| {
                    let index = frame.cursor + offset;
                    frame.cursor = index + 1;
                    Slot::Matched(occurrences[index])
                })
            }
        };

        let Some(slot) = next else {
            stack.pop();
            continue;
        };

        frame.placed = Some(slot);
        if let Slot::Matched(position) = slot {
            scratch.record(c, position);
        }
        path.push(slot);

        if path.len() == compared.len() {
            emit(&path)?;
            found += 1;
        } else {
            stack.push(Frame::default());
        }
    }

    Ok(found)
}

/// Collect every candidate sequence of `compared` against `accurate`.
///
/// ```
/// use charalign::{generate_candidates, AlignConfig, Slot::*, utils::fold};
///
/// let candidates =
///     generate_candidates(&fold("gotob"), &fold("robot"), &AlignConfig::default()).unwrap();
/// assert_eq!(
///     candidates,
///     vec![
///         vec![Unmatched, Matched(1), Matched(4), Matched(1), Matched(2)],
///         vec![Unmatched, Matched(1), Matched(4), Matched(3), Matched(2)],
///         vec![Unmatched, Matched(3), Matched(4), Matched(3), Matched(2)],
///     ]
/// );
/// ```
pub fn generate_candidates(
    compared: &[char],
    accurate: &[char],
    config: &AlignConfig,
) -> Result<Vec<Vec<Slot>>> {
    let mut candidates = Vec::new();
    visit_candidates(compared, accurate, config, |candidate| {
        candidates.push(candidate.to_vec());
    })?;
    Ok(candidates)
}
