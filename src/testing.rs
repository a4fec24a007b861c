//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation.
//! It provides canonical implementations of test helpers to avoid duplication.

#![doc(hidden)]

use crate::types::{Basis, Slot};

/// A candidate sequence where every slot is matched.
pub fn matched(indices: &[usize]) -> Vec<Slot> {
    indices.iter().map(|&i| Slot::Matched(i)).collect()
}

/// A candidate sequence from nullable indices, `None` meaning unmatched.
pub fn slots(indices: &[Option<usize>]) -> Vec<Slot> {
    indices.iter().map(|&i| Slot::from(i)).collect()
}

/// A basis over an accurate text of `accurate_len` characters.
pub fn make_basis(accurate_len: usize, sequence: Vec<Slot>, subsequence: Vec<usize>) -> Basis {
    Basis::new((0..accurate_len).collect(), sequence, subsequence)
}

/// Render a basis as `compared`'s characters with correct ones uppercased.
///
/// Handy for eyeballing regressions: `"hola"` against `"Hello"` renders `"HoLa"`.
pub fn render_correct(compared: &str, basis: &Basis) -> String {
    let mut wanted = basis.subsequence.iter().peekable();
    compared
        .chars()
        .zip(&basis.sequence)
        .map(|(c, slot)| match slot.index() {
            Some(index) if wanted.next_if_eq(&&index).is_some() => c.to_ascii_uppercase(),
            _ => c.to_ascii_lowercase(),
        })
        .collect()
}
