//! Shared test utilities and fixtures.

#![allow(dead_code)]

use charalign::{calculate_basis, highlight, Basis, SpanKind};

// Re-export canonical test utilities from charalign::testing
pub use charalign::testing::{make_basis, matched, render_correct, slots};

// ============================================================================
// FIXTURES
// ============================================================================

/// Typing attempts that come up in practice: (accurate, compared).
pub const TYPING_PAIRS: &[(&str, &str)] = &[
    ("Hello", "hola"),
    ("abab", "baba"),
    ("robot", "gotob"),
    ("baaaac", "caaaba"),
    ("necessary", "neccesary"),
    ("hello world", "helo wrold"),
    ("The quick brown fox", "the quick brwon fox"),
    ("123a456bc789", "123bc456a789"),
    ("école", "ÉCOLE"),
    ("", "anything"),
    ("anything", ""),
];

// ============================================================================
// HELPERS
// ============================================================================

/// Align with default ceilings, panicking on error.
pub fn align(compared: &str, accurate: &str) -> Basis {
    calculate_basis(compared, accurate)
        .unwrap_or_else(|e| panic!("aligning {:?} against {:?}: {}", compared, accurate, e))
}

/// Assert every structural invariant of a basis for these texts.
pub fn assert_basis_well_formed(basis: &Basis, compared: &str, accurate: &str) {
    let compared_len = compared.chars().count();
    let accurate_len = accurate.chars().count();

    assert_eq!(
        basis.source_sequence,
        (0..accurate_len).collect::<Vec<_>>(),
        "source sequence for {:?}",
        accurate
    );
    if let Err(e) = basis.validate(compared_len) {
        panic!("basis for {:?} / {:?} is malformed: {}", compared, accurate, e);
    }
    assert_eq!(
        basis.subsequence.len() + basis.missing_elements.len(),
        accurate_len,
        "subsequence and missing elements must partition the source"
    );
}

/// Concatenate the text of every span of one kind.
pub fn text_of_kind(spans: &[charalign::Span], kind: SpanKind) -> String {
    spans
        .iter()
        .filter(|s| s.kind == kind)
        .map(|s| s.text.as_str())
        .collect()
}

/// Highlight with the basis computed for the same texts.
pub fn highlight_pair(compared: &str, accurate: &str) -> charalign::Highlight {
    let basis = align(compared, accurate);
    highlight(compared, accurate, &basis)
        .unwrap_or_else(|e| panic!("highlighting {:?}: {}", compared, e))
}
