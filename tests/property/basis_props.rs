//! Property tests for the assembled basis and its highlighting.

use crate::common::{align, assert_basis_well_formed, highlight_pair, text_of_kind};
use crate::oracles::oracle_lcs_length;
use charalign::{trim_common_affixes, utils::fold, SpanKind};
use proptest::prelude::*;
use proptest::string::string_regex;

fn text() -> impl Strategy<Value = String> {
    string_regex("[abcdAB]{0,7}").unwrap()
}

/// A text with no repeated character (up to case).
fn distinct_text() -> impl Strategy<Value = String> {
    prop::sample::subsequence(vec!['a', 'b', 'c', 'd', 'e', 'f'], 0..=6)
        .prop_shuffle()
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn basis_is_well_formed(compared in text(), accurate in text()) {
        let basis = align(&compared, &accurate);
        assert_basis_well_formed(&basis, &compared, &accurate);
    }

    #[test]
    fn correct_count_never_exceeds_lcs(compared in text(), accurate in text()) {
        let basis = align(&compared, &accurate);
        prop_assert!(basis.correct_count() <= oracle_lcs_length(&compared, &accurate));
    }

    #[test]
    fn correct_count_equals_lcs_without_repeats(compared in text(), accurate in distinct_text()) {
        let basis = align(&compared, &accurate);
        prop_assert_eq!(basis.correct_count(), oracle_lcs_length(&compared, &accurate));
    }

    #[test]
    fn trimmed_affixes_are_always_correct(compared in text(), accurate in text()) {
        let basis = align(&compared, &accurate);
        let compared_chars = fold(&compared);
        let accurate_chars = fold(&accurate);
        let trimmed = trim_common_affixes(&compared_chars, &accurate_chars);
        let suffix_start = accurate_chars.len() - trimmed.suffix_len;

        prop_assert!(basis.correct_count() >= trimmed.prefix_len + trimmed.suffix_len);
        for index in (0..trimmed.prefix_len).chain(suffix_start..accurate_chars.len()) {
            prop_assert!(basis.subsequence.contains(&index));
        }
    }

    #[test]
    fn case_does_not_matter(compared in text(), accurate in text()) {
        let basis = align(&compared, &accurate);
        prop_assert_eq!(&align(&compared.to_uppercase(), &accurate), &basis);
        prop_assert_eq!(&align(&compared, &accurate.to_lowercase()), &basis);
    }

    #[test]
    fn identical_texts_are_correct(text in text()) {
        let basis = align(&text, &text);
        prop_assert!(basis.is_correct());
        prop_assert!(basis.missing_elements.is_empty());
    }

    #[test]
    fn counts_add_up(compared in text(), accurate in text()) {
        let basis = align(&compared, &accurate);
        prop_assert_eq!(basis.correct_count() + basis.extra_count(), compared.chars().count());
        prop_assert_eq!(basis.correct_count() + basis.missing_count(), accurate.chars().count());
    }

    #[test]
    fn spans_reassemble_the_texts(compared in text(), accurate in text()) {
        let spans = highlight_pair(&compared, &accurate);
        let compared_back: String = spans.compared.iter().map(|s| s.text.as_str()).collect();
        let accurate_back: String = spans.accurate.iter().map(|s| s.text.as_str()).collect();
        prop_assert_eq!(compared_back, compared);
        prop_assert_eq!(accurate_back, accurate);
    }

    #[test]
    fn span_kinds_match_counts(compared in text(), accurate in text()) {
        let basis = align(&compared, &accurate);
        let spans = highlight_pair(&compared, &accurate);
        let correct = text_of_kind(&spans.compared, SpanKind::Correct).chars().count();
        let missing = text_of_kind(&spans.accurate, SpanKind::Missing).chars().count();
        prop_assert_eq!(correct, basis.correct_count());
        prop_assert_eq!(missing, basis.missing_count());
        prop_assert!(spans.compared.iter().all(|s| s.kind != SpanKind::Missing));
        prop_assert!(spans.accurate.iter().all(|s| s.kind != SpanKind::Extra));
    }

    #[test]
    fn adjacent_spans_differ_in_kind(compared in text(), accurate in text()) {
        let spans = highlight_pair(&compared, &accurate);
        for side in [&spans.compared, &spans.accurate] {
            prop_assert!(side.windows(2).all(|w| w[0].kind != w[1].kind));
            prop_assert!(side.windows(2).all(|w| w[0].range.end == w[1].range.start));
        }
    }
}
