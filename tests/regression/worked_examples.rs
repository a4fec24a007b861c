//! Exact bases for hand-checked inputs.

use crate::common::{align, assert_basis_well_formed, make_basis, render_correct, slots};

#[test]
fn test_hello_hola() {
    let basis = align("hola", "Hello");
    assert_eq!(
        basis,
        make_basis(5, slots(&[Some(0), Some(4), Some(2), None]), vec![0, 2])
    );
    assert_eq!(basis.missing_elements, vec![1, 3, 4]);
    assert_eq!(render_correct("hola", &basis), "HoLa");
}

#[test]
fn test_abab_baba_prefers_smallest_sum() {
    let basis = align("baba", "abab");
    assert_eq!(
        basis,
        make_basis(4, slots(&[Some(1), Some(0), Some(1), Some(2)]), vec![0, 1, 2])
    );
    assert_eq!(render_correct("baba", &basis), "bABA");
}

#[test]
fn test_gotob_robot_first_of_equal_sums() {
    // [_, 1, 4, 1, 2] and [_, 1, 4, 3, 2] both keep [1, 2]; the first wins.
    let basis = align("gotob", "robot");
    assert_eq!(
        basis,
        make_basis(5, slots(&[None, Some(1), Some(4), Some(1), Some(2)]), vec![1, 2])
    );
    assert_eq!(basis.missing_elements, vec![0, 3, 4]);
}

#[test]
fn test_caaaba_baaaac() {
    let basis = align("caaaba", "baaaac");
    assert_eq!(
        basis,
        make_basis(
            6,
            slots(&[Some(5), Some(1), Some(2), Some(3), Some(0), Some(4)]),
            vec![1, 2, 3, 4]
        )
    );
    assert_eq!(basis.missing_elements, vec![0, 5]);
}

#[test]
fn test_swapped_blocks_keep_the_anchor() {
    let basis = align("123bc456a789", "123a456bc789");
    assert_basis_well_formed(&basis, "123bc456a789", "123a456bc789");
    for index in [0, 1, 2, 4, 5, 6, 9, 10, 11] {
        assert!(basis.subsequence.contains(&index), "{} should be correct", index);
    }
    assert_eq!(basis.correct_count(), 9);
}

#[test]
fn test_single_typo_in_sentence() {
    let accurate = "The quick brown fox";
    let compared = "the quick brwon fox";
    let basis = align(compared, accurate);
    assert_basis_well_formed(&basis, compared, accurate);
    assert_eq!(basis.correct_count(), 18);
    assert_eq!(basis.extra_count(), 1);
    assert_eq!(basis.missing_count(), 1);
}

#[test]
fn test_unicode_case_folding() {
    let basis = align("ÉCOLE", "école");
    assert!(basis.is_correct());

    // Accented and plain letters are different characters.
    let basis = align("ecole", "école");
    assert_eq!(basis.sequence[0], charalign::Slot::Unmatched);
    assert_eq!(basis.missing_elements, vec![0]);
}

#[test]
fn test_empty_sides() {
    let basis = align("", "abc");
    assert_eq!(basis, make_basis(3, vec![], vec![]));

    let basis = align("abc", "");
    assert_eq!(basis, make_basis(0, slots(&[None, None, None]), vec![]));
}
