//! Shared-content helpers that sit beside the aligner.

use charalign::{count_common_chars, find_common_part, find_common_part_chars, utils::fold, CommonPart};

#[test]
fn test_common_chars_bound_the_correct_count() {
    for (compared, accurate) in [("hola", "Hello"), ("gotob", "robot"), ("baba", "abab")] {
        let basis = charalign::calculate_basis(compared, accurate).unwrap();
        assert!(basis.correct_count() <= count_common_chars(compared, accurate));
    }
}

#[test]
fn test_common_part_splits_a_reordered_text() {
    // No shared run reaches half of twelve characters.
    assert_eq!(find_common_part("123a456bc789", "123bc456a789"), None);

    // Once the affixes are trimmed, "456" does.
    let part = find_common_part("a456bc", "bc456a").unwrap();
    assert_eq!(part.len, 3);
    assert_eq!(&fold("a456bc")[part.index_a..part.index_a + part.len], &fold("456")[..]);
}

#[test]
fn test_common_part_needs_half_the_shorter_text() {
    // "ab" is shared but the shorter text has 6 characters, so 3 are needed.
    assert_eq!(find_common_part("abxxxx", "yyyyab"), None);
    assert_eq!(
        find_common_part("abcxxx", "yyabcy"),
        Some(CommonPart { index_a: 0, index_b: 2, len: 3 })
    );
}

#[test]
fn test_common_part_on_chars() {
    let a: Vec<char> = "hello".chars().collect();
    let b: Vec<char> = "yellow".chars().collect();
    assert_eq!(
        find_common_part_chars(&a, &b),
        Some(CommonPart { index_a: 1, index_b: 1, len: 4 })
    );
}
