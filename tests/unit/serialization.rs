//! JSON shape of the values handed to other tools.

use crate::common::align;
use charalign::{highlight, AlignConfig, Basis, InvariantError};
use serde_json::json;

#[test]
fn test_basis_json_shape() {
    let basis = align("hola", "Hello");
    let value = serde_json::to_value(&basis).unwrap();
    assert_eq!(
        value,
        json!({
            "sourceSequence": [0, 1, 2, 3, 4],
            "sequence": [0, 4, 2, null],
            "subsequence": [0, 2],
            "missingElements": [1, 3, 4],
        })
    );
}

#[test]
fn test_basis_from_json_is_validated_before_highlighting() {
    let tampered: Basis = serde_json::from_value(json!({
        "sourceSequence": [0, 1, 2, 3, 4],
        "sequence": [0, 4, 2, null],
        "subsequence": [2, 0],
        "missingElements": [1, 3, 4],
    }))
    .unwrap();

    assert_eq!(
        highlight("hola", "Hello", &tampered),
        Err(InvariantError::NotStrictlyIncreasing { position: 1 })
    );
}

#[test]
fn test_highlight_json_shape() {
    let basis = align("hola", "Hello");
    let spans = highlight("hola", "Hello", &basis).unwrap();
    let value = serde_json::to_value(&spans).unwrap();
    assert_eq!(
        value["compared"][0],
        json!({ "kind": "correct", "text": "h", "range": { "start": 0, "end": 1 } })
    );
    assert_eq!(value["accurate"][1]["kind"], json!("missing"));
}

#[test]
fn test_config_round_trip() {
    let config = AlignConfig::default().with_max_candidates(500);
    let value = serde_json::to_value(config).unwrap();
    assert_eq!(value, json!({ "maxCandidates": 500, "maxDepth": 4096 }));
    let back: AlignConfig = serde_json::from_value(value).unwrap();
    assert_eq!(back, config);
}
