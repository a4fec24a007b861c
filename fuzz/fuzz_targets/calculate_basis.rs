// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fuzz target for the full alignment pipeline.
//!
//! Any pair of strings either aligns into a well-formed basis or trips a
//! resource ceiling. Panics, malformed bases, and any other error are bugs.

#![no_main]

use arbitrary::Arbitrary;
use charalign::{calculate_basis_with, highlight, AlignConfig};
use libfuzzer_sys::fuzz_target;

/// Fuzz input for alignment
#[derive(Debug, Arbitrary)]
struct AlignInput {
    compared_bytes: Vec<u8>,
    accurate_bytes: Vec<u8>,
}

/// Keep the search small enough to finish inside a fuzz iteration.
const MAX_CHARS: usize = 24;

fn capped(bytes: &[u8]) -> String {
    String::from_utf8_lossy(bytes).chars().take(MAX_CHARS).collect()
}

fuzz_target!(|input: AlignInput| {
    let compared = capped(&input.compared_bytes);
    let accurate = capped(&input.accurate_bytes);
    let config = AlignConfig::default().with_max_candidates(10_000);

    match calculate_basis_with(&compared, &accurate, &config) {
        Ok(basis) => {
            let compared_len = compared.chars().count();
            if let Err(e) = basis.validate(compared_len) {
                panic!("malformed basis for {:?} / {:?}: {}", compared, accurate, e);
            }
            assert_eq!(basis.source_sequence.len(), accurate.chars().count());
            if let Err(e) = highlight(&compared, &accurate, &basis) {
                panic!("highlight rejected its own basis: {}", e);
            }
        }
        Err(e) => assert!(e.is_resource_limit(), "unexpected error: {}", e),
    }
});
