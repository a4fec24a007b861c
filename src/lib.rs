// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Character-level alignment of a compared text against an accurate text.
//!
//! Given what someone typed (the *compared* text) and what they should have
//! typed (the *accurate* text), [`calculate_basis`] works out which typed
//! characters are correct, which are extra, and which accurate characters are
//! missing. Comparison ignores case.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  utils.rs   │────▶│   affix.rs   │────▶│ generator.rs │
//! │   (fold)    │     │ (trim common │     │ (candidate   │
//! │             │     │  prefix and  │     │  sequences,  │
//! │             │     │  suffix)     │     │  DFS)        │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!                                                 │
//!                                                 ▼
//! ┌─────────────┐     ┌──────────────┐     ┌──────────────┐
//! │  basis.rs   │◀────│  select.rs   │◀────│    lis.rs    │
//! │ (assemble,  │     │ (longest LIS,│     │ (O(n log n)  │
//! │  Basis)     │     │  smallest    │     │  longest     │
//! │             │     │  sum)        │     │  increasing) │
//! └─────────────┘     └──────────────┘     └──────────────┘
//!        │
//!        ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     verify/                         │
//! │  (validate_basis, debug-build contracts)            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Usage
//!
//! ```
//! use charalign::{calculate_basis, Slot};
//!
//! let basis = calculate_basis("hola", "Hello").unwrap();
//! assert_eq!(basis.subsequence, vec![0, 2]);        // "H" and the first "l"
//! assert_eq!(basis.missing_elements, vec![1, 3, 4]); // "e", "l", "o"
//! assert_eq!(basis.sequence[3], Slot::Unmatched);    // "a" is not in "Hello"
//! ```
//!
//! The search is exponential in the worst case. [`AlignConfig`] caps it, and
//! [`calculate_basis`] uses the default caps.

// Module declarations
mod affix;
mod basis;
mod common;
pub mod config;
pub mod error;
mod generator;
mod highlight;
mod lis;
mod positions;
mod select;
#[doc(hidden)]
pub mod testing;
mod types;
pub mod utils;
pub mod verify;

// Re-exports for public API
pub use affix::{trim_common_affixes, Trimmed};
pub use basis::{assemble_basis, calculate_basis, calculate_basis_with, Aligner};
pub use common::{count_common_chars, find_common_part, find_common_part_chars, CommonPart};
pub use config::AlignConfig;
pub use error::{AlignError, Result};
pub use generator::{generate_candidates, visit_candidates};
pub use highlight::{highlight, Highlight, Span, SpanKind};
pub use lis::{lis_length, longest_increasing_subsequence};
pub use positions::{char_positions, CharPositionMap};
pub use select::{make_pairs, pick_best_pair, PairSelector};
pub use types::{matched_indices, Basis, Pair, Slot};
pub use verify::{validate_basis, InvariantError};
