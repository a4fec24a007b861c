// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The verification layer: checked invariants and runtime contracts.
//!
//! Two complementary approaches to catching bugs:
//!
//! 1. **Checked invariants** (`validate_basis`) that return an
//!    [`InvariantError`] for a basis that does not hold together. Use these at
//!    trust boundaries, e.g. before highlighting a basis read from JSON.
//!
//! 2. **Runtime contracts** that panic in debug builds when a pipeline stage
//!    produces something malformed. Zero-cost in release, but catch bugs
//!    during development.

pub mod contracts;
mod invariants;

pub use invariants::*;
