// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Error types for the alignment engine.
//!
//! The engine itself is total: for any pair of texts there is a basis. The only
//! way to fail is to hit one of the resource ceilings in [`AlignConfig`], or to
//! hand it a configuration that makes no sense.
//!
//! [`AlignConfig`]: crate::AlignConfig

use thiserror::Error;

/// Result type alias using the crate's [`AlignError`].
pub type Result<T> = std::result::Result<T, AlignError>;

/// All the ways a basis calculation can refuse to finish.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AlignError {
    /// The candidate generator would emit more sequences than allowed.
    #[error("candidate limit exceeded: more than {limit} candidate sequences")]
    CandidateLimit { limit: usize },

    /// The trimmed compared text is longer than the search may go deep.
    #[error("depth limit exceeded: {depth} characters to align, limit is {limit}")]
    DepthLimit { depth: usize, limit: usize },

    /// A ceiling is zero or an environment override did not parse.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl AlignError {
    /// True for the errors that come from a resource ceiling tripping.
    pub fn is_resource_limit(&self) -> bool {
        matches!(
            self,
            AlignError::CandidateLimit { .. } | AlignError::DepthLimit { .. }
        )
    }
}
