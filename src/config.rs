// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Resource ceilings for the candidate search.
//!
//! Candidate generation grows combinatorially with runs of repeated characters,
//! so every calculation runs under two ceilings: how many candidate sequences
//! may be emitted, and how many characters the search may go deep after the
//! common prefix and suffix are trimmed off. Hitting either one fails fast with
//! an [`AlignError`] instead of spinning.
//!
//! Defaults are generous for sentence-sized input. Callers aligning whole
//! paragraphs should segment first; callers who really want the unbounded
//! search can ask for [`AlignConfig::unbounded`].

use serde::{Deserialize, Serialize};

use crate::error::{AlignError, Result};

/// Environment variable overriding [`AlignConfig::max_candidates`].
pub const ENV_MAX_CANDIDATES: &str = "CHARALIGN_MAX_CANDIDATES";

/// Environment variable overriding [`AlignConfig::max_depth`].
pub const ENV_MAX_DEPTH: &str = "CHARALIGN_MAX_DEPTH";

/// Default ceiling on emitted candidate sequences.
pub const DEFAULT_MAX_CANDIDATES: usize = 100_000;

/// Default ceiling on the trimmed compared-text length.
pub const DEFAULT_MAX_DEPTH: usize = 4_096;

/// Ceilings applied to a single basis calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AlignConfig {
    /// Maximum number of candidate sequences the generator may emit.
    pub max_candidates: usize,
    /// Maximum number of compared-text characters left after affix trimming.
    pub max_depth: usize,
}

impl Default for AlignConfig {
    fn default() -> Self {
        Self {
            max_candidates: DEFAULT_MAX_CANDIDATES,
            max_depth: DEFAULT_MAX_DEPTH,
        }
    }
}

impl AlignConfig {
    /// No ceilings at all. The search may run for a very long time.
    pub fn unbounded() -> Self {
        Self {
            max_candidates: usize::MAX,
            max_depth: usize::MAX,
        }
    }

    pub fn with_max_candidates(mut self, max_candidates: usize) -> Self {
        self.max_candidates = max_candidates;
        self
    }

    pub fn with_max_depth(mut self, max_depth: usize) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Defaults, overridden by `CHARALIGN_MAX_CANDIDATES` / `CHARALIGN_MAX_DEPTH`.
    pub fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let config = Self {
            max_candidates: env_or_usize(ENV_MAX_CANDIDATES, defaults.max_candidates)?,
            max_depth: env_or_usize(ENV_MAX_DEPTH, defaults.max_depth)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Reject ceilings that would refuse every input.
    ///
    /// Even an empty compared text produces one candidate, so a zero candidate
    /// ceiling can never succeed.
    pub fn validate(&self) -> Result<()> {
        if self.max_candidates == 0 {
            return Err(AlignError::InvalidConfig(
                "max_candidates must be at least 1".to_string(),
            ));
        }
        if self.max_depth == 0 {
            return Err(AlignError::InvalidConfig(
                "max_depth must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

fn env_or_usize(key: &str, default: usize) -> Result<usize> {
    match std::env::var(key) {
        Ok(value) => parse_ceiling(key, &value),
        Err(_) => Ok(default),
    }
}

/// Parse a ceiling value. Accepts `_` separators and `unlimited`.
fn parse_ceiling(key: &str, value: &str) -> Result<usize> {
    let trimmed = value.trim();
    if trimmed.eq_ignore_ascii_case("unlimited") || trimmed.eq_ignore_ascii_case("max") {
        return Ok(usize::MAX);
    }
    trimmed
        .replace('_', "")
        .parse::<usize>()
        .map_err(|e| AlignError::InvalidConfig(format!("{key}={value:?}: {e}")))
}
