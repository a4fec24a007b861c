// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the charalign command-line interface.
//!
//! Three subcommands: `align` to compare a typed text against the text it
//! should have been, `lis` to run the longest increasing subsequence solver on
//! its own, and `common` to measure shared content between two texts.

pub mod display;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(
    name = "charalign",
    about = "Character-level alignment of a typed text against the accurate one",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Align a compared text against an accurate text
    Align {
        /// The reference text
        accurate: String,

        /// The text to grade
        compared: String,

        /// Print the basis as JSON instead of a table
        #[arg(long)]
        json: bool,

        /// Abort after this many candidate sequences
        ///
        /// Overrides CHARALIGN_MAX_CANDIDATES.
        #[arg(long)]
        max_candidates: Option<usize>,

        /// Reject compared texts whose untrimmed middle is longer than this
        ///
        /// Overrides CHARALIGN_MAX_DEPTH.
        #[arg(long)]
        max_depth: Option<usize>,
    },

    /// Print the longest increasing subsequence of a list of integers
    Lis {
        /// The sequence
        #[arg(required = true, allow_negative_numbers = true)]
        values: Vec<i64>,
    },

    /// Count shared characters and find a long shared run
    Common {
        /// First text
        a: String,

        /// Second text
        b: String,
    },
}
