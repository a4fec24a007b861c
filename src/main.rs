// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use charalign::{
    count_common_chars, find_common_part, highlight, longest_increasing_subsequence, AlignConfig,
    Aligner,
};

mod cli;
use cli::display::{
    accuracy, index_cells, row, section_bot, section_mid, section_top, slot_cell, spans, themed,
    CYAN, GRAY,
};
use cli::{Cli, Commands};

fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "warn".into()))
        .with_writer(std::io::stderr)
        .init();
}

fn main() {
    init_logging();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Align {
            accurate,
            compared,
            json,
            max_candidates,
            max_depth,
        } => run_align(&accurate, &compared, json, max_candidates, max_depth),
        Commands::Lis { values } => {
            run_lis(&values);
            Ok(())
        }
        Commands::Common { a, b } => {
            run_common(&a, &b);
            Ok(())
        }
    };

    if let Err(e) = result {
        eprintln!("❌ {:#}", e);
        std::process::exit(1);
    }
}

/// Environment first, flags on top.
fn resolve_config(max_candidates: Option<usize>, max_depth: Option<usize>) -> Result<AlignConfig> {
    let mut config = AlignConfig::from_env()?;
    if let Some(limit) = max_candidates {
        config = config.with_max_candidates(limit);
    }
    if let Some(limit) = max_depth {
        config = config.with_max_depth(limit);
    }
    config.validate()?;
    debug!(?config, "resolved configuration");
    Ok(config)
}

fn run_align(
    accurate: &str,
    compared: &str,
    json: bool,
    max_candidates: Option<usize>,
    max_depth: Option<usize>,
) -> Result<()> {
    let config = resolve_config(max_candidates, max_depth)?;
    let basis = Aligner::new(config).align(compared, accurate)?;

    if json {
        let out = serde_json::to_string_pretty(&basis).context("serializing basis")?;
        println!("{}", out);
        return Ok(());
    }

    let spans_by_text = highlight(compared, accurate, &basis)?;
    let sequence: String = basis.sequence.iter().map(|&slot| slot_cell(slot)).collect();

    section_top("TEXTS");
    row(&format!(" accurate  {}", spans(&spans_by_text.accurate)));
    row(&format!(" compared  {}", spans(&spans_by_text.compared)));
    section_mid("BASIS");
    row(&format!(" source    {}", index_cells(&basis.source_sequence)));
    row(&format!(" sequence  {}", sequence));
    row(&format!(" subseq    {}", index_cells(&basis.subsequence)));
    row(&format!(" missing   {}", index_cells(&basis.missing_elements)));
    section_mid("SUMMARY");
    row(&format!(
        " correct {}  extra {}  missing {}  accuracy {}",
        themed(CYAN, &[], &basis.correct_count().to_string()),
        themed(CYAN, &[], &basis.extra_count().to_string()),
        themed(CYAN, &[], &basis.missing_count().to_string()),
        accuracy(&basis)
    ));
    section_bot();
    Ok(())
}

fn run_lis(values: &[i64]) {
    let lis = longest_increasing_subsequence(values);
    let rendered: Vec<String> = lis.iter().map(i64::to_string).collect();
    println!("{}", rendered.join(" "));
    println!("{}", themed(GRAY, &[], &format!("length {}", lis.len())));
}

fn run_common(a: &str, b: &str) {
    println!("common characters: {}", count_common_chars(a, b));
    match find_common_part(a, b) {
        Some(part) => {
            let run: String = b.chars().skip(part.index_b).take(part.len).collect();
            println!(
                "common part: {:?} at {} in first, {} in second",
                run, part.index_a, part.index_b
            );
        }
        None => println!("{}", themed(GRAY, &[], "no common part")),
    }
}
