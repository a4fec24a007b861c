//! Custom cargo commands for the charalign crate.
//!
//! Usage:
//!   cargo xtask test      - Run all tests
//!   cargo xtask check     - Quick check (check + test + clippy)
//!   cargo xtask bench     - Run benchmarks
//!   cargo xtask fuzz      - Run every fuzz target for a short while
//!   cargo xtask kani      - Run the Kani proofs

use anyhow::{bail, Context, Result};
use std::env;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Fuzz targets under fuzz/fuzz_targets.
const FUZZ_TARGETS: &[&str] = &["calculate_basis", "lis"];

/// Seconds per fuzz target unless overridden by the second argument.
const DEFAULT_FUZZ_SECONDS: u64 = 60;

fn main() -> Result<()> {
    let mut args = env::args().skip(1);
    let task = args.next();
    match task.as_deref() {
        Some("test") => test()?,
        Some("check") => check()?,
        Some("bench") => bench()?,
        Some("fuzz") => fuzz(args.next().as_deref())?,
        Some("kani") => kani()?,
        _ => print_help(),
    }
    Ok(())
}

fn print_help() {
    eprintln!(
        r#"
cargo xtask <COMMAND>

Commands:
  test            Run all Rust tests
  check           Quick check (cargo check + test + clippy)
  bench           Run benchmarks
  fuzz [SECONDS]  Run every fuzz target (default {DEFAULT_FUZZ_SECONDS}s each)
  kani            Run Kani model checking proofs
"#
    );
}

/// Run all tests
fn test() -> Result<()> {
    run_cargo(&["test"], &project_root()?)
}

/// Quick check
fn check() -> Result<()> {
    let root = project_root()?;
    println!("Running quick checks...\n");

    println!("[1/3] cargo check...");
    run_cargo(&["check", "--all-targets"], &root)?;

    println!("[2/3] cargo test...");
    run_cargo(&["test", "--quiet"], &root)?;

    println!("[3/3] cargo clippy...");
    run_cargo(&["clippy", "--quiet", "--", "-D", "warnings"], &root)?;

    println!("\n✓ Quick checks passed");
    Ok(())
}

/// Run benchmarks
fn bench() -> Result<()> {
    run_cargo(&["bench"], &project_root()?)
}

/// Run each fuzz target for a bounded time
fn fuzz(seconds: Option<&str>) -> Result<()> {
    let seconds = match seconds {
        Some(s) => s
            .parse::<u64>()
            .with_context(|| format!("invalid fuzz duration {:?}", s))?,
        None => DEFAULT_FUZZ_SECONDS,
    };
    let root = project_root()?;
    let max_time = format!("-max_total_time={}", seconds);

    for (i, target) in FUZZ_TARGETS.iter().enumerate() {
        println!("[{}/{}] fuzzing {} for {}s...", i + 1, FUZZ_TARGETS.len(), target, seconds);
        run_cargo(&["+nightly", "fuzz", "run", target, "--", &max_time], &root)?;
    }

    println!("\n✓ No fuzz failures");
    Ok(())
}

/// Run Kani proofs
fn kani() -> Result<()> {
    let dir = project_root()?.join("kani-proofs");
    if !dir.exists() {
        println!("  (no kani-proofs directory, skipping)");
        return Ok(());
    }
    run_cargo(&["kani"], &dir)
}

// ============================================================================
// Helper functions
// ============================================================================

fn project_root() -> Result<PathBuf> {
    let manifest_dir = match env::var("CARGO_MANIFEST_DIR") {
        Ok(dir) => PathBuf::from(dir),
        Err(_) => env::current_dir().context("Failed to read current directory")?,
    };

    // xtask is in project_root/xtask, so go up one level
    let root = manifest_dir.parent().unwrap_or(&manifest_dir);
    Ok(root.to_path_buf())
}

fn run_cargo(args: &[&str], dir: &Path) -> Result<()> {
    let status = Command::new("cargo")
        .args(args)
        .current_dir(dir)
        .status()
        .with_context(|| format!("Failed to run cargo {:?}", args))?;

    if !status.success() {
        bail!("cargo {:?} failed", args);
    }

    Ok(())
}
