// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the charalign CLI.
//!
//! OneDark for dark terminals, One Light for light ones. Correct characters
//! are green, extra ones red and struck through, missing ones yellow and dim.
//! Respects `NO_COLOR` and falls back to plain text when stdout is not a TTY,
//! in which case spans are bracketed instead: `h[o]l[a]`.
//!
//! # Theme detection order
//!
//! 1. `CHARALIGN_THEME` env var ("dark" or "light")
//! 2. `COLORFGBG` env var (terminal background hint)
//! 3. macOS appearance (via defaults read)
//! 4. Default to dark theme

use std::sync::OnceLock;

use charalign::{Basis, Slot, Span, SpanKind};

// Width between │ and │ (excluding border chars)
pub const BOX_WIDTH: usize = 64;

// ═══════════════════════════════════════════════════════════════════════════
// THEME DETECTION
// ═══════════════════════════════════════════════════════════════════════════

/// Terminal color theme
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

static THEME: OnceLock<Theme> = OnceLock::new();

fn parse_theme(value: &str) -> Option<Theme> {
    match value.to_lowercase().as_str() {
        "light" | "l" => Some(Theme::Light),
        "dark" | "d" => Some(Theme::Dark),
        _ => None,
    }
}

/// Background color from a `COLORFGBG` value ("fg;bg"). 0-6 and 8 are dark.
fn theme_from_colorfgbg(value: &str) -> Option<Theme> {
    let bg = value.split(';').next_back()?.parse::<u8>().ok()?;
    Some(if bg >= 7 && bg != 8 {
        Theme::Light
    } else {
        Theme::Dark
    })
}

fn detect_theme() -> Theme {
    if let Some(theme) = std::env::var("CHARALIGN_THEME")
        .ok()
        .as_deref()
        .and_then(parse_theme)
    {
        return theme;
    }

    if let Some(theme) = std::env::var("COLORFGBG")
        .ok()
        .as_deref()
        .and_then(theme_from_colorfgbg)
    {
        return theme;
    }

    #[cfg(target_os = "macos")]
    {
        if let Ok(output) = std::process::Command::new("defaults")
            .args(["read", "-g", "AppleInterfaceStyle"])
            .output()
        {
            let stdout = String::from_utf8_lossy(&output.stdout);
            if !stdout.contains("Dark") && output.status.success() {
                return Theme::Light;
            }
        }
    }

    Theme::Dark
}

/// Get the current theme (cached)
pub fn theme() -> Theme {
    *THEME.get_or_init(detect_theme)
}

// ═══════════════════════════════════════════════════════════════════════════
// ONEDARK / ONE LIGHT COLOR PALETTES (True Color)
// ═══════════════════════════════════════════════════════════════════════════

fn rgb(r: u8, g: u8, b: u8) -> String {
    format!("\x1b[38;2;{};{};{}m", r, g, b)
}

pub const RESET: &str = "\x1b[0m";
pub const BOLD: &str = "\x1b[1m";
pub const DIM: &str = "\x1b[2m";
pub const STRIKE: &str = "\x1b[9m";

mod onedark {
    pub const RED: (u8, u8, u8) = (224, 108, 117); // #e06c75
    pub const GREEN: (u8, u8, u8) = (152, 195, 121); // #98c379
    pub const YELLOW: (u8, u8, u8) = (229, 192, 123); // #e5c07b
    pub const CYAN: (u8, u8, u8) = (86, 182, 194); // #56b6c2
    pub const GRAY: (u8, u8, u8) = (92, 99, 112); // #5c6370
}

mod onelight {
    pub const RED: (u8, u8, u8) = (228, 86, 73); // #e45649
    pub const GREEN: (u8, u8, u8) = (80, 161, 79); // #50a14f
    pub const YELLOW: (u8, u8, u8) = (193, 132, 1); // #c18401
    pub const CYAN: (u8, u8, u8) = (1, 132, 188); // #0184bc
    pub const GRAY: (u8, u8, u8) = (160, 161, 167); // #a0a1a7
}

macro_rules! theme_color {
    ($name:ident) => {
        #[allow(non_snake_case)]
        pub fn $name() -> String {
            let (r, g, b) = match theme() {
                Theme::Dark => onedark::$name,
                Theme::Light => onelight::$name,
            };
            rgb(r, g, b)
        }
    };
}

theme_color!(RED);
theme_color!(GREEN);
theme_color!(YELLOW);
theme_color!(CYAN);
theme_color!(GRAY);

// ═══════════════════════════════════════════════════════════════════════════
// CORE UTILITIES
// ═══════════════════════════════════════════════════════════════════════════

/// Check if colors should be used (TTY detection)
pub fn use_colors() -> bool {
    if std::env::var("NO_COLOR").is_ok() {
        return false;
    }
    atty::is(atty::Stream::Stdout)
}

/// Apply theme color with optional modifiers
pub fn themed(color_fn: fn() -> String, modifiers: &[&str], text: &str) -> String {
    if use_colors() {
        format!("{}{}{}{}", modifiers.join(""), color_fn(), text, RESET)
    } else {
        text.to_string()
    }
}

/// Calculate visible length (excluding ANSI codes)
pub fn visible_len(s: &str) -> usize {
    let mut in_escape = false;
    let mut len = 0;
    for c in s.chars() {
        if c == '\x1b' {
            in_escape = true;
        } else if in_escape && c == 'm' {
            in_escape = false;
        } else if !in_escape {
            len += 1;
        }
    }
    len
}

/// Right-pad a styled string to a fixed visible width
pub fn pad_right(s: &str, width: usize) -> String {
    let visible = visible_len(s);
    if visible >= width {
        s.to_string()
    } else {
        format!("{}{}", s, " ".repeat(width - visible))
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// BOX DRAWING
// ═══════════════════════════════════════════════════════════════════════════

/// Print a content line: │ content          │
pub fn row(content: &str) {
    let border = themed(GRAY, &[], "│");
    println!("{}{}{}", border, pad_right(content, BOX_WIDTH), border);
}

fn labelled_rule(left: char, right: char, label: &str) -> String {
    let label_part = format!("─ {} ", themed(CYAN, &[BOLD], label));
    let remaining = BOX_WIDTH.saturating_sub(visible_len(&label_part));
    format!(
        "{}{}{}",
        themed(GRAY, &[], &left.to_string()),
        label_part,
        themed(GRAY, &[], &format!("{}{}", "─".repeat(remaining), right))
    )
}

/// Print section header: ┌─ LABEL ──────────┐
pub fn section_top(label: &str) {
    println!("{}", labelled_rule('┌', '┐', label));
}

/// Print section divider: ├─ LABEL ──────────┤
pub fn section_mid(label: &str) {
    println!("{}", labelled_rule('├', '┤', label));
}

/// Print section footer: └──────────────────┘
pub fn section_bot() {
    println!("{}", themed(GRAY, &[], &format!("└{}┘", "─".repeat(BOX_WIDTH))));
}

// ═══════════════════════════════════════════════════════════════════════════
// SEMANTIC FORMATTERS
// ═══════════════════════════════════════════════════════════════════════════

/// Style one span; brackets stand in for color on plain output.
pub fn span(span: &Span) -> String {
    if !use_colors() {
        return match span.kind {
            SpanKind::Correct => span.text.clone(),
            SpanKind::Extra => format!("[{}]", span.text),
            SpanKind::Missing => format!("({})", span.text),
        };
    }
    match span.kind {
        SpanKind::Correct => themed(GREEN, &[BOLD], &span.text),
        SpanKind::Extra => themed(RED, &[STRIKE], &span.text),
        SpanKind::Missing => themed(YELLOW, &[DIM], &span.text),
    }
}

/// Style a run of spans as one line.
pub fn spans(spans: &[Span]) -> String {
    spans.iter().map(span).collect()
}

/// A slot as a fixed-width cell: the index, or `·` when unmatched.
pub fn slot_cell(slot: Slot) -> String {
    match slot {
        Slot::Matched(index) => format!("{:>3}", index),
        Slot::Unmatched => themed(GRAY, &[], "  ·"),
    }
}

/// Indices as fixed-width cells.
pub fn index_cells(indices: &[usize]) -> String {
    indices.iter().map(|i| format!("{:>3}", i)).collect()
}

/// Share of accurate characters typed correctly, colored by how good it is.
pub fn accuracy(basis: &Basis) -> String {
    let total = basis.source_sequence.len().max(basis.sequence.len());
    if total == 0 {
        return themed(GRAY, &[], "   N/A");
    }
    let pct = basis.correct_count() as f64 / total as f64 * 100.0;
    let text = format!("{:>5.1}%", pct);
    if pct >= 90.0 {
        themed(GREEN, &[BOLD], &text)
    } else if pct >= 50.0 {
        themed(YELLOW, &[], &text)
    } else {
        themed(RED, &[BOLD], &text)
    }
}

// ═══════════════════════════════════════════════════════════════════════════
// TESTS
// ═══════════════════════════════════════════════════════════════════════════
