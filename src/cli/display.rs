// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Terminal display utilities for the talpa CLI.
//!
//! Plain column output with a little ANSI color where it helps. Respects
//! `NO_COLOR` and falls back to uncolored output when stdout is not a TTY,
//! so piping results into other tools stays clean.

use std::sync::OnceLock;

use talpa::ScoredDoc;

static USE_COLOR: OnceLock<bool> = OnceLock::new();

/// Whether to emit ANSI color codes (cached).
fn use_color() -> bool {
    *USE_COLOR.get_or_init(|| {
        std::env::var_os("NO_COLOR").is_none() && atty::is(atty::Stream::Stdout)
    })
}

fn paint(code: &str, text: &str) -> String {
    if use_color() {
        format!("\x1b[{}m{}\x1b[0m", code, text)
    } else {
        text.to_string()
    }
}

fn dim(text: &str) -> String {
    paint("2", text)
}

fn cyan(text: &str) -> String {
    paint("36", text)
}

fn bold(text: &str) -> String {
    paint("1", text)
}

/// Print a ranked result list, one row per document.
pub fn print_results(results: &[ScoredDoc]) {
    if results.is_empty() {
        println!("{}", dim("no matching documents"));
        return;
    }

    println!("{}", bold(&format!("{:>4}  {:>12}  {}", "#", "doc_id", "score")));
    for (rank, doc) in results.iter().enumerate() {
        println!(
            "{:>4}  {:>12}  {}",
            rank + 1,
            cyan(&doc.doc_id.to_string()),
            format_score(doc.score)
        );
    }
    println!("{}", dim(&format!("{} result(s)", results.len())));
}

/// Print one inspect row for a segment file.
pub fn print_segment_row(name: &str, bytes: u64, crc32: u32) {
    println!(
        "  {:<24} {:>12} bytes  crc32 {}",
        name,
        bytes,
        cyan(&format!("{:08x}", crc32))
    );
}

/// Print the metadata summary header for inspect.
pub fn print_index_summary(doc_count: u64, term_count: usize, norm_count: usize) {
    println!("{}", bold("index metadata"));
    println!("  documents: {}", doc_count);
    println!("  terms:     {}", term_count);
    println!("  norms:     {}", norm_count);
}

fn format_score(score: f64) -> String {
    format!("{:.6}", score)
}
