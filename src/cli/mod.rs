// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! CLI definitions for the talpa command-line interface.
//!
//! Two subcommands: `search` to run a query against an index directory, and
//! `inspect` to examine one - metadata counts plus a CRC32 per segment file,
//! which is the quickest way to tell a corrupted sync from a scoring bug.
//!
//! An index directory is the unit of deployment: one `metadata.json` next to
//! its `postings_*.bin` segments. The fused scorer takes a second directory
//! for the title index.

pub mod display;

use clap::{Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(
    name = "talpa",
    about = "Ranked retrieval over segmented inverted indexes",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run a query against an index directory
    Search {
        /// Index directory (metadata.json + postings_*.bin)
        #[arg(short, long)]
        index: String,

        /// The free-text query
        #[arg(short, long)]
        query: String,

        /// Scoring model to use
        #[arg(long, value_enum, default_value = "bm25")]
        scorer: Scorer,

        /// Title index directory (required by the fused scorer)
        #[arg(long)]
        title_index: Option<String>,

        /// Body weight for the fused scorer
        #[arg(long, default_value_t = 0.6)]
        text_weight: f64,

        /// Title weight for the fused scorer
        #[arg(long, default_value_t = 0.4)]
        title_weight: f64,
    },

    /// Show metadata counts and per-segment checksums for an index directory
    Inspect {
        /// Index directory (metadata.json + postings_*.bin)
        #[arg(short, long)]
        index: String,
    },
}

/// Which ranking entry point `search` drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Scorer {
    /// TF-IDF cosine similarity over a body index (top 100)
    Cosine,
    /// Okapi BM25 (top 100)
    Bm25,
    /// Distinct-term match count over a title/anchor index (unbounded)
    Field,
    /// Weighted fusion of body and title BM25 passes (top 100)
    Fused,
}
