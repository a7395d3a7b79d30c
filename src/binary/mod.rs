// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Binary format for talpa posting storage.
//!
//! The format has exactly two layers and both are boring on purpose:
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │ SEGMENT FILES (<prefix>_000.bin, <prefix>_001.bin, ...)     │
//! │   fixed capacity per file (SEGMENT_SIZE bytes)              │
//! │   raw concatenation of posting entries, no header/footer    │
//! ├─────────────────────────────────────────────────────────────┤
//! │ POSTING ENTRY (6 bytes)                                     │
//! │   doc_id: u32 big-endian                                    │
//! │   tf:     u16 big-endian (masked, lossy above 65535)        │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! Where a term's entries live is not recoverable from the segment files
//! themselves - that mapping (term -> spans, term -> doc_freq) belongs to the
//! index metadata, built offline. The bytes are bit-exact: what the build
//! pipeline wrote is what ships, which keeps checksum comparisons between
//! pipeline output and served segments meaningful.

mod postings;
mod segment;

pub use postings::{decode_postings, encode_postings, Posting, ENTRY_SIZE, TF_MASK};
pub use segment::{PostingLocation, SegmentSpan, SegmentStore, SEGMENT_SIZE};
