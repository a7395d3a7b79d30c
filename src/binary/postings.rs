// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Fixed-width posting list encoding/decoding.
//!
//! Postings are the heart of an inverted index: for each term, which documents
//! contain it and how often? The on-disk format here is deliberately dumb:
//! six bytes per entry, big-endian, no compression. Dumb is a feature - a
//! term's list is exactly `doc_freq * 6` bytes, so the reader can compute the
//! byte range from metadata alone and slice straight into any segment without
//! scanning. Delta/varint schemes save space but give up that property.
//!
//! Term frequencies are stored in 16 bits. A document that repeats a term more
//! than 65535 times loses the high bits - the mask is applied at encode time
//! and decode performs no un-masking. That precision ceiling is permanent and
//! accepted; a tf that large has long saturated every scoring formula we run.

use crate::error::Error;

// ============================================================================
// POSTING ENTRY
// ============================================================================

/// One posting: a document and the term's frequency within it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Posting {
    pub doc_id: u32,
    /// Term frequency, capped to 16 bits on encode.
    pub tf: u32,
}

// ============================================================================
// FIXED-WIDTH CODEC
// ============================================================================

/// Bytes per encoded posting: 4-byte doc id + 2-byte term frequency.
pub const ENTRY_SIZE: usize = 6;

/// Mask applied to term frequencies before encoding. Lossy by design.
pub const TF_MASK: u32 = 0xFFFF;

/// Encode a posting list into `entries.len() * 6` bytes.
///
/// Layout per entry: doc_id as big-endian u32, then tf masked to the low
/// 16 bits as big-endian u16.
pub fn encode_postings(entries: &[Posting], buf: &mut Vec<u8>) {
    buf.reserve(entries.len() * ENTRY_SIZE);
    for entry in entries {
        buf.extend_from_slice(&entry.doc_id.to_be_bytes());
        buf.extend_from_slice(&((entry.tf & TF_MASK) as u16).to_be_bytes());
    }
}

/// Decode exactly `count` postings from `bytes`.
///
/// Fails with [`Error::Format`] when the byte length disagrees with the
/// claimed count - that means the metadata and the segment bytes are out of
/// sync, and the caller must abort the query rather than score a partial list.
pub fn decode_postings(bytes: &[u8], count: usize) -> Result<Vec<Posting>, Error> {
    let expected = count * ENTRY_SIZE;
    if bytes.len() != expected {
        return Err(Error::Format {
            expected,
            actual: bytes.len(),
        });
    }

    let mut entries = Vec::with_capacity(count);
    for chunk in bytes.chunks_exact(ENTRY_SIZE) {
        let doc_id = u32::from_be_bytes([chunk[0], chunk[1], chunk[2], chunk[3]]);
        let tf = u32::from(u16::from_be_bytes([chunk[4], chunk[5]]));
        entries.push(Posting { doc_id, tf });
    }

    Ok(entries)
}
