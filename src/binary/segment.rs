// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Segmented posting storage: resolving a term's byte range across files.
//!
//! Posting lists for a whole index don't fit in one file the build pipeline
//! can stream out, so they're packed into fixed-size segments. A term's bytes
//! start wherever the writer happened to be, which means a single list can end
//! in one segment and continue at offset 0 of the next. The reader's job is to
//! make that invisible: hand it a [`PostingLocation`] and a byte count, get
//! back one contiguous buffer.
//!
//! File handles are scoped to a single `read` call. Each touched segment is
//! opened, read, and dropped before the call returns - on the error paths too,
//! since the handle lives in a loop-local binding. Nothing here caches or
//! pools descriptors; the OS page cache does the heavy lifting for repeated
//! reads of hot segments.

use std::fs::File;
use std::io::{Read, Seek, SeekFrom};
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Default segment capacity in bytes. Divisible by the 6-byte entry size, so
/// a segment boundary can still split an entry's bytes only across spans the
/// writer recorded, never mid-file without a following span.
pub const SEGMENT_SIZE: u64 = 1_999_998;

// ============================================================================
// POSTING LOCATION
// ============================================================================

/// One contiguous run of posting bytes inside a single segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SegmentSpan {
    pub segment_id: u32,
    pub offset: u64,
}

/// Where a term's posting bytes live: an ordered list of spans.
///
/// Reading `n` bytes walks the spans in order, taking from each span until
/// either the request is satisfied or the span's segment runs out of room,
/// then continuing with the next span. The locator is opaque to everything
/// except the segment store; scorers never look inside.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostingLocation(pub Vec<SegmentSpan>);

// ============================================================================
// SEGMENT STORE
// ============================================================================

/// A named collection of fixed-size segment files in one directory.
///
/// Segment `i` lives at `dir/<prefix>_<iii>.bin`. The store is read-only at
/// query time; writers live in the offline build pipeline (and in
/// `testing::SegmentWriter` for fixtures).
#[derive(Debug, Clone)]
pub struct SegmentStore {
    dir: PathBuf,
    prefix: String,
    segment_size: u64,
}

impl SegmentStore {
    pub fn new(dir: impl AsRef<Path>, prefix: impl Into<String>) -> Self {
        SegmentStore {
            dir: dir.as_ref().to_path_buf(),
            prefix: prefix.into(),
            segment_size: SEGMENT_SIZE,
        }
    }

    /// Override the segment capacity. Tests use tiny segments to force a
    /// single posting list across several files.
    pub fn with_segment_size(mut self, segment_size: u64) -> Self {
        self.segment_size = segment_size;
        self
    }

    #[inline]
    pub fn segment_size(&self) -> u64 {
        self.segment_size
    }

    /// Path of segment `segment_id`.
    pub fn segment_path(&self, segment_id: u32) -> PathBuf {
        self.dir.join(format!("{}_{:03}.bin", self.prefix, segment_id))
    }

    /// Read exactly `byte_len` logical bytes starting at `location`,
    /// concatenating across segment boundaries as needed.
    ///
    /// Fails with [`Error::Storage`] when a touched segment is missing or
    /// truncated, and with [`Error::ShortRead`] when the location's spans are
    /// exhausted before `byte_len` bytes were produced. Either way the whole
    /// query aborts; there is no partially-read success path.
    pub fn read(&self, location: &PostingLocation, byte_len: usize) -> Result<Vec<u8>, Error> {
        let mut out = Vec::with_capacity(byte_len);
        let mut remaining = byte_len;

        for span in &location.0 {
            if remaining == 0 {
                break;
            }
            let span_capacity = self.segment_size.saturating_sub(span.offset) as usize;
            let take = remaining.min(span_capacity);
            if take == 0 {
                continue;
            }

            let path = self.segment_path(span.segment_id);
            let mut file = File::open(&path).map_err(|source| Error::Storage {
                path: path.display().to_string(),
                source,
            })?;
            file.seek(SeekFrom::Start(span.offset))
                .map_err(|source| Error::Storage {
                    path: path.display().to_string(),
                    source,
                })?;

            let start = out.len();
            out.resize(start + take, 0);
            file.read_exact(&mut out[start..]).map_err(|source| Error::Storage {
                path: path.display().to_string(),
                source,
            })?;

            remaining -= take;
        }

        if remaining > 0 {
            return Err(Error::ShortRead {
                requested: byte_len,
                read: out.len(),
            });
        }

        Ok(out)
    }
}
