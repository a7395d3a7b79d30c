//! Test utilities shared across unit and integration tests.
//!
//! This module is always compiled but hidden from documentation. It carries
//! the minimal writer half of the segment format so fixtures can build real
//! on-disk indexes without depending on the (external) build pipeline.

#![doc(hidden)]

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use crate::binary::{encode_postings, Posting, PostingLocation, SegmentSpan};
use crate::index::IndexMetadata;

/// Appends posting bytes into fixed-size segment files, rolling over at
/// capacity, and reports where each write landed.
///
/// This mirrors what the offline pipeline does, scaled down to fixtures:
/// segments fill in order, and a write that does not fit in the current
/// segment continues at offset 0 of the next one - which is exactly the
/// boundary-straddling case the reader has to handle.
pub struct SegmentWriter {
    dir: PathBuf,
    prefix: String,
    segment_size: u64,
    current: u32,
    used: u64,
}

impl SegmentWriter {
    pub fn new(dir: impl AsRef<Path>, prefix: impl Into<String>, segment_size: u64) -> Self {
        SegmentWriter {
            dir: dir.as_ref().to_path_buf(),
            prefix: prefix.into(),
            segment_size,
            current: 0,
            used: 0,
        }
    }

    fn segment_path(&self, segment_id: u32) -> PathBuf {
        self.dir.join(format!("{}_{:03}.bin", self.prefix, segment_id))
    }

    /// Append `bytes`, splitting across segments as needed, and return the
    /// spans a reader needs to get them back.
    pub fn append(&mut self, bytes: &[u8]) -> io::Result<PostingLocation> {
        let mut spans = Vec::new();
        let mut remaining = bytes;

        while !remaining.is_empty() {
            if self.used >= self.segment_size {
                self.current += 1;
                self.used = 0;
            }

            let capacity = (self.segment_size - self.used) as usize;
            let take = remaining.len().min(capacity);
            let mut file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(self.segment_path(self.current))?;
            file.write_all(&remaining[..take])?;

            spans.push(SegmentSpan {
                segment_id: self.current,
                offset: self.used,
            });
            self.used += take as u64;
            remaining = &remaining[take..];
        }

        Ok(PostingLocation(spans))
    }
}

/// Encode `postings`, write them through `writer`, and register the term in
/// `index` with the resulting location and df.
pub fn add_term<N>(
    index: &mut IndexMetadata<N>,
    writer: &mut SegmentWriter,
    term: &str,
    postings: &[Posting],
) -> io::Result<()> {
    let mut buf = Vec::new();
    encode_postings(postings, &mut buf);
    let location = writer.append(&buf)?;
    index.insert_term(term, postings.len() as u64, location);
    Ok(())
}

/// Shorthand for a posting entry.
pub fn posting(doc_id: u32, tf: u32) -> Posting {
    Posting { doc_id, tf }
}
