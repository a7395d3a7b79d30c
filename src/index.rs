// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Read-only index metadata: what the offline build pipeline hands us.
//!
//! Per index we get four tables: total document count, per-term document
//! frequency, per-term posting location, and per-document normalization data.
//! The first three look the same for every scorer. The fourth does not - and
//! that mismatch is load-bearing. Cosine needs `(max_tf, sq_weight_sum)` per
//! document; BM25 needs a single precomputed length factor. The two shapes are
//! built by different pipelines for different index instances and must never
//! be mixed within one scoring call.
//!
//! Rather than one loosely-typed table and a prayer, the shape is a type
//! parameter: [`CosineIndex`] and [`Bm25Index`] are distinct types, and a
//! scorer that wants cosine norms cannot be handed a BM25 index. The
//! title/anchor match-count path reads no norms at all, so it gets
//! [`FieldIndex`] with a unit payload. Cross-wiring is a compile error, not a
//! 3am page.
//!
//! Lookups for unknown terms or documents return `None`. A term the query
//! mentions but the corpus never saw is normal traffic, not an error.

use std::collections::HashMap;
use std::fs::File;
use std::io::{BufReader, BufWriter};
use std::path::Path;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use crate::binary::PostingLocation;
use crate::error::Error;

// ============================================================================
// NORM SHAPES
// ============================================================================

/// Per-document normalization data for the cosine scorer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CosineNorm {
    /// The document's highest term frequency; tf weights are scaled by it.
    pub max_tf: f64,
    /// Sum of squared tf-idf weights over the document's terms.
    pub sq_weight_sum: f64,
}

/// Per-document normalization data for the BM25 scorer.
///
/// The scalar already encodes `k1 * (1 - b + b * doc_len / avg_doc_len)` from
/// offline computation. The scorer treats it as opaque and never recomputes
/// length normalization itself.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bm25Norm(pub f64);

// ============================================================================
// INDEX METADATA
// ============================================================================

/// Metadata for one index instance, parameterized by its norm shape.
///
/// Owned by the offline build pipeline; the query engine holds it read-only
/// for the lifetime of a query. Hot swaps (out of scope here) must replace the
/// whole handle atomically so in-flight queries keep a consistent snapshot.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IndexMetadata<N> {
    doc_count: u64,
    doc_freq: HashMap<String, u64>,
    posting_locs: HashMap<String, PostingLocation>,
    norms: HashMap<u32, N>,
}

/// Body index scored with TF-IDF cosine similarity.
pub type CosineIndex = IndexMetadata<CosineNorm>;

/// Index scored with BM25.
pub type Bm25Index = IndexMetadata<Bm25Norm>;

/// Title/anchor index scored by query-term match count; carries no norms.
pub type FieldIndex = IndexMetadata<()>;

impl<N> IndexMetadata<N> {
    pub fn new(doc_count: u64) -> Self {
        IndexMetadata {
            doc_count,
            doc_freq: HashMap::new(),
            posting_locs: HashMap::new(),
            norms: HashMap::new(),
        }
    }

    /// Total indexed documents (the `N` of every idf formula).
    #[inline]
    pub fn doc_count(&self) -> u64 {
        self.doc_count
    }

    /// Number of distinct terms with posting lists.
    #[inline]
    pub fn term_count(&self) -> usize {
        self.doc_freq.len()
    }

    /// Number of documents with norm entries.
    #[inline]
    pub fn norm_count(&self) -> usize {
        self.norms.len()
    }

    /// Document frequency of `term`, or `None` when the corpus never saw it.
    ///
    /// Invariant for present terms: `1 <= df <= doc_count`.
    #[inline]
    pub fn doc_freq(&self, term: &str) -> Option<u64> {
        self.doc_freq.get(term).copied()
    }

    /// Where `term`'s posting bytes live.
    #[inline]
    pub fn posting_location(&self, term: &str) -> Option<&PostingLocation> {
        self.posting_locs.get(term)
    }

    /// Norm data for `doc_id`, or `None` for unknown documents.
    #[inline]
    pub fn norm(&self, doc_id: u32) -> Option<&N> {
        self.norms.get(&doc_id)
    }

    /// Register a term's posting list. Build-pipeline / fixture interface.
    pub fn insert_term(&mut self, term: impl Into<String>, df: u64, location: PostingLocation) {
        let term = term.into();
        self.doc_freq.insert(term.clone(), df);
        self.posting_locs.insert(term, location);
    }

    /// Register a document's norm data. Build-pipeline / fixture interface.
    pub fn insert_norm(&mut self, doc_id: u32, norm: N) {
        self.norms.insert(doc_id, norm);
    }
}

impl<N: DeserializeOwned> IndexMetadata<N> {
    /// Load metadata from a JSON file written by the build pipeline.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, Error> {
        let path = path.as_ref();
        let file = File::open(path).map_err(|source| Error::Storage {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::from_reader(BufReader::new(file)).map_err(|e| Error::Metadata {
            path: path.display().to_string(),
            detail: e.to_string(),
        })
    }
}

impl<N: Serialize> IndexMetadata<N> {
    /// Write metadata as JSON. Used by fixtures and pipeline tooling.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let file = File::create(path).map_err(|source| Error::Storage {
            path: path.display().to_string(),
            source,
        })?;
        serde_json::to_writer(BufWriter::new(file), self).map_err(|e| Error::Metadata {
            path: path.display().to_string(),
            detail: e.to_string(),
        })
    }
}
