// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Precomputed per-document signals: PageRank and page views.
//!
//! Flat lookups with documented defaults on miss - 0.0 for PageRank, 0 for
//! views. These are not part of the ranking core; a caller outside this crate
//! decides how (and whether) to blend them with relevance scores.

use std::collections::HashMap;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::Error;

/// Query-time signal tables, built offline and loaded read-only.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Signals {
    page_rank: HashMap<u32, f64>,
    page_views: HashMap<u32, u64>,
}

impl Signals {
    pub fn new(page_rank: HashMap<u32, f64>, page_views: HashMap<u32, u64>) -> Self {
        Signals {
            page_rank,
            page_views,
        }
    }

    /// Load signal tables from a JSON file.
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

    /// PageRank of `doc_id`; 0.0 for documents without an entry.
    #[inline]
    pub fn page_rank(&self, doc_id: u32) -> f64 {
        self.page_rank.get(&doc_id).copied().unwrap_or(0.0)
    }

    /// Page view count of `doc_id`; 0 for documents without an entry.
    #[inline]
    pub fn page_views(&self, doc_id: u32) -> u64 {
        self.page_views.get(&doc_id).copied().unwrap_or(0)
    }

    /// Batch PageRank lookup, aligned with the input ids.
    pub fn page_ranks(&self, doc_ids: &[u32]) -> Vec<f64> {
        doc_ids.iter().map(|&id| self.page_rank(id)).collect()
    }

    /// Batch page view lookup, aligned with the input ids.
    pub fn page_views_many(&self, doc_ids: &[u32]) -> Vec<u64> {
        doc_ids.iter().map(|&id| self.page_views(id)).collect()
    }
}
