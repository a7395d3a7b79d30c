// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Okapi BM25 scoring.
//!
//! Per query term: `idf(t) = ln((N - df + 0.5) / (df + 0.5) + 1)`. The `+ 1`
//! keeps the idf finite and positive for every df, including df = 0 - a query
//! term the corpus never saw still gets an idf, it just has no postings to
//! apply it to, so it contributes nothing anyway.
//!
//! Per posting: `idf * tf * (k1 + 1) / (tf + length_norm[doc])` with
//! `k1 = 1.5`. The length factor comes out of the index metadata as an opaque
//! per-document scalar (it folds `k1 * (1 - b + b * dl/avgdl)` computed
//! offline); the scorer never reconstructs it. The accumulated sum across
//! query terms is the final score - no trailing normalization, unlike cosine.

use std::collections::{BTreeMap, HashMap};

use crate::binary::SegmentStore;
use crate::error::Error;
use crate::index::{Bm25Index, Bm25Norm};
use crate::scoring::{postings_for_terms, K1};

/// Per-term BM25 idf for the query's distinct terms.
///
/// Defined for every term, present in the index or not. Sorted keys keep
/// segment read order deterministic.
pub fn query_idf(tokens: &[String], index: &Bm25Index) -> BTreeMap<String, f64> {
    let n = index.doc_count() as f64;
    let mut idf = BTreeMap::new();
    for token in tokens {
        if idf.contains_key(token) {
            continue;
        }
        let df = index.doc_freq(token).unwrap_or(0) as f64;
        idf.insert(token.clone(), ((n - df + 0.5) / (df + 0.5) + 1.0).ln());
    }
    idf
}

/// Accumulate BM25 scores across the query's terms.
///
/// The returned map holds final scores; there is no separate normalization
/// pass. Postings for documents without a length norm entry are skipped.
pub fn accumulate(
    idf: &BTreeMap<String, f64>,
    index: &Bm25Index,
    store: &SegmentStore,
) -> Result<HashMap<u32, f64>, Error> {
    let terms: Vec<&str> = idf.keys().map(String::as_str).collect();
    let fetched = postings_for_terms(&terms, index, store)?;

    let mut scores: HashMap<u32, f64> = HashMap::new();
    for (term, _df, postings) in fetched {
        let term_idf = idf[&term];
        for posting in postings {
            let Some(&Bm25Norm(length_norm)) = index.norm(posting.doc_id) else {
                continue;
            };
            let tf = f64::from(posting.tf);
            let gain = term_idf * (tf * (K1 + 1.0)) / (tf + length_norm);
            *scores.entry(posting.doc_id).or_insert(0.0) += gain;
        }
    }

    Ok(scores)
}
