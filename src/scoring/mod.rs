// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! The math behind ranked retrieval.
//!
//! Three scoring policies share one pipeline shape: resolve each query term's
//! posting list, fold per-posting contributions into a per-document
//! accumulator, then hand the accumulator to the selector. What differs is
//! the arithmetic - [`cosine`] normalizes a tf-idf dot product into [0, 1],
//! [`bm25`] sums saturating per-term gains, [`field`] just counts matching
//! query terms. [`ranking`] owns the ordering contract they all feed.
//!
//! Per-term posting reads are independent of each other, so the shared fetch
//! step fans out with rayon when the `parallel` feature is on. Accumulation
//! stays single-threaded either way: floating-point addition order changes
//! low bits, and two runs of the same query must produce identical rankings.
//! Terms are fetched in sorted order for the same reason.

pub mod bm25;
pub mod cosine;
pub mod field;
pub mod ranking;

#[cfg(feature = "parallel")]
use rayon::prelude::*;

use crate::binary::{decode_postings, Posting, SegmentStore, ENTRY_SIZE};
use crate::error::Error;
use crate::index::IndexMetadata;

/// BM25 term-frequency saturation constant.
pub const K1: f64 = 1.5;

/// Resolve posting lists for `terms` (sorted, deduplicated by the caller).
///
/// Terms the index has never seen are silently dropped - partial-query
/// matching is expected traffic. Storage and format failures abort the whole
/// batch; a ranking computed from some of the query's terms would be silently
/// wrong, which is worse than no ranking.
pub(crate) fn postings_for_terms<N: Sync>(
    terms: &[&str],
    index: &IndexMetadata<N>,
    store: &SegmentStore,
) -> Result<Vec<(String, u64, Vec<Posting>)>, Error> {
    #[cfg(feature = "parallel")]
    let iter = terms.par_iter();
    #[cfg(not(feature = "parallel"))]
    let iter = terms.iter();

    let fetched: Vec<Option<(String, u64, Vec<Posting>)>> = iter
        .map(|&term| fetch_term(term, index, store))
        .collect::<Result<_, _>>()?;

    Ok(fetched.into_iter().flatten().collect())
}

fn fetch_term<N>(
    term: &str,
    index: &IndexMetadata<N>,
    store: &SegmentStore,
) -> Result<Option<(String, u64, Vec<Posting>)>, Error> {
    let Some(df) = index.doc_freq(term) else {
        return Ok(None);
    };
    let Some(location) = index.posting_location(term) else {
        return Ok(None);
    };

    let byte_len = df as usize * ENTRY_SIZE;
    let bytes = store.read(location, byte_len)?;
    let postings = decode_postings(&bytes, df as usize)?;
    Ok(Some((term.to_string(), df, postings)))
}
