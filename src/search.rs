// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Ranking entry points: one query in, one ordered result list out.
//!
//! Four public paths with deliberately different shapes:
//!
//! - [`rank_by_cosine`] - body index, tf-idf cosine, capped at 100.
//! - [`rank_by_field_score`] - title/anchor index, match counts, **uncapped**.
//! - [`rank_by_bm25`] - pre-tokenized query, BM25, capped at 100.
//! - [`rank_fused`] - two BM25 passes (body + title) fused by weighted sum,
//!   capped at 100.
//!
//! The uncapped field path is a legacy asymmetry, preserved on purpose. So is
//! the fusion pre-cap: each field pass is capped at 100 *before* the weighted
//! sum, which means a document ranked 101st on the body is invisible to
//! fusion even if the title would have carried it. Bounded work per query
//! over a debatable completeness argument; see DESIGN.md before "fixing" it.
//!
//! Every path is request-scoped: the query vector and candidate map live on
//! this call's stack and are dropped before returning. A query with zero
//! recognized terms returns `Ok(empty)` from every entry point - only storage
//! and format faults produce an `Err`, and those abort the whole query.

use std::collections::HashMap;

use crate::binary::SegmentStore;
use crate::error::Error;
use crate::index::{Bm25Index, CosineIndex, FieldIndex};
use crate::scoring::ranking::{select_all, select_top, ScoredDoc, RESULT_CAP};
use crate::scoring::{bm25, cosine, field};
use crate::tokenize::{tokenize, StopwordProfile};

/// Rank body documents by TF-IDF cosine similarity. At most 100 results.
pub fn rank_by_cosine(
    query: &str,
    index: &CosineIndex,
    store: &SegmentStore,
) -> Result<Vec<ScoredDoc>, Error> {
    let tokens = tokenize(query, StopwordProfile::Standard);
    let weights = cosine::query_weights(&tokens, index);
    if weights.is_empty() {
        // No recognized terms: empty ranking, and no division downstream.
        return Ok(Vec::new());
    }

    let partial = cosine::accumulate(&weights, index, store)?;
    let scores = cosine::similarity_scores(&partial, index, &weights);
    Ok(select_top(&scores, RESULT_CAP))
}

/// Rank title/anchor documents by distinct-term match count.
///
/// Returns the full candidate set in descending order - this path has no
/// cap, unlike its siblings.
pub fn rank_by_field_score(
    query: &str,
    index: &FieldIndex,
    store: &SegmentStore,
) -> Result<Vec<ScoredDoc>, Error> {
    let tokens = tokenize(query, StopwordProfile::Standard);
    if tokens.is_empty() {
        return Ok(Vec::new());
    }

    let counts = field::match_counts(&tokens, index, store)?;
    Ok(select_all(&counts))
}

/// Rank documents by BM25 over an already-tokenized query. At most 100
/// results.
pub fn rank_by_bm25(
    tokens: &[String],
    index: &Bm25Index,
    store: &SegmentStore,
) -> Result<Vec<ScoredDoc>, Error> {
    if tokens.is_empty() {
        return Ok(Vec::new());
    }

    let idf = bm25::query_idf(tokens, index);
    let scores = bm25::accumulate(&idf, index, store)?;
    Ok(select_top(&scores, RESULT_CAP))
}

/// Fuse body and title BM25 rankings by weighted sum. At most 100 results.
///
/// The two field passes read disjoint metadata and build disjoint candidate
/// maps, so with the `parallel` feature they run concurrently; the fuse and
/// reselect step is single-threaded either way.
pub fn rank_fused(
    query: &str,
    body_index: &Bm25Index,
    body_store: &SegmentStore,
    title_index: &Bm25Index,
    title_store: &SegmentStore,
    text_weight: f64,
    title_weight: f64,
) -> Result<Vec<ScoredDoc>, Error> {
    let tokens = tokenize(query, StopwordProfile::Extended);
    if tokens.is_empty() {
        return Ok(Vec::new());
    }

    #[cfg(feature = "parallel")]
    let (body_ranked, title_ranked) = rayon::join(
        || rank_by_bm25(&tokens, body_index, body_store),
        || rank_by_bm25(&tokens, title_index, title_store),
    );
    #[cfg(not(feature = "parallel"))]
    let (body_ranked, title_ranked) = (
        rank_by_bm25(&tokens, body_index, body_store),
        rank_by_bm25(&tokens, title_index, title_store),
    );
    let (body_ranked, title_ranked) = (body_ranked?, title_ranked?);

    // Weighted sum over the union of the two per-field top-100 sets. A doc
    // missing from one field contributes 0 for that field, it is not dropped.
    let mut fused: HashMap<u32, f64> = HashMap::new();
    for doc in &body_ranked {
        *fused.entry(doc.doc_id).or_insert(0.0) += doc.score * text_weight;
    }
    for doc in &title_ranked {
        *fused.entry(doc.doc_id).or_insert(0.0) += doc.score * title_weight;
    }

    Ok(select_top(&fused, RESULT_CAP))
}
