// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! TF-IDF cosine similarity over the body index.
//!
//! Both sides of the similarity are tf-idf vectors. The query side is built
//! once per request: `(term count / query length) * ln(N / df)`, with terms
//! the index has never seen dropped entirely - they contribute neither a
//! numerator term nor a denominator term. The document side is streamed out
//! of posting lists: each posting contributes
//! `(tf / max_tf[doc]) * ln(N / df) * query_weight` to that document's
//! partial dot product.
//!
//! The final score divides by `sqrt(sq_weight_sum[doc] * sum(qw^2))` - the
//! product of the two vector norms, with the document's half precomputed
//! offline and the query's half computed once before the loop. Non-negative
//! vectors keep the result in [0, 1] up to rounding.

use std::collections::{BTreeMap, HashMap};

use crate::binary::SegmentStore;
use crate::error::Error;
use crate::index::CosineIndex;
use crate::scoring::postings_for_terms;

/// Build the query-side tf-idf vector.
///
/// Keys are the query's distinct in-index terms; a BTreeMap so downstream
/// iteration (and therefore segment read order) is sorted and deterministic.
/// Returns an empty map when no token is known to the index - the caller
/// must short-circuit to an empty ranking before any division happens.
pub fn query_weights(tokens: &[String], index: &CosineIndex) -> BTreeMap<String, f64> {
    let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
    for token in tokens {
        *counts.entry(token.as_str()).or_insert(0) += 1;
    }

    let query_len = tokens.len() as f64;
    let n = index.doc_count() as f64;
    let mut weights = BTreeMap::new();
    for (term, count) in counts {
        let Some(df) = index.doc_freq(term) else {
            continue;
        };
        let weight = (f64::from(count) / query_len) * (n / df as f64).ln();
        weights.insert(term.to_string(), weight);
    }

    weights
}

/// Accumulate per-document partial dot products for the query.
///
/// Postings whose document has no norm entry are skipped; a document the
/// norm table has never heard of cannot be scored, and one bad posting must
/// not take down the term's remaining contributions.
pub fn accumulate(
    weights: &BTreeMap<String, f64>,
    index: &CosineIndex,
    store: &SegmentStore,
) -> Result<HashMap<u32, f64>, Error> {
    let terms: Vec<&str> = weights.keys().map(String::as_str).collect();
    let fetched = postings_for_terms(&terms, index, store)?;

    let n = index.doc_count() as f64;
    let mut partial: HashMap<u32, f64> = HashMap::new();
    for (term, df, postings) in fetched {
        let query_weight = weights[&term];
        let idf = (n / df as f64).ln();
        for posting in postings {
            let Some(norm) = index.norm(posting.doc_id) else {
                continue;
            };
            let doc_weight = (f64::from(posting.tf) / norm.max_tf) * idf;
            *partial.entry(posting.doc_id).or_insert(0.0) += doc_weight * query_weight;
        }
    }

    Ok(partial)
}

/// Turn partial dot products into cosine similarities.
pub fn similarity_scores(
    partial: &HashMap<u32, f64>,
    index: &CosineIndex,
    weights: &BTreeMap<String, f64>,
) -> HashMap<u32, f64> {
    let query_sq: f64 = weights.values().map(|w| w * w).sum();

    partial
        .iter()
        .filter_map(|(&doc_id, &dot)| {
            index
                .norm(doc_id)
                .map(|norm| (doc_id, dot / (norm.sq_weight_sum * query_sq).sqrt()))
        })
        .collect()
}
