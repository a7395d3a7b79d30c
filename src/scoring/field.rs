// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Match counting over a title/anchor index.
//!
//! The crudest scorer in the crate and deliberately so: a document's score is
//! the number of distinct query terms whose posting list mentions it. Term
//! frequency is ignored - for titles and anchor text, "how many of the
//! query's words appear at all" discriminates better than any weighting of
//! fields that are a handful of words long.

use std::collections::{BTreeSet, HashMap};

use crate::binary::SegmentStore;
use crate::error::Error;
use crate::index::FieldIndex;
use crate::scoring::postings_for_terms;

/// Count, per document, how many distinct query terms match it.
pub fn match_counts(
    tokens: &[String],
    index: &FieldIndex,
    store: &SegmentStore,
) -> Result<HashMap<u32, f64>, Error> {
    let unique: BTreeSet<&str> = tokens.iter().map(String::as_str).collect();
    let terms: Vec<&str> = unique.into_iter().collect();
    let fetched = postings_for_terms(&terms, index, store)?;

    let mut counts: HashMap<u32, f64> = HashMap::new();
    for (_term, _df, postings) in fetched {
        for posting in postings {
            *counts.entry(posting.doc_id).or_insert(0.0) += 1.0;
        }
    }

    Ok(counts)
}
