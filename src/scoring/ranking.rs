// Copyright 2025-present Harīṣh Tummalachērla
// SPDX-License-Identifier: Apache-2.0

//! Top-K selection: how a score map becomes an ordered result list.
//!
//! The ordering contract is the pair `(-score, doc_id)`: score descending,
//! and on exact ties the lower document id first. Downstream consumers and
//! the test suite both depend on that tie-break being reproduced bit-for-bit,
//! so it lives in exactly one place - [`compare_ranked`] - and everything
//! that orders results goes through it.
//!
//! Selection is a size-capped heap, not a full sort. With a candidate map of
//! `n` documents and a cap of `k`, that's O(n log k) instead of O(n log n);
//! for a broad query over a large corpus n can be five orders of magnitude
//! bigger than k. The heap keeps the currently-worst selected entry on top,
//! so each new candidate either evicts it or is discarded in O(log k).
//!
//! The title/anchor path is the odd one out: it returns the full sorted
//! candidate set, uncapped. Both modes are exposed and call sites must pick
//! deliberately - the cap is a contract, not a tuning knob.

use std::cmp::Ordering;
use std::collections::{BinaryHeap, HashMap};

/// Hard result cap for the capped ranking paths.
pub const RESULT_CAP: usize = 100;

/// One ranked result: a document and its final score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoredDoc {
    pub doc_id: u32,
    pub score: f64,
}

/// The ordering contract: score descending, doc id ascending on ties.
///
/// Equivalent to comparing `(-score, doc_id)` tuples. NaN scores compare as
/// equal and fall through to the id tie-break; finite scores are an input
/// invariant, this just keeps the ordering total.
pub fn compare_ranked(a: &ScoredDoc, b: &ScoredDoc) -> Ordering {
    match b.score.partial_cmp(&a.score) {
        Some(ord) if ord != Ordering::Equal => ord,
        _ => a.doc_id.cmp(&b.doc_id),
    }
}

/// Heap adapter: max-heap by "ranks later", so the top is the worst kept
/// entry and `pop` evicts it.
struct HeapEntry(ScoredDoc);

impl PartialEq for HeapEntry {
    fn eq(&self, other: &Self) -> bool {
        compare_ranked(&self.0, &other.0) == Ordering::Equal
    }
}

impl Eq for HeapEntry {}

impl PartialOrd for HeapEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for HeapEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        compare_ranked(&self.0, &other.0)
    }
}

/// Select the best `cap` entries of a score map, ranked.
///
/// Does not consume or mutate the map; calling it twice on identical input
/// yields identical output.
pub fn select_top(scores: &HashMap<u32, f64>, cap: usize) -> Vec<ScoredDoc> {
    if cap == 0 {
        return Vec::new();
    }

    let mut heap = BinaryHeap::with_capacity(cap + 1);
    for (&doc_id, &score) in scores {
        heap.push(HeapEntry(ScoredDoc { doc_id, score }));
        if heap.len() > cap {
            heap.pop();
        }
    }

    heap.into_sorted_vec().into_iter().map(|e| e.0).collect()
}

/// Rank the whole score map, uncapped. The title/anchor sibling of
/// [`select_top`].
pub fn select_all(scores: &HashMap<u32, f64>) -> Vec<ScoredDoc> {
    let mut ranked: Vec<ScoredDoc> = scores
        .iter()
        .map(|(&doc_id, &score)| ScoredDoc { doc_id, score })
        .collect();
    ranked.sort_by(compare_ranked);
    ranked
}
