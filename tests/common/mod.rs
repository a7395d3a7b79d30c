//! Shared fixture builders: tiny but honest on-disk indexes.
//!
//! These mirror what the offline build pipeline produces - posting lists
//! packed into segment files plus a metadata table with real norms - computed
//! from a corpus given as per-document token lists. Document ids are the
//! positions in the corpus slice.

// Each integration test crate includes this module and uses its own subset.
#![allow(dead_code)]

use std::collections::BTreeMap;
use std::path::Path;

use talpa::testing::{add_term, posting, SegmentWriter};
use talpa::{Bm25Index, Bm25Norm, CosineIndex, CosineNorm, FieldIndex, IndexMetadata, Posting, SegmentStore};

/// BM25 length-bias constant used by the fixtures' offline norm computation.
const B: f64 = 0.75;

/// Per-term posting lists in doc-id order, tf = in-document count.
fn term_postings(docs: &[Vec<&str>]) -> BTreeMap<String, Vec<Posting>> {
    let mut terms: BTreeMap<String, Vec<Posting>> = BTreeMap::new();
    for (doc_id, tokens) in docs.iter().enumerate() {
        let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
        for token in tokens {
            *counts.entry(token).or_insert(0) += 1;
        }
        for (term, tf) in counts {
            terms
                .entry(term.to_string())
                .or_default()
                .push(posting(doc_id as u32, tf));
        }
    }
    terms
}

fn write_terms<N>(
    index: &mut IndexMetadata<N>,
    dir: &Path,
    segment_size: u64,
    terms: &BTreeMap<String, Vec<Posting>>,
) {
    let mut writer = SegmentWriter::new(dir, "postings", segment_size);
    for (term, postings) in terms {
        add_term(index, &mut writer, term, postings).unwrap();
    }
}

/// Build a cosine-scored body index for `docs` in `dir`.
pub fn build_cosine_index(
    docs: &[Vec<&str>],
    dir: &Path,
    segment_size: u64,
) -> (CosineIndex, SegmentStore) {
    let terms = term_postings(docs);
    let n = docs.len() as f64;
    let mut index = CosineIndex::new(docs.len() as u64);
    write_terms(&mut index, dir, segment_size, &terms);

    for (doc_id, tokens) in docs.iter().enumerate() {
        let mut counts: BTreeMap<&str, u32> = BTreeMap::new();
        for token in tokens {
            *counts.entry(token).or_insert(0) += 1;
        }
        let max_tf = f64::from(counts.values().copied().max().unwrap_or(1));
        let sq_weight_sum = counts
            .iter()
            .map(|(term, &tf)| {
                let df = terms[*term].len() as f64;
                let w = (f64::from(tf) / max_tf) * (n / df).ln();
                w * w
            })
            .sum();
        index.insert_norm(
            doc_id as u32,
            CosineNorm {
                max_tf,
                sq_weight_sum,
            },
        );
    }

    let store = SegmentStore::new(dir, "postings").with_segment_size(segment_size);
    (index, store)
}

/// Build a BM25-scored index for `docs` in `dir`, with length norms computed
/// the way the offline pipeline does: `k1 * (1 - b + b * dl / avgdl)`.
pub fn build_bm25_index(
    docs: &[Vec<&str>],
    dir: &Path,
    segment_size: u64,
) -> (Bm25Index, SegmentStore) {
    let terms = term_postings(docs);
    let mut index = Bm25Index::new(docs.len() as u64);
    write_terms(&mut index, dir, segment_size, &terms);

    let avg_len = docs.iter().map(|d| d.len() as f64).sum::<f64>() / (docs.len() as f64).max(1.0);
    for (doc_id, tokens) in docs.iter().enumerate() {
        let dl = tokens.len() as f64;
        let norm = talpa::K1 * (1.0 - B + B * dl / avg_len.max(1e-9));
        index.insert_norm(doc_id as u32, Bm25Norm(norm));
    }

    let store = SegmentStore::new(dir, "postings").with_segment_size(segment_size);
    (index, store)
}

/// Build a title/anchor match-count index for `docs` in `dir`.
pub fn build_field_index(
    docs: &[Vec<&str>],
    dir: &Path,
    segment_size: u64,
) -> (FieldIndex, SegmentStore) {
    let terms = term_postings(docs);
    let mut index = FieldIndex::new(docs.len() as u64);
    write_terms(&mut index, dir, segment_size, &terms);

    let store = SegmentStore::new(dir, "postings").with_segment_size(segment_size);
    (index, store)
}
