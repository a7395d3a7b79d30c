//! Determinism: repeated identical queries must produce identical rankings,
//! and exact score ties must order by ascending doc id.

use talpa::{rank_by_bm25, rank_by_cosine, rank_fused, tokenize, StopwordProfile, SEGMENT_SIZE};

use crate::common::{build_bm25_index, build_cosine_index};

#[test]
fn repeated_bm25_queries_are_identical() {
    let dir = tempfile::tempdir().unwrap();
    let docs: Vec<Vec<&str>> = (0..60)
        .map(|i| match i % 3 {
            0 => vec!["rust", "systems"],
            1 => vec!["rust", "cooking", "cooking"],
            _ => vec!["systems", "biology"],
        })
        .collect();
    let (index, store) = build_bm25_index(&docs, dir.path(), SEGMENT_SIZE);

    let tokens = tokenize("rust systems cooking", StopwordProfile::Standard);
    let first = rank_by_bm25(&tokens, &index, &store).unwrap();
    for _ in 0..10 {
        let again = rank_by_bm25(&tokens, &index, &store).unwrap();
        assert_eq!(again, first);
    }
}

#[test]
fn repeated_fused_queries_are_identical() {
    let body_dir = tempfile::tempdir().unwrap();
    let title_dir = tempfile::tempdir().unwrap();
    let body_docs: Vec<Vec<&str>> = (0..40).map(|_| vec!["zebra", "stripe"]).collect();
    let title_docs: Vec<Vec<&str>> = (0..40).map(|_| vec!["zebra"]).collect();
    let (body, body_store) = build_bm25_index(&body_docs, body_dir.path(), SEGMENT_SIZE);
    let (title, title_store) = build_bm25_index(&title_docs, title_dir.path(), SEGMENT_SIZE);

    let first = rank_fused("zebra stripe", &body, &body_store, &title, &title_store, 0.6, 0.4)
        .unwrap();
    for _ in 0..10 {
        let again =
            rank_fused("zebra stripe", &body, &body_store, &title, &title_store, 0.6, 0.4)
                .unwrap();
        assert_eq!(again, first);
    }
}

#[test]
fn equal_scores_order_by_ascending_doc_id() {
    let dir = tempfile::tempdir().unwrap();
    // Identical docs produce identical BM25 scores.
    let docs: Vec<Vec<&str>> = (0..20).map(|_| vec!["zebra"]).collect();
    let (index, store) = build_bm25_index(&docs, dir.path(), SEGMENT_SIZE);

    let tokens = tokenize("zebra", StopwordProfile::Standard);
    let ranked = rank_by_bm25(&tokens, &index, &store).unwrap();

    let ids: Vec<u32> = ranked.iter().map(|d| d.doc_id).collect();
    let expected: Vec<u32> = (0..20).collect();
    assert_eq!(ids, expected);
}

#[test]
fn cosine_ranking_is_stable_across_runs() {
    let dir = tempfile::tempdir().unwrap();
    let docs = vec![
        vec!["apple", "banana"],
        vec!["apple", "apple", "cherry"],
        vec!["banana", "cherry"],
        vec!["apple", "banana", "cherry"],
    ];
    let (index, store) = build_cosine_index(&docs, dir.path(), SEGMENT_SIZE);

    let first = rank_by_cosine("apple cherry", &index, &store).unwrap();
    for _ in 0..10 {
        assert_eq!(rank_by_cosine("apple cherry", &index, &store).unwrap(), first);
    }
}
