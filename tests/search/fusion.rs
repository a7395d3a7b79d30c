//! Fused ranking: weighted-sum linearity, missing-field handling, and the
//! per-field pre-cap that is preserved as legacy behavior.

use talpa::{rank_by_bm25, rank_fused, tokenize, StopwordProfile, SEGMENT_SIZE};

use crate::common::build_bm25_index;

#[test]
fn text_weight_one_title_weight_zero_reproduces_bm25() {
    let dir = tempfile::tempdir().unwrap();
    let docs = vec![
        vec!["rust", "systems", "language"],
        vec!["rust", "cooking"],
        vec!["systems", "biology", "rust", "rust"],
    ];
    let (index, store) = build_bm25_index(&docs, dir.path(), SEGMENT_SIZE);

    // Same index on both sides; the title pass contributes score * 0.
    let fused = rank_fused("rust systems", &index, &store, &index, &store, 1.0, 0.0).unwrap();

    let tokens = tokenize("rust systems", StopwordProfile::Extended);
    let direct = rank_by_bm25(&tokens, &index, &store).unwrap();

    // Same docs, same order, same scores - a true weighted sum, not an
    // independent recomputation.
    assert_eq!(fused, direct);
}

#[test]
fn missing_field_contributes_zero_not_absence() {
    let body_dir = tempfile::tempdir().unwrap();
    let title_dir = tempfile::tempdir().unwrap();

    // "cat" appears in body doc 1 only, and in title doc 2 only.
    let body_docs = vec![vec!["dog"], vec!["cat"], vec!["dog"]];
    let title_docs = vec![vec!["dog"], vec!["dog"], vec!["cat"]];
    let (body, body_store) = build_bm25_index(&body_docs, body_dir.path(), SEGMENT_SIZE);
    let (title, title_store) = build_bm25_index(&title_docs, title_dir.path(), SEGMENT_SIZE);

    let tokens = tokenize("cat", StopwordProfile::Extended);
    let body_only = rank_by_bm25(&tokens, &body, &body_store).unwrap();
    let title_only = rank_by_bm25(&tokens, &title, &title_store).unwrap();
    assert_eq!(body_only.len(), 1);
    assert_eq!(title_only.len(), 1);

    let fused = rank_fused("cat", &body, &body_store, &title, &title_store, 0.6, 0.4).unwrap();

    // Both docs appear, each with only its own field's weighted score.
    assert_eq!(fused.len(), 2);
    let by_id = |id: u32| fused.iter().find(|d| d.doc_id == id).unwrap();
    assert!((by_id(1).score - body_only[0].score * 0.6).abs() < 1e-12);
    assert!((by_id(2).score - title_only[0].score * 0.4).abs() < 1e-12);
}

#[test]
fn per_field_cap_prunes_before_fusion() {
    let body_dir = tempfile::tempdir().unwrap();
    let title_dir = tempfile::tempdir().unwrap();

    // 101 identical body docs containing "zebra": the body pass keeps ids
    // 0..=99 and prunes id 100 before fusion ever sees it.
    let body_docs: Vec<Vec<&str>> = (0..101).map(|_| vec!["zebra"]).collect();
    // The title index mentions doc 100 alone.
    let mut title_docs: Vec<Vec<&str>> = (0..101).map(|_| vec!["filler"]).collect();
    title_docs[100] = vec!["zebra"];

    let (body, body_store) = build_bm25_index(&body_docs, body_dir.path(), SEGMENT_SIZE);
    let (title, title_store) = build_bm25_index(&title_docs, title_dir.path(), SEGMENT_SIZE);

    let tokens = tokenize("zebra", StopwordProfile::Extended);
    let title_only = rank_by_bm25(&tokens, &title, &title_store).unwrap();
    assert_eq!(title_only.len(), 1);

    let fused = rank_fused("zebra", &body, &body_store, &title, &title_store, 0.5, 0.5).unwrap();

    // Doc 100 is present via the title pass, but its fused score carries no
    // body contribution even though the body matched it - the documented
    // two-stage pruning.
    let doc_100 = fused.iter().find(|d| d.doc_id == 100).unwrap();
    assert!((doc_100.score - title_only[0].score * 0.5).abs() < 1e-12);
}

#[test]
fn fused_results_are_capped_at_100() {
    let body_dir = tempfile::tempdir().unwrap();
    let title_dir = tempfile::tempdir().unwrap();

    // Body matches ids 0..120, title matches ids 100..220: the fused map
    // holds up to 200 candidates, the result must still stop at 100.
    let body_docs: Vec<Vec<&str>> = (0..220)
        .map(|i| if i < 120 { vec!["zebra"] } else { vec!["filler"] })
        .collect();
    let title_docs: Vec<Vec<&str>> = (0..220)
        .map(|i| if i >= 100 { vec!["zebra"] } else { vec!["filler"] })
        .collect();

    let (body, body_store) = build_bm25_index(&body_docs, body_dir.path(), SEGMENT_SIZE);
    let (title, title_store) = build_bm25_index(&title_docs, title_dir.path(), SEGMENT_SIZE);

    let fused = rank_fused("zebra", &body, &body_store, &title, &title_store, 0.6, 0.4).unwrap();
    assert_eq!(fused.len(), 100);
}

#[test]
fn empty_query_returns_empty_from_fusion() {
    let dir = tempfile::tempdir().unwrap();
    let (index, store) = build_bm25_index(&[vec!["cat"]], dir.path(), SEGMENT_SIZE);

    let fused = rank_fused("the of", &index, &store, &index, &store, 0.6, 0.4).unwrap();
    assert!(fused.is_empty());
}
