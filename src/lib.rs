//! Ranked retrieval over segmented inverted indexes.
//!
//! This crate is the query-time half of a search engine. An offline pipeline
//! has already built one or more inverted indexes - term dictionaries,
//! posting lists packed into fixed-size binary segments, per-document
//! normalization tables. Given a free-text query, this crate resolves each
//! term to its posting list, folds the postings into per-document scores
//! under one of three models, and returns a bounded, deterministically
//! ordered result list.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────┐     ┌───────────────┐     ┌──────────────┐
//! │  tokenize.rs │     │   binary/     │     │   index.rs   │
//! │ (query terms,│     │ (posting codec│     │ (df, N, norm │
//! │  stopwords)  │     │  + segments)  │     │   tables)    │
//! └──────┬───────┘     └───────┬───────┘     └──────┬───────┘
//!        │                     │                    │
//!        └─────────────┬───────┴────────────────────┘
//!                      ▼
//!               ┌──────────────┐     ┌──────────────┐
//!               │   scoring/   │────▶│  search.rs   │
//!               │ (cosine,bm25,│     │ (entry points│
//!               │ field, top-K)│     │  + fusion)   │
//!               └──────────────┘     └──────────────┘
//! ```
//!
//! # Usage
//!
//! ```ignore
//! use talpa::{rank_by_bm25, Bm25Index, SegmentStore, StopwordProfile, tokenize};
//!
//! let index = Bm25Index::load("index/metadata.json")?;
//! let store = SegmentStore::new("index", "postings");
//! let tokens = tokenize("best systems programming language", StopwordProfile::Extended);
//! let ranked = rank_by_bm25(&tokens, &index, &store)?;
//! ```

// Module declarations
pub mod binary;
mod error;
mod index;
mod scoring;
mod search;
mod signals;
pub mod testing;
mod tokenize;

// Re-exports for public API
pub use binary::{
    decode_postings, encode_postings, Posting, PostingLocation, SegmentSpan, SegmentStore,
    ENTRY_SIZE, SEGMENT_SIZE, TF_MASK,
};
pub use error::Error;
pub use index::{Bm25Index, Bm25Norm, CosineIndex, CosineNorm, FieldIndex, IndexMetadata};
pub use scoring::ranking::{compare_ranked, select_all, select_top, ScoredDoc, RESULT_CAP};
pub use scoring::{bm25, cosine, field, K1};
pub use search::{rank_by_bm25, rank_by_cosine, rank_by_field_score, rank_fused};
pub use signals::Signals;
pub use tokenize::{tokenize, StopwordProfile};
