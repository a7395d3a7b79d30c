use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::Parser;

use talpa::{
    rank_by_bm25, rank_by_cosine, rank_by_field_score, rank_fused, Bm25Index, CosineIndex,
    FieldIndex, IndexMetadata, SegmentStore, StopwordProfile,
};

mod cli;
use cli::{display, Cli, Commands, Scorer};

/// File name of the metadata table inside an index directory.
const METADATA_FILE: &str = "metadata.json";

/// Segment file prefix inside an index directory.
const SEGMENT_PREFIX: &str = "postings";

fn main() -> ExitCode {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Search {
            index,
            query,
            scorer,
            title_index,
            text_weight,
            title_weight,
        } => run_search(
            &index,
            &query,
            scorer,
            title_index.as_deref(),
            text_weight,
            title_weight,
        ),
        Commands::Inspect { index } => run_inspect(&index),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("error: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn metadata_path(index_dir: &str) -> PathBuf {
    Path::new(index_dir).join(METADATA_FILE)
}

fn store_for(index_dir: &str) -> SegmentStore {
    SegmentStore::new(index_dir, SEGMENT_PREFIX)
}

fn run_search(
    index_dir: &str,
    query: &str,
    scorer: Scorer,
    title_dir: Option<&str>,
    text_weight: f64,
    title_weight: f64,
) -> Result<(), Box<dyn std::error::Error>> {
    let store = store_for(index_dir);

    let results = match scorer {
        Scorer::Cosine => {
            let index = CosineIndex::load(metadata_path(index_dir))?;
            rank_by_cosine(query, &index, &store)?
        }
        Scorer::Bm25 => {
            let index = Bm25Index::load(metadata_path(index_dir))?;
            let tokens = talpa::tokenize(query, StopwordProfile::Standard);
            rank_by_bm25(&tokens, &index, &store)?
        }
        Scorer::Field => {
            let index = FieldIndex::load(metadata_path(index_dir))?;
            rank_by_field_score(query, &index, &store)?
        }
        Scorer::Fused => {
            let title_dir = title_dir
                .ok_or("the fused scorer needs --title-index pointing at a title index")?;
            let body_index = Bm25Index::load(metadata_path(index_dir))?;
            let title_index = Bm25Index::load(metadata_path(title_dir))?;
            let title_store = store_for(title_dir);
            rank_fused(
                query,
                &body_index,
                &store,
                &title_index,
                &title_store,
                text_weight,
                title_weight,
            )?
        }
    };

    display::print_results(&results);
    Ok(())
}

fn run_inspect(index_dir: &str) -> Result<(), Box<dyn std::error::Error>> {
    // Norm shape differs per index kind; inspect reads it as opaque JSON.
    let index = IndexMetadata::<serde_json::Value>::load(metadata_path(index_dir))?;
    display::print_index_summary(index.doc_count(), index.term_count(), index.norm_count());

    let mut segments: Vec<PathBuf> = fs::read_dir(index_dir)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| {
            path.file_name()
                .and_then(|n| n.to_str())
                .is_some_and(|n| n.starts_with(SEGMENT_PREFIX) && n.ends_with(".bin"))
        })
        .collect();
    segments.sort();

    if segments.is_empty() {
        println!("  (no segment files)");
        return Ok(());
    }

    println!("segments");
    for path in segments {
        let (bytes, crc) = checksum_file(&path)?;
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("<non-utf8>");
        display::print_segment_row(name, bytes, crc);
    }
    Ok(())
}

fn checksum_file(path: &Path) -> Result<(u64, u32), std::io::Error> {
    let mut file = fs::File::open(path)?;
    let mut hasher = crc32fast::Hasher::new();
    let mut buf = [0u8; 64 * 1024];
    let mut total = 0u64;
    loop {
        let n = file.read(&mut buf)?;
        if n == 0 {
            break;
        }
        hasher.update(&buf[..n]);
        total += n as u64;
    }
    Ok((total, hasher.finalize()))
}
