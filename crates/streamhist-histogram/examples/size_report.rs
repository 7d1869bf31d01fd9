//! Collect the sizes of every file under a directory and report them
//!
//! ```text
//! cargo run --example size_report -- <dir> [histogram.tsv]
//! RUST_LOG=debug cargo run --example size_report -- ~/photos sizes.tsv
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use streamhist_histogram::BlobStats;
use tracing::warn;
use tracing_subscriber::EnvFilter;

fn walk(dir: &Path, stats: &BlobStats) -> anyhow::Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        let file_type = entry.file_type()?;
        if file_type.is_dir() {
            walk(&path, stats)?;
        } else if file_type.is_file() {
            let size = i64::try_from(entry.metadata()?.len())?;
            stats.receive(path.display().to_string(), size)?;
        }
    }
    Ok(())
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let mut args = std::env::args().skip(1);
    let Some(root) = args.next().map(PathBuf::from) else {
        warn!("no directory given");
        eprintln!("Usage: size_report <dir> [histogram.tsv]");
        std::process::exit(2);
    };
    let histogram_path = args.next().map(PathBuf::from);

    let stats = BlobStats::new();
    walk(&root, &stats)?;

    let summary = stats.dump(histogram_path.as_deref())?;
    println!("{summary}");

    stats.with_histogram(|histogram| {
        for bar in histogram.bars() {
            println!("{bar}");
        }
    })?;
    Ok(())
}
