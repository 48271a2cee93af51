//! Directory mode: every `*.har` in a folder, one output file per capture.
//!
//! A capture that fails to read, parse or write is logged and counted; the
//! rest of the folder still runs.

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::pipeline::{run_file, ExtractOptions, RunSummary};

const HAR_EXTENSION: &str = "har";

/// Totals across a directory run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BatchSummary {
    /// Captures written successfully.
    pub processed: usize,
    /// Captures that hit a fatal per-file error.
    pub failed: usize,
    pub records: usize,
    pub degraded: usize,
    /// Output paths in processing order.
    pub outputs: Vec<PathBuf>,
}

impl BatchSummary {
    fn add(&mut self, output: PathBuf, run: RunSummary) {
        self.processed += 1;
        self.records += run.records;
        self.degraded += run.degraded;
        self.outputs.push(output);
    }
}

/// `*.har` files (lowercase extension) directly under `dir`, sorted by file name.
pub fn list_har_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    let read_dir =
        std::fs::read_dir(dir).with_context(|| format!("list HAR folder: {}", dir.display()))?;
    for entry in read_dir {
        let entry = entry.with_context(|| format!("list HAR folder: {}", dir.display()))?;
        let path = entry.path();
        // Case-sensitive: `a.har` and `a.HAR` would both map to `a.json`.
        let is_har = path
            .extension()
            .map(|ext| ext == HAR_EXTENSION)
            .unwrap_or(false);
        if is_har && path.is_file() {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

/// Output path for a capture: `<output_dir>/<stem>.json`.
pub fn output_path_for(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| "capture".into());
    let mut name = stem;
    name.push(".json");
    output_dir.join(name)
}

pub async fn run_dir(
    input_dir: &Path,
    output_dir: &Path,
    opts: &ExtractOptions,
) -> Result<BatchSummary> {
    let files = list_har_files(input_dir)?;
    tokio::fs::create_dir_all(output_dir)
        .await
        .with_context(|| format!("create output folder: {}", output_dir.display()))?;

    let mut summary = BatchSummary::default();
    for input in &files {
        let output = output_path_for(input, output_dir);
        match run_file(input, &output, opts).await {
            Ok(run) => summary.add(output, run),
            Err(e) => {
                tracing::error!("error processing {}: {}", input.display(), e);
                summary.failed += 1;
            }
        }
    }

    tracing::info!(
        processed = summary.processed,
        failed = summary.failed,
        records = summary.records,
        "processed {} HAR files from {}",
        files.len(),
        input_dir.display()
    );
    Ok(summary)
}
