//! `harjson batch <input_dir> <output_dir>` – every capture in a folder.

use anyhow::Result;
use harjson_core::batch;
use harjson_core::pipeline::ExtractOptions;
use std::path::Path;

pub async fn run_batch(input_dir: &Path, output_dir: &Path, opts: &ExtractOptions) -> Result<()> {
    let summary = batch::run_dir(input_dir, output_dir, opts).await?;
    println!(
        "Extracted {} JSON responses from {} HAR files into {}",
        summary.records,
        summary.processed,
        output_dir.display()
    );
    if summary.failed > 0 {
        println!("  ({} files failed; see log)", summary.failed);
    }
    Ok(())
}
