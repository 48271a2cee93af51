//! `harjson extract <input> <output>` – one capture to one JSON array.

use anyhow::Result;
use harjson_core::pipeline::{self, ExtractOptions};
use std::path::Path;

pub async fn run_extract(input: &Path, output: &Path, opts: &ExtractOptions) -> Result<()> {
    let summary = pipeline::run_file(input, output, opts).await?;
    println!(
        "Saved {} JSON responses to {}",
        summary.records,
        output.display()
    );
    if summary.degraded > 0 {
        println!(
            "  ({} written as {{}}: missing or invalid body)",
            summary.degraded
        );
    }
    Ok(())
}
