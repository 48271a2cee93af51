//! `harjson catalog <input> <output>` – product rows from a catalog capture.

use anyhow::Result;
use harjson_core::catalog;
use harjson_core::pipeline::ExtractOptions;
use std::path::Path;

pub async fn run_catalog(input: &Path, output: &Path, opts: &ExtractOptions) -> Result<()> {
    let count = catalog::run_catalog(input, output, opts).await?;
    println!("Extracted {} products to {}", count, output.display());
    Ok(())
}
