//! File wrapper around the extractor: read capture, extract, write JSON array.
//!
//! The transform itself is synchronous; `tokio::fs` only sequences the I/O
//! around it. An input error aborts before the output path is touched.

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::path::Path;

use crate::error::PipelineError;
use crate::har::{ExtractedRecord, Extraction, HarDocument, HarJsonExtractor, MimeMatch};

pub const DEFAULT_INDENT: usize = 2;

/// Knobs for one extraction run (from config, then CLI flags).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExtractOptions {
    pub mime: MimeMatch,
    /// Spaces per indent level in the output; 0 writes compact JSON.
    pub indent: usize,
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            mime: MimeMatch::default(),
            indent: DEFAULT_INDENT,
        }
    }
}

/// Counts for one completed run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RunSummary {
    /// All entries in the capture, JSON or not.
    pub entries_total: usize,
    /// Records written (one per JSON entry).
    pub records: usize,
    /// Records that fell back to `{}`.
    pub degraded: usize,
}

/// Read and parse a capture, then extract. Does not write anything.
pub async fn extract_path(
    input: &Path,
    opts: &ExtractOptions,
) -> Result<Extraction, PipelineError> {
    let bytes = tokio::fs::read(input)
        .await
        .map_err(|source| PipelineError::InputRead {
            path: input.to_path_buf(),
            source,
        })?;
    let doc = HarDocument::from_slice(&bytes).map_err(|source| PipelineError::InputParse {
        path: input.to_path_buf(),
        source,
    })?;
    Ok(HarJsonExtractor::new(opts.mime).extract(&doc))
}

/// Full run: `input` capture to `output` JSON array.
pub async fn run_file(
    input: &Path,
    output: &Path,
    opts: &ExtractOptions,
) -> Result<RunSummary, PipelineError> {
    let extraction = extract_path(input, opts).await?;
    let summary = RunSummary {
        entries_total: extraction.entries_total,
        records: extraction.len(),
        degraded: extraction.degraded_count(),
    };
    let records = extraction.into_records();
    write_json(output, &records, opts.indent).await?;

    tracing::info!(
        entries = summary.entries_total,
        records = summary.records,
        degraded = summary.degraded,
        "saved JSON responses to {}",
        output.display()
    );
    Ok(summary)
}

/// Serialize records as the output document (trailing newline included).
pub fn render_records(records: &[ExtractedRecord], indent: usize) -> Result<String, PipelineError> {
    render_json(records, indent)
}

pub(crate) fn render_json<T: Serialize + ?Sized>(
    value: &T,
    indent: usize,
) -> Result<String, PipelineError> {
    let mut buf = Vec::new();
    if indent == 0 {
        serde_json::to_writer(&mut buf, value).map_err(PipelineError::Encode)?;
    } else {
        let pad = vec![b' '; indent];
        let formatter = PrettyFormatter::with_indent(&pad);
        let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
        value.serialize(&mut ser).map_err(PipelineError::Encode)?;
    }
    buf.push(b'\n');
    // serde_json only emits UTF-8.
    Ok(String::from_utf8_lossy(&buf).into_owned())
}

pub(crate) async fn write_json<T: Serialize + ?Sized>(
    output: &Path,
    value: &T,
    indent: usize,
) -> Result<(), PipelineError> {
    let text = render_json(value, indent)?;
    tokio::fs::write(output, text)
        .await
        .map_err(|source| PipelineError::OutputWrite {
            path: output.to_path_buf(),
            source,
        })
}
