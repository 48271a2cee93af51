//! Fatal pipeline errors. Per-entry problems are `har::DegradeReason`, not errors.

use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum PipelineError {
    /// Input capture missing or unreadable. Nothing is written.
    #[error("read HAR file {}: {source}", .path.display())]
    InputRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    /// Input is not JSON, or lacks `log.entries`. Nothing is written.
    #[error("parse HAR JSON {}: {source}", .path.display())]
    InputParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    /// Records could not be serialized.
    #[error("encode output JSON: {0}")]
    Encode(#[source] serde_json::Error),
    /// Destination could not be written. The in-memory result was complete.
    #[error("write output {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl PipelineError {
    /// True for failures that happen before any output is attempted.
    pub fn is_input_error(&self) -> bool {
        matches!(
            self,
            PipelineError::InputRead { .. } | PipelineError::InputParse { .. }
        )
    }
}
