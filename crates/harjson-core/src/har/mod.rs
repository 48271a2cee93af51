//! HAR (HTTP Archive) extraction: parse a capture and pull out JSON response bodies.
//!
//! Entries are filtered by `response.content.mimeType` and each retained body is
//! decoded as JSON. Bodies that are missing or fail to decode become `{}` with a
//! warning naming the URL; they never abort the batch.

mod extract;
mod mime;
mod parse;

pub use extract::{
    extract, DegradeReason, EntryOutcome, ExtractedEntry, ExtractedRecord, Extraction,
    HarJsonExtractor,
};
pub use mime::{MimeMatch, JSON_MIME};
pub use parse::{HarContent, HarDocument, HarEntry, HarLog, HarRequest, HarResponse};
