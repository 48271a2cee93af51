//! JSON extraction: one record per JSON entry, in capture order.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::fmt;

use super::mime::MimeMatch;
use super::parse::{HarDocument, HarEntry};

/// Marker some capture tools write in place of a missing body.
const UNDEFINED_MARKER: &str = "undefined";

/// Output element: `{ "url": ..., "response": ... }`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExtractedRecord {
    pub url: String,
    pub response: Value,
}

/// Why an entry fell back to `{}`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DegradeReason {
    /// Body absent, empty, or the literal "undefined".
    ContentMissing,
    /// Body present but not valid JSON.
    InvalidJson { message: String },
}

impl fmt::Display for DegradeReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DegradeReason::ContentMissing => write!(f, "no content or invalid content"),
            DegradeReason::InvalidJson { message } => {
                write!(f, "skipping invalid JSON ({})", message)
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum EntryOutcome {
    Decoded(Value),
    Degraded(DegradeReason),
}

impl EntryOutcome {
    pub fn is_degraded(&self) -> bool {
        matches!(self, EntryOutcome::Degraded(_))
    }

    pub fn reason(&self) -> Option<&DegradeReason> {
        match self {
            EntryOutcome::Decoded(_) => None,
            EntryOutcome::Degraded(r) => Some(r),
        }
    }

    /// Serialized shape: the decoded value, or `{}` when degraded.
    pub fn to_value(&self) -> Value {
        match self {
            EntryOutcome::Decoded(v) => v.clone(),
            EntryOutcome::Degraded(_) => Value::Object(Map::new()),
        }
    }

    fn into_value(self) -> Value {
        match self {
            EntryOutcome::Decoded(v) => v,
            EntryOutcome::Degraded(_) => Value::Object(Map::new()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct ExtractedEntry {
    pub url: String,
    pub outcome: EntryOutcome,
}

impl ExtractedEntry {
    pub fn record(&self) -> ExtractedRecord {
        ExtractedRecord {
            url: self.url.clone(),
            response: self.outcome.to_value(),
        }
    }
}

impl From<ExtractedEntry> for ExtractedRecord {
    fn from(entry: ExtractedEntry) -> Self {
        ExtractedRecord {
            url: entry.url,
            response: entry.outcome.into_value(),
        }
    }
}

/// Result of one extraction pass. Order matches the input entries.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Extraction {
    pub entries: Vec<ExtractedEntry>,
    /// Entries in the capture before MIME filtering.
    pub entries_total: usize,
}

impl Extraction {
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn degraded_count(&self) -> usize {
        self.entries
            .iter()
            .filter(|e| e.outcome.is_degraded())
            .count()
    }

    pub fn records(&self) -> Vec<ExtractedRecord> {
        self.entries.iter().map(ExtractedEntry::record).collect()
    }

    pub fn into_records(self) -> Vec<ExtractedRecord> {
        self.entries.into_iter().map(ExtractedRecord::from).collect()
    }
}

/// Filters JSON entries and decodes their bodies.
#[derive(Debug, Clone, Copy, Default)]
pub struct HarJsonExtractor {
    mime: MimeMatch,
}

impl HarJsonExtractor {
    pub fn new(mime: MimeMatch) -> Self {
        Self { mime }
    }

    pub fn mime(&self) -> MimeMatch {
        self.mime
    }

    pub fn extract(&self, doc: &HarDocument) -> Extraction {
        let entries = doc
            .entries()
            .iter()
            .filter(|e| self.mime.is_json(e.mime_type()))
            .map(extract_entry)
            .collect();
        Extraction {
            entries,
            entries_total: doc.entries().len(),
        }
    }
}

/// Extract with the default (exact) MIME filter and flatten to records.
pub fn extract(doc: &HarDocument) -> Vec<ExtractedRecord> {
    HarJsonExtractor::default().extract(doc).into_records()
}

fn extract_entry(entry: &HarEntry) -> ExtractedEntry {
    let url = entry.url().to_string();
    let outcome = decode_body(entry.text());
    match outcome.reason() {
        Some(DegradeReason::ContentMissing) => {
            tracing::warn!("no content or invalid content at {}", url);
        }
        Some(DegradeReason::InvalidJson { message }) => {
            tracing::warn!(error = %message, "skipping invalid JSON at {}", url);
        }
        None => {}
    }
    ExtractedEntry { url, outcome }
}

fn decode_body(text: Option<&str>) -> EntryOutcome {
    let raw = match text {
        Some(raw) if !raw.is_empty() && raw != UNDEFINED_MARKER => raw,
        _ => return EntryOutcome::Degraded(DegradeReason::ContentMissing),
    };
    match serde_json::from_str::<Value>(raw) {
        Ok(value) => EntryOutcome::Decoded(value),
        Err(e) => EntryOutcome::Degraded(DegradeReason::InvalidJson {
            message: e.to_string(),
        }),
    }
}
