//! HAR 1.2 structures: only the fields the extractor reads.
//!
//! `log.entries` is required. Everything below an entry has a default (a
//! missing key and an explicit `null` alike), so a sparse capture never faults
//! deep inside the transform.

use serde::{Deserialize, Deserializer};

/// `null` is treated like a missing key.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// Root HAR document (top-level wrapper).
#[derive(Debug, Clone, Default, Deserialize)]
pub struct HarDocument {
    pub log: HarLog,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HarLog {
    pub entries: Vec<HarEntry>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HarEntry {
    #[serde(default, deserialize_with = "null_as_default")]
    pub request: HarRequest,
    #[serde(default, deserialize_with = "null_as_default")]
    pub response: HarResponse,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HarRequest {
    #[serde(default, deserialize_with = "null_as_default")]
    pub url: String,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HarResponse {
    #[serde(default, deserialize_with = "null_as_default")]
    pub content: HarContent,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct HarContent {
    #[serde(default, rename = "mimeType", deserialize_with = "null_as_default")]
    pub mime_type: String,
    /// Raw body as captured. `null` and a missing key both land here as `None`.
    #[serde(default)]
    pub text: Option<String>,
}

impl HarDocument {
    pub fn from_slice(bytes: &[u8]) -> serde_json::Result<Self> {
        serde_json::from_slice(bytes)
    }

    pub fn from_json_str(s: &str) -> serde_json::Result<Self> {
        serde_json::from_str(s)
    }

    pub fn entries(&self) -> &[HarEntry] {
        &self.log.entries
    }
}

impl HarEntry {
    pub fn url(&self) -> &str {
        &self.request.url
    }

    pub fn mime_type(&self) -> &str {
        &self.response.content.mime_type
    }

    pub fn text(&self) -> Option<&str> {
        self.response.content.text.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sparse_entry_gets_defaults() {
        let doc = HarDocument::from_json_str(r#"{"log":{"entries":[{}]}}"#).unwrap();
        let entry = &doc.entries()[0];
        assert_eq!(entry.url(), "");
        assert_eq!(entry.mime_type(), "");
        assert!(entry.text().is_none());
    }

    #[test]
    fn null_text_is_absent() {
        let doc = HarDocument::from_json_str(
            r#"{"log":{"entries":[{
                "request":{"url":"https://a.test/x"},
                "response":{"content":{"mimeType":"application/json","text":null}}
            }]}}"#,
        )
        .unwrap();
        assert!(doc.entries()[0].text().is_none());
    }

    #[test]
    fn null_fields_fall_back_to_defaults() {
        let doc = HarDocument::from_json_str(
            r#"{"log":{"entries":[
                {"request":{"url":"https://a.test/ok"},
                 "response":{"content":{"mimeType":"application/json","text":"{}"}}},
                {"request":{"url":null},"response":{"content":{"mimeType":null}}},
                {"request":null,"response":{"content":null}},
                {"request":{"url":"https://a.test/r"},"response":null}
            ]}}"#,
        )
        .unwrap();
        let entries = doc.entries();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].mime_type(), "application/json");
        assert_eq!(entries[1].url(), "");
        assert_eq!(entries[1].mime_type(), "");
        assert_eq!(entries[2].url(), "");
        assert_eq!(entries[2].mime_type(), "");
        assert_eq!(entries[3].url(), "https://a.test/r");
        assert!(entries[3].text().is_none());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let doc = HarDocument::from_json_str(
            r#"{"log":{"version":"1.2","creator":{"name":"x"},"entries":[{
                "startedDateTime":"2024-01-01T00:00:00Z",
                "request":{"method":"GET","url":"https://a.test/x","headers":[]},
                "response":{"status":200,"content":{"size":2,"mimeType":"application/json","text":"{}"}}
            }]}}"#,
        )
        .unwrap();
        assert_eq!(doc.entries()[0].url(), "https://a.test/x");
        assert_eq!(doc.entries()[0].text(), Some("{}"));
    }

    #[test]
    fn missing_entries_is_rejected() {
        assert!(HarDocument::from_json_str(r#"{"log":{}}"#).is_err());
        assert!(HarDocument::from_json_str(r#"{"entries":[]}"#).is_err());
        assert!(HarDocument::from_json_str("[]").is_err());
    }
}
