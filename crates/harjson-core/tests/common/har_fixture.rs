//! Builds small HAR captures on disk for integration tests.

use serde_json::{json, Value};
use std::path::{Path, PathBuf};

#[derive(Debug, Default)]
pub struct HarFixture {
    entries: Vec<Value>,
}

impl HarFixture {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an entry; `text: None` omits the key entirely.
    pub fn entry(mut self, url: &str, mime: &str, text: Option<&str>) -> Self {
        let mut content = json!({ "size": 0, "mimeType": mime });
        if let Some(t) = text {
            content["text"] = json!(t);
        }
        self.entries.push(json!({
            "startedDateTime": "2024-05-01T10:00:00.000Z",
            "request": { "method": "GET", "url": url, "headers": [] },
            "response": { "status": 200, "headers": [], "content": content }
        }));
        self
    }

    pub fn to_json(&self) -> String {
        json!({
            "log": {
                "version": "1.2",
                "creator": { "name": "test", "version": "0" },
                "entries": self.entries
            }
        })
        .to_string()
    }

    pub fn write_to(&self, dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        std::fs::write(&path, self.to_json()).unwrap();
        path
    }
}

pub fn read_json(path: &Path) -> Value {
    let text = std::fs::read_to_string(path).unwrap();
    serde_json::from_str(&text).unwrap()
}
