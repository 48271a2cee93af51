//! Which `mimeType` values count as a JSON response.

use serde::{Deserialize, Serialize};

pub const JSON_MIME: &str = "application/json";

/// MIME filter: "exact" (default) or "contains".
///
/// `Exact` compares the whole string, case-sensitive, so
/// `application/json; charset=utf-8` is excluded. `Contains` accepts any value
/// with `application/json` as a substring.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MimeMatch {
    #[default]
    Exact,
    Contains,
}

impl MimeMatch {
    pub fn is_json(self, mime_type: &str) -> bool {
        match self {
            MimeMatch::Exact => mime_type == JSON_MIME,
            MimeMatch::Contains => mime_type.contains(JSON_MIME),
        }
    }
}

impl std::str::FromStr for MimeMatch {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exact" => Ok(MimeMatch::Exact),
            "contains" => Ok(MimeMatch::Contains),
            other => Err(format!("unknown mime match '{other}' (expected exact or contains)")),
        }
    }
}
