// File: src/model.rs
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Accepted field names for the quote text, first match wins.
pub const TEXT_KEYS: &[&str] = &["text", "quote", "q"];
/// Accepted field names for the attribution, first match wins.
pub const AUTHOR_KEYS: &[&str] = &["author", "a"];
/// Attribution used when a record carries none.
pub const UNKNOWN_AUTHOR: &str = "Unknown";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

impl Quote {
    /// Build a quote from one store record.
    ///
    /// Returns `None` when no synonym key yields usable (non-blank string)
    /// text; such records are skipped by the loader. A missing or blank
    /// attribution falls back to [`UNKNOWN_AUTHOR`].
    pub fn from_record(record: &Map<String, Value>) -> Option<Quote> {
        let text = first_string(record, TEXT_KEYS)?;
        let author =
            first_string(record, AUTHOR_KEYS).unwrap_or_else(|| UNKNOWN_AUTHOR.to_string());
        Some(Quote { text, author })
    }

    /// Notification body: the quote followed by an attribution line.
    pub fn body(&self) -> String {
        format!("{}\n- {}", self.text, self.author)
    }
}

/// First non-blank string value found under the given keys, trimmed.
/// Non-string values and blank strings fall through to the next synonym.
fn first_string(record: &Map<String, Value>, keys: &[&str]) -> Option<String> {
    keys.iter()
        .filter_map(|k| record.get(*k))
        .filter_map(Value::as_str)
        .map(str::trim)
        .find(|s| !s.is_empty())
        .map(str::to_string)
}
