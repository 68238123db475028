//! Import parser for uploaded selector and test-data files.
//!
//! The host reads the file asynchronously and delivers an [`ImportEvent`]
//! whenever the content arrives. Data uploads replace the test-data buffer
//! verbatim; selector uploads are decoded as JSON with a lenient shape
//! check: objects and arrays replace the selector list wholesale, malformed
//! documents are rejected without touching existing state, and any other
//! decoded shape is ignored.

use serde_json::Value;
use thiserror::Error;

use crate::model::Selector;

/// Where an uploaded file's content should land.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportTarget {
    /// Replace the element selector list.
    Selectors,
    /// Replace the test-data buffer.
    Data,
}

/// Raw upload delivered by the host once a file read completes.
#[derive(Debug, Clone)]
pub struct ImportEvent {
    /// Display name of the uploaded file, used in notifications only.
    pub file_name: String,
    /// Which configuration field the upload targets.
    pub target: ImportTarget,
    /// The file content as text.
    pub content: String,
}

/// Errors from decoding a selector file.
#[derive(Debug, Error)]
pub enum ImportError {
    /// The selector file was not valid JSON.
    #[error("could not parse selector file as JSON: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Outcome of decoding a well-formed selector file.
#[derive(Debug)]
pub enum SelectorImport {
    /// Replace the selector list wholesale with these entries.
    Replace(Vec<Selector>),
    /// The document parsed but is neither an object nor an array; the
    /// existing selector list is left untouched.
    Unsupported,
}

/// Decode selector-file content.
///
/// An object yields one entry per key in document order (`name` = key,
/// `selector` = stringified value, fresh id). An array yields one entry per
/// element, reusing the element's `id` when present and non-empty and
/// defaulting `name`/`selector` to the empty string.
///
/// # Errors
///
/// Returns [`ImportError::Malformed`] when the content is not valid JSON.
pub fn parse_selectors(content: &str) -> Result<SelectorImport, ImportError> {
    let document: Value = serde_json::from_str(content)?;
    match document {
        Value::Object(map) => {
            let entries = map
                .into_iter()
                .map(|(name, value)| Selector::new(&name, &stringify(&value)))
                .collect();
            Ok(SelectorImport::Replace(entries))
        }
        Value::Array(items) => {
            let entries = items.into_iter().map(element_selector).collect();
            Ok(SelectorImport::Replace(entries))
        }
        _ => Ok(SelectorImport::Unsupported),
    }
}

/// Render a JSON value as a selector string. Strings are taken verbatim;
/// everything else keeps its JSON representation.
fn stringify(value: &Value) -> String {
    match value {
        Value::String(text) => text.clone(),
        other => other.to_string(),
    }
}

fn element_selector(item: Value) -> Selector {
    let name = item.get("name").and_then(Value::as_str).unwrap_or("");
    let selector = item.get("selector").and_then(Value::as_str).unwrap_or("");
    match item.get("id").and_then(Value::as_str) {
        Some(id) if !id.is_empty() => Selector {
            id: id.to_string(),
            name: name.to_string(),
            selector: selector.to_string(),
        },
        _ => Selector::new(name, selector),
    }
}
