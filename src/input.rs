//! Input boundary — turning JSON text into a document value.
//!
//! Wraps the deserializer so that "malformed" stays distinct from
//! "absent": callers either get a well-formed value or an error, never a
//! partially interpreted document.

use serde_json::Value;
use std::fs;
use std::path::Path;
use tracing::debug;

use crate::error::Result;

/// Parse JSON text into a document value.
pub fn parse_text(text: &str) -> Result<Value> {
    let value = serde_json::from_str(text)?;
    Ok(value)
}

/// Read and parse a document file.
pub fn load_document(path: &Path) -> Result<Value> {
    debug!(file = %path.display(), "loading document");
    let text = fs::read_to_string(path)?;
    parse_text(&text)
}
