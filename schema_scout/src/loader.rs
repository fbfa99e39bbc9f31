//! Schema dump loading
//!
//! Reads the full DDL text in one pass. A missing file is a recognized,
//! non-fatal condition; every other I/O failure propagates.

use std::fs;
use std::path::Path;

use crate::error::Result;

/// Read the schema dump, or `None` when the file does not exist.
pub fn load_schema_text(path: &Path) -> Result<Option<String>> {
    if !path.exists() {
        tracing::warn!(path = %path.display(), "schema dump not found");
        return Ok(None);
    }

    let content = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), bytes = content.len(), "schema dump loaded");

    Ok(Some(content))
}
