//! Serialization of the finished specification document.

use crate::document::SpecDocument;
use crate::error::Result;
use log::debug;
use std::fs;
use std::path::Path;

/// Serializes the document to the canonical JSON form served to consumers.
pub fn serialize_json(document: &SpecDocument) -> Result<String> {
    debug!("Serializing specification document to JSON");
    Ok(serde_json::to_string_pretty(document)?)
}

/// Serializes the document to YAML, for human review.
pub fn serialize_yaml(document: &SpecDocument) -> Result<String> {
    debug!("Serializing specification document to YAML");
    Ok(serde_yaml::to_string(document)?)
}

/// Writes string content to a file, creating parent directories as needed.
/// Overwrites an existing file.
pub fn write_to_file(content: &str, path: &Path) -> Result<()> {
    debug!("Writing content to file: {}", path.display());

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    fs::write(path, content)?;

    debug!("Wrote {} bytes to {}", content.len(), path.display());
    Ok(())
}
