//! The aggregate specification document.
//!
//! A document starts either as a skeleton built from [`ApiInfo`] metadata or
//! as the contents of a base YAML file, and grows as route documentation is
//! merged in. All merging goes through [`SpecDocument::merge_operation`],
//! the single place that enforces the merge invariants.

use crate::error::{Error, Result};
use crate::fragment::Fragment;
use crate::route::HttpMethod;
use log::debug;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{json, Map, Value};
use std::fs;
use std::path::Path;

/// Top-level metadata substituted into the skeleton document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ApiInfo {
    /// API title
    pub title: String,
    /// API version
    pub version: String,
    /// API description; multi-line text is normalized before substitution
    pub description: Option<String>,
    /// Contact name or address
    pub contact: Option<String>,
    /// Base URL the API is served under
    pub base_url: Option<String>,
}

impl Default for ApiInfo {
    fn default() -> Self {
        Self {
            title: "Swagger API".to_string(),
            version: "1.0.0".to_string(),
            description: Some("Swagger API definition".to_string()),
            contact: None,
            base_url: Some("/".to_string()),
        }
    }
}

/// The aggregate specification document: a top-level mapping guaranteed to
/// contain a growable `paths` object.
///
/// Invariants enforced here: every `paths` entry is created on first merge
/// (so an entry always has at least one method), method entries accumulate
/// per path, and a later write for the same (path, method) pair replaces
/// the earlier one.
#[derive(Debug, Clone)]
pub struct SpecDocument {
    root: Map<String, Value>,
}

impl SpecDocument {
    /// Builds the skeleton document from metadata: an info block, an
    /// optional server entry, and an empty `paths` mapping.
    pub fn from_info(info: &ApiInfo) -> Self {
        debug!("Building skeleton document for '{}'", info.title);

        let mut info_obj = Map::new();
        info_obj.insert("title".to_string(), Value::String(info.title.clone()));
        info_obj.insert("version".to_string(), Value::String(info.version.clone()));
        if let Some(description) = &info.description {
            info_obj.insert(
                "description".to_string(),
                Value::String(clean_description(description)),
            );
        }
        if let Some(contact) = &info.contact {
            info_obj.insert("contact".to_string(), json!({ "name": contact }));
        }

        let mut root = Map::new();
        root.insert("openapi".to_string(), Value::String("3.0.0".to_string()));
        root.insert("info".to_string(), Value::Object(info_obj));
        if let Some(url) = &info.base_url {
            root.insert("servers".to_string(), json!([{ "url": url }]));
        }
        root.insert("paths".to_string(), Value::Object(Map::new()));

        Self { root }
    }

    /// Loads a base document from a YAML file.
    ///
    /// Pre-existing `paths` content is preserved so later merges extend it
    /// rather than replace it. Unlike per-route documentation, a missing or
    /// malformed base document is a hard error.
    pub fn from_yaml_file(path: &Path) -> Result<Self> {
        debug!("Loading base document from {}", path.display());

        let text = fs::read_to_string(path).map_err(|e| Error::BaseDocument {
            file: path.to_path_buf(),
            message: e.to_string(),
        })?;
        let decoded: serde_yaml::Value =
            serde_yaml::from_str(&text).map_err(|e| Error::BaseDocument {
                file: path.to_path_buf(),
                message: e.to_string(),
            })?;
        let value = crate::fragment::yaml_to_json(decoded).ok_or_else(|| Error::BaseDocument {
            file: path.to_path_buf(),
            message: "document contains values JSON cannot represent".to_string(),
        })?;
        let mut root = match value {
            Value::Object(map) => map,
            _ => {
                return Err(Error::BaseDocument {
                    file: path.to_path_buf(),
                    message: "document is not a mapping".to_string(),
                })
            }
        };

        // Seed `paths` as a growable mapping, keeping whatever the file had
        if !root.get("paths").map_or(false, Value::is_object) {
            root.insert("paths".to_string(), Value::Object(Map::new()));
        }

        Ok(Self { root })
    }

    /// Files `fragment` under `paths[path][method]`, creating intermediate
    /// levels on demand.
    ///
    /// Method entries for the same path accumulate; a repeated write for the
    /// same (path, method) pair overwrites the earlier fragment.
    pub fn merge_operation(&mut self, path: &str, method: HttpMethod, fragment: Fragment) {
        let paths = ensure_object(
            self.root
                .entry("paths".to_string())
                .or_insert_with(|| Value::Object(Map::new())),
        );
        let path_item = ensure_object(
            paths
                .entry(path.to_string())
                .or_insert_with(|| Value::Object(Map::new())),
        );
        path_item.insert(method.as_str().to_string(), fragment);
    }

    /// The `paths` mapping.
    pub fn paths(&self) -> Option<&Map<String, Value>> {
        self.root.get("paths").and_then(Value::as_object)
    }
}

impl Serialize for SpecDocument {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.root.serialize(serializer)
    }
}

/// Returns a mutable view of `value` as a mapping, replacing any
/// non-mapping value with an empty one first.
fn ensure_object(value: &mut Value) -> &mut Map<String, Value> {
    if !value.is_object() {
        *value = Value::Object(Map::new());
    }
    match value {
        Value::Object(map) => map,
        _ => unreachable!(),
    }
}

/// Strips leading blank lines from a description and joins the remaining
/// lines with a four-space separator, matching how the description is
/// rendered inside the info block.
fn clean_description(description: &str) -> String {
    description
        .trim_start_matches('\n')
        .lines()
        .collect::<Vec<_>>()
        .join("    ")
}
