//! Declarative route manifest consumed by the command-line interface.
//!
//! The manifest is a YAML file describing the hosting application's route
//! table, so the merge engine can run offline against a dumped route set:
//!
//! ```yaml
//! info:
//!   title: Petstore
//!   version: 1.0.0
//! routes:
//!   - path: /pets
//!     method: GET
//!     doc: |
//!       List pets.
//!       ---
//!       description: Returns all pets
//!       tags: [pets]
//!   - pattern: /pets/{id}
//!     method: ANY
//!     methods:
//!       get: |
//!         ---
//!         description: Fetch one pet
//!       delete: |
//!         ---
//!         description: Remove a pet
//!   - path: /store
//!     method: GET
//!     doc_file: docs/store.yaml
//! ```

use crate::document::ApiInfo;
use crate::error::{Error, Result};
use crate::route::{Handler, PathSpec, Route, RouteMethod};
use log::debug;
use serde::Deserialize;
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Top-level manifest file structure.
#[derive(Debug, Deserialize)]
pub struct RouteManifest {
    /// Document metadata for the skeleton document
    #[serde(default)]
    pub info: ApiInfo,
    /// Base document to merge into instead of building a skeleton
    #[serde(default)]
    pub base_document: Option<PathBuf>,
    /// Route descriptors
    #[serde(default)]
    pub routes: Vec<RouteEntry>,
}

/// One route descriptor in the manifest.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct RouteEntry {
    /// Concrete resolved path
    pub path: Option<String>,
    /// Formatter pattern for a dynamic route
    pub pattern: Option<String>,
    /// Registration method; `ANY` or `*` marks a wildcard. Defaults to GET.
    pub method: Option<String>,
    /// Inline free-text handler documentation
    pub doc: Option<String>,
    /// Per-verb documentation for a dispatch handler
    pub methods: Option<BTreeMap<String, String>>,
    /// External documentation file for the handler
    pub doc_file: Option<PathBuf>,
}

impl RouteManifest {
    /// Loads and decodes a manifest file.
    pub fn from_yaml_file(path: &Path) -> Result<RouteManifest> {
        debug!("Loading route manifest from {}", path.display());

        let text = fs::read_to_string(path)
            .map_err(|e| Error::Manifest(format!("failed to read {}: {}", path.display(), e)))?;
        serde_yaml::from_str(&text)
            .map_err(|e| Error::Manifest(format!("failed to decode {}: {}", path.display(), e)))
    }

    /// Converts the manifest entries into routes for the merge pass.
    pub fn build_routes(&self) -> Result<Vec<Route>> {
        self.routes.iter().map(RouteEntry::build).collect()
    }
}

impl RouteEntry {
    /// Builds the route this entry describes.
    fn build(&self) -> Result<Route> {
        let path = match (&self.path, &self.pattern) {
            (Some(path), _) => PathSpec::Concrete(path.clone()),
            (None, Some(pattern)) => PathSpec::Pattern(pattern.clone()),
            (None, None) => {
                return Err(Error::Manifest(
                    "route entry needs a path or a pattern".to_string(),
                ))
            }
        };

        let method = match &self.method {
            Some(name) => RouteMethod::from_name(name)
                .ok_or_else(|| Error::Manifest(format!("unknown route method: {}", name)))?,
            None => RouteMethod::default(),
        };

        let mut handler = match (&self.methods, &self.doc) {
            (Some(verbs), _) => Handler::dispatch(verbs.clone()),
            (None, Some(doc)) => Handler::documented(doc.clone()),
            (None, None) => Handler::undocumented(),
        };
        if let Some(file) = &self.doc_file {
            handler = handler.with_external_doc(file.clone());
        }

        Ok(Route::new(path, method, handler))
    }
}
