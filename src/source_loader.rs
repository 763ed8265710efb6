//! Documentation source loading: external reference files vs inline doc
//! blocks.

use crate::fragment::{self, Fragment};
use crate::method_resolver::MethodResolver;
use crate::route::{HttpMethod, Route};
use log::{debug, warn};
use std::fs;

/// Loads the documentation fragments a route contributes.
///
/// A handler that names an external documentation file is read from that
/// file: the whole file is the structured section, with no marker scan. All
/// other handlers are mined for inline doc blocks via [`MethodResolver`].
/// The two sources are mutually exclusive and the branch is taken once per
/// route, before any per-verb resolution.
pub struct SourceLoader;

impl SourceLoader {
    /// Returns the (method, fragment) entries for one route.
    ///
    /// Never fails: an unreadable external file yields the missing-file
    /// fallback fragment, a malformed source yields the parse-failure
    /// fallback, and a route without documentation yields no entries.
    pub fn load(route: &Route) -> Vec<(HttpMethod, Fragment)> {
        if let Some(path) = &route.handler.external_doc {
            debug!("Loading external documentation from {}", path.display());
            let fragment = match fs::read_to_string(path) {
                Ok(text) => fragment::decode_fragment(&text),
                Err(e) => {
                    warn!("Failed to read documentation file {}: {}", path.display(), e);
                    fragment::missing_file_fragment(path)
                }
            };
            return vec![(route.resolved_method(), fragment)];
        }

        MethodResolver::resolve(route)
            .into_iter()
            .map(|(method, doc)| (method, fragment::parse_doc_block(doc)))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fragment::{invalid_fragment, missing_file_fragment, INVALID_DOC_TAG};
    use crate::route::{Handler, PathSpec, RouteMethod};
    use serde_json::json;
    use std::io::Write;
    use tempfile::TempDir;

    /// Helper function to create a temporary file with content
    fn create_temp_file(dir: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
        let file_path = dir.path().join(name);
        let mut file = fs::File::create(&file_path).unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file_path
    }

    fn external_route(path: impl Into<std::path::PathBuf>, method: RouteMethod) -> Route {
        Route::new(
            PathSpec::Concrete("/pets".to_string()),
            method,
            Handler::undocumented().with_external_doc(path),
        )
    }

    #[test]
    fn test_external_file_is_decoded_whole() {
        let temp_dir = TempDir::new().unwrap();
        // No marker line: the entire file is the structured section
        let doc_file = create_temp_file(
            &temp_dir,
            "pets.yaml",
            "description: all about pets\ntags: [pets]\n",
        );

        let route = external_route(&doc_file, RouteMethod::Verb(HttpMethod::Get));
        let entries = SourceLoader::load(&route);

        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].0, HttpMethod::Get);
        assert_eq!(
            entries[0].1,
            json!({"description": "all about pets", "tags": ["pets"]})
        );
    }

    #[test]
    fn test_external_file_keyed_by_route_method() {
        let temp_dir = TempDir::new().unwrap();
        let doc_file = create_temp_file(&temp_dir, "pets.yaml", "description: create\n");

        let route = external_route(&doc_file, RouteMethod::Verb(HttpMethod::Post));
        let entries = SourceLoader::load(&route);
        assert_eq!(entries[0].0, HttpMethod::Post);
    }

    #[test]
    fn test_missing_external_file_yields_missing_fragment() {
        let missing = std::path::Path::new("/nonexistent/docs/pets.yaml");
        let route = external_route(missing, RouteMethod::Verb(HttpMethod::Get));

        let entries = SourceLoader::load(&route);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].1, missing_file_fragment(missing));
        assert!(entries[0].1["description"]
            .as_str()
            .unwrap()
            .contains("/nonexistent/docs/pets.yaml"));
    }

    #[test]
    fn test_malformed_external_file_yields_invalid_fragment() {
        let temp_dir = TempDir::new().unwrap();
        let doc_file = create_temp_file(&temp_dir, "broken.yaml", "description: \"unterminated\n");

        let route = external_route(&doc_file, RouteMethod::Verb(HttpMethod::Get));
        let entries = SourceLoader::load(&route);
        assert_eq!(entries[0].1, invalid_fragment());
        assert_eq!(entries[0].1["tags"], json!([INVALID_DOC_TAG]));
    }

    #[test]
    fn test_external_file_bypasses_inline_docs() {
        let temp_dir = TempDir::new().unwrap();
        let doc_file = create_temp_file(&temp_dir, "pets.yaml", "description: from file\n");

        let route = Route::new(
            PathSpec::Concrete("/pets".to_string()),
            RouteMethod::Verb(HttpMethod::Get),
            Handler::documented("Inline\n---\ndescription: from inline doc")
                .with_external_doc(&doc_file),
        );
        let entries = SourceLoader::load(&route);
        assert_eq!(entries[0].1, json!({"description": "from file"}));
    }

    #[test]
    fn test_inline_docs_run_through_fragment_parser() {
        let route = Route::new(
            PathSpec::Concrete("/items".to_string()),
            RouteMethod::Verb(HttpMethod::Get),
            Handler::documented("List items\n---\ndescription: list all items\ntags: [items]"),
        );
        let entries = SourceLoader::load(&route);
        assert_eq!(entries.len(), 1);
        assert_eq!(
            entries[0].1,
            json!({"description": "list all items", "tags": ["items"]})
        );
    }

    #[test]
    fn test_undocumented_route_loads_nothing() {
        let route = Route::new(
            PathSpec::Concrete("/items".to_string()),
            RouteMethod::Verb(HttpMethod::Get),
            Handler::undocumented(),
        );
        assert!(SourceLoader::load(&route).is_empty());
    }
}
