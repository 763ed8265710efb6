//! Document merging: drives the extraction chain over the whole route set.

use crate::document::{ApiInfo, SpecDocument};
use crate::error::Result;
use crate::path_resolver::PathResolver;
use crate::route::Route;
use crate::serializer;
use crate::source_loader::SourceLoader;
use log::debug;
use std::path::Path;

/// Folds per-route documentation fragments into the aggregate document.
pub struct DocumentMerger;

impl DocumentMerger {
    /// Merges documentation from every route into `document`, in the order
    /// the routes are yielded.
    ///
    /// Routes contributing no fragments are skipped without touching the
    /// document. Per-route failures are contained by the fallback-fragment
    /// policy, so the pass never fails and never rolls back: fragments
    /// merged before a broken route stay merged.
    pub fn merge_all<'a, I>(routes: I, document: &mut SpecDocument)
    where
        I: IntoIterator<Item = &'a Route>,
    {
        for route in routes {
            let path = PathResolver::resolve(route);
            let entries = SourceLoader::load(route);
            if entries.is_empty() {
                debug!("Route {} contributes no documentation, skipping", path);
                continue;
            }
            for (method, fragment) in entries {
                debug!("Merging {} {}", method, path);
                document.merge_operation(path, method, fragment);
            }
        }
    }
}

/// Generates the complete specification document for a route set,
/// JSON-encoded.
///
/// Builds the skeleton from `info`, merges every route, and serializes the
/// result. Per-route documentation problems surface as fallback fragments
/// in the output, never as errors.
pub fn generate(routes: &[Route], info: &ApiInfo) -> Result<String> {
    let mut document = SpecDocument::from_info(info);
    DocumentMerger::merge_all(routes, &mut document);
    serializer::serialize_json(&document)
}

/// Generates the specification document starting from a base document file.
///
/// Pre-existing `paths` content in the base document is preserved and route
/// documentation merges into it. The base file failing to load is the one
/// failure this pipeline propagates.
pub fn generate_from_file(base: &Path, routes: &[Route]) -> Result<String> {
    let mut document = SpecDocument::from_yaml_file(base)?;
    DocumentMerger::merge_all(routes, &mut document);
    serializer::serialize_json(&document)
}
