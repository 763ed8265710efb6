//! Method resolution: which (verb, documentation source) pairs a route
//! contributes to the generated document.

use crate::fragment::SECTION_MARKER;
use crate::route::{HandlerKind, HttpMethod, Route, RouteMethod};
use log::debug;

/// Resolves the (method, documentation text) pairs to extract from a route.
///
/// Ordinary handlers contribute at most one pair, keyed by the method the
/// route was registered under. A dispatch handler registered with the
/// wildcard method contributes one pair per discovered verb: every manifest
/// entry whose name is a recognized verb and whose documentation contains a
/// structured section.
pub struct MethodResolver;

impl MethodResolver {
    /// Enumerates the documentation sources for one route.
    ///
    /// Discovery order is deterministic: verbs come out sorted by name. A
    /// route whose handler has no usable documentation contributes nothing,
    /// which is not an error.
    pub fn resolve(route: &Route) -> Vec<(HttpMethod, &str)> {
        match (&route.method, &route.handler.kind) {
            (RouteMethod::Any, HandlerKind::Dispatch { verbs }) => verbs
                .iter()
                .filter_map(|(name, doc)| {
                    let method = HttpMethod::from_name(name)?;
                    if doc.contains(SECTION_MARKER) {
                        Some((method, doc.as_str()))
                    } else {
                        debug!("Skipping {} implementation: no documentation section", method);
                        None
                    }
                })
                .collect(),
            _ => {
                let method = route.resolved_method();
                match Self::single_doc(route, method) {
                    Some(doc) => vec![(method, doc)],
                    None => Vec::new(),
                }
            }
        }
    }

    /// Documentation text for a single-method registration. For a dispatch
    /// handler bound to one verb, that verb's manifest entry is the source.
    fn single_doc(route: &Route, method: HttpMethod) -> Option<&str> {
        match &route.handler.kind {
            HandlerKind::Function { doc } => doc.as_deref(),
            HandlerKind::Dispatch { verbs } => verbs
                .iter()
                .find(|(name, _)| HttpMethod::from_name(name) == Some(method))
                .map(|(_, doc)| doc.as_str()),
        }
    }
}
