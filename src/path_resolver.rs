//! Path resolution: the `paths` key a route files its documentation under.

use crate::route::{PathSpec, Route};

/// Resolves the canonical `paths` key for a route.
///
/// A concrete resolved path is preferred; a dynamic route not bound to a
/// literal falls back to its formatter pattern. The returned key is used
/// verbatim, so distinct routes that resolve to the same string merge into
/// one `paths` entry.
pub struct PathResolver;

impl PathResolver {
    /// The `paths` key for this route.
    pub fn resolve(route: &Route) -> &str {
        match &route.path {
            PathSpec::Concrete(path) => path,
            PathSpec::Pattern(pattern) => pattern,
        }
    }
}
