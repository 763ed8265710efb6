//! The route data model supplied by the hosting router.
//!
//! Routes are immutable from the extractor's point of view: the router owns
//! them and this crate only reads the handler documentation, the registered
//! method, and the path descriptor.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;

/// HTTP methods recognized as documentation keys.
///
/// These are the verbs a dispatch handler may expose and the only method
/// names that appear under a `paths` entry in the generated document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum HttpMethod {
    /// HTTP GET method
    Get,
    /// HTTP POST method
    Post,
    /// HTTP PUT method
    Put,
    /// HTTP DELETE method
    Delete,
    /// HTTP PATCH method
    Patch,
    /// HTTP HEAD method
    Head,
    /// HTTP OPTIONS method
    Options,
    /// HTTP TRACE method
    Trace,
}

impl HttpMethod {
    /// All recognized methods.
    pub const ALL: [HttpMethod; 8] = [
        HttpMethod::Get,
        HttpMethod::Post,
        HttpMethod::Put,
        HttpMethod::Delete,
        HttpMethod::Patch,
        HttpMethod::Head,
        HttpMethod::Options,
        HttpMethod::Trace,
    ];

    /// The lowercase form used as a method key in the `paths` mapping.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "get",
            HttpMethod::Post => "post",
            HttpMethod::Put => "put",
            HttpMethod::Delete => "delete",
            HttpMethod::Patch => "patch",
            HttpMethod::Head => "head",
            HttpMethod::Options => "options",
            HttpMethod::Trace => "trace",
        }
    }

    /// Parses a method name case-insensitively. Unknown names yield `None`.
    pub fn from_name(name: &str) -> Option<HttpMethod> {
        match name.trim().to_ascii_lowercase().as_str() {
            "get" => Some(HttpMethod::Get),
            "post" => Some(HttpMethod::Post),
            "put" => Some(HttpMethod::Put),
            "delete" => Some(HttpMethod::Delete),
            "patch" => Some(HttpMethod::Patch),
            "head" => Some(HttpMethod::Head),
            "options" => Some(HttpMethod::Options),
            "trace" => Some(HttpMethod::Trace),
            _ => None,
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let name = match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
            HttpMethod::Patch => "PATCH",
            HttpMethod::Head => "HEAD",
            HttpMethod::Options => "OPTIONS",
            HttpMethod::Trace => "TRACE",
        };
        f.write_str(name)
    }
}

/// The method a route was registered under: a concrete verb, or the
/// router's "any method" wildcard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RouteMethod {
    /// Registered for every method (`ANY` / `*`)
    Any,
    /// Registered for a single verb
    Verb(HttpMethod),
}

impl RouteMethod {
    /// Parses a registration method name. Accepts the wildcard spellings
    /// `ANY` and `*` in addition to the concrete verbs.
    pub fn from_name(name: &str) -> Option<RouteMethod> {
        let trimmed = name.trim();
        if trimmed == "*" || trimmed.eq_ignore_ascii_case("any") {
            return Some(RouteMethod::Any);
        }
        HttpMethod::from_name(trimmed).map(RouteMethod::Verb)
    }
}

impl Default for RouteMethod {
    /// A route registered without an explicit method defaults to GET.
    fn default() -> Self {
        RouteMethod::Verb(HttpMethod::Get)
    }
}

/// URL path descriptor supplied by the routing layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathSpec {
    /// A fully resolved literal path, e.g. `/users`
    Concrete(String),
    /// A formatter pattern for a dynamic route not yet bound to a literal,
    /// e.g. `/users/{id}`
    Pattern(String),
}

/// How a handler carries its inline documentation.
#[derive(Debug, Clone)]
pub enum HandlerKind {
    /// An ordinary single-method handler with optional free-text
    /// documentation.
    Function {
        /// The handler's free-text documentation, if any
        doc: Option<String>,
    },
    /// A dispatch handler exposing several verb-specific implementations
    /// under one registration. The manifest maps exposed verb names to the
    /// documentation of the corresponding implementation; names that are not
    /// recognized verbs are ignored during discovery.
    Dispatch {
        /// Verb name -> implementation documentation
        verbs: BTreeMap<String, String>,
    },
}

/// A route handler as seen by the documentation extractor.
#[derive(Debug, Clone)]
pub struct Handler {
    /// The handler's documentation shape
    pub kind: HandlerKind,
    /// External documentation reference: a YAML file that replaces any
    /// inline documentation for this handler
    pub external_doc: Option<PathBuf>,
}

impl Handler {
    /// A plain handler carrying the given free-text documentation.
    pub fn documented(doc: impl Into<String>) -> Self {
        Self {
            kind: HandlerKind::Function {
                doc: Some(doc.into()),
            },
            external_doc: None,
        }
    }

    /// A plain handler without documentation.
    pub fn undocumented() -> Self {
        Self {
            kind: HandlerKind::Function { doc: None },
            external_doc: None,
        }
    }

    /// A dispatch handler with the given verb manifest.
    pub fn dispatch(verbs: BTreeMap<String, String>) -> Self {
        Self {
            kind: HandlerKind::Dispatch { verbs },
            external_doc: None,
        }
    }

    /// Points the handler at an external documentation file.
    pub fn with_external_doc(mut self, path: impl Into<PathBuf>) -> Self {
        self.external_doc = Some(path.into());
        self
    }
}

/// A single route registration supplied by the hosting router.
#[derive(Debug, Clone)]
pub struct Route {
    /// The path descriptor
    pub path: PathSpec,
    /// The method the route was registered under
    pub method: RouteMethod,
    /// The handler bound to the route
    pub handler: Handler,
}

impl Route {
    /// Create a new Route
    pub fn new(path: PathSpec, method: RouteMethod, handler: Handler) -> Self {
        Self {
            path,
            method,
            handler,
        }
    }

    /// The single method this route files documentation under when it is
    /// not subject to verb discovery. Wildcard registrations fall back to
    /// GET, the registration default.
    pub fn resolved_method(&self) -> HttpMethod {
        match self.method {
            RouteMethod::Verb(method) => method,
            RouteMethod::Any => HttpMethod::Get,
        }
    }
}
