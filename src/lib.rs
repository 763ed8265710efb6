//! Swagger From Routes - API specification documents extracted from route
//! documentation.
//!
//! This library folds the machine-readable documentation embedded in route
//! handler metadata into a single OpenAPI/Swagger-style document. Handler
//! documentation is free text with an optional embedded YAML section
//! following a `---` marker line; malformed or missing documentation
//! degrades to visible placeholder fragments instead of failing the
//! generation pass, so the served document is always well-formed.
//!
//! # Architecture
//!
//! The library is organized into modules that mirror the extraction chain:
//!
//! 1. [`route`] - The route/handler data model supplied by the hosting router
//! 2. [`path_resolver`] - Chooses the `paths` key a route files under
//! 3. [`method_resolver`] - Enumerates (verb, documentation) pairs per route
//! 4. [`source_loader`] - External reference files vs inline doc blocks
//! 5. [`fragment`] - Marker scan and YAML decode of one doc block
//! 6. [`document`] - The aggregate document and its merge choke point
//! 7. [`merger`] - Drives the chain over the whole route set
//! 8. [`serializer`] - Serializes the finished document to JSON or YAML
//!
//! # Example
//!
//! ```
//! use swagger_from_routes::document::ApiInfo;
//! use swagger_from_routes::merger;
//! use swagger_from_routes::route::{Handler, PathSpec, Route, RouteMethod};
//!
//! let routes = vec![Route::new(
//!     PathSpec::Concrete("/items".to_string()),
//!     RouteMethod::default(),
//!     Handler::documented("List items\n---\ndescription: list all items"),
//! )];
//!
//! let json = merger::generate(&routes, &ApiInfo::default()).unwrap();
//! assert!(json.contains("list all items"));
//! ```
//!
//! For command-line usage, see the [`cli`] module, which drives the same
//! pipeline from a declarative route manifest file.

pub mod cli;
pub mod document;
pub mod error;
pub mod fragment;
pub mod manifest;
pub mod merger;
pub mod method_resolver;
pub mod path_resolver;
pub mod route;
pub mod serializer;
pub mod source_loader;
