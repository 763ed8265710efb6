use pretty_assertions::assert_eq;
use serde_json::{json, Value};
use std::collections::BTreeMap;
use swagger_from_routes::{
    document::{ApiInfo, SpecDocument},
    fragment::INVALID_DOC_TAG,
    manifest::RouteManifest,
    merger::{self, DocumentMerger},
    route::{Handler, HttpMethod, PathSpec, Route, RouteMethod},
    serializer::serialize_json,
};
use tempfile::TempDir;

/// Helper function to populate a temporary directory with files
fn create_test_files(files: Vec<(&str, &str)>) -> TempDir {
    let temp_dir = TempDir::new().expect("Failed to create temp directory");

    for (path, content) in files {
        let file_path = temp_dir.path().join(path);
        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        std::fs::write(&file_path, content).expect("Failed to write test file");
    }

    temp_dir
}

fn inline_route(path: &str, method: HttpMethod, doc: &str) -> Route {
    Route::new(
        PathSpec::Concrete(path.to_string()),
        RouteMethod::Verb(method),
        Handler::documented(doc),
    )
}

#[test]
fn test_single_get_route_end_to_end() {
    let routes = vec![inline_route(
        "/items",
        HttpMethod::Get,
        "List items\n---\ndescription: list all items\ntags: [items]",
    )];

    let output = merger::generate(&routes, &ApiInfo::default()).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(
        value["paths"]["/items"]["get"],
        json!({"description": "list all items", "tags": ["items"]})
    );
}

#[test]
fn test_undocumented_route_produces_no_path_entry() {
    let routes = vec![
        inline_route("/items", HttpMethod::Get, "Doc\n---\ndescription: list"),
        Route::new(
            PathSpec::Concrete("/silent".to_string()),
            RouteMethod::default(),
            Handler::undocumented(),
        ),
    ];

    let output = merger::generate(&routes, &ApiInfo::default()).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();

    let paths = value["paths"].as_object().unwrap();
    assert_eq!(paths.len(), 1);
    assert!(paths.get("/silent").is_none());
}

#[test]
fn test_sibling_methods_and_collisions() {
    let routes = vec![
        inline_route("/items", HttpMethod::Get, "G\n---\ndescription: list"),
        inline_route("/items", HttpMethod::Post, "P\n---\ndescription: create"),
        inline_route("/items", HttpMethod::Post, "P2\n---\ndescription: create v2"),
    ];

    let output = merger::generate(&routes, &ApiInfo::default()).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(
        value["paths"]["/items"],
        json!({
            "get": {"description": "list"},
            "post": {"description": "create v2"}
        })
    );
}

#[test]
fn test_dispatch_handler_contributes_discovered_verbs() {
    let verbs: BTreeMap<String, String> = [
        (
            "get".to_string(),
            "Fetch one pet\n---\ndescription: fetch a pet\ntags: [pets]".to_string(),
        ),
        (
            "delete".to_string(),
            "Remove a pet\n---\ndescription: remove a pet\ntags: [pets]".to_string(),
        ),
        ("post".to_string(), "No structured section here".to_string()),
    ]
    .into_iter()
    .collect();

    let routes = vec![Route::new(
        PathSpec::Pattern("/pets/{id}".to_string()),
        RouteMethod::Any,
        Handler::dispatch(verbs),
    )];

    let output = merger::generate(&routes, &ApiInfo::default()).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();

    let item = value["paths"]["/pets/{id}"].as_object().unwrap();
    assert_eq!(item.len(), 2);
    assert_eq!(item["get"]["description"], json!("fetch a pet"));
    assert_eq!(item["delete"]["description"], json!("remove a pet"));
}

#[test]
fn test_malformed_doc_block_degrades_to_placeholder() {
    let routes = vec![inline_route(
        "/broken",
        HttpMethod::Get,
        "Broken\n---\ndescription: \"unterminated",
    )];

    let output = merger::generate(&routes, &ApiInfo::default()).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();

    let fragment = &value["paths"]["/broken"]["get"];
    assert_eq!(fragment["tags"], json!([INVALID_DOC_TAG]));
    assert!(fragment["description"]
        .as_str()
        .unwrap()
        .contains("could not be parsed"));
}

#[test]
fn test_external_doc_file_end_to_end() {
    let temp_dir = create_test_files(vec![(
        "docs/store.yaml",
        include_str!("fixtures/store_doc.yaml"),
    )]);

    let routes = vec![Route::new(
        PathSpec::Concrete("/store".to_string()),
        RouteMethod::Verb(HttpMethod::Get),
        Handler::undocumented().with_external_doc(temp_dir.path().join("docs/store.yaml")),
    )];

    let output = merger::generate(&routes, &ApiInfo::default()).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();

    let fragment = &value["paths"]["/store"]["get"];
    assert_eq!(fragment["tags"], json!(["store"]));
    assert_eq!(
        fragment["responses"]["200"]["description"],
        json!("A mapping of status codes to quantities")
    );
}

#[test]
fn test_missing_external_doc_file_names_the_resource() {
    let routes = vec![Route::new(
        PathSpec::Concrete("/store".to_string()),
        RouteMethod::Verb(HttpMethod::Get),
        Handler::undocumented().with_external_doc("/nonexistent/store.yaml"),
    )];

    let output = merger::generate(&routes, &ApiInfo::default()).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();

    let fragment = &value["paths"]["/store"]["get"];
    assert_eq!(fragment["tags"], json!([INVALID_DOC_TAG]));
    assert!(fragment["description"]
        .as_str()
        .unwrap()
        .contains("/nonexistent/store.yaml"));
}

#[test]
fn test_generation_from_base_document_preserves_existing_paths() {
    let temp_dir = create_test_files(vec![(
        "base.yaml",
        include_str!("fixtures/base_document.yaml"),
    )]);

    let routes = vec![inline_route(
        "/pets",
        HttpMethod::Get,
        "List pets\n---\ndescription: all pets\ntags: [pets]",
    )];

    let output = merger::generate_from_file(&temp_dir.path().join("base.yaml"), &routes).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();

    assert_eq!(value["info"]["title"], json!("Petstore"));
    assert_eq!(
        value["paths"]["/health"]["get"]["description"],
        json!("Liveness probe")
    );
    assert_eq!(value["paths"]["/pets"]["get"]["description"], json!("all pets"));
}

#[test]
fn test_generation_from_missing_base_document_fails() {
    let result = merger::generate_from_file(std::path::Path::new("/nonexistent/base.yaml"), &[]);
    assert!(result.is_err());
}

#[test]
fn test_manifest_driven_pipeline() {
    let manifest_yaml = r#"
info:
  title: Petstore
  version: 1.0.0
  description: Pets as a service
routes:
  - path: /pets
    method: GET
    doc: |
      List pets.
      ---
      description: Returns all pets
      tags: [pets]
  - pattern: /pets/{id}
    method: ANY
    methods:
      get: |
        ---
        description: Fetch one pet
      delete: |
        ---
        description: Remove a pet
      patch: no structured section
  - path: /store
    method: GET
    doc_file: DOCS_DIR/store.yaml
  - path: /orders
    method: POST
    doc_file: DOCS_DIR/missing.yaml
  - path: /internal
    method: GET
"#;

    let temp_dir = create_test_files(vec![(
        "docs/store.yaml",
        include_str!("fixtures/store_doc.yaml"),
    )]);
    let docs_dir = temp_dir.path().join("docs");
    let manifest_yaml = manifest_yaml.replace("DOCS_DIR", &docs_dir.to_string_lossy());
    std::fs::write(temp_dir.path().join("routes.yaml"), manifest_yaml).unwrap();

    let manifest = RouteManifest::from_yaml_file(&temp_dir.path().join("routes.yaml")).unwrap();
    let routes = manifest.build_routes().unwrap();
    assert_eq!(routes.len(), 5);

    let mut document = SpecDocument::from_info(&manifest.info);
    DocumentMerger::merge_all(&routes, &mut document);
    let output = serialize_json(&document).unwrap();
    let value: Value = serde_json::from_str(&output).unwrap();

    // Skeleton metadata from the manifest info section
    assert_eq!(value["info"]["title"], json!("Petstore"));
    assert_eq!(value["info"]["description"], json!("Pets as a service"));

    let paths = value["paths"].as_object().unwrap();

    // Inline route
    assert_eq!(
        paths["/pets"]["get"],
        json!({"description": "Returns all pets", "tags": ["pets"]})
    );

    // Dispatch route: only verbs with a structured section
    let item = paths["/pets/{id}"].as_object().unwrap();
    assert_eq!(item.len(), 2);
    assert_eq!(item["get"]["description"], json!("Fetch one pet"));
    assert_eq!(item["delete"]["description"], json!("Remove a pet"));

    // External file route
    assert_eq!(paths["/store"]["get"]["tags"], json!(["store"]));

    // Missing external file degrades to a visible placeholder
    assert_eq!(paths["/orders"]["post"]["tags"], json!([INVALID_DOC_TAG]));

    // Undocumented route contributes nothing
    assert!(paths.get("/internal").is_none());

    // The document as a whole stays well-formed despite the failures
    assert_eq!(paths.len(), 4);
}
