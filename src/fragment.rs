//! Doc-block fragment parsing.
//!
//! Handler documentation is free text optionally followed by an embedded
//! YAML section. The section starts on the line after the first line
//! containing the `---` marker; everything before and including that line is
//! human-readable prose and is ignored. Extraction is a two-stage decode: a
//! total text split followed by a YAML decode that degrades to a fixed
//! fallback fragment on malformed input instead of failing.

use log::debug;
use serde_json::{json, Map, Value};
use std::path::Path;

/// Marker separating prose from the embedded YAML documentation section.
pub const SECTION_MARKER: &str = "---";

/// Tag attached to fallback fragments so broken documentation stays visible
/// in the generated document.
pub const INVALID_DOC_TAG: &str = "Invalid Documentation";

/// One operation's structured documentation: an arbitrarily nested mapping
/// of scalars, sequences, and mappings.
pub type Fragment = Value;

/// Fallback fragment for a documentation block that failed to decode.
pub fn invalid_fragment() -> Fragment {
    json!({
        "description": "⚠ Documentation block could not be parsed ⚠",
        "tags": [INVALID_DOC_TAG]
    })
}

/// Fallback fragment for an external documentation file that could not be
/// read. The description names the missing resource so the gap is
/// diagnosable from the generated document alone.
pub fn missing_file_fragment(path: &Path) -> Fragment {
    json!({
        "description": format!("⚠ Documentation file not found ({}) ⚠", path.display()),
        "tags": [INVALID_DOC_TAG]
    })
}

/// Returns the documentation text strictly after the first marker line.
///
/// This is the pure half of fragment extraction: it never fails. When no
/// line contains the marker, the section is empty.
pub fn split_doc_block(doc: &str) -> &str {
    let mut offset = 0;
    for line in doc.split_inclusive('\n') {
        offset += line.len();
        if line.contains(SECTION_MARKER) {
            return &doc[offset..];
        }
    }
    ""
}

/// Decodes one YAML documentation section into a fragment.
///
/// Total like the split stage, but by policy rather than by construction:
/// an empty or `null` section yields an empty fragment, and anything that
/// does not decode to a mapping yields [`invalid_fragment`].
pub fn decode_fragment(block: &str) -> Fragment {
    if block.trim().is_empty() {
        return Value::Object(Map::new());
    }
    let decoded: serde_yaml::Value = match serde_yaml::from_str(block) {
        Ok(value) => value,
        Err(e) => {
            debug!("Failed to decode documentation block: {}", e);
            return invalid_fragment();
        }
    };
    match yaml_to_json(decoded) {
        Some(Value::Object(map)) => Value::Object(map),
        Some(Value::Null) => Value::Object(Map::new()),
        _ => {
            debug!("Documentation block did not decode to a mapping");
            invalid_fragment()
        }
    }
}

/// Converts a decoded YAML value into the JSON value tree used by the
/// aggregate document. Scalar mapping keys are stringified, so a block
/// written `200: ok` files under the key `"200"`. Returns `None` for
/// values JSON cannot represent (composite keys, non-finite floats).
pub(crate) fn yaml_to_json(value: serde_yaml::Value) -> Option<Value> {
    match value {
        serde_yaml::Value::Null => Some(Value::Null),
        serde_yaml::Value::Bool(b) => Some(Value::Bool(b)),
        serde_yaml::Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                Some(Value::from(i))
            } else if let Some(u) = n.as_u64() {
                Some(Value::from(u))
            } else {
                n.as_f64()
                    .and_then(serde_json::Number::from_f64)
                    .map(Value::Number)
            }
        }
        serde_yaml::Value::String(s) => Some(Value::String(s)),
        serde_yaml::Value::Sequence(seq) => seq
            .into_iter()
            .map(yaml_to_json)
            .collect::<Option<Vec<_>>>()
            .map(Value::Array),
        serde_yaml::Value::Mapping(mapping) => {
            let mut out = Map::new();
            for (key, value) in mapping {
                let key = match key {
                    serde_yaml::Value::String(s) => s,
                    serde_yaml::Value::Number(n) => n.to_string(),
                    serde_yaml::Value::Bool(b) => b.to_string(),
                    _ => return None,
                };
                out.insert(key, yaml_to_json(value)?);
            }
            Some(Value::Object(out))
        }
        serde_yaml::Value::Tagged(tagged) => yaml_to_json(tagged.value),
    }
}

/// Extracts the embedded fragment from a handler's free-text documentation.
pub fn parse_doc_block(doc: &str) -> Fragment {
    decode_fragment(split_doc_block(doc))
}
