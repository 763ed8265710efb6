use std::path::PathBuf;

/// Result type alias for the library
pub type Result<T> = std::result::Result<T, Error>;

/// Errors the generation pipeline can surface.
///
/// Per-route documentation failures never appear here: they degrade to
/// fallback fragments inside the generated document. What remains are the
/// catastrophic cases, such as an unusable base document or route manifest.
#[derive(Debug)]
pub enum Error {
    Io(std::io::Error),
    BaseDocument { file: PathBuf, message: String },
    Manifest(String),
    Serialization(String),
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Error::Io(e) => write!(f, "IO error: {}", e),
            Error::BaseDocument { file, message } => {
                write!(f, "base document {}: {}", file.display(), message)
            }
            Error::Manifest(msg) => write!(f, "route manifest: {}", msg),
            Error::Serialization(msg) => write!(f, "serialization error: {}", msg),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Error::Io(err)
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::Serialization(format!("JSON error: {}", err))
    }
}

impl From<serde_yaml::Error> for Error {
    fn from(err: serde_yaml::Error) -> Self {
        Error::Serialization(format!("YAML error: {}", err))
    }
}
