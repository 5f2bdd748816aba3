use std::fmt;
use std::path::PathBuf;

#[derive(Debug)]
pub enum CaseError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Toml(toml::de::Error),
    Json(serde_json::Error),
    UnsupportedFormat(PathBuf),
    InvalidData(String),
}

impl fmt::Display for CaseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CaseError::Io { path, source } => {
                write!(f, "I/O error on {}: {source}", path.display())
            }
            CaseError::Toml(e) => write!(f, "TOML error: {e}"),
            CaseError::Json(e) => write!(f, "JSON error: {e}"),
            CaseError::UnsupportedFormat(path) => {
                write!(f, "unsupported case file format: {}", path.display())
            }
            CaseError::InvalidData(msg) => write!(f, "invalid data: {msg}"),
        }
    }
}

impl std::error::Error for CaseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CaseError::Io { source, .. } => Some(source),
            CaseError::Toml(e) => Some(e),
            CaseError::Json(e) => Some(e),
            _ => None,
        }
    }
}

impl From<toml::de::Error> for CaseError {
    fn from(e: toml::de::Error) -> Self {
        CaseError::Toml(e)
    }
}

impl From<serde_json::Error> for CaseError {
    fn from(e: serde_json::Error) -> Self {
        CaseError::Json(e)
    }
}

pub type Result<T> = std::result::Result<T, CaseError>;
