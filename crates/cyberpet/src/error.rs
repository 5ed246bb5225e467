use std::fmt;
use std::io;
use std::path::PathBuf;

/// Result type for record persistence
pub type Result<T> = std::result::Result<T, PersistError>;

/// Why a record could not be saved or loaded
#[derive(Debug)]
pub enum PersistError {
    /// No file at the given path
    NotFound(PathBuf),

    /// The file exists but is not a JSON object
    Malformed {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// The record could not be encoded
    Encode(serde_json::Error),

    /// Any other filesystem failure
    Io { path: PathBuf, source: io::Error },
}

impl PersistError {
    pub fn path(&self) -> Option<&PathBuf> {
        match self {
            PersistError::NotFound(path)
            | PersistError::Malformed { path, .. }
            | PersistError::Io { path, .. } => Some(path),
            PersistError::Encode(_) => None,
        }
    }
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PersistError::NotFound(path) => write!(f, "save file not found: {}", path.display()),
            PersistError::Malformed { path, source } => {
                write!(f, "malformed save file {}: {}", path.display(), source)
            }
            PersistError::Encode(err) => write!(f, "could not encode record: {}", err),
            PersistError::Io { path, source } => write!(f, "{}: {}", path.display(), source),
        }
    }
}

impl std::error::Error for PersistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PersistError::NotFound(_) => None,
            PersistError::Malformed { source, .. } => Some(source),
            PersistError::Encode(err) => Some(err),
            PersistError::Io { source, .. } => Some(source),
        }
    }
}
