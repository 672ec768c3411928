use std::io;
use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, LocalizeError>;

#[derive(Debug, thiserror::Error)]
pub enum LocalizeError {
    #[error("Usage: {program} [file]")]
    Usage { program: String },

    #[error("cannot access {}: {source}", path.display())]
    FileAccess {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("invalid header: {0}")]
    InvalidHeader(String),

    #[error("malformed row at line {line}: expected {expected} columns, found {found}")]
    MalformedRow {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("row at line {line} uses the reserved id \"version\"")]
    ReservedId { line: u64 },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("cannot decode input: {0}")]
    Decode(String),

    #[error("JSON error: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl LocalizeError {
    pub(crate) fn file_access(path: impl Into<PathBuf>, source: io::Error) -> Self {
        LocalizeError::FileAccess {
            path: path.into(),
            source,
        }
    }
}
