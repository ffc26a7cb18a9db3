use std::io;
use std::path::PathBuf;

use crate::key_order::KeyOrderError;

#[derive(Debug, thiserror::Error)]
pub enum SortError {
    #[error("File not found: {}", path.display())]
    FileNotFound { path: PathBuf },

    #[error("Error reading file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Error parsing JSON in {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The bytes were read but are not UTF-8 text.
    #[error("Error parsing JSON in {}: {source}", path.display())]
    Encoding {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file parsed, but its top-level value is an array, string, etc.
    #[error("Error parsing JSON in {}: expected an object at the top level, found {found}", path.display())]
    NotAnObject { path: PathBuf, found: &'static str },

    #[error("Error writing file {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error(transparent)]
    KeyOrder(#[from] KeyOrderError),
}

impl SortError {
    /// Process exit code for this failure. Success is 0; 2 is left to clap's usage errors.
    pub fn exit_code(&self) -> u8 {
        match self {
            SortError::FileNotFound { .. } => 3,
            SortError::Read { .. } => 4,
            SortError::Parse { .. } | SortError::Encoding { .. } | SortError::NotAnObject { .. } => 5,
            SortError::Write { .. } => 6,
            SortError::KeyOrder(_) => 7,
        }
    }
}
