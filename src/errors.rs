use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error reading config file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("Failed to parse JSON configuration in {path}: {source}")]
    JsonParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("Configuration file not found at {path}")]
    NotFound { path: PathBuf },
}

/// Failures the file stores can hit. Every public operation converts these
/// into a false return or an empty collection at its boundary; only the
/// internal helpers propagate them.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("File not found: {path}")]
    NotFound { path: PathBuf },
    #[error("IO error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("CSV error in {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
    #[error("Recipe not found: {name}")]
    RecipeNotFound { name: String },
}

impl StoreError {
    /// Maps an open/read failure, distinguishing a missing file from other
    /// IO errors so callers can degrade differently.
    pub fn from_io(path: &std::path::Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::NotFound {
            StoreError::NotFound {
                path: path.to_path_buf(),
            }
        } else {
            StoreError::Io {
                path: path.to_path_buf(),
                source,
            }
        }
    }
}
