//! CLI error type.

use std::path::PathBuf;

use advtable_lib::TableError;
use thiserror::Error;

/// Errors that end a CLI run.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("failed to read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("invalid JSON in {}: {source}", path.display())]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error(transparent)]
    Table(#[from] TableError),
    #[error("no sortable column has key '{0}'")]
    UnknownColumn(String),
    #[error("the url strategy needs a current location (--location or 'location' in the config)")]
    MissingLocation,
}

impl CliError {
    pub fn read(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Read {
            path: path.into(),
            source,
        }
    }

    pub fn json(path: impl Into<PathBuf>, source: serde_json::Error) -> Self {
        Self::Json {
            path: path.into(),
            source,
        }
    }
}
