//! Error types for midiff-core.
//!
//! The normalizer and comparator are total functions and never fail; errors
//! only arise at the edges (configuration loading, report serialisation).

use std::path::PathBuf;

/// Errors raised by midiff-core.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// A configuration layer could not be read or deserialised.
    #[error("invalid configuration: {0}")]
    Config(#[from] config::ConfigError),

    /// A file required by the core (e.g. an explicit config file) was missing.
    #[error("cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Structured report output could not be serialised.
    #[error("cannot render report: {0}")]
    Render(#[from] serde_json::Error),
}

/// Result type alias for midiff-core operations.
pub type Result<T> = std::result::Result<T, Error>;
