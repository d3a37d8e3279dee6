//! Error types.
//!
//! Reveal logic itself never fails; it degrades to static content. Errors only
//! come out of loading and validating configuration.

use std::path::PathBuf;

use thiserror::Error;

/// Result alias for fallible engine operations.
pub type Result<T> = std::result::Result<T, RevealError>;

#[derive(Debug, Error)]
pub enum RevealError {
    #[error("failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid reveal config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("{field} = {value} is out of range ({expected})")]
    OutOfRange {
        field: &'static str,
        value: f64,
        expected: &'static str,
    },
}
