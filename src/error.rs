use std::path::PathBuf;

use thiserror::Error;

/// Failures of BOM generation and packaging.
///
/// Malformed include / exclude patterns are deliberately absent: they degrade to wildcards.
#[derive(Debug, Error)]
pub enum BomError {
    /// The build is set up inconsistently, e.g. not exactly one attached `bom` artifact
    #[error("configuration error: {0}")]
    Configuration(String),

    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write POM XML: {0}")]
    Xml(String),

    #[error("invalid input: {0}")]
    Input(String),
}

impl BomError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> BomError {
        BomError::Io {
            path: path.into(),
            source,
        }
    }
}

pub type BomResult<T> = Result<T, BomError>;
