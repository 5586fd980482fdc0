//! Error types for glyph info extraction

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// The underlying failure behind a load or write error
pub type Cause = Box<dyn std::error::Error + Send + Sync>;

/// Everything that can stop an extraction run
#[derive(Error, Debug)]
pub enum Error {
    /// The font file could not be read, or does not parse as a font we can use
    #[error("Failed to load font file {}: {source}", .path.display())]
    FontLoad {
        path: PathBuf,
        #[source]
        source: Cause,
    },

    /// The JSON result could not be written
    #[error("Failed to output to {}: {source}", .path.display())]
    OutputWrite {
        path: PathBuf,
        #[source]
        source: Cause,
    },

    /// Serialization failure
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    pub(crate) fn font_load(path: impl Into<PathBuf>, source: impl Into<Cause>) -> Self {
        Error::FontLoad {
            path: path.into(),
            source: source.into(),
        }
    }

    pub(crate) fn output_write(path: impl Into<PathBuf>, source: impl Into<Cause>) -> Self {
        Error::OutputWrite {
            path: path.into(),
            source: source.into(),
        }
    }
}
