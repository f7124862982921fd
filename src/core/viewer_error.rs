use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ViewerError {
    #[error("failed to read config {path:?}: {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {path:?}: {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },

    #[error("failed to load asset '{path}': {reason}")]
    AssetLoad { path: String, reason: String },

    #[error("asset '{path}' contains no scene")]
    MissingScene { path: String },

    #[error("unknown direction '{0}', expected forward, backward, left or right")]
    UnknownDirection(String),
}
