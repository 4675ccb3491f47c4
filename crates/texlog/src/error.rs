use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum LogError {
    /// The requested diagnostic category has no detector yet.
    #[error("{0} detection is not implemented yet")]
    NotImplemented(&'static str),

    #[error("failed to read parser config {path:?}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid parser config {path:?}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}
