use std::io;
use std::path::PathBuf;

/// Errors that abort a collection generation run.
///
/// Per-mapping problems (a mapping without patterns, for instance) are not
/// errors: they are logged and the mapping is skipped.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The collection document or a request body could not be serialized.
    #[error("failed to serialize collection: {0}")]
    Serialize(#[from] serde_json::Error),

    /// The output file could not be written.
    #[error("failed to write {}: {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// A route table could not be parsed.
    #[error("invalid route table: {0}")]
    RouteTable(#[source] serde_json::Error),
}

impl Error {
    pub fn write(path: impl Into<PathBuf>, source: io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
