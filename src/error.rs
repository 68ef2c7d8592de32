use std::path::PathBuf;

use thiserror::Error;

/// Failures outside the scanner: loading sources, reading config and
/// writing reports. Unrecognized characters are never reported through this
/// type, see [`LexicalError`](crate::scanner::LexicalError).
#[derive(Error, Debug)]
pub enum Error {
    #[error("File not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Unsupported file {}: expected a .{expected} file", .path.display())]
    UnsupportedExtension { path: PathBuf, expected: String },

    #[error("IO error on {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Report error: {0}")]
    Report(String),
}

pub type InternalResult<T> = Result<T, Error>;

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Error::Io {
            path: path.into(),
            source,
        }
    }
}
