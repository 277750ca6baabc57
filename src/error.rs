use std::path::PathBuf;
use thiserror::Error;

/// Main error type for paradiff operations
#[derive(Error, Debug)]
pub enum ParadiffError {
    #[error("can't open '{}': {source}", path.display())]
    FileOpen {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("line {line} of '{}' exceeds the maximum line length of {limit} bytes", path.display())]
    LineTooLong {
        path: PathBuf,
        line: usize,
        limit: usize,
    },

    #[error("'{}' exceeds the maximum of {limit} lines", path.display())]
    TooManyLines { path: PathBuf, limit: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ParadiffError>;
