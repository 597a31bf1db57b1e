use std::path::PathBuf;
use thiserror::Error;

/// Errors produced while locating or rewriting the table-of-contents file.
#[derive(Error, Debug)]
pub enum TocError {
    /// The configured toc file does not exist.
    #[error("toc file not found: {0}")]
    FileNotFound(PathBuf),

    /// Reading or overwriting the toc file failed.
    #[error("failed to read or write toc file: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias used throughout the crate.
pub type Result<T> = std::result::Result<T, TocError>;
