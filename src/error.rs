use std::io;
use thiserror::Error;

/// PathError is an error which may occur while analyzing a path or search pattern.
#[derive(Error, Debug)]
pub enum PathError {
    #[error("path {path:?} contains invalid character {ch:?} at byte {index}")]
    InvalidPathCharacter { path: String, ch: char, index: usize },
    #[error("search pattern {pattern:?} uses \"..\" to leave the directory (at byte {index})")]
    InvalidSearchPattern { pattern: String, index: usize },
    #[error("path is missing")]
    NullPath,
    #[error("failed to resolve {path:?}: {source}")]
    Resolve {
        path: String,
        #[source]
        source: io::Error,
    },
}

/// Result is an alias for standard result with bound PathError type.
pub type Result<T> = std::result::Result<T, PathError>;
