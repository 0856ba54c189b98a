//! Error types raised by grid construction and word sampling.

use std::path::PathBuf;

use thiserror::Error;

/// Errors surfaced by the word-search engine.
#[derive(Debug, Error)]
pub enum Error {
    #[error("grid size must be at least 1, got {0}")]
    InvalidGridSize(usize),

    #[error("invalid word length bounds: min {min}, max {max}")]
    InvalidLengthBounds { min: usize, max: usize },

    #[error("failed to read word list {}: {source}", .path.display())]
    WordListUnreadable {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("word list {} contains no words between {min} and {max} letters", .path.display())]
    EmptyWordList {
        path: PathBuf,
        min: usize,
        max: usize,
    },

    #[error("requested {requested} distinct words but only {available} qualify")]
    NotEnoughWords { requested: usize, available: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
