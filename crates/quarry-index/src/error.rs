//! Error types for the quarry-index crate.

use std::{io, path::PathBuf};

use thiserror::Error;

/// Errors that can occur when building or writing the search index.
#[derive(Debug, Error)]
pub enum IndexError {
    /// Failed to open or create the index.
    #[error("failed to open index at {path}: {message}")]
    OpenIndex {
        /// Path to the index directory.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// Failed to write to the index.
    #[error("failed to write to index: {0}")]
    Write(String),

    /// Failed to commit changes to the index.
    #[error("failed to commit index: {0}")]
    Commit(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// Invalid stemmer language.
    #[error("unsupported stemmer language: {0}")]
    InvalidLanguage(String),
}

impl IndexError {
    /// Creates an `OpenIndex` error from a path and Tantivy error.
    pub(crate) fn open_index(path: PathBuf, source: &tantivy::TantivyError) -> Self {
        Self::OpenIndex {
            path,
            message: source.to_string(),
        }
    }

    /// Creates a `Write` error from a Tantivy error.
    pub(crate) fn write(source: &tantivy::TantivyError) -> Self {
        Self::Write(source.to_string())
    }

    /// Creates a `Commit` error from a Tantivy error.
    pub(crate) fn commit(source: &tantivy::TantivyError) -> Self {
        Self::Commit(source.to_string())
    }
}

/// Errors that can occur while answering a search request.
///
/// All failures propagate to the immediate caller; nothing is retried or
/// logged here. Precondition violations (zero page, zero limit, zero
/// context lines) are assertions, not variants.
#[derive(Debug, Error)]
pub enum SearchError {
    /// The query text could not be parsed.
    #[error("invalid query {query:?}: {message}")]
    InvalidQuery {
        /// The raw query text.
        query: String,
        /// Parser error message.
        message: String,
    },

    /// The index is missing or could not be opened for searching.
    #[error("index unavailable at {path}: {message}")]
    IndexUnavailable {
        /// Path to the expected index directory.
        path: PathBuf,
        /// Error message.
        message: String,
    },

    /// A hit's source file could not be read for excerpt assembly.
    #[error("failed to read source file {path}: {source}")]
    FileRead {
        /// Path of the unreadable file.
        path: PathBuf,
        /// Underlying I/O error.
        source: io::Error,
    },

    /// A hit is missing a required stored field.
    #[error("hit is missing required field '{field}'")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// An index-side error surfaced during search.
    #[error(transparent)]
    Index(#[from] IndexError),

    /// The search engine reported a failure.
    #[error("search failed: {0}")]
    Engine(String),
}

impl SearchError {
    /// Creates an `Engine` error from a Tantivy error.
    pub(crate) fn engine(source: &tantivy::TantivyError) -> Self {
        Self::Engine(source.to_string())
    }
}
