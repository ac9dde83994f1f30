//! Document type written to the index.

use std::path::Path;

/// One file prepared for indexing.
///
/// `path` is the absolute path the searcher will read back at result time;
/// `filename` is kept separately so file names stay searchable and
/// displayable without path parsing at query time.
#[derive(Debug, Clone)]
pub struct FileDocument {
    /// Absolute path to the file.
    pub path: String,
    /// File name component of the path.
    pub filename: String,
    /// Full file contents.
    pub content: String,
}

impl FileDocument {
    /// Creates a document for `path` with the given contents.
    ///
    /// The filename is derived from the path's final component.
    pub fn new(path: &Path, content: String) -> Self {
        let filename = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_default();

        Self {
            path: path.to_string_lossy().into_owned(),
            filename,
            content,
        }
    }
}
