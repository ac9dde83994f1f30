//! The normalized result type returned to callers.

use serde::Serialize;

/// A single search result ready for rendering.
///
/// Results are immutable value objects: the file's path and name plus the
/// rendered excerpt of the file contents with matched spans bracketed in
/// markup. Results arrive in the same order as the hits that produced
/// them; no re-sorting happens after the engine ranks a page.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SearchResult {
    /// Absolute path of the matched file.
    pub path: String,
    /// File name of the matched file.
    pub filename: String,
    /// Rendered excerpt with highlight markup.
    pub context: String,
}

impl SearchResult {
    /// Creates a result from its fields.
    pub fn new(path: String, filename: String, context: String) -> Self {
        Self {
            path,
            filename,
            context,
        }
    }
}
