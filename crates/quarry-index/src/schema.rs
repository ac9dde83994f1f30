//! Index schema definition for the quarry search index.
//!
//! Defines the Tantivy schema with the fields needed for file indexing:
//! - `path`: Absolute file path (raw token, stored) — the document key
//! - `filename`: File name (text, stored)
//! - `content`: File contents (text with positions, NOT stored)
//!
//! Content is deliberately not stored: excerpts are rebuilt from the file
//! on disk at result time, so the index stays small and a stale index is
//! detected the moment a hit's file cannot be read.

use tantivy::schema::{
    Field, IndexRecordOption, STORED, STRING, Schema, TextFieldIndexing, TextOptions,
};

use crate::analyzer::QUARRY_TOKENIZER;

/// Handles to all fields in the index schema.
#[derive(Debug, Clone)]
pub struct IndexSchema {
    /// The underlying Tantivy schema.
    schema: Schema,
    /// Absolute file path, indexed as a single raw token.
    pub path: Field,
    /// File name, tokenized for matching and stored for display.
    pub filename: Field,
    /// File contents, tokenized with positions, not stored.
    pub content: Field,
}

impl IndexSchema {
    /// Creates a new index schema with all fields configured.
    pub fn new() -> Self {
        let mut builder = Schema::builder();

        // Path field: single raw token so files can be looked up and
        // deleted by exact path, stored for result construction.
        let path = builder.add_text_field("path", STRING | STORED);

        // Filename field: text with positions, stored
        let filename_options = TextOptions::default()
            .set_indexing_options(
                TextFieldIndexing::default()
                    .set_tokenizer(QUARRY_TOKENIZER)
                    .set_index_option(IndexRecordOption::WithFreqsAndPositions),
            )
            .set_stored();
        let filename = builder.add_text_field("filename", filename_options);

        // Content field: text with positions, not stored
        let content_options = TextOptions::default().set_indexing_options(
            TextFieldIndexing::default()
                .set_tokenizer(QUARRY_TOKENIZER)
                .set_index_option(IndexRecordOption::WithFreqsAndPositions),
        );
        let content = builder.add_text_field("content", content_options);

        let schema = builder.build();

        Self {
            schema,
            path,
            filename,
            content,
        }
    }

    /// Returns a reference to the underlying Tantivy schema.
    pub fn schema(&self) -> &Schema {
        &self.schema
    }
}

impl Default for IndexSchema {
    fn default() -> Self {
        Self::new()
    }
}
