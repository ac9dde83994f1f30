//! Tantivy-based search index for quarry.
//!
//! This crate provides the indexing and search infrastructure for quarry's
//! file search. It handles:
//! - Index creation, writing, and full rebuilds over configured sources
//! - File discovery with include/exclude patterns and binary filtering
//! - Index location resolution based on configuration
//! - Text analysis with optional stemming
//! - Query execution with offset-based pagination
//! - Result assembly: re-reading matched files and rendering line-bounded
//!   excerpts with highlight markup via `quarry-highlight`
//!
//! # Example
//!
//! ```no_run
//! use quarry_highlight::HighlightOptions;
//! use quarry_index::{FileDocument, IndexWriter, Searcher};
//!
//! // Open or create an index without stemming
//! let mut writer = IndexWriter::open("./index".as_ref(), "none").unwrap();
//!
//! // Add a document
//! let doc = FileDocument {
//!     path: "/srv/code/src/main.rs".to_string(),
//!     filename: "main.rs".to_string(),
//!     content: "fn main() { println!(\"hello\"); }".to_string(),
//! };
//! writer.add_document(&doc).unwrap();
//! writer.commit().unwrap();
//!
//! // Search it back with highlighted excerpts
//! let searcher = Searcher::open("./index".as_ref(), "none", HighlightOptions::default()).unwrap();
//! let results = searcher.find_text("hello", 1, 10).unwrap();
//! for result in results {
//!     println!("{}: {}", result.filename, result.context);
//! }
//! ```

#![warn(missing_docs)]

mod analyzer;
mod discovery;
mod document;
mod error;
mod indexer;
mod location;
mod result;
mod schema;
mod search;
mod writer;

pub use analyzer::{QUARRY_TOKENIZER, build_analyzer, build_analyzer_from_name, parse_language};
pub use discovery::{DiscoveredFile, discover_files};
pub use document::FileDocument;
pub use error::{IndexError, SearchError};
pub use indexer::{IndexStats, Indexer};
pub use location::{global_index_directory, index_directory};
pub use result::SearchResult;
pub use search::{Hit, Searcher, open_searcher};
pub use writer::IndexWriter;
