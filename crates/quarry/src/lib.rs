//! quarry: full-text file search with highlighted excerpts.
//!
//! quarry indexes configured directories of text files into a local search
//! index and answers queries with excerpts of the matching files: the
//! lines around each match, with the matched terms bracketed in markup.
//! Configuration lives in `.quarry.toml`; the index lives in `.quarry/`
//! beside it.

#![warn(missing_docs)]

pub mod cli;
