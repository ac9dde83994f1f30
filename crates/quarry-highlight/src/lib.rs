//! Fragment extraction and context-window highlighting for quarry.
//!
//! This crate turns a matched token stream back into something a human can
//! read: for every token that matched a query, it produces a [`Fragment`]
//! anchored at the token's byte span, then renders the fragment as an
//! excerpt of the original text bounded to a configurable number of
//! surrounding lines, with the matched span bracketed in markup.
//!
//! The pipeline is plain function composition:
//!
//! ```
//! use quarry_highlight::{ContextFormatter, HighlightOptions, Token, fragment};
//!
//! let text = "line1\nMATCH here\nline3\nline4";
//! let tokens = vec![
//!     Token::new(0, 5, false),
//!     Token::new(6, 11, true),
//!     Token::new(12, 16, false),
//! ];
//!
//! let formatter = ContextFormatter::new(HighlightOptions {
//!     max_lines: 1,
//!     ..HighlightOptions::default()
//! });
//! let context = formatter.format(fragment(text, tokens));
//! assert_eq!(context, "line1\n<strong>MATCH</strong> here\nline3\n");
//! ```

#![warn(missing_docs)]

mod format;
mod fragment;

pub use format::{ContextFormatter, HighlightOptions};
pub use fragment::{Fragment, Fragments, Token, fragment};
