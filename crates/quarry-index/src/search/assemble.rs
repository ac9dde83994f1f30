//! Result assembly: from raw hits to rendered excerpts.
//!
//! A hit only carries the stored `path` and `filename`; the excerpt is
//! rebuilt from the file on disk. Assembly reads the file, tokenizes the
//! contents with the index analyzer, flags tokens whose analyzed text is
//! one of the query's matched terms, and hands the resulting token stream
//! to the fragmenter and formatter.

use std::{
    collections::HashSet,
    fs,
    path::Path,
};

use quarry_highlight::{Token, fragment};
use tantivy::{
    TantivyDocument,
    schema::{Field, Value},
    tokenizer::{TextAnalyzer, TokenStream},
};

use super::Searcher;
use crate::{error::SearchError, result::SearchResult};

/// A raw hit from the index: stored fields plus the engine score.
#[derive(Debug, Clone)]
pub struct Hit {
    /// Absolute path of the matched file.
    pub path: String,
    /// File name of the matched file.
    pub filename: String,
    /// Relevance score assigned by the engine.
    pub score: f32,
}

impl Searcher {
    /// Decodes a retrieved document into a [`Hit`].
    ///
    /// `path` and `filename` are required stored fields; a document
    /// missing either fails with [`SearchError::MissingField`] instead of
    /// being silently defaulted.
    pub(super) fn doc_to_hit(
        &self,
        doc: &TantivyDocument,
        score: f32,
    ) -> Result<Hit, SearchError> {
        let path = required_text_field(doc, self.schema.path, "path")?;
        let filename = required_text_field(doc, self.schema.filename, "filename")?;

        Ok(Hit {
            path,
            filename,
            score,
        })
    }

    /// Assembles one page of hits into normalized results, in hit order.
    ///
    /// The first unreadable file aborts the whole batch: a hit whose file
    /// cannot be read means the index is stale, and that should be visible
    /// to the caller rather than folded into partial results.
    pub(super) fn assemble(
        &self,
        hits: Vec<Hit>,
        matched_terms: &HashSet<String>,
    ) -> Result<Vec<SearchResult>, SearchError> {
        hits.into_iter()
            .map(|hit| self.assemble_hit(hit, matched_terms))
            .collect()
    }

    /// Assembles a single hit into a result with rendered context.
    fn assemble_hit(
        &self,
        hit: Hit,
        matched_terms: &HashSet<String>,
    ) -> Result<SearchResult, SearchError> {
        let contents = read_file(Path::new(&hit.path))?;

        let tokens = match_tokens(&self.analyzer, &contents, matched_terms);
        let context = self.formatter.format(fragment(&contents, tokens));

        Ok(SearchResult::new(hit.path, hit.filename, context))
    }
}

/// Reads a hit's source file for excerpt assembly.
fn read_file(path: &Path) -> Result<String, SearchError> {
    fs::read_to_string(path).map_err(|source| SearchError::FileRead {
        path: path.to_path_buf(),
        source,
    })
}

/// Reads a required stored text field from a document.
fn required_text_field(
    doc: &TantivyDocument,
    field: Field,
    name: &'static str,
) -> Result<String, SearchError> {
    doc.get_first(field)
        .and_then(|value| value.as_str())
        .map(ToString::to_string)
        .ok_or(SearchError::MissingField { field: name })
}

/// Tokenizes `text` with the index analyzer, flagging matched tokens.
///
/// Token offsets point into the original text, so the fragments built from
/// them highlight the original spelling even when the analyzed term was
/// lowercased or stemmed.
fn match_tokens(
    analyzer: &TextAnalyzer,
    text: &str,
    matched_terms: &HashSet<String>,
) -> Vec<Token> {
    if text.is_empty() || matched_terms.is_empty() {
        return Vec::new();
    }

    let mut analyzer = analyzer.clone();
    let mut stream = analyzer.token_stream(text);
    let mut tokens = Vec::new();

    while let Some(token) = stream.next() {
        tokens.push(Token::new(
            token.offset_from,
            token.offset_to,
            matched_terms.contains(&token.text),
        ));
    }

    tokens
}
