//! Search execution for the quarry index.
//!
//! Provides the [`Searcher`] struct for querying the index and producing
//! normalized results. A search request runs a single synchronous
//! pipeline:
//!
//! 1. **Parse**: the raw query text goes through Tantivy's `QueryParser`
//!    (terms are required by default).
//! 2. **Execute**: the query runs against the index with offset-based
//!    pagination; each hit carries its stored `path` and `filename`.
//! 3. **Assemble**: for each hit, the source file is read back, tokenized
//!    with the index analyzer, fragmented at matched tokens, and rendered
//!    into a line-bounded excerpt. See the [`assemble`] module.
//!
//! The Tantivy reader/searcher pair is acquired inside each call and
//! released by drop on every exit path. The `Searcher` itself holds no
//! per-request state, so concurrent searches only need `&self`.

mod assemble;

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

pub use assemble::Hit;
use quarry_config::Config;
use quarry_highlight::{ContextFormatter, HighlightOptions};
use tantivy::{
    Index, TantivyDocument,
    collector::TopDocs,
    directory::MmapDirectory,
    query::{Query, QueryParser},
    tokenizer::{TextAnalyzer, TokenStream},
};

use crate::{
    analyzer::{QUARRY_TOKENIZER, build_analyzer_from_name},
    error::SearchError,
    location::index_directory,
    result::SearchResult,
    schema::IndexSchema,
};

/// Primary search entry point for the index.
pub struct Searcher {
    /// Tantivy index handle used for searching.
    index: Index,
    /// Schema describing indexed fields.
    schema: IndexSchema,
    /// Analyzer used for query terms and excerpt tokenization.
    analyzer: TextAnalyzer,
    /// Renders matched spans into line-bounded excerpts.
    formatter: ContextFormatter,
    /// Parses raw query text into Tantivy queries.
    query_parser: QueryParser,
}

impl std::fmt::Debug for Searcher {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Searcher").finish_non_exhaustive()
    }
}

impl Searcher {
    /// Opens an existing index for searching.
    ///
    /// Fails with [`SearchError::IndexUnavailable`] when the index
    /// directory does not exist or cannot be opened.
    pub fn open(
        path: &Path,
        stemmer: &str,
        options: HighlightOptions,
    ) -> Result<Self, SearchError> {
        if !path.exists() {
            return Err(SearchError::IndexUnavailable {
                path: path.to_path_buf(),
                message: "index directory does not exist".to_string(),
            });
        }

        let schema = IndexSchema::new();

        let dir = MmapDirectory::open(path).map_err(|e| SearchError::IndexUnavailable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let index = Index::open(dir).map_err(|e| SearchError::IndexUnavailable {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let analyzer = build_analyzer_from_name(stemmer)?;
        index.tokenizers().register(QUARRY_TOKENIZER, analyzer.clone());

        let mut query_parser =
            QueryParser::for_index(&index, vec![schema.content, schema.filename]);
        query_parser.set_conjunction_by_default();

        Ok(Self {
            index,
            schema,
            analyzer,
            formatter: ContextFormatter::new(options),
            query_parser,
        })
    }

    /// Searches for raw query text, returning one page of results.
    ///
    /// Page numbering starts at 1; paging beyond the available hits
    /// returns an empty vector, not an error. A blank query or one the
    /// parser rejects fails with [`SearchError::InvalidQuery`].
    pub fn find_text(
        &self,
        text: &str,
        page: usize,
        limit: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        if text.trim().is_empty() {
            return Err(SearchError::InvalidQuery {
                query: text.to_string(),
                message: "query is empty".to_string(),
            });
        }

        let query = self
            .query_parser
            .parse_query(text)
            .map_err(|e| SearchError::InvalidQuery {
                query: text.to_string(),
                message: e.to_string(),
            })?;

        let matched_terms = self.query_terms(text);

        self.search(&*query, &matched_terms, page, limit)
    }

    /// Executes a parsed query, returning one page of assembled results.
    ///
    /// Results keep the engine's page order; nothing is re-sorted here.
    ///
    /// # Panics
    ///
    /// Panics if `page` or `limit` is zero; both are caller preconditions.
    pub fn search(
        &self,
        query: &dyn Query,
        matched_terms: &HashSet<String>,
        page: usize,
        limit: usize,
    ) -> Result<Vec<SearchResult>, SearchError> {
        assert!(page >= 1, "page numbering starts at 1");
        assert!(limit >= 1, "limit must be at least 1");

        let reader = self.index.reader().map_err(|e| SearchError::engine(&e))?;
        let searcher = reader.searcher();

        let offset = (page - 1) * limit;
        let top_docs = searcher
            .search(query, &TopDocs::with_limit(limit).and_offset(offset))
            .map_err(|e| SearchError::engine(&e))?;

        let mut hits = Vec::with_capacity(top_docs.len());
        for (score, doc_address) in top_docs {
            let doc: TantivyDocument = searcher
                .doc(doc_address)
                .map_err(|e| SearchError::engine(&e))?;
            hits.push(self.doc_to_hit(&doc, score)?);
        }

        self.assemble(hits, matched_terms)
    }

    /// Returns the number of documents in the index.
    pub fn num_docs(&self) -> Result<u64, SearchError> {
        let reader = self.index.reader().map_err(|e| SearchError::engine(&e))?;
        Ok(reader.searcher().num_docs())
    }

    /// Extracts the analyzed terms of a query for match flagging.
    ///
    /// Query syntax elements (AND, OR, NOT, field prefixes, negations) are
    /// filtered out before tokenizing so that only searchable terms remain.
    /// Running the analyzer here keeps the query side and the content side
    /// of match detection in agreement, stemming included.
    fn query_terms(&self, query_str: &str) -> HashSet<String> {
        let filtered: String = query_str
            .split_whitespace()
            .filter(|word| {
                let upper = word.to_uppercase();
                upper != "OR"
                    && upper != "AND"
                    && upper != "NOT"
                    && !word.contains(':')
                    && !word.starts_with('-')
            })
            .collect::<Vec<_>>()
            .join(" ");

        let mut analyzer = self.analyzer.clone();
        let mut stream = analyzer.token_stream(&filtered);
        let mut terms = HashSet::new();
        while let Some(token) = stream.next() {
            terms.insert(token.text.clone());
        }
        terms
    }
}

/// Opens a searcher at the configuration's index location.
pub fn open_searcher(config: &Config) -> Result<Searcher, SearchError> {
    let index_dir = index_directory(config).ok_or_else(|| SearchError::IndexUnavailable {
        path: PathBuf::new(),
        message: "no configuration found".to_string(),
    })?;

    Searcher::open(
        &index_dir,
        &config.settings.stemmer,
        config.highlight.clone(),
    )
}
