//! Text analysis pipeline for the quarry search index.
//!
//! Implements a three-stage pipeline with an optional fourth stage:
//! 1. `SimpleTokenizer` - splits on whitespace and punctuation
//! 2. `LowerCaser` - converts tokens to lowercase
//! 3. `RemoveLongFilter` - removes tokens longer than 40 bytes
//! 4. `Stemmer` - language-specific stemming, only when configured
//!
//! Stemming defaults to off (`"none"`): quarry mostly indexes source
//! trees, where stemming an identifier breaks exact matching. The same
//! analyzer runs on indexed content, on query text, and on file contents
//! during excerpt assembly, so token offsets and matched terms agree
//! everywhere.

use tantivy::tokenizer::{
    Language, LowerCaser, RemoveLongFilter, SimpleTokenizer, Stemmer, TextAnalyzer,
};

use crate::IndexError;

/// Name of the custom tokenizer registered with Tantivy.
pub const QUARRY_TOKENIZER: &str = "quarry_text";

/// Maximum token length in bytes before filtering.
const MAX_TOKEN_LENGTH: usize = 40;

/// Parses a stemmer language string into an optional Tantivy `Language`.
///
/// `"none"` disables stemming. Lowercase language names matching Tantivy's
/// `Language` enum are accepted; anything else is an error.
pub fn parse_language(name: &str) -> Result<Option<Language>, IndexError> {
    match name.to_lowercase().as_str() {
        "none" => Ok(None),
        "arabic" => Ok(Some(Language::Arabic)),
        "danish" => Ok(Some(Language::Danish)),
        "dutch" => Ok(Some(Language::Dutch)),
        "english" => Ok(Some(Language::English)),
        "finnish" => Ok(Some(Language::Finnish)),
        "french" => Ok(Some(Language::French)),
        "german" => Ok(Some(Language::German)),
        "greek" => Ok(Some(Language::Greek)),
        "hungarian" => Ok(Some(Language::Hungarian)),
        "italian" => Ok(Some(Language::Italian)),
        "norwegian" => Ok(Some(Language::Norwegian)),
        "portuguese" => Ok(Some(Language::Portuguese)),
        "romanian" => Ok(Some(Language::Romanian)),
        "russian" => Ok(Some(Language::Russian)),
        "spanish" => Ok(Some(Language::Spanish)),
        "swedish" => Ok(Some(Language::Swedish)),
        "tamil" => Ok(Some(Language::Tamil)),
        "turkish" => Ok(Some(Language::Turkish)),
        other => Err(IndexError::InvalidLanguage(other.to_string())),
    }
}

/// Builds the quarry text analyzer, stemming only when a language is given.
pub fn build_analyzer(stemmer: Option<Language>) -> TextAnalyzer {
    let builder = TextAnalyzer::builder(SimpleTokenizer::default())
        .filter(LowerCaser)
        .filter(RemoveLongFilter::limit(MAX_TOKEN_LENGTH));

    match stemmer {
        Some(language) => builder.filter(Stemmer::new(language)).build(),
        None => builder.build(),
    }
}

/// Builds the quarry text analyzer from a language name string.
///
/// Convenience function combining [`parse_language`] and [`build_analyzer`].
pub fn build_analyzer_from_name(language_name: &str) -> Result<TextAnalyzer, IndexError> {
    let language = parse_language(language_name)?;
    Ok(build_analyzer(language))
}

#[cfg(test)]
mod test {
    use std::iter;

    use tantivy::tokenizer::TokenStream;

    use super::*;

    #[test]
    fn none_disables_stemming() {
        let mut analyzer = build_analyzer_from_name("none").unwrap();
        let mut stream = analyzer.token_stream("handling running");

        let token = stream.next().unwrap();
        assert_eq!(token.text, "handling");

        let token = stream.next().unwrap();
        assert_eq!(token.text, "running");

        assert!(stream.next().is_none());
    }

    #[test]
    fn english_stems() {
        let mut analyzer = build_analyzer_from_name("english").unwrap();
        let mut stream = analyzer.token_stream("handling running");

        let token = stream.next().unwrap();
        assert_eq!(token.text, "handl");

        let token = stream.next().unwrap();
        assert_eq!(token.text, "run");

        assert!(stream.next().is_none());
    }

    #[test]
    fn analyzer_lowercases() {
        let mut analyzer = build_analyzer(None);
        let mut stream = analyzer.token_stream("HELLO World");

        let token = stream.next().unwrap();
        assert_eq!(token.text, "hello");

        let token = stream.next().unwrap();
        assert_eq!(token.text, "world");

        assert!(stream.next().is_none());
    }

    #[test]
    fn analyzer_splits_code_punctuation() {
        let mut analyzer = build_analyzer(None);
        let mut stream = analyzer.token_stream("read_file(path) -> Result");

        let tokens: Vec<_> = iter::from_fn(|| stream.next().map(|t| t.text.clone())).collect();
        assert_eq!(tokens, vec!["read", "file", "path", "result"]);
    }

    #[test]
    fn analyzer_removes_long_tokens() {
        let mut analyzer = build_analyzer(None);
        let long_token = "a".repeat(50);
        let text = format!("short {long_token} word");
        let mut stream = analyzer.token_stream(&text);

        let token = stream.next().unwrap();
        assert_eq!(token.text, "short");

        let token = stream.next().unwrap();
        assert_eq!(token.text, "word");

        assert!(stream.next().is_none());
    }

    #[test]
    fn token_offsets_point_into_original_text() {
        let mut analyzer = build_analyzer(None);
        let text = "alpha Beta\ngamma";
        let mut stream = analyzer.token_stream(text);

        while let Some(token) = stream.next() {
            let original = &text[token.offset_from..token.offset_to];
            assert_eq!(original.to_lowercase(), token.text);
        }
    }

    #[test]
    fn parse_case_insensitive() {
        assert_eq!(
            parse_language("English").unwrap(),
            Some(Language::English)
        );
        assert_eq!(parse_language("NONE").unwrap(), None);
    }

    #[test]
    fn parse_invalid_language() {
        let err = parse_language("klingon").unwrap_err();
        assert!(err.to_string().contains("klingon"));
    }
}
