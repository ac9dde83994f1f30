//! Line-bounded context rendering for fragments.
//!
//! Each fragment is expanded into an excerpt of the original text: the
//! lines around the matched span, with the span itself bracketed by
//! configurable markup. The line-break scan runs over the original text
//! using the fragment's original offsets; markup is inserted textually
//! afterwards, so the scan never has to account for shifted positions.

use serde::{Deserialize, Serialize};

use crate::fragment::Fragment;

/// Options controlling context rendering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct HighlightOptions {
    /// Context lines to include on each side of a match.
    pub max_lines: usize,
    /// Markup inserted before the matched span.
    pub markup_open: String,
    /// Markup inserted after the matched span.
    pub markup_close: String,
    /// Line terminator used for boundary scanning.
    pub line_break: char,
}

impl Default for HighlightOptions {
    fn default() -> Self {
        Self {
            max_lines: 2,
            markup_open: String::from("<strong>"),
            markup_close: String::from("</strong>"),
            line_break: '\n',
        }
    }
}

/// Renders fragments as line-bounded excerpts with highlight markup.
///
/// The formatter is a pure function of its options and the fragments it is
/// given: rendering the same fragments twice yields identical output, and
/// nothing is cached between calls.
#[derive(Debug, Clone)]
pub struct ContextFormatter {
    /// Rendering options.
    options: HighlightOptions,
}

impl ContextFormatter {
    /// Creates a formatter with the given options.
    ///
    /// # Panics
    ///
    /// Panics if `options.max_lines` is zero; a zero-line context window is
    /// a programmer error, not a recoverable condition.
    pub fn new(options: HighlightOptions) -> Self {
        assert!(options.max_lines >= 1, "max_lines must be at least 1");
        Self { options }
    }

    /// Returns the formatter's options.
    pub fn options(&self) -> &HighlightOptions {
        &self.options
    }

    /// Renders all fragments, concatenated in fragment order.
    ///
    /// Overlapping context windows are not deduplicated; each fragment
    /// contributes its own excerpt.
    pub fn format<'a, I>(&self, fragments: I) -> String
    where
        I: IntoIterator<Item = Fragment<'a>>,
    {
        let mut rendered = String::new();
        for frag in fragments {
            rendered.push_str(&self.render_context(&frag));
        }
        rendered
    }

    /// Renders one fragment as a line-bounded excerpt.
    ///
    /// The excerpt covers the line containing the match plus up to
    /// `max_lines` further lines on each side, clamped at the text
    /// boundaries. The matched span is bracketed by the configured markup;
    /// every other character of the excerpt comes from the original text.
    pub fn render_context(&self, fragment: &Fragment<'_>) -> String {
        assert!(self.options.max_lines >= 1, "max_lines must be at least 1");

        let text = fragment.text();
        let (start, end) = (fragment.start, fragment.end);
        let nl = self.options.line_break;
        let nl_len = nl.len_utf8();

        // Nearest break strictly before the span, and at or after its end.
        let mut prev = text[..start].rfind(nl);
        let mut next = text[end..].find(nl).map(|i| end + i);

        // Walk outward up to max_lines further breaks on each side,
        // stopping early once the scan runs off the text.
        for _ in 0..self.options.max_lines {
            prev = match prev {
                Some(i) => text[..i].rfind(nl),
                None => break,
            };
        }
        for _ in 0..self.options.max_lines {
            next = match next {
                Some(i) => text[i + nl_len..].find(nl).map(|j| i + nl_len + j),
                None => break,
            };
        }

        let begin = prev.unwrap_or(0);
        let stop = next.map_or(text.len(), |i| i + nl_len);

        let mut rendered = String::with_capacity(
            stop - begin + self.options.markup_open.len() + self.options.markup_close.len(),
        );
        rendered.push_str(&text[begin..start]);
        rendered.push_str(&self.options.markup_open);
        rendered.push_str(&text[start..end]);
        rendered.push_str(&self.options.markup_close);
        rendered.push_str(&text[end..stop]);
        rendered
    }
}

impl Default for ContextFormatter {
    fn default() -> Self {
        Self::new(HighlightOptions::default())
    }
}
