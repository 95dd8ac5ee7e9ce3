use unicode_segmentation::UnicodeSegmentation;

use crate::reading::orp::calculate_orp_index;

/// One whitespace-delimited word of the source text, trailing punctuation included.
///
/// Tokens are built once per tokenization pass and never mutated; the ORP
/// index is derived from the text at construction time.
#[derive(Debug, PartialEq, Eq, Clone)]
pub struct Token {
    text: String,
    orp_index: usize,
}

impl Token {
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let orp_index = calculate_orp_index(&text);
        Self { text, orp_index }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Grapheme index of the highlighted character.
    pub fn orp_index(&self) -> usize {
        self.orp_index
    }

    /// Splits the word into (before, highlighted, after) around the ORP.
    ///
    /// Splitting is done on grapheme boundaries so combining marks and
    /// emoji stay attached to their base character.
    pub fn orp_parts(&self) -> (&str, &str, &str) {
        let mut boundaries = self.text.grapheme_indices(true).map(|(i, _)| i);
        let start = match boundaries.nth(self.orp_index) {
            Some(i) => i,
            None => return (&self.text, "", ""),
        };
        let end = boundaries.next().unwrap_or(self.text.len());
        (
            &self.text[..start],
            &self.text[start..end],
            &self.text[end..],
        )
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}
