//! Input sources. Each loader produces a [`LoadedDocument`] holding the raw
//! text and its tokens.

use std::path::Path;

pub use crate::error::LoadError;
use crate::reading::{tokenize_text, Token};

pub mod clipboard;
pub mod text;

#[derive(Debug, Clone)]
pub struct LoadedDocument {
    pub text: String,
    pub tokens: Vec<Token>,
    /// Where the text came from, e.g. `file:notes.txt` or `clipboard`
    pub source: String,
}

impl LoadedDocument {
    /// Rejects text with no words in it.
    pub fn from_text(text: String, source: impl Into<String>) -> Result<Self, LoadError> {
        let source = source.into();
        let tokens = tokenize_text(&text);
        if tokens.is_empty() {
            return Err(LoadError::EmptyDocument(source));
        }
        Ok(Self {
            text,
            tokens,
            source,
        })
    }

    pub fn word_count(&self) -> usize {
        self.tokens.len()
    }
}

/// Picks a loader from the file extension.
pub fn load_path(path: &str) -> Result<LoadedDocument, LoadError> {
    let extension = Path::new(path)
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        None | Some("txt") | Some("text") | Some("md") => text::load(path),
        Some(other) => Err(LoadError::UnsupportedFormat(other.to_string())),
    }
}
