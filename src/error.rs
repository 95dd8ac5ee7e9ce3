use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Failures while turning an input source into reader text.
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("File not found: {0}")]
    FileNotFound(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("Nothing to read in {0}")]
    EmptyDocument(String),

    #[error("Unsupported format: {0}")]
    UnsupportedFormat(String),

    #[error("Clipboard error: {0}")]
    Clipboard(String),
}

/// Failures of the on-disk note store.
#[derive(Error, Debug)]
pub enum NotesError {
    #[error("notes file I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("notes file is not valid JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("a note needs both a title and some text")]
    MissingTitleOrContent,

    #[error("no note with id {0}")]
    NotFound(String),
}

/// Failures reading or writing `settings.toml`.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("settings I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("invalid settings file: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("could not serialize settings: {0}")]
    Serialize(#[from] toml::ser::Error),
}
