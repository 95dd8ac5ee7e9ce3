use std::path::Path;

use super::{LoadError, LoadedDocument};

/// Reads a UTF-8 text file, rejecting missing and empty files.
pub fn load_file_safe(path: &Path) -> Result<String, LoadError> {
    if !path.exists() {
        return Err(LoadError::FileNotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Err(LoadError::EmptyDocument(path.display().to_string()));
    }

    Ok(content)
}

pub fn load(path: &str) -> Result<LoadedDocument, LoadError> {
    let path = Path::new(path);
    let content = load_file_safe(path)?;
    LoadedDocument::from_text(content, format!("file:{}", path.display()))
}
