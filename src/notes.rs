//! Locally saved texts.
//!
//! [`NotesStore`] keeps a JSON array of [`Note`]s, newest first, in the
//! platform config directory (`notes.json` next to `settings.toml`). Every
//! mutation is written through to disk.

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use log::{info, warn};
use serde::{Deserialize, Serialize};

use crate::config::AppPaths;
use crate::error::NotesError;
use crate::reading::Token;

const TITLE_WORDS: usize = 5;
const PREVIEW_CHARS: usize = 150;

pub const WELCOME_TITLE: &str = "Welcome to rsvp-reader";
pub const WELCOME_TEXT: &str = "Welcome to rsvp-reader! Words appear one at a time at a fixed spot, \
so your eyes never have to travel across the page. The highlighted letter is the optimal \
recognition point, where your eye naturally lands. Press Space to pause or resume, use the \
left and right arrows to step while paused, and the up and down arrows to change speed. \
Type @ followed by a file name to read a text file, or @@ to read the clipboard. Happy reading!";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Note {
    pub id: String,
    pub title: String,
    pub content: String,
    pub word_count: usize,
    /// Unix time in milliseconds
    pub created_at: u64,
    #[serde(default)]
    pub last_read_at: Option<u64>,
    /// Token index reached when the reader was last closed on this note
    #[serde(default)]
    pub last_position: usize,
}

impl Note {
    pub fn preview(&self) -> String {
        preview(&self.content)
    }

    /// Share of the note already read, 0-100.
    pub fn percent_read(&self) -> u8 {
        if self.word_count == 0 {
            return 0;
        }
        ((self.last_position.min(self.word_count) * 100) / self.word_count) as u8
    }
}

pub struct NotesStore {
    notes: Vec<Note>,
    path: PathBuf,
}

impl NotesStore {
    /// Loads from the platform notes file.
    pub fn load() -> Self {
        Self::load_from(AppPaths::new().notes_file)
    }

    /// A missing file is an empty store. A file that cannot be read or
    /// parsed is logged and also treated as empty.
    pub fn load_from(path: PathBuf) -> Self {
        let notes = match Self::read_notes(&path) {
            Ok(notes) => notes,
            Err(e) => {
                warn!("failed to load notes from {}: {e}", path.display());
                Vec::new()
            }
        };
        Self { notes, path }
    }

    fn read_notes(path: &Path) -> Result<Vec<Note>, NotesError> {
        if !path.exists() {
            return Ok(Vec::new());
        }
        let data = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&data)?)
    }

    /// On a first run (no notes file yet) adds a note explaining the
    /// controls. Returns whether it was added.
    pub fn seed_welcome_note(&mut self) -> Result<bool, NotesError> {
        if self.path.exists() || !self.notes.is_empty() {
            return Ok(false);
        }
        self.save_note(WELCOME_TITLE, WELCOME_TEXT)?;
        Ok(true)
    }

    /// Stores a new note at the front of the list.
    pub fn save_note(&mut self, title: &str, content: &str) -> Result<&Note, NotesError> {
        let title = title.trim();
        let content = content.trim();
        if title.is_empty() || content.is_empty() {
            return Err(NotesError::MissingTitleOrContent);
        }

        let created_at = now_millis();
        let note = Note {
            id: self.unique_id(created_at),
            title: title.to_string(),
            content: content.to_string(),
            word_count: content.split_whitespace().count(),
            created_at,
            last_read_at: None,
            last_position: 0,
        };
        info!("saving note {} ({} words)", note.id, note.word_count);

        self.notes.insert(0, note);
        self.persist()?;
        Ok(&self.notes[0])
    }

    /// Returns the note and stamps its `last_read_at`.
    pub fn open(&mut self, id: &str) -> Result<Note, NotesError> {
        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| NotesError::NotFound(id.to_string()))?;
        note.last_read_at = Some(now_millis());
        let opened = note.clone();
        self.persist()?;
        Ok(opened)
    }

    pub fn record_position(&mut self, id: &str, position: usize) -> Result<(), NotesError> {
        let note = self
            .notes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| NotesError::NotFound(id.to_string()))?;
        note.last_position = position;
        self.persist()
    }

    pub fn delete(&mut self, id: &str) -> Result<(), NotesError> {
        let before = self.notes.len();
        self.notes.retain(|n| n.id != id);
        if self.notes.len() == before {
            return Err(NotesError::NotFound(id.to_string()));
        }
        info!("deleted note {id}");
        self.persist()
    }

    pub fn get(&self, id: &str) -> Option<&Note> {
        self.notes.iter().find(|n| n.id == id)
    }

    pub fn list(&self) -> &[Note] {
        &self.notes
    }

    pub fn len(&self) -> usize {
        self.notes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.notes.is_empty()
    }

    fn unique_id(&self, created_at: u64) -> String {
        let base = format!("{created_at:x}");
        let mut id = base.clone();
        let mut suffix = 1;
        while self.get(&id).is_some() {
            id = format!("{base}-{suffix}");
            suffix += 1;
        }
        id
    }

    fn persist(&self) -> Result<(), NotesError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(&self.notes)?;
        std::fs::write(&self.path, data)?;
        Ok(())
    }
}

/// First five words, with `...` when the text has more.
pub fn default_title(tokens: &[Token]) -> String {
    let mut title = tokens
        .iter()
        .take(TITLE_WORDS)
        .map(Token::text)
        .collect::<Vec<_>>()
        .join(" ");
    if tokens.len() > TITLE_WORDS {
        title.push_str("...");
    }
    title
}

/// First 150 characters, with `...` when truncated.
pub fn preview(content: &str) -> String {
    let mut chars = content.chars();
    let mut out: String = chars.by_ref().take(PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        out.push_str("...");
    }
    out
}

fn now_millis() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
