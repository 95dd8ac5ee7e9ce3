use super::app::App;
use super::mode::AppMode;
use crate::reading::timing::{format_time, reading_time_minutes, remaining_seconds};
use crate::reading::OrpAlignment;

/// The focus word split around its ORP character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WordView {
    pub before: String,
    pub orp: String,
    pub after: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NoteRow {
    pub title: String,
    /// e.g. `120 words · 35% read`
    pub meta: String,
    pub preview: String,
}

/// Snapshot of everything the UI draws in one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderState {
    pub mode: AppMode,
    pub word: Option<WordView>,
    pub context_left: Vec<String>,
    pub context_right: Vec<String>,
    /// (words shown so far, total words)
    pub progress: (usize, usize),
    pub wpm: u32,
    pub time_remaining: String,
    pub alignment: OrpAlignment,
    pub status: Option<String>,
    /// `N words · ~M min` for the loaded text
    pub document_summary: Option<String>,
    /// Where the loaded text came from, e.g. `file:notes.txt`
    pub source: Option<String>,
    pub notes: Vec<NoteRow>,
    pub selected_note: usize,
    pub show_help: bool,
}

impl RenderState {
    pub fn empty(mode: AppMode) -> Self {
        Self {
            mode,
            word: None,
            context_left: vec![],
            context_right: vec![],
            progress: (0, 0),
            wpm: 0,
            time_remaining: format_time(0.0),
            alignment: OrpAlignment::default(),
            status: None,
            document_summary: None,
            source: None,
            notes: vec![],
            selected_note: 0,
            show_help: false,
        }
    }

    pub(crate) fn build(app: &App) -> Self {
        let config = app.config();
        let mut state = Self::empty(app.mode());
        state.wpm = app.get_wpm();
        state.alignment = config.reader.alignment;
        state.status = app.status().map(str::to_string);
        state.show_help = app.show_help();
        state.selected_note = app.selected_note();

        if let Some(session) = app.session() {
            let scheduler = &session.scheduler;
            let tokens = scheduler.tokens();
            let total = tokens.len();
            let wpm = scheduler.rate();

            state.source = Some(session.source.clone());
            state.document_summary = Some(format!(
                "{} words · ~{} min",
                total,
                reading_time_minutes(total, wpm)
            ));

            if let Some(index) = scheduler.displayed_index() {
                let (before, orp, after) = tokens[index].orp_parts();
                state.word = Some(WordView {
                    before: before.to_string(),
                    orp: orp.to_string(),
                    after: after.to_string(),
                });

                let n = config.reader.context_words;
                state.context_left = tokens[index.saturating_sub(n)..index]
                    .iter()
                    .map(|t| t.text().to_string())
                    .collect();
                let right_end = (index + 1 + n).min(total);
                state.context_right = tokens[index + 1..right_end]
                    .iter()
                    .map(|t| t.text().to_string())
                    .collect();

                state.progress = (index + 1, total);
                state.time_remaining = format_time(remaining_seconds(index + 1, total, wpm));
            } else {
                state.progress = (0, total);
                state.time_remaining = format_time(remaining_seconds(0, total, wpm));
            }
        }

        if app.mode() == AppMode::Notes {
            state.notes = app
                .notes()
                .list()
                .iter()
                .map(|note| NoteRow {
                    title: note.title.clone(),
                    meta: format!("{} words · {}% read", note.word_count, note.percent_read()),
                    preview: note.preview(),
                })
                .collect();
        }

        state
    }
}
