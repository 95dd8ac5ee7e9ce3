use std::path::PathBuf;
use std::time::Duration;

use log::{info, trace, warn};

use super::event::{AppEvent, KeyAction};
use super::mode::AppMode;
use super::render_state::RenderState;
use crate::config::Config;
use crate::input::{self, LoadError, LoadedDocument};
use crate::notes::{self, NotesStore};
use crate::reading::{Direction, Scheduler, SystemClock};

/// One reading session: the text on screen and the scheduler driving it.
pub struct ReadingSession {
    pub scheduler: Scheduler,
    pub text: String,
    pub source: String,
    /// Set when the text was opened from the note store
    pub note_id: Option<String>,
}

pub struct App {
    mode: AppMode,
    config: Config,
    settings_path: Option<PathBuf>,
    notes: NotesStore,
    session: Option<ReadingSession>,
    status: Option<String>,
    show_help: bool,
    selected_note: usize,
}

impl App {
    pub fn new(config: Config, notes: NotesStore) -> Self {
        Self {
            mode: AppMode::Command,
            config,
            settings_path: None,
            notes,
            session: None,
            status: None,
            show_help: false,
            selected_note: 0,
        }
    }

    /// Settings changed from the command deck are written back to `path`.
    pub fn persist_settings_to(mut self, path: PathBuf) -> Self {
        self.settings_path = Some(path);
        self
    }

    pub fn mode(&self) -> AppMode {
        self.mode
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn notes(&self) -> &NotesStore {
        &self.notes
    }

    pub fn session(&self) -> Option<&ReadingSession> {
        self.session.as_ref()
    }

    pub fn status(&self) -> Option<&str> {
        self.status.as_deref()
    }

    pub fn show_help(&self) -> bool {
        self.show_help
    }

    pub fn selected_note(&self) -> usize {
        self.selected_note
    }

    pub fn get_wpm(&self) -> u32 {
        self.session
            .as_ref()
            .map_or(self.config.timing.wpm, |s| s.scheduler.rate())
    }

    /// Starts a new session on `document` and begins playback at once.
    pub fn start_reading(&mut self, document: LoadedDocument, note_id: Option<String>) {
        self.leave_session();
        info!(
            "reading {} ({} words)",
            document.source,
            document.word_count()
        );

        let mut scheduler =
            Scheduler::with_config(document.tokens, &self.config.timing, SystemClock);
        scheduler.on_display(|token, index, total| {
            trace!("word {}/{}: {}", index + 1, total, token.text());
        });
        scheduler.play();

        self.session = Some(ReadingSession {
            scheduler,
            text: document.text,
            source: document.source,
            note_id,
        });
        self.status = None;
        self.mode = AppMode::Reading;
        self.sync_mode();
    }

    pub fn handle_event(&mut self, event: AppEvent) {
        self.status = None;
        match event {
            AppEvent::LoadFile(path) => {
                let result = input::load_path(&path);
                self.load_result(result);
            }
            AppEvent::LoadClipboard => {
                let result = input::clipboard::load();
                self.load_result(result);
            }
            AppEvent::Quit => {
                self.leave_session();
                self.mode = AppMode::Quit;
            }
            AppEvent::Help => {
                self.show_help = !self.show_help;
            }
            AppEvent::ShowNotes => {
                self.leave_session();
                self.selected_note = 0;
                self.mode = AppMode::Notes;
            }
            AppEvent::SaveNote(title) => self.save_note(title),
            AppEvent::Read => self.resume_reading(),
            AppEvent::SetWpm(wpm) => {
                let wpm = self.config.timing.clamp_wpm(wpm);
                self.config.timing.wpm = wpm;
                if let Some(session) = self.session.as_mut() {
                    session.scheduler.set_rate(wpm);
                }
                self.status = Some(format!("Speed set to {wpm} wpm"));
                self.persist_settings();
            }
            AppEvent::SetAlignment(alignment) => {
                self.config.reader.alignment = alignment;
                self.status = Some(format!("Alignment: {}", alignment.name()));
                self.persist_settings();
            }
            AppEvent::SetMultiplier(class, value) => {
                if !self.config.timing.multipliers.set(class, value) {
                    self.status = Some(format!("Pause multiplier must be positive, got {value}"));
                    return;
                }
                if let Some(session) = self.session.as_mut() {
                    session.scheduler.set_multiplier(class, value);
                }
                self.status = Some(format!("{} pause set to {value:.2}x", class.name()));
                self.persist_settings();
            }
            AppEvent::Warning(message) => {
                self.status = Some(message);
            }
            AppEvent::InvalidCommand(input) => {
                self.status = Some(format!("Unknown command: {input}"));
            }
            AppEvent::None => {}
        }
    }

    /// Reader and notes key handling. Keys in other modes are ignored.
    pub fn handle_key(&mut self, action: KeyAction) {
        if action == KeyAction::Quit {
            self.handle_event(AppEvent::Quit);
            return;
        }
        match self.mode {
            AppMode::Reading | AppMode::Paused => self.handle_reader_key(action),
            AppMode::Notes => self.handle_notes_key(action),
            AppMode::Command | AppMode::Quit => {}
        }
    }

    fn handle_reader_key(&mut self, action: KeyAction) {
        if action == KeyAction::Back {
            self.leave_session();
            self.mode = AppMode::Command;
            return;
        }
        if action == KeyAction::CycleAlignment {
            let next = self.config.reader.alignment.next();
            self.handle_event(AppEvent::SetAlignment(next));
            return;
        }

        let step = i32::try_from(self.config.timing.wpm_step).unwrap_or(i32::MAX);
        let big_step = i32::try_from(self.config.timing.wpm_big_step).unwrap_or(i32::MAX);
        let Some(session) = self.session.as_mut() else {
            return;
        };
        let scheduler = &mut session.scheduler;

        match action {
            KeyAction::TogglePlay => scheduler.toggle(),
            KeyAction::StepBack => {
                scheduler.step(Direction::Backward);
            }
            KeyAction::StepForward => {
                scheduler.step(Direction::Forward);
            }
            KeyAction::Faster | KeyAction::Up => scheduler.adjust_rate(step),
            KeyAction::Slower | KeyAction::Down => scheduler.adjust_rate(-step),
            KeyAction::MuchFaster => scheduler.adjust_rate(big_step),
            KeyAction::MuchSlower => scheduler.adjust_rate(-big_step),
            KeyAction::SeekTenth(n) => scheduler.seek(f64::from(n.min(10)) / 10.0),
            KeyAction::Restart => scheduler.restart(),
            _ => {}
        }
        self.config.timing.wpm = scheduler.rate();
        self.sync_mode();
    }

    fn handle_notes_key(&mut self, action: KeyAction) {
        let count = self.notes.len();
        match action {
            KeyAction::Up => {
                self.selected_note = self.selected_note.saturating_sub(1);
            }
            KeyAction::Down => {
                if self.selected_note + 1 < count {
                    self.selected_note += 1;
                }
            }
            KeyAction::Select => self.open_selected_note(),
            KeyAction::Delete => self.delete_selected_note(),
            KeyAction::Back => self.mode = AppMode::Command,
            _ => {}
        }
    }

    /// Fires the scheduler's pending advance when due.
    pub fn tick(&mut self) -> bool {
        let advanced = self
            .session
            .as_mut()
            .is_some_and(|s| s.scheduler.tick());
        if advanced {
            self.sync_mode();
        }
        advanced
    }

    /// Poll timeout for the event loop; `None` when nothing is scheduled.
    pub fn next_deadline(&self) -> Option<Duration> {
        if !self.mode.in_reader() {
            return None;
        }
        self.session
            .as_ref()
            .and_then(|s| s.scheduler.time_until_next())
    }

    pub fn get_render_state(&self) -> RenderState {
        RenderState::build(self)
    }

    fn load_result(&mut self, result: Result<LoadedDocument, LoadError>) {
        match result {
            Ok(document) => self.start_reading(document, None),
            Err(e) => {
                warn!("load failed: {e}");
                self.status = Some(e.to_string());
            }
        }
    }

    fn resume_reading(&mut self) {
        match self.session.as_mut() {
            Some(session) => {
                session.scheduler.restart();
                session.scheduler.play();
                self.mode = AppMode::Reading;
                self.sync_mode();
            }
            None => {
                self.status = Some("Nothing loaded yet. Try @file or @@".to_string());
            }
        }
    }

    fn save_note(&mut self, title: Option<String>) {
        let Some(session) = self.session.as_ref() else {
            self.status = Some("Load some text before saving a note".to_string());
            return;
        };
        let title = title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| notes::default_title(session.scheduler.tokens()));

        let result = self
            .notes
            .save_note(&title, &session.text)
            .map(|note| (note.id.clone(), note.title.clone()));
        match result {
            Ok((id, title)) => {
                if let Some(session) = self.session.as_mut() {
                    session.note_id = Some(id);
                }
                self.status = Some(format!("Saved note \"{title}\""));
            }
            Err(e) => {
                warn!("saving note failed: {e}");
                self.status = Some(e.to_string());
            }
        }
    }

    fn open_selected_note(&mut self) {
        let Some(id) = self
            .notes
            .list()
            .get(self.selected_note)
            .map(|n| n.id.clone())
        else {
            return;
        };
        let note = match self.notes.open(&id) {
            Ok(note) => note,
            Err(e) => {
                warn!("opening note {id} failed: {e}");
                self.status = Some(e.to_string());
                return;
            }
        };
        match LoadedDocument::from_text(note.content, format!("note:{}", note.title)) {
            Ok(document) => self.start_reading(document, Some(id)),
            Err(e) => self.status = Some(e.to_string()),
        }
    }

    fn delete_selected_note(&mut self) {
        let Some(id) = self
            .notes
            .list()
            .get(self.selected_note)
            .map(|n| n.id.clone())
        else {
            return;
        };
        if let Err(e) = self.notes.delete(&id) {
            warn!("deleting note {id} failed: {e}");
            self.status = Some(e.to_string());
            return;
        }
        if self.selected_note >= self.notes.len() {
            self.selected_note = self.notes.len().saturating_sub(1);
        }
    }

    /// Pauses playback and records the position on the session's note.
    fn leave_session(&mut self) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        session.scheduler.pause();
        if let Some(id) = session.note_id.as_deref() {
            if let Err(e) = self.notes.record_position(id, session.scheduler.cursor()) {
                warn!("could not record position for note {id}: {e}");
            }
        }
    }

    fn persist_settings(&self) {
        if let Some(path) = self.settings_path.as_deref() {
            if let Err(e) = self.config.save_to(path) {
                warn!("could not save settings: {e}");
            }
        }
    }

    fn sync_mode(&mut self) {
        if !self.mode.in_reader() {
            return;
        }
        let running = self
            .session
            .as_ref()
            .is_some_and(|s| s.scheduler.is_running());
        self.mode = if running {
            AppMode::Reading
        } else {
            AppMode::Paused
        };
    }
}
