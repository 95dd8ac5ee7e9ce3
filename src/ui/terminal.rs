use crate::app::{App, AppEvent, AppMode};
use crate::ui::command::{command_to_app_event, parse_command, render_command_deck};
use crate::ui::help::render_help;
use crate::ui::keys::{is_interrupt, key_to_action};
use crate::ui::notes::render_notes;
use crate::ui::reader::{render_placeholder, render_reader};
use crate::ui::terminal_guard::TerminalGuard;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind};
use log::debug;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout},
    Terminal,
};
use std::io::{self, Stdout};
use std::time::Duration;

/// Upper bound on how long the loop blocks waiting for input.
const IDLE_POLL: Duration = Duration::from_millis(250);

pub struct TuiManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    command_input: String,
    _guard: TerminalGuard,
}

impl TuiManager {
    pub fn new() -> Result<Self, io::Error> {
        let guard = TerminalGuard::new()?;
        let backend = CrosstermBackend::new(io::stdout());
        let terminal = Terminal::new(backend)?;

        Ok(TuiManager {
            terminal,
            command_input: String::new(),
            _guard: guard,
        })
    }

    /// Draws, waits for input until the scheduler's next deadline, then
    /// lets the scheduler fire. Returns once the app reaches `Quit`.
    pub fn run_event_loop(&mut self, app: &mut App) -> io::Result<()> {
        loop {
            if app.mode() == AppMode::Quit {
                return Ok(());
            }
            self.render_frame(app)?;

            let timeout = app.next_deadline().map_or(IDLE_POLL, |d| d.min(IDLE_POLL));
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key_event(app, key);
                    }
                }
            }

            app.tick();
        }
    }

    fn handle_key_event(&mut self, app: &mut App, key: KeyEvent) {
        if app.mode() != AppMode::Command {
            if let Some(action) = key_to_action(app.mode(), &key) {
                debug!("key {:?} -> {:?}", key.code, action);
                app.handle_key(action);
            }
            return;
        }

        if is_interrupt(&key) {
            app.handle_event(AppEvent::Quit);
            return;
        }
        match key.code {
            KeyCode::Enter => {
                let input = std::mem::take(&mut self.command_input);
                if input.trim().is_empty() {
                    return;
                }
                let event = command_to_app_event(parse_command(&input));
                debug!("command {input:?} -> {event:?}");
                app.handle_event(event);
            }
            KeyCode::Esc => {
                if app.show_help() {
                    app.handle_event(AppEvent::Help);
                } else {
                    self.command_input.clear();
                }
            }
            KeyCode::Backspace => {
                self.command_input.pop();
            }
            KeyCode::Char(c) => self.command_input.push(c),
            _ => {}
        }
    }

    pub fn render_frame(&mut self, app: &App) -> io::Result<()> {
        let state = app.get_render_state();
        let input = self.command_input.as_str();

        self.terminal.draw(|frame| {
            let area = frame.area();
            let chunks = Layout::default()
                .direction(Direction::Vertical)
                .constraints([Constraint::Min(1), Constraint::Length(3)])
                .split(area);

            match state.mode {
                AppMode::Reading | AppMode::Paused => render_reader(frame, chunks[0], &state),
                AppMode::Notes => render_notes(frame, chunks[0], &state),
                AppMode::Command | AppMode::Quit => render_placeholder(frame, chunks[0], &state),
            }
            render_command_deck(frame, chunks[1], &state, input);

            if state.show_help {
                render_help(frame, chunks[0]);
            }
        })?;

        Ok(())
    }
}
