//! Command parsing for the TUI command deck
//!
//! Supported input:
//! - `@path` → read a text file, `@@` → read the clipboard
//! - `:q` / `:quit`, `:h` / `:help`
//! - `:notes`, `:save [title]`, `:read`
//! - `:wpm N`, `:align left|center|right`
//! - `:pause sentence|clause|minor X` → punctuation pause multiplier

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::app::{AppEvent, AppMode, RenderState};
use crate::reading::{OrpAlignment, PunctuationClass};
use crate::ui::theme::colors;

/// Commands that can be parsed from command deck input
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Quit,
    Help,
    LoadFile(String),
    LoadClipboard,
    Notes,
    Save(Option<String>),
    Read,
    Wpm(u32),
    Align(OrpAlignment),
    Pause(PunctuationClass, f64),
    /// Recognized command with a bad argument
    Invalid(String),
    Unknown(String),
}

pub fn parse_command(input: &str) -> Command {
    let input = input.trim();

    if input.is_empty() {
        return Command::Unknown(input.to_string());
    }

    if let Some(cmd) = input.strip_prefix(':') {
        let (name, args) = match cmd.split_once(char::is_whitespace) {
            Some((name, args)) => (name, args.trim()),
            None => (cmd, ""),
        };
        match name {
            "q" | "quit" => Command::Quit,
            "h" | "help" => Command::Help,
            "notes" => Command::Notes,
            "read" => Command::Read,
            "save" if args.is_empty() => Command::Save(None),
            "save" => Command::Save(Some(args.to_string())),
            "wpm" => match args.parse::<u32>() {
                Ok(wpm) if wpm > 0 => Command::Wpm(wpm),
                _ => Command::Invalid(format!("Usage: :wpm N (got \"{args}\")")),
            },
            "align" => match OrpAlignment::from_name(&args.to_ascii_lowercase()) {
                Some(alignment) => Command::Align(alignment),
                None => Command::Invalid("Usage: :align left|center|right".to_string()),
            },
            "pause" => parse_pause(args),
            _ => Command::Unknown(input.to_string()),
        }
    } else if let Some(rest) = input.strip_prefix('@') {
        let filename = rest.trim();
        if filename.is_empty() || filename == "@" {
            Command::LoadClipboard
        } else {
            Command::LoadFile(filename.to_string())
        }
    } else {
        Command::Unknown(input.to_string())
    }
}

fn parse_pause(args: &str) -> Command {
    let usage = || Command::Invalid("Usage: :pause sentence|clause|minor X".to_string());
    let mut parts = args.split_whitespace();
    let (Some(class), Some(value), None) = (parts.next(), parts.next(), parts.next()) else {
        return usage();
    };
    let Some(class) = PunctuationClass::from_name(&class.to_ascii_lowercase()) else {
        return usage();
    };
    match value.parse::<f64>() {
        Ok(value) if value.is_finite() && value > 0.0 => Command::Pause(class, value),
        _ => Command::Invalid(format!("Pause multiplier must be a positive number, got {value}")),
    }
}

/// Translation layer between command deck input and the App core.
pub fn command_to_app_event(command: Command) -> AppEvent {
    match command {
        Command::Quit => AppEvent::Quit,
        Command::Help => AppEvent::Help,
        Command::LoadFile(path) => AppEvent::LoadFile(path),
        Command::LoadClipboard => AppEvent::LoadClipboard,
        Command::Notes => AppEvent::ShowNotes,
        Command::Save(title) => AppEvent::SaveNote(title),
        Command::Read => AppEvent::Read,
        Command::Wpm(wpm) => AppEvent::SetWpm(wpm),
        Command::Align(alignment) => AppEvent::SetAlignment(alignment),
        Command::Pause(class, value) => AppEvent::SetMultiplier(class, value),
        Command::Invalid(message) => AppEvent::Warning(message),
        Command::Unknown(input) => AppEvent::InvalidCommand(input),
    }
}

fn deck_hint(mode: AppMode) -> &'static str {
    match mode {
        AppMode::Reading | AppMode::Paused => {
            "Space play/pause · ←/→ step · ↑/↓ speed · 0-9 seek · r restart · a align · Esc back"
        }
        AppMode::Notes => "↑/↓ select · Enter read · d delete · Esc back",
        AppMode::Command | AppMode::Quit => "@file · @@ clipboard · :notes · :h help · :q quit",
    }
}

/// Bottom deck: mode badge plus the typed command, or key hints in the
/// reader and notes screens. A status message replaces the hint.
pub fn render_command_deck(frame: &mut Frame, area: Rect, state: &RenderState, input: &str) {
    frame.render_widget(Clear, area);

    let layout = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(1), Constraint::Min(1)])
        .split(area);

    let accent_bar =
        Paragraph::new("▌").style(Style::default().fg(colors::anchor()).bg(colors::surface()));
    frame.render_widget(accent_bar, layout[0]);

    let badge = Span::styled(
        state.mode.label(),
        Style::default()
            .fg(colors::background())
            .bg(colors::anchor())
            .add_modifier(Modifier::BOLD),
    );

    let mut spans = vec![badge, Span::raw(" ")];
    if state.mode == AppMode::Command {
        spans.push(Span::styled("> ", Style::default().fg(colors::anchor())));
        spans.push(Span::styled(
            input.to_string(),
            Style::default().fg(colors::text()),
        ));
        spans.push(Span::styled("█", Style::default().fg(colors::dimmed())));
    }

    let second_line = match &state.status {
        Some(status) => Line::from(Span::styled(
            status.clone(),
            Style::default().fg(colors::warning()),
        )),
        None => {
            let hint = match (&state.document_summary, state.mode) {
                (Some(summary), AppMode::Command) => {
                    format!("{summary} · {}", deck_hint(state.mode))
                }
                _ => deck_hint(state.mode).to_string(),
            };
            Line::from(Span::styled(hint, Style::default().fg(colors::dimmed())))
        }
    };

    let deck = Paragraph::new(vec![Line::from(spans), second_line])
        .block(
            Block::default()
                .borders(Borders::TOP)
                .border_style(Style::default().fg(colors::dimmed())),
        )
        .style(Style::default().fg(colors::text()).bg(colors::surface()));

    frame.render_widget(deck, layout[1]);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quit_variants() {
        assert_eq!(parse_command(":q"), Command::Quit);
        assert_eq!(parse_command(":quit"), Command::Quit);
    }

    #[test]
    fn test_parse_help_variants() {
        assert_eq!(parse_command(":h"), Command::Help);
        assert_eq!(parse_command(":help"), Command::Help);
    }

    #[test]
    fn test_parse_load_file() {
        assert_eq!(
            parse_command("@test.txt"),
            Command::LoadFile("test.txt".to_string())
        );
    }

    #[test]
    fn test_parse_load_file_with_spaces() {
        assert_eq!(
            parse_command("@  my notes.txt "),
            Command::LoadFile("my notes.txt".to_string())
        );
    }

    #[test]
    fn test_parse_load_clipboard() {
        assert_eq!(parse_command("@@"), Command::LoadClipboard);
        assert_eq!(parse_command("@"), Command::LoadClipboard);
    }

    #[test]
    fn test_parse_notes_read_save() {
        assert_eq!(parse_command(":notes"), Command::Notes);
        assert_eq!(parse_command(":read"), Command::Read);
        assert_eq!(parse_command(":save"), Command::Save(None));
        assert_eq!(
            parse_command(":save  Chapter one "),
            Command::Save(Some("Chapter one".to_string()))
        );
    }

    #[test]
    fn test_parse_wpm() {
        assert_eq!(parse_command(":wpm 450"), Command::Wpm(450));
        assert!(matches!(parse_command(":wpm"), Command::Invalid(_)));
        assert!(matches!(parse_command(":wpm fast"), Command::Invalid(_)));
        assert!(matches!(parse_command(":wpm 0"), Command::Invalid(_)));
    }

    #[test]
    fn test_parse_align() {
        assert_eq!(
            parse_command(":align center"),
            Command::Align(OrpAlignment::Center)
        );
        assert_eq!(
            parse_command(":align RIGHT"),
            Command::Align(OrpAlignment::Right)
        );
        assert!(matches!(parse_command(":align middle"), Command::Invalid(_)));
    }

    #[test]
    fn test_parse_pause() {
        assert_eq!(
            parse_command(":pause sentence 2.5"),
            Command::Pause(PunctuationClass::SentenceEnd, 2.5)
        );
        assert_eq!(
            parse_command(":pause minor 1.1"),
            Command::Pause(PunctuationClass::MinorBreak, 1.1)
        );
        assert!(matches!(parse_command(":pause clause -1"), Command::Invalid(_)));
        assert!(matches!(parse_command(":pause bogus 2"), Command::Invalid(_)));
        assert!(matches!(parse_command(":pause clause"), Command::Invalid(_)));
    }

    #[test]
    fn test_parse_empty_input() {
        assert!(matches!(parse_command(""), Command::Unknown(_)));
        assert!(matches!(parse_command("   "), Command::Unknown(_)));
    }

    #[test]
    fn test_parse_invalid_command() {
        assert!(matches!(parse_command("invalid"), Command::Unknown(_)));
        assert!(matches!(parse_command(":frobnicate"), Command::Unknown(_)));
    }

    #[test]
    fn test_command_to_app_event() {
        assert_eq!(command_to_app_event(Command::Quit), AppEvent::Quit);
        assert_eq!(
            command_to_app_event(Command::LoadFile("test.txt".to_string())),
            AppEvent::LoadFile("test.txt".to_string())
        );
        assert_eq!(
            command_to_app_event(Command::Wpm(500)),
            AppEvent::SetWpm(500)
        );
        assert_eq!(
            command_to_app_event(Command::Save(None)),
            AppEvent::SaveNote(None)
        );
        assert!(matches!(
            command_to_app_event(Command::Invalid("bad".to_string())),
            AppEvent::Warning(_)
        ));
        assert!(matches!(
            command_to_app_event(Command::Unknown("invalid".to_string())),
            AppEvent::InvalidCommand(_)
        ));
    }
}
