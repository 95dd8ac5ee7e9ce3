use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

use crate::ui::theme::colors;

const HELP_LINES: &[(&str, &str)] = &[
    ("@path", "read a text file"),
    ("@@", "read the clipboard"),
    (":notes", "saved texts"),
    (":save [title]", "save the loaded text"),
    (":read", "read the loaded text again"),
    (":wpm N", "set the speed"),
    (":align left|center|right", "ORP alignment"),
    (":pause sentence|clause|minor X", "punctuation pause"),
    (":h / :q", "toggle help / quit"),
    ("", ""),
    ("Space", "play / pause"),
    ("← →", "previous / next word while paused"),
    ("↑ ↓  Shift+← →", "speed ±25 / ±50 wpm"),
    ("0-9", "jump to 0%-90%"),
    ("r  a", "restart / cycle alignment"),
    ("Esc", "back to the command deck"),
];

/// Centered rectangle no larger than `width` × `height`.
pub fn centered_rect(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}

pub fn render_help(frame: &mut Frame, area: Rect) {
    let key_width = HELP_LINES
        .iter()
        .map(|(key, _)| key.chars().count())
        .max()
        .unwrap_or(0);

    let lines: Vec<Line> = HELP_LINES
        .iter()
        .map(|(key, action)| {
            Line::from(vec![
                Span::styled(
                    format!(" {key:<key_width$}  "),
                    Style::default()
                        .fg(colors::anchor())
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(*action, Style::default().fg(colors::text())),
            ])
        })
        .collect();

    let popup = centered_rect(area, 72, HELP_LINES.len() as u16 + 2);
    frame.render_widget(Clear, popup);
    frame.render_widget(
        Paragraph::new(lines).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(colors::anchor()))
                .title(" Help · Esc to close ")
                .style(Style::default().bg(colors::surface())),
        ),
        popup,
    );
}
