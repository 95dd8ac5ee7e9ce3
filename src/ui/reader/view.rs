use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph},
    Frame,
};
use unicode_segmentation::UnicodeSegmentation;
use unicode_width::UnicodeWidthStr;

use crate::app::{RenderState, WordView};
use crate::reading::{focus_offset, OrpAlignment};
use crate::ui::theme::colors;

/// Column where the focus word starts so that its ORP letter lands on
/// `focus_column` with the given alignment.
pub fn word_start_column(word: &WordView, alignment: OrpAlignment, focus_column: u16) -> usize {
    let before = UnicodeWidthStr::width(word.before.as_str()) as f64;
    let orp = UnicodeWidthStr::width(word.orp.as_str()) as f64;
    let offset = focus_offset(before, orp, alignment);
    (f64::from(focus_column) - offset).round().max(0.0) as usize
}

/// Drops graphemes from the front until `text` fits in `max_width` cells.
fn fit_from_right(text: &str, max_width: usize) -> &str {
    let mut start = 0;
    let mut graphemes = text.grapheme_indices(true);
    while UnicodeWidthStr::width(&text[start..]) > max_width {
        match graphemes.next() {
            Some((_, g)) => start += g.len(),
            None => break,
        }
    }
    &text[start..]
}

/// Dimmed context, then the focus word with its ORP letter highlighted,
/// positioned so the ORP sits on the middle column of `width`.
pub fn render_word_line(
    word: &WordView,
    context_left: &[String],
    context_right: &[String],
    alignment: OrpAlignment,
    width: u16,
) -> Line<'static> {
    let start = word_start_column(word, alignment, width / 2);
    let dimmed = Style::default().fg(colors::dimmed());
    let text = Style::default().fg(colors::text());

    let mut left = context_left.join(" ");
    if !left.is_empty() {
        left.push(' ');
    }
    let left = fit_from_right(&left, start);
    let padding = start.saturating_sub(UnicodeWidthStr::width(left));

    let mut spans = vec![
        Span::raw(" ".repeat(padding)),
        Span::styled(left.to_string(), dimmed),
        Span::styled(word.before.clone(), text),
        Span::styled(
            word.orp.clone(),
            Style::default()
                .fg(colors::anchor())
                .add_modifier(Modifier::BOLD),
        ),
        Span::styled(word.after.clone(), text),
    ];
    if !context_right.is_empty() {
        spans.push(Span::styled(format!(" {}", context_right.join(" ")), dimmed));
    }
    Line::from(spans)
}

pub fn render_progress_bar(progress: (usize, usize), width: usize) -> Line<'static> {
    let (current, total) = progress;
    let filled_len = if total == 0 {
        0
    } else {
        (current.min(total) * width) / total
    };
    let empty_len = width - filled_len;

    Line::from(vec![
        Span::styled("━".repeat(filled_len), Style::default().fg(colors::anchor())),
        Span::styled("─".repeat(empty_len), Style::default().fg(colors::dimmed())),
    ])
    .alignment(Alignment::Center)
}

/// `12 / 340 words · 1:05 remaining · 300 WPM`
pub fn stats_text(state: &RenderState) -> String {
    let (current, total) = state.progress;
    format!(
        "{current} / {total} words · {} remaining · {} WPM",
        state.time_remaining, state.wpm
    )
}

/// Tick under the ORP column so the eye has a fixed anchor.
fn focus_marker(width: u16) -> Line<'static> {
    Line::from(vec![
        Span::raw(" ".repeat(usize::from(width / 2))),
        Span::styled("╵", Style::default().fg(colors::dimmed())),
    ])
}

pub fn render_reader(frame: &mut Frame, area: Rect, state: &RenderState) {
    frame.render_widget(
        Block::default().style(Style::default().bg(colors::background())),
        area,
    );

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(0),
        ])
        .split(area);

    if let Some(word) = &state.word {
        let line = render_word_line(
            word,
            &state.context_left,
            &state.context_right,
            state.alignment,
            area.width,
        );
        frame.render_widget(Paragraph::new(line), rows[1]);
        frame.render_widget(Paragraph::new(focus_marker(area.width)), rows[2]);
    }

    let bar_width = usize::from(area.width / 2).max(10);
    frame.render_widget(
        Paragraph::new(render_progress_bar(state.progress, bar_width)),
        rows[4],
    );
    frame.render_widget(
        Paragraph::new(stats_text(state))
            .alignment(Alignment::Center)
            .style(Style::default().fg(colors::dimmed())),
        rows[5],
    );
}

/// Command screen body: what is loaded and how to start.
pub fn render_placeholder(frame: &mut Frame, area: Rect, state: &RenderState) {
    let mut lines = vec![
        Line::from(Span::styled(
            "rsvp-reader",
            Style::default()
                .fg(colors::anchor())
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];
    match &state.document_summary {
        Some(summary) => {
            let source = state.source.as_deref().unwrap_or("text");
            lines.push(Line::from(format!("Loaded {source}: {summary}")));
            lines.push(Line::from(":read to start again · :save [title] to keep it"));
        }
        None => {
            lines.push(Line::from("Type @file to read a text file"));
            lines.push(Line::from("Or @@ to read from the clipboard"));
        }
    }
    lines.push(Line::from(":notes for saved texts · :h for help · :q to quit"));

    let top = area.height.saturating_sub(lines.len() as u16) / 2;
    let body = Rect {
        y: area.y + top,
        height: area.height - top,
        ..area
    };

    frame.render_widget(
        Block::default().style(Style::default().bg(colors::background())),
        area,
    );
    frame.render_widget(
        Paragraph::new(lines)
            .alignment(Alignment::Center)
            .style(Style::default().fg(colors::text())),
        body,
    );
}
