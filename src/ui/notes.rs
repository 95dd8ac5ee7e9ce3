use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use crate::app::{NoteRow, RenderState};
use crate::ui::theme::colors;

fn note_item(row: &NoteRow) -> ListItem<'static> {
    ListItem::new(vec![
        Line::from(vec![
            Span::styled(
                row.title.clone(),
                Style::default()
                    .fg(colors::text())
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                format!("  {}", row.meta),
                Style::default().fg(colors::dimmed()),
            ),
        ]),
        Line::from(Span::styled(
            row.preview.clone(),
            Style::default().fg(colors::dimmed()),
        )),
        Line::from(""),
    ])
}

pub fn render_notes(frame: &mut Frame, area: Rect, state: &RenderState) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors::dimmed()))
        .title(" Notes ")
        .style(Style::default().bg(colors::background()));

    if state.notes.is_empty() {
        let empty = Paragraph::new("No saved notes yet. Load a text and use :save [title].")
            .style(Style::default().fg(colors::dimmed()))
            .block(block);
        frame.render_widget(empty, area);
        return;
    }

    let items: Vec<ListItem> = state.notes.iter().map(note_item).collect();
    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().bg(colors::surface()))
        .highlight_symbol("▌ ");

    let mut list_state = ListState::default().with_selected(Some(state.selected_note));
    frame.render_stateful_widget(list, area, &mut list_state);
}
