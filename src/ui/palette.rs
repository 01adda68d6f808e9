//! Command Palette UI
//!
//! Overlay with a query line and grouped results. The highlighted row is
//! kept in view by a `ListState`.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use themedeck::model::{PaletteEntry, PaletteModel};

use super::layout::centered_rect;

/// List rows for `results` with a heading before each group
///
/// Returns the rows and the row index of the selected entry.
fn build_rows(results: &[&PaletteEntry], selected: Option<usize>) -> (Vec<ListItem<'static>>, Option<usize>) {
    let heading_style = Style::default()
        .fg(Color::DarkGray)
        .add_modifier(Modifier::BOLD);

    let mut rows = Vec::new();
    let mut selected_row = None;
    let mut last_group = None;

    for (idx, entry) in results.iter().enumerate() {
        if last_group != Some(entry.group) {
            rows.push(ListItem::new(Line::from(Span::styled(
                entry.group.as_str().to_string(),
                heading_style,
            ))));
            last_group = Some(entry.group);
        }
        if selected == Some(idx) {
            selected_row = Some(rows.len());
        }
        rows.push(ListItem::new(format!("  {}", entry.title)));
    }

    (rows, selected_row)
}

/// Render the palette overlay on top of `area`
pub fn render_palette(f: &mut Frame, area: Rect, palette: &PaletteModel) {
    let overlay = centered_rect(area, 60, 18);
    f.render_widget(Clear, overlay);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" Search ({} themes) - Esc to close ", palette.theme_count()))
        .style(Style::default().fg(Color::Cyan));
    let inner = block.inner(overlay);
    f.render_widget(block, overlay);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(1)])
        .split(inner);

    let cursor_style = Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::SLOW_BLINK);
    let input_line = if palette.query.is_empty() {
        Line::from(vec![
            Span::styled("█", cursor_style),
            Span::styled(
                format!("Search {} themes", palette.theme_count()),
                Style::default().fg(Color::DarkGray),
            ),
        ])
    } else {
        Line::from(vec![
            Span::styled(palette.query.clone(), Style::default().fg(Color::White)),
            Span::styled("█", cursor_style),
        ])
    };
    let input = Paragraph::new(input_line)
        .block(Block::default().borders(Borders::BOTTOM).style(Style::default().fg(Color::Gray)));
    f.render_widget(input, chunks[0]);

    let results = palette.results();
    if results.is_empty() {
        let empty = Paragraph::new("No results found.").style(Style::default().fg(Color::DarkGray));
        f.render_widget(empty, chunks[1]);
        return;
    }

    let (rows, selected_row) = build_rows(&results, palette.selected);
    let list = List::new(rows)
        .style(Style::default().fg(Color::White))
        .highlight_style(
            Style::default()
                .fg(Color::Black)
                .bg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        );

    let mut state = ListState::default();
    state.select(selected_row);
    f.render_stateful_widget(list, chunks[1], &mut state);
}
