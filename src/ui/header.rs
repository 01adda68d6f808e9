use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use themedeck::model::Route;

/// Render the top bar: app name, current route, theme count, palette hint
pub fn render_header(f: &mut Frame, area: Rect, route: &Route, theme_count: usize) {
    let line = Line::from(vec![
        Span::styled(
            "themedeck",
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" │ "),
        Span::styled(route.path(), Style::default().fg(Color::Cyan)),
        Span::raw(" │ "),
        Span::raw(format!("{} themes", theme_count)),
        Span::raw(" │ "),
        Span::styled("^K", Style::default().fg(Color::Yellow)),
        Span::raw(" Search"),
    ]);

    let block = Block::default()
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Gray));

    f.render_widget(Paragraph::new(line).block(block), area);
}
