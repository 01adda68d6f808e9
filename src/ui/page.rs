use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use themedeck::model::Theme;

/// Render the detail view for one theme
pub fn render_theme(f: &mut Frame, area: Rect, theme: &Theme) {
    let mut lines = vec![
        Line::from(Span::styled(
            theme.title.clone(),
            Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
    ];

    if theme.description.is_empty() {
        lines.push(Line::from(Span::styled(
            "No description.",
            Style::default().fg(Color::DarkGray),
        )));
    } else {
        lines.push(Line::from(theme.description.clone()));
    }

    let block = Block::default()
        .borders(Borders::ALL)
        .title(format!(" {} ", theme.slug));
    f.render_widget(Paragraph::new(lines).block(block).wrap(Wrap { trim: true }), area);
}

/// Render a static site page, or an unknown theme slug
pub fn render_page(f: &mut Frame, area: Rect, slug: &str) {
    let lines = vec![
        Line::from(Span::styled(
            format!("/{}", slug),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Press Esc to return to the catalog.",
            Style::default().fg(Color::DarkGray),
        )),
    ];

    let block = Block::default().borders(Borders::ALL).title(format!(" {} ", slug));
    f.render_widget(Paragraph::new(lines).block(block), area);
}
