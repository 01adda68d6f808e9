use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use themedeck::logic::gesture::Direction;

/// One dot per page, the current one filled
fn page_dots(current: usize, count: usize) -> String {
    (0..count)
        .map(|i| if i == current { "●" } else { "○" })
        .collect::<Vec<_>>()
        .join(" ")
}

fn direction_arrow(direction: Direction) -> &'static str {
    match direction {
        Direction::Forward => "▶",
        Direction::Backward => "◀",
    }
}

/// Render the bottom status bar with the page indicator
pub fn render_status_bar(
    f: &mut Frame,
    area: Rect,
    current_page: usize,
    page_count: usize,
    direction: Direction,
    review_count: usize,
    dragging: bool,
) {
    let mut spans = vec![
        Span::styled(
            format!(" Page {}/{} ", current_page + 1, page_count),
            Style::default().fg(Color::Black).bg(Color::Magenta),
        ),
        Span::raw("  "),
        Span::styled(page_dots(current_page, page_count), Style::default().fg(Color::Magenta)),
        Span::raw("  "),
        Span::styled(direction_arrow(direction), Style::default().fg(Color::Yellow)),
        Span::raw(format!("  {} reviews", review_count)),
    ];

    if dragging {
        spans.push(Span::styled("  dragging…", Style::default().fg(Color::DarkGray)));
    }

    f.render_widget(Paragraph::new(Line::from(spans)), area);
}
