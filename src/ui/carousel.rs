//! Testimonial Carousel UI
//!
//! Renders the current page of reviews as side-by-side cards. While a drag
//! is in progress the whole row of cards follows the pointer.

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame,
};

use themedeck::logic::text::{strip_html, truncate_to_width};
use themedeck::model::Review;

use super::layout::shift_within;

/// Render review cards
///
/// # Arguments
/// - `f`: Ratatui frame
/// - `area`: Content area for the carousel
/// - `cards`: Visible reviews with their formatted relative times
/// - `page_size`: Number of card slots per page (short pages leave gaps)
/// - `shift`: Horizontal shift in columns from the current drag
pub fn render_carousel(
    f: &mut Frame,
    area: Rect,
    cards: &[(&Review, String)],
    page_size: usize,
    shift: i32,
) {
    if cards.is_empty() {
        let empty = Paragraph::new("No reviews yet.")
            .alignment(Alignment::Center)
            .style(Style::default().fg(Color::DarkGray))
            .block(Block::default().borders(Borders::ALL).title(" Reviews "));
        f.render_widget(empty, area);
        return;
    }

    let slots = page_size.max(1) as u32;
    let constraints: Vec<Constraint> = (0..slots).map(|_| Constraint::Ratio(1, slots)).collect();
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area);

    for ((review, when), column) in cards.iter().zip(columns.iter()) {
        if let Some(card_area) = shift_within(*column, shift, area) {
            render_card(f, card_area, review, when);
        }
    }
}

fn render_card(f: &mut Frame, area: Rect, review: &Review, when: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Magenta))
        .title(Span::styled(
            format!(" {} ", review.name),
            Style::default().add_modifier(Modifier::BOLD),
        ));
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(1), Constraint::Length(1)])
        .split(inner);

    let body = Paragraph::new(strip_html(&review.body)).wrap(Wrap { trim: true });
    f.render_widget(body, rows[0]);

    let author = if review.country.is_empty() {
        format!("@{}", review.github)
    } else {
        format!("@{} · {}", review.github, review.country.to_uppercase())
    };
    let width = rows[1].width as usize;
    let author_width = width.saturating_sub(when.chars().count() + 1);

    let footer = Line::from(vec![
        Span::styled(
            format!("{:<w$}", truncate_to_width(&author, author_width), w = author_width),
            Style::default().fg(Color::Cyan),
        ),
        Span::raw(" "),
        Span::styled(when.to_string(), Style::default().fg(Color::DarkGray)),
    ]);
    f.render_widget(Paragraph::new(footer), rows[1]);
}
