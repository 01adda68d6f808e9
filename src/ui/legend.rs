use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Build hotkey spans (extracted for testability)
fn build_hotkey_spans(vim_mode: bool, palette_open: bool, on_home: bool) -> Vec<Span<'static>> {
    let key = |k: &'static str| Span::styled(k, Style::default().fg(Color::Yellow));

    if palette_open {
        return vec![
            key("↑/↓"),
            Span::raw(":Select  "),
            key("Enter"),
            Span::raw(":Go  "),
            key("Esc"),
            Span::raw(":Close"),
        ];
    }

    let mut spans = vec![];

    if on_home {
        let page_keys = if vim_mode { "h/l ←/→" } else { "←/→" };
        spans.extend(vec![
            key(page_keys),
            Span::raw(":Page  "),
            key("Drag"),
            Span::raw(":Swipe  "),
        ]);
    } else {
        spans.extend(vec![key("Esc"), Span::raw(":Back  ")]);
    }

    spans.extend(vec![
        key("^K /"),
        Span::raw(":Search  "),
        key("q"),
        Span::raw(":Quit"),
    ]);

    spans
}

/// Render the hotkey legend line
pub fn render_legend(f: &mut Frame, area: Rect, vim_mode: bool, palette_open: bool, on_home: bool) {
    let line = Line::from(build_hotkey_spans(vim_mode, palette_open, on_home));
    f.render_widget(Paragraph::new(line), area);
}
