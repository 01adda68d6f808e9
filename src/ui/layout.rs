use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Layout information for rendering
pub struct LayoutInfo {
    /// Top title bar area
    pub header_area: Rect,
    /// Carousel or page view
    pub content_area: Rect,
    /// Hotkey legend (one line)
    pub legend_area: Rect,
    /// Bottom status bar area
    pub status_area: Rect,
}

/// Calculate the screen layout for all UI components
pub fn calculate_layout(terminal_size: Rect) -> LayoutInfo {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header (top border, text, bottom border)
            Constraint::Min(5),    // Content area
            Constraint::Length(1), // Legend
            Constraint::Length(1), // Status bar
        ])
        .split(terminal_size);

    LayoutInfo {
        header_area: chunks[0],
        content_area: chunks[1],
        legend_area: chunks[2],
        status_area: chunks[3],
    }
}

/// Centered rectangle for overlays, `percent_x` wide and at most `max_height` tall
pub fn centered_rect(area: Rect, percent_x: u16, max_height: u16) -> Rect {
    let width = (area.width as u32 * percent_x.min(100) as u32 / 100) as u16;
    let height = max_height.min(area.height.saturating_sub(2));

    Rect {
        x: area.x + (area.width.saturating_sub(width)) / 2,
        y: area.y + (area.height.saturating_sub(height)) / 3,
        width,
        height,
    }
}

/// Move `rect` horizontally by `shift` columns and clip it to `bounds`
///
/// Returns `None` when nothing of it stays visible.
pub fn shift_within(rect: Rect, shift: i32, bounds: Rect) -> Option<Rect> {
    let left = (rect.x as i32 + shift).max(bounds.x as i32);
    let right = (rect.x as i32 + rect.width as i32 + shift).min(bounds.right() as i32);
    if right <= left {
        return None;
    }

    Some(Rect {
        x: left as u16,
        y: rect.y,
        width: (right - left) as u16,
        height: rect.height,
    })
}
