//! Mouse Input Handler
//!
//! Left-button down/drag/up on the carousel is one gesture.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::App;

/// Handle mouse input
pub fn handle_mouse(app: &mut App, mouse: MouseEvent) {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => app.begin_drag(mouse.column, mouse.row),
        MouseEventKind::Drag(MouseButton::Left) => app.drag_to(mouse.column),
        MouseEventKind::Up(MouseButton::Left) => app.end_drag(),
        _ => {}
    }
}
