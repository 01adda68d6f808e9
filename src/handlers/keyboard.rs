//! Keyboard Input Handler
//!
//! The palette captures all typing while open; otherwise keys page the
//! carousel, leave the current view, or quit.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use themedeck::logic::gesture::Direction;
use themedeck::logic::search::is_palette_toggle;

use crate::App;

/// Handle keyboard input
pub fn handle_key(app: &mut App, key: KeyEvent) {
    // Some terminals also report releases; act on presses only
    if key.kind == KeyEventKind::Release {
        return;
    }

    // Ctrl-K / Cmd-K works everywhere
    if is_palette_toggle(&key) {
        app.toggle_palette();
        return;
    }

    if app.model.palette.open {
        handle_palette_key(app, key);
        return;
    }

    let vim = app.model.ui.vim_mode;

    match key.code {
        KeyCode::Char('q') => app.model.ui.should_quit = true,
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.model.ui.should_quit = true
        }
        KeyCode::Char('/') => app.toggle_palette(),
        KeyCode::Esc => app.go_home(),
        KeyCode::Left => app.turn_page(Direction::Backward),
        KeyCode::Right => app.turn_page(Direction::Forward),
        KeyCode::Char('h') if vim => app.turn_page(Direction::Backward),
        KeyCode::Char('l') if vim => app.turn_page(Direction::Forward),
        _ => {}
    }
}

fn handle_palette_key(app: &mut App, key: KeyEvent) {
    let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

    match key.code {
        KeyCode::Esc => app.toggle_palette(),
        KeyCode::Enter => app.activate_palette_selection(),
        KeyCode::Up => app.model.palette.move_selection(-1),
        KeyCode::Down | KeyCode::Tab => app.model.palette.move_selection(1),
        KeyCode::Char('p') if ctrl => app.model.palette.move_selection(-1),
        KeyCode::Char('n') if ctrl => app.model.palette.move_selection(1),
        KeyCode::Backspace => app.model.palette.pop_char(),
        KeyCode::Char(c) if !ctrl => app.model.palette.push_char(c),
        _ => {}
    }
}
