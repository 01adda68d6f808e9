//! Search Logic
//!
//! Pure functions for the command palette: title matching, entry filtering
//! and the global toggle hotkey.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::types::{PaletteEntry, PaletteGroup};

/// Match a search query against an entry title
///
/// # Rules
/// - Case-insensitive substring match
/// - Empty query matches everything
///
/// # Examples
/// ```
/// use themedeck::logic::search::search_matches;
///
/// assert!(search_matches("", "Visual Studio Code"));
/// assert!(search_matches("studio", "Visual Studio Code"));
/// assert!(search_matches("VIM", "Vim"));
/// assert!(!search_matches("emacs", "Vim"));
/// ```
pub fn search_matches(query: &str, title: &str) -> bool {
    if query.is_empty() {
        return true;
    }

    title.to_lowercase().contains(&query.to_lowercase())
}

/// Filter palette entries by query
///
/// Theme entries are only listed once the user has typed something; page
/// entries are always candidates. Order is preserved.
pub fn filter_entries<'a>(entries: &'a [PaletteEntry], query: &str) -> Vec<&'a PaletteEntry> {
    entries
        .iter()
        .filter(|entry| entry.group != PaletteGroup::Themes || !query.is_empty())
        .filter(|entry| search_matches(query, &entry.title))
        .collect()
}

/// Whether a key event toggles the palette (Ctrl+K or Super/Cmd+K)
pub fn is_palette_toggle(key: &KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('k') | KeyCode::Char('K'))
        && key
            .modifiers
            .intersects(KeyModifiers::CONTROL | KeyModifiers::SUPER)
}
