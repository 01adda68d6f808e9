//! Command Palette Model
//!
//! Open/closed state, the typed query and the highlighted result.

use super::types::{static_entries, PaletteEntry};
use crate::logic::navigation::step_selection;
use crate::logic::search::filter_entries;

/// Command palette state
#[derive(Clone, Debug)]
pub struct PaletteModel {
    /// Whether the palette overlay is showing
    pub open: bool,

    /// Current search query
    pub query: String,

    /// Index into `results()`
    pub selected: Option<usize>,

    /// Every entry the palette can show, themes first
    entries: Vec<PaletteEntry>,

    theme_count: usize,
}

impl PaletteModel {
    /// Build a closed palette from theme entries plus the static pages
    pub fn new(themes: Vec<PaletteEntry>) -> Self {
        let theme_count = themes.len();
        let mut entries = themes;
        entries.extend(static_entries());

        let mut model = Self {
            open: false,
            query: String::new(),
            selected: None,
            entries,
            theme_count,
        };
        model.reset_selection();
        model
    }

    /// Number of themes, for the "Search N themes" placeholder
    pub fn theme_count(&self) -> usize {
        self.theme_count
    }

    /// Entries matching the current query, in display order
    pub fn results(&self) -> Vec<&PaletteEntry> {
        filter_entries(&self.entries, &self.query)
    }

    pub fn selected_entry(&self) -> Option<&PaletteEntry> {
        self.selected
            .and_then(|idx| self.results().get(idx).copied())
    }

    pub fn toggle(&mut self) {
        if self.open {
            self.close();
        } else {
            self.open = true;
        }
    }

    /// Close and clear the query
    pub fn close(&mut self) {
        self.open = false;
        self.query.clear();
        self.reset_selection();
    }

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.reset_selection();
    }

    pub fn pop_char(&mut self) {
        self.query.pop();
        self.reset_selection();
    }

    /// Move the highlight by `delta`, wrapping at either end
    pub fn move_selection(&mut self, delta: i64) {
        self.selected = step_selection(self.selected, self.results().len(), delta);
    }

    fn reset_selection(&mut self) {
        self.selected = if self.results().is_empty() { None } else { Some(0) };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::types::Route;

    fn palette() -> PaletteModel {
        PaletteModel::new(vec![
            PaletteEntry::theme("vim", "Vim"),
            PaletteEntry::theme("iterm", "iTerm"),
            PaletteEntry::theme("visual-studio", "Visual Studio"),
        ])
    }

    #[test]
    fn test_palette_starts_closed() {
        let p = palette();
        assert!(!p.open);
        assert!(p.query.is_empty());
        assert_eq!(p.theme_count(), 3);
    }

    #[test]
    fn test_empty_query_lists_pages_only() {
        let p = palette();
        let results = p.results();
        assert_eq!(results[0].title, "Browse themes");
        assert_eq!(p.selected_entry().map(|e| e.route.clone()), Some(Route::Home));
    }

    #[test]
    fn test_typing_filters_and_resets_selection() {
        let mut p = palette();
        p.toggle();
        p.move_selection(1);
        for c in "vi".chars() {
            p.push_char(c);
        }
        let titles: Vec<&str> = p.results().iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Vim", "Visual Studio"]);
        assert_eq!(p.selected, Some(0));
    }

    #[test]
    fn test_selection_wraps() {
        let mut p = palette();
        p.push_char('v');
        // Vim, Visual Studio
        p.move_selection(-1);
        assert_eq!(p.selected_entry().map(|e| e.title.as_str()), Some("Visual Studio"));
        p.move_selection(1);
        assert_eq!(p.selected_entry().map(|e| e.title.as_str()), Some("Vim"));
    }

    #[test]
    fn test_no_results_clears_selection() {
        let mut p = palette();
        p.push_char('z');
        p.push_char('z');
        assert!(p.results().is_empty());
        assert!(p.selected.is_none());
        p.move_selection(1);
        assert!(p.selected_entry().is_none());
    }

    #[test]
    fn test_close_clears_query() {
        let mut p = palette();
        p.toggle();
        p.push_char('x');
        p.toggle();
        assert!(!p.open);
        assert!(p.query.is_empty());
    }

    #[test]
    fn test_backspace() {
        let mut p = palette();
        p.push_char('v');
        p.push_char('z');
        assert!(p.results().is_empty());
        p.pop_char();
        assert_eq!(p.results().len(), 2);
    }
}
