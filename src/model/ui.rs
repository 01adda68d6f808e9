//! UI Model
//!
//! This sub-model contains all state related to the user interface:
//! the current route, preferences, and the quit flag.

use super::types::Route;
use crate::logic::formatting::RelativeTimeStyle;

/// UI preferences and navigation
#[derive(Clone, Debug)]
pub struct UiModel {
    /// Screen currently showing
    pub route: Route,

    /// Whether vim keybindings are enabled
    pub vim_mode: bool,

    /// Phrasing of review timestamps
    pub relative_time: RelativeTimeStyle,

    /// Whether app should quit
    pub should_quit: bool,
}

impl UiModel {
    pub fn new(vim_mode: bool, relative_time: RelativeTimeStyle) -> Self {
        Self {
            route: Route::Home,
            vim_mode,
            relative_time,
            should_quit: false,
        }
    }

    /// Whether the carousel is on screen and should receive paging input
    pub fn carousel_visible(&self) -> bool {
        self.route == Route::Home
    }
}
