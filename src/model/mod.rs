//! Pure Application Model
//!
//! This module defines the pure, cloneable state for the application.
//! The Model is organized into focused sub-models:
//!
//! - **CarouselModel**: Reviews, current page, gesture guard, drag offset
//! - **PaletteModel**: Command palette query and selection
//! - **UiModel**: Route, preferences, quit flag
//!
//! No I/O lives here; the catalog is loaded before the model is built.

pub mod carousel;
pub mod palette;
pub mod review;
pub mod types;
pub mod ui;

pub use carousel::CarouselModel;
pub use palette::PaletteModel;
pub use review::{Record, Review, Theme};
pub use types::*;
pub use ui::UiModel;

use crate::catalog::Catalog;
use crate::logic::formatting::RelativeTimeStyle;

/// Settings the model needs from configuration
#[derive(Clone, Copy, Debug)]
pub struct ModelOptions {
    pub page_size: usize,
    pub threshold: f64,
    pub travel: f64,
    pub vim_mode: bool,
    pub relative_time: RelativeTimeStyle,
}

/// Root application model composed of focused sub-models
#[derive(Clone, Debug)]
pub struct Model {
    /// Themes from the catalog, in file order
    pub themes: Vec<Theme>,

    /// Testimonial carousel
    pub carousel: CarouselModel<Review>,

    /// Command palette
    pub palette: PaletteModel,

    /// Route and preferences
    pub ui: UiModel,
}

impl Model {
    /// Build the initial model from a loaded catalog
    pub fn new(catalog: Catalog, options: ModelOptions) -> Self {
        let theme_entries = catalog
            .themes
            .iter()
            .map(|t| PaletteEntry::theme(&t.slug, &t.title))
            .collect();

        Self {
            carousel: CarouselModel::new(
                catalog.reviews,
                options.page_size,
                options.threshold,
                options.travel,
            ),
            palette: PaletteModel::new(theme_entries),
            ui: UiModel::new(options.vim_mode, options.relative_time),
            themes: catalog.themes,
        }
    }

    /// Theme for the current route, if it is a theme detail view
    pub fn current_theme(&self) -> Option<&Theme> {
        match &self.ui.route {
            Route::Theme(slug) => self.themes.iter().find(|t| &t.slug == slug),
            _ => None,
        }
    }

    /// Navigate to `route`, closing the palette
    pub fn navigate(&mut self, route: Route) {
        self.ui.route = route;
        self.palette.close();
    }

    /// Navigate to the highlighted palette entry, if any
    pub fn activate_palette_selection(&mut self) -> Option<Route> {
        let route = self.palette.selected_entry()?.route.clone();
        self.navigate(route.clone());
        Some(route)
    }
}
