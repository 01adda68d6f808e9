use tracing::debug;

use themedeck::model::Route;

use crate::App;

impl App {
    pub fn toggle_palette(&mut self) {
        // A drag interrupted by the palette would otherwise never end
        self.end_drag();
        self.model.palette.toggle();
    }

    /// Navigate to the highlighted palette entry
    pub fn activate_palette_selection(&mut self) {
        if let Some(route) = self.model.activate_palette_selection() {
            debug!("Palette navigation to {}", route.path());
        }
    }

    /// Leave a theme or page view
    pub fn go_home(&mut self) {
        if self.model.ui.route != Route::Home {
            self.model.navigate(Route::Home);
        }
    }
}
