//! Carousel gestures
//!
//! Maps pointer positions onto the gesture lifecycle of the carousel.

use ratatui::layout::Position;
use tracing::debug;

use themedeck::logic::gesture::{offset_from_columns, Direction, PageChange};

use crate::App;

impl App {
    /// Whether paging input should reach the carousel right now
    fn carousel_accepts_input(&self) -> bool {
        self.model.ui.carousel_visible() && !self.model.palette.open
    }

    /// Pointer pressed; starts a gesture when it landed on the carousel
    pub fn begin_drag(&mut self, column: u16, row: u16) {
        if !self.carousel_accepts_input() {
            return;
        }
        let Some(area) = self.carousel_area else {
            return;
        };
        if !area.contains(Position::new(column, row)) {
            return;
        }

        self.drag_origin = Some(column);
        self.model.carousel.begin_drag();
    }

    /// Pointer moved while pressed
    pub fn drag_to(&mut self, column: u16) {
        let Some(origin) = self.drag_origin else {
            return;
        };

        let offset = offset_from_columns(origin, column, self.cell_width);
        if let Some(change) = self.model.carousel.drag_to(offset) {
            self.log_page_change(change, "drag");
        }
    }

    /// Pointer released
    pub fn end_drag(&mut self) {
        if self.drag_origin.take().is_some() {
            self.model.carousel.end_drag();
        }
    }

    /// Turn one page from the keyboard
    pub fn turn_page(&mut self, direction: Direction) {
        if !self.carousel_accepts_input() {
            return;
        }
        if let Some(change) = self.model.carousel.swipe(direction) {
            self.log_page_change(change, "key");
        }
    }

    fn log_page_change(&self, change: PageChange, source: &str) {
        debug!(
            page = change.page,
            pages = self.model.carousel.page_count(),
            direction = change.direction.sign(),
            source,
            "Page changed"
        );
    }
}
