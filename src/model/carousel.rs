//! Carousel Model
//!
//! Ties the pagination pieces together for one carousel: the ordered
//! records, the page navigator, and the presentation drag offset.

use chrono::{DateTime, Utc};

use super::review::Record;
use crate::logic::formatting::{format_relative_time_with, RelativeTimeStyle};
use crate::logic::gesture::{Direction, GestureNavigator, PageChange};
use crate::logic::pagination;

/// Default number of records per page
pub const DEFAULT_PAGE_SIZE: usize = 3;

/// Paginated, gesture-driven view over a record collection
#[derive(Clone, Debug)]
pub struct CarouselModel<R> {
    records: Vec<R>,
    page_size: usize,
    navigator: GestureNavigator,

    /// Horizontal offset of the slide while a drag is in progress,
    /// clamped to `±travel`. Purely presentational.
    pub drag_offset: f64,

    /// Maximum visual slide distance
    pub travel: f64,
}

impl<R: Record> CarouselModel<R> {
    /// Create a carousel showing the first page
    pub fn new(records: Vec<R>, page_size: usize, threshold: f64, travel: f64) -> Self {
        let page_size = page_size.max(1);
        let pages = pagination::page_count(records.len(), page_size);

        Self {
            records,
            page_size,
            navigator: GestureNavigator::new(pages, threshold),
            drag_offset: 0.0,
            travel,
        }
    }

    pub fn records(&self) -> &[R] {
        &self.records
    }

    pub fn page_size(&self) -> usize {
        self.page_size
    }

    pub fn current_page(&self) -> usize {
        self.navigator.current_page()
    }

    pub fn page_count(&self) -> usize {
        self.navigator.page_count()
    }

    /// Direction of the last page turn
    pub fn direction(&self) -> Direction {
        self.navigator.direction()
    }

    /// Records on the current page
    pub fn visible(&self) -> &[R] {
        pagination::slice(&self.records, self.page_size, self.current_page())
    }

    /// Visible records paired with their relative timestamps
    pub fn visible_with_times(
        &self,
        now: DateTime<Utc>,
        style: RelativeTimeStyle,
    ) -> Vec<(&R, String)> {
        self.visible()
            .iter()
            .map(|record| (record, format_relative_time_with(style, record.timestamp(), now)))
            .collect()
    }

    /// Replace the records, keeping the page index in range
    pub fn set_records(&mut self, records: Vec<R>) {
        self.records = records;
        self.navigator
            .set_page_count(pagination::page_count(self.records.len(), self.page_size));
    }

    /// Pointer went down on the carousel
    pub fn begin_drag(&mut self) {
        self.navigator.on_gesture_start();
        self.drag_offset = 0.0;
    }

    /// Pointer moved; `offset` is cumulative since `begin_drag`
    pub fn drag_to(&mut self, offset: f64) -> Option<PageChange> {
        if offset.is_finite() {
            let limit = self.travel.abs();
            // f64::clamp panics on a NaN bound
            self.drag_offset = if limit.is_nan() {
                offset
            } else {
                offset.clamp(-limit, limit)
            };
        }
        self.navigator.on_gesture_progress(offset)
    }

    /// Pointer released
    pub fn end_drag(&mut self) {
        self.navigator.on_gesture_end();
        self.drag_offset = 0.0;
    }

    /// Turn one page as if swiped (keyboard paging)
    pub fn swipe(&mut self, direction: Direction) -> Option<PageChange> {
        self.drag_offset = 0.0;
        self.navigator.swipe(direction)
    }
}
