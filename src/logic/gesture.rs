//! Drag gesture interpretation
//!
//! Turns a continuous drag (a stream of cumulative horizontal offsets) into
//! at most one discrete page turn per gesture.
//!
//! Each gesture moves through three phases:
//!
//! ```text
//!            start                qualifying progress
//!   Idle ───────────▶ Armed ───────────────────────────▶ Fired
//!    ▲                  │ ▲                                │
//!    │       end        │ │             start              │
//!    └──────────────────┘ └────────────────────────────────┤
//!    ▲                              end                    │
//!    └─────────────────────────────────────────────────────┘
//! ```
//!
//! Progress samples arrive at pointer-move frequency. Once a page turn has
//! fired, the rest of that gesture is ignored until the next start, however
//! far the pointer keeps travelling.

use super::navigation::wrap_index;

/// Direction of the most recent page turn
///
/// `Forward` is a drag to the left (next page, sign +1), `Backward` a drag
/// to the right (previous page, sign -1).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

impl Direction {
    /// Signed value: +1 for forward, -1 for backward
    pub fn sign(self) -> i64 {
        match self {
            Direction::Forward => 1,
            Direction::Backward => -1,
        }
    }
}

/// Where the current gesture is in its lifecycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GesturePhase {
    /// No gesture in progress
    Idle,
    /// Gesture started, no page turn yet
    Armed,
    /// Page turn already emitted for this gesture
    Fired,
}

/// Gesture lifecycle input
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GestureEvent {
    Start,
    /// Cumulative offset since the gesture started
    Progress(f64),
    End,
}

/// Emitted when a gesture turns the page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageChange {
    /// New page index, already wrapped into range
    pub page: usize,
    pub direction: Direction,
}

/// Direction proposed by a single offset sample, if it crosses the threshold
///
/// Both bounds are inclusive: an offset of exactly `-threshold` or
/// `+threshold` counts. A NaN offset never crosses.
pub fn proposed_direction(offset: f64, threshold: f64) -> Option<Direction> {
    if offset <= -threshold {
        Some(Direction::Forward)
    } else if offset >= threshold {
        Some(Direction::Backward)
    } else {
        None
    }
}

/// Cumulative drag offset for a pointer that went down at `origin_column`
/// and is now at `column`
///
/// Negative when the pointer moved left.
pub fn offset_from_columns(origin_column: u16, column: u16, cell_width: f64) -> f64 {
    (column as f64 - origin_column as f64) * cell_width
}

/// Pure phase transition
///
/// Returns the next phase and, when a page turn should happen, its
/// direction. Page arithmetic is left to the caller.
pub fn transition(
    phase: GesturePhase,
    event: GestureEvent,
    threshold: f64,
) -> (GesturePhase, Option<Direction>) {
    match (phase, event) {
        (_, GestureEvent::Start) => (GesturePhase::Armed, None),
        (_, GestureEvent::End) => (GesturePhase::Idle, None),
        (GesturePhase::Armed, GestureEvent::Progress(offset)) => {
            match proposed_direction(offset, threshold) {
                Some(direction) => (GesturePhase::Fired, Some(direction)),
                None => (GesturePhase::Armed, None),
            }
        }
        // Fired: guard holds until the next start. Idle: no gesture to interpret.
        (phase, GestureEvent::Progress(_)) => (phase, None),
    }
}

/// Page-index state for one carousel
///
/// Owns the current page, the direction of the last turn and the gesture
/// guard. One instance per carousel; nothing is shared.
#[derive(Debug, Clone, PartialEq)]
pub struct GestureNavigator {
    current_page: usize,
    page_count: usize,
    direction: Direction,
    phase: GesturePhase,
    threshold: f64,
}

impl GestureNavigator {
    /// Create a navigator on page 0
    ///
    /// `page_count` is raised to at least 1. `threshold` is the offset
    /// magnitude a drag must reach to turn the page.
    pub fn new(page_count: usize, threshold: f64) -> Self {
        Self {
            current_page: 0,
            page_count: page_count.max(1),
            direction: Direction::Forward,
            phase: GesturePhase::Idle,
            threshold,
        }
    }

    pub fn current_page(&self) -> usize {
        self.current_page
    }

    pub fn page_count(&self) -> usize {
        self.page_count
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn phase(&self) -> GesturePhase {
        self.phase
    }

    /// Whether the current gesture has already turned the page
    pub fn has_transitioned(&self) -> bool {
        self.phase == GesturePhase::Fired
    }

    /// Update the page count after the underlying collection changed
    ///
    /// The current page is wrapped into the new range.
    pub fn set_page_count(&mut self, page_count: usize) {
        self.page_count = page_count.max(1);
        self.current_page = wrap_index(self.current_page as i64, self.page_count);
    }

    /// Begin a new gesture, clearing the guard
    ///
    /// Calling this twice in a row simply re-arms.
    pub fn on_gesture_start(&mut self) {
        self.apply(GestureEvent::Start);
    }

    /// Feed one cumulative offset sample
    ///
    /// Returns the page change when this sample is the first in the current
    /// gesture to cross the threshold.
    pub fn on_gesture_progress(&mut self, offset: f64) -> Option<PageChange> {
        self.apply(GestureEvent::Progress(offset))
    }

    /// Close the gesture lifecycle
    ///
    /// Never changes the page and never re-enables turning; only the next
    /// start does that.
    pub fn on_gesture_end(&mut self) {
        self.apply(GestureEvent::End);
    }

    /// Apply any lifecycle event
    pub fn apply(&mut self, event: GestureEvent) -> Option<PageChange> {
        let (phase, turn) = transition(self.phase, event, self.threshold);
        self.phase = phase;

        let direction = turn?;
        let page = wrap_index(
            self.current_page as i64 + direction.sign(),
            self.page_count,
        );
        self.current_page = page;
        self.direction = direction;

        Some(PageChange { page, direction })
    }

    /// Run one complete synthetic gesture in `direction`
    ///
    /// Used for keyboard paging so a key press behaves exactly like a swipe.
    pub fn swipe(&mut self, direction: Direction) -> Option<PageChange> {
        // Forward is a leftward drag, i.e. a negative offset
        let offset = -(direction.sign() as f64) * self.threshold * 2.0;

        self.on_gesture_start();
        let change = self.on_gesture_progress(offset);
        self.on_gesture_end();
        change
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const THRESHOLD: f64 = 50.0;

    #[test]
    fn test_proposed_direction_threshold_is_inclusive() {
        assert_eq!(proposed_direction(-50.0, THRESHOLD), Some(Direction::Forward));
        assert_eq!(proposed_direction(50.0, THRESHOLD), Some(Direction::Backward));
    }

    #[test]
    fn test_proposed_direction_below_threshold() {
        assert_eq!(proposed_direction(0.0, THRESHOLD), None);
        assert_eq!(proposed_direction(49.999, THRESHOLD), None);
        assert_eq!(proposed_direction(-49.999, THRESHOLD), None);
    }

    #[test]
    fn test_proposed_direction_nan_never_crosses() {
        assert_eq!(proposed_direction(f64::NAN, THRESHOLD), None);
    }

    #[test]
    fn test_offset_from_columns() {
        assert_eq!(offset_from_columns(40, 33, 8.0), -56.0);
        assert_eq!(offset_from_columns(10, 17, 8.0), 56.0);
        assert_eq!(offset_from_columns(5, 5, 8.0), 0.0);
    }

    #[test]
    fn test_transition_start_always_arms() {
        for phase in [GesturePhase::Idle, GesturePhase::Armed, GesturePhase::Fired] {
            assert_eq!(
                transition(phase, GestureEvent::Start, THRESHOLD),
                (GesturePhase::Armed, None)
            );
        }
    }

    #[test]
    fn test_transition_end_always_idles() {
        for phase in [GesturePhase::Idle, GesturePhase::Armed, GesturePhase::Fired] {
            assert_eq!(
                transition(phase, GestureEvent::End, THRESHOLD),
                (GesturePhase::Idle, None)
            );
        }
    }

    #[test]
    fn test_transition_armed_fires_on_qualifying_sample() {
        assert_eq!(
            transition(GesturePhase::Armed, GestureEvent::Progress(-60.0), THRESHOLD),
            (GesturePhase::Fired, Some(Direction::Forward))
        );
        assert_eq!(
            transition(GesturePhase::Armed, GestureEvent::Progress(10.0), THRESHOLD),
            (GesturePhase::Armed, None)
        );
    }

    #[test]
    fn test_transition_fired_suppresses_progress() {
        assert_eq!(
            transition(GesturePhase::Fired, GestureEvent::Progress(-500.0), THRESHOLD),
            (GesturePhase::Fired, None)
        );
    }

    #[test]
    fn test_transition_idle_ignores_progress() {
        assert_eq!(
            transition(GesturePhase::Idle, GestureEvent::Progress(-500.0), THRESHOLD),
            (GesturePhase::Idle, None)
        );
    }

    #[test]
    fn test_navigator_creation() {
        let nav = GestureNavigator::new(3, THRESHOLD);
        assert_eq!(nav.current_page(), 0);
        assert_eq!(nav.page_count(), 3);
        assert_eq!(nav.phase(), GesturePhase::Idle);
        assert!(!nav.has_transitioned());
    }

    #[test]
    fn test_navigator_zero_pages_raised_to_one() {
        let nav = GestureNavigator::new(0, THRESHOLD);
        assert_eq!(nav.page_count(), 1);
    }

    #[test]
    fn test_drag_left_advances() {
        let mut nav = GestureNavigator::new(3, THRESHOLD);
        nav.on_gesture_start();
        let change = nav.on_gesture_progress(-THRESHOLD);
        assert_eq!(
            change,
            Some(PageChange { page: 1, direction: Direction::Forward })
        );
        assert_eq!(nav.current_page(), 1);
        assert_eq!(nav.direction().sign(), 1);
        assert!(nav.has_transitioned());
    }

    #[test]
    fn test_drag_right_goes_back_and_wraps() {
        let mut nav = GestureNavigator::new(3, THRESHOLD);
        nav.on_gesture_start();
        let change = nav.on_gesture_progress(THRESHOLD);
        assert_eq!(
            change,
            Some(PageChange { page: 2, direction: Direction::Backward })
        );
        assert_eq!(nav.direction().sign(), -1);
    }

    #[test]
    fn test_at_most_one_transition_per_gesture() {
        let mut nav = GestureNavigator::new(5, THRESHOLD);
        nav.on_gesture_start();

        let emitted: Vec<PageChange> = [-10.0, -55.0, -80.0, -200.0, 90.0, -400.0]
            .into_iter()
            .filter_map(|offset| nav.on_gesture_progress(offset))
            .collect();

        assert_eq!(emitted.len(), 1);
        assert_eq!(nav.current_page(), 1);
    }

    #[test]
    fn test_end_does_not_rearm() {
        let mut nav = GestureNavigator::new(3, THRESHOLD);
        nav.on_gesture_start();
        assert!(nav.on_gesture_progress(-THRESHOLD).is_some());
        nav.on_gesture_end();

        // Late samples after end are ignored
        assert!(nav.on_gesture_progress(-THRESHOLD * 3.0).is_none());
        assert_eq!(nav.current_page(), 1);
    }

    #[test]
    fn test_abandoned_gesture_leaves_page_unchanged() {
        let mut nav = GestureNavigator::new(3, THRESHOLD);
        nav.on_gesture_start();
        assert!(nav.on_gesture_progress(-THRESHOLD / 2.0).is_none());
        nav.on_gesture_end();

        assert_eq!(nav.current_page(), 0);
        assert!(!nav.has_transitioned());

        // Next gesture still works
        nav.on_gesture_start();
        assert!(nav.on_gesture_progress(-THRESHOLD).is_some());
        assert_eq!(nav.current_page(), 1);
    }

    #[test]
    fn test_double_start_rearms() {
        let mut nav = GestureNavigator::new(3, THRESHOLD);
        nav.on_gesture_start();
        assert!(nav.on_gesture_progress(-THRESHOLD).is_some());
        nav.on_gesture_start();
        nav.on_gesture_start();
        assert_eq!(nav.phase(), GesturePhase::Armed);
        assert!(nav.on_gesture_progress(-THRESHOLD).is_some());
        assert_eq!(nav.current_page(), 2);
    }

    #[test]
    fn test_single_page_wraps_to_itself() {
        let mut nav = GestureNavigator::new(1, THRESHOLD);
        assert_eq!(nav.swipe(Direction::Forward).map(|c| c.page), Some(0));
        assert_eq!(nav.swipe(Direction::Backward).map(|c| c.page), Some(0));
    }

    #[test]
    fn test_swipe_is_one_full_gesture() {
        let mut nav = GestureNavigator::new(4, THRESHOLD);
        assert_eq!(
            nav.swipe(Direction::Backward),
            Some(PageChange { page: 3, direction: Direction::Backward })
        );
        assert_eq!(nav.phase(), GesturePhase::Idle);
        assert_eq!(
            nav.swipe(Direction::Forward),
            Some(PageChange { page: 0, direction: Direction::Forward })
        );
    }

    #[test]
    fn test_set_page_count_rewraps_current_page() {
        let mut nav = GestureNavigator::new(5, THRESHOLD);
        nav.swipe(Direction::Backward); // page 4
        nav.set_page_count(3);
        assert_eq!(nav.current_page(), 1);
        nav.set_page_count(0);
        assert_eq!(nav.page_count(), 1);
        assert_eq!(nav.current_page(), 0);
    }
}
