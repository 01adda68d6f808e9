//! End-to-end carousel scenarios
//!
//! Nine reviews, three per page: a drag past the threshold turns exactly one
//! page, the slice always matches the page index, and the timestamps under
//! each card read the way a visitor expects.

use chrono::{DateTime, Duration, TimeZone, Utc};

use themedeck::logic::formatting::{format_relative_time, RelativeTimeStyle};
use themedeck::logic::gesture::Direction;
use themedeck::logic::pagination::{page_count, slice};
use themedeck::model::{CarouselModel, Record, Review};

const THRESHOLD: f64 = 50.0;

fn now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap()
}

fn review(n: usize) -> Review {
    Review {
        id: format!("r{}", n),
        github: format!("user{}", n),
        name: format!("User {}", n),
        country: "us".to_string(),
        date: now() - Duration::days(n as i64 + 2),
        body: format!("<p>Review number {}</p>", n),
    }
}

fn carousel(records: usize) -> CarouselModel<Review> {
    CarouselModel::new((0..records).map(review).collect(), 3, THRESHOLD, 100.0)
}

fn visible_ids(c: &CarouselModel<Review>) -> Vec<String> {
    c.visible().iter().map(|r| r.key().to_string()).collect()
}

#[test]
fn test_left_drag_advances_one_page() {
    let mut c = carousel(9);
    assert_eq!(c.page_count(), 3);
    assert_eq!(visible_ids(&c), vec!["r0", "r1", "r2"]);

    c.begin_drag();
    let change = c.drag_to(-2.0 * THRESHOLD).expect("should turn page");
    c.end_drag();

    assert_eq!(change.page, 1);
    assert_eq!(change.direction, Direction::Forward);
    assert_eq!(c.direction().sign(), 1);
    assert_eq!(visible_ids(&c), vec!["r3", "r4", "r5"]);
}

#[test]
fn test_two_gesture_scenario_returns_to_first_page() {
    let mut c = carousel(9);

    c.begin_drag();
    let first = c.drag_to(-2.0 * THRESHOLD);
    c.end_drag();

    // Second page (index 1), drag the other way
    c.begin_drag();
    let second = c.drag_to(2.0 * THRESHOLD);
    c.end_drag();

    let events: Vec<(usize, i64)> = [first, second]
        .into_iter()
        .flatten()
        .map(|change| (change.page, change.direction.sign()))
        .collect();
    assert_eq!(events, vec![(1, 1), (0, -1)]);
}

#[test]
fn test_right_drag_from_last_page_goes_back() {
    let mut c = carousel(9);
    c.swipe(Direction::Forward);
    c.swipe(Direction::Forward);
    assert_eq!(c.current_page(), 2);

    c.begin_drag();
    let change = c.drag_to(2.0 * THRESHOLD).expect("should turn page");
    c.end_drag();

    assert_eq!(change.page, 1);
    assert_eq!(change.direction.sign(), -1);
    assert_eq!(visible_ids(&c), vec!["r3", "r4", "r5"]);
}

#[test]
fn test_forward_from_last_page_wraps_to_first() {
    let mut c = carousel(9);
    for _ in 0..3 {
        c.swipe(Direction::Forward);
    }
    assert_eq!(c.current_page(), 0);
    assert_eq!(visible_ids(&c), vec!["r0", "r1", "r2"]);
}

#[test]
fn test_backward_from_first_page_wraps_to_last() {
    let mut c = carousel(7);
    let change = c.swipe(Direction::Backward).expect("should turn page");
    assert_eq!(change.page, 2);
    assert_eq!(visible_ids(&c), vec!["r6"]);
}

#[test]
fn test_seven_records_slice_properties() {
    let records: Vec<usize> = (0..7).collect();
    let pages = page_count(records.len(), 3);
    assert_eq!(pages, 3);

    let mut seen = Vec::new();
    for page in 0..pages {
        let s = slice(&records, 3, page);
        assert!(s.len() <= 3);
        assert!(!s.is_empty());
        seen.extend_from_slice(s);
    }
    // Every record appears exactly once, in order
    assert_eq!(seen, records);
    assert_eq!(slice(&records, 3, 2), &[6]);
}

#[test]
fn test_empty_carousel_has_one_empty_page() {
    let mut c = carousel(0);
    assert_eq!(c.page_count(), 1);
    assert!(c.visible().is_empty());

    let change = c.swipe(Direction::Forward).expect("wraps onto itself");
    assert_eq!(change.page, 0);
    assert!(c.visible().is_empty());
}

#[test]
fn test_relative_time_boundaries() {
    let t = now();
    assert_eq!(format_relative_time(t - Duration::hours(36), t), "2 days ago");
    assert_eq!(format_relative_time(t - Duration::hours(23), t), "23 hours ago");
    assert_eq!(format_relative_time(t - Duration::days(1), t), "24 hours ago");
    assert_eq!(format_relative_time(t + Duration::minutes(10), t), "in 10 minutes");
}

#[test]
fn test_visible_cards_carry_their_times() {
    let c = carousel(9);
    let cards = c.visible_with_times(now(), RelativeTimeStyle::Always);
    let times: Vec<&str> = cards.iter().map(|(_, when)| when.as_str()).collect();
    assert_eq!(times, vec!["2 days ago", "3 days ago", "4 days ago"]);
}
