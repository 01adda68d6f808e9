//! Business Logic
//!
//! This module contains pure business logic functions that can be unit tested:
//! - clock: Injectable source of "now"
//! - formatting: Relative timestamps ("3 days ago")
//! - gesture: Drag gesture state machine for page turns
//! - navigation: Circular index arithmetic
//! - pagination: Fixed-size page slicing
//! - search: Command palette filtering and hotkey
//! - text: HTML stripping and width-aware truncation

pub mod clock;
pub mod formatting;
pub mod gesture;
pub mod navigation;
pub mod pagination;
pub mod search;
pub mod text;
