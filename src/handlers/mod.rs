//! Event Handlers
//!
//! This module contains handlers for terminal input:
//! - keyboard: Palette typing, paging keys, quit
//! - mouse: Drag gestures on the carousel
//!
//! Handlers take &mut App and dispatch to the orchestration methods in
//! src/app/.

pub mod keyboard;
pub mod mouse;
