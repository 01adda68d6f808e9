//! Theme catalog TUI library
//!
//! Exposes the catalog model, pagination and gesture logic for the binary
//! and for testing.

pub mod catalog;
pub mod config;
pub mod logic;
pub mod model;
