//! App Orchestration Methods
//!
//! This module contains App implementation methods grouped by domain.
//! Each submodule orchestrates between:
//! - Model state (pure, in the library's `model`)
//! - Handlers (in src/handlers/)
//! - Logging of user-visible state changes
//!
//! Methods are kept as `impl App` but organized by functional domain
//! for better discoverability.

pub(crate) mod carousel;
pub(crate) mod palette;
