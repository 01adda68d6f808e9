// UI module - handles all TUI rendering using Ratatui
//
// Architecture:
// - layout: Calculates screen layout (header, content, legend, status)
// - render: Main orchestration function that coordinates all rendering
// - header: Top bar (title, route, theme count, palette hint)
// - carousel: Review cards for the current page, shifted while dragging
// - page: Theme detail and static page views
// - palette: Command palette overlay
// - legend: Hotkey legend
// - status_bar: Page indicator and last page-turn direction

pub mod carousel;
pub mod header;
pub mod layout;
pub mod legend;
pub mod page;
pub mod palette;
pub mod render;
pub mod status_bar;

// Re-export main render function for convenience
pub use render::render;
