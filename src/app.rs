mod app_events;
mod app_render;
mod app_state;
mod mouse_click;

#[cfg(test)]
mod app_render_tests;

// Re-export public types
pub use app_state::{App, TaskOutcome};
