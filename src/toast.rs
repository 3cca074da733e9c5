//! Toast module for belltray
//!
//! Transient status messages shown over the UI: action results, store
//! failures and configuration warnings.

mod toast_render;
mod toast_state;

pub use toast_render::render_toast;
pub use toast_state::{Toast, ToastKind, ToastState};
