//! belltray library - Terminal notification dropdown
//!
//! This library exposes the dropdown, its store and navigation seams, and the
//! host application so they can be tested and embedded.

pub mod app;
pub mod config;
pub mod dropdown;
pub mod error;
pub mod layout;
pub mod navigator;
pub mod notification;
pub mod pointer;
pub mod store;
pub mod theme;
pub mod time_format;
pub mod toast;
pub mod widgets;

#[cfg(test)]
pub mod test_utils;

// Re-export commonly used types for convenience
pub use app::App;
pub use config::Config;
pub use dropdown::DropdownController;
pub use error::StoreError;
pub use store::{JsonFileStore, NotificationStore};
