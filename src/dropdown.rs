//! Notification dropdown
//!
//! The trigger with its unread badge, the panel listing notifications, and
//! the controller that routes clicks into store actions and navigation.

mod actions;
mod click_event;
mod controller;
pub mod render;
mod view;

pub use actions::{Action, ActionMediator};
pub use click_event::{ClickEvent, dispatch_click};
pub use controller::{ClickEffect, DropdownController, DropdownSnapshot, RowActivation, Visibility};
pub use view::{DropdownView, EMPTY_PLACEHOLDER, RowView, badge_text, summary_text};
