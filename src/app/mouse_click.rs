//! Mouse click handling
//!
//! Every left press goes to the pointer hub first, so an open dropdown can
//! dismiss itself on outside presses. Presses that land on the dropdown are
//! then hit-tested and bubbled through the controller's click handlers.

use ratatui::crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use super::app_state::App;
use crate::layout::{Region, region_at};
use crate::pointer::PointerPress;
use crate::store::NotificationStore;

pub fn handle_mouse_event<S: NotificationStore + 'static>(app: &mut App<S>, mouse: MouseEvent) {
    if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
        handle_click(app, mouse.column, mouse.row);
    }
}

/// Handle a left press at a terminal cell
pub fn handle_click<S: NotificationStore + 'static>(app: &mut App<S>, column: u16, row: u16) {
    app.pointer_hub.publish(PointerPress::new(column, row));

    let regions = &app.layout_regions;
    if app
        .dropdown
        .poll_outside_interactions(|x, y| regions.dropdown_root_contains(x, y))
    {
        app.layout_regions.clear_dropdown();
        app.sync_selection();
        app.mark_dirty();
        return;
    }

    let Some(region) = region_at(&app.layout_regions, column, row) else {
        return;
    };

    // Panel regions from the last frame are stale once the dropdown closed
    if !app.dropdown.is_open() && region != Region::Trigger {
        return;
    }

    if let Region::Row(index) | Region::RowMarkRead(index) | Region::RowDelete(index) = region {
        app.selected = Some(index);
    }

    let effects = app.dropdown.dispatch_click(region, &app.rendered);
    for effect in effects {
        app.spawn_effect(effect);
    }

    app.sync_selection();
    app.mark_dirty();
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
