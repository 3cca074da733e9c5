//! Click propagation inside the dropdown
//!
//! A click starts at the innermost hit region and bubbles outwards through
//! its containers. Any handler may stop propagation, which is how nested row
//! controls keep the row's own activation handler from firing.

use crate::layout::Region;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClickEvent {
    target: Region,
    propagation_stopped: bool,
}

impl ClickEvent {
    pub fn new(target: Region) -> Self {
        Self {
            target,
            propagation_stopped: false,
        }
    }

    pub fn target(&self) -> Region {
        self.target
    }

    pub fn stop_propagation(&mut self) {
        self.propagation_stopped = true;
    }

    pub fn is_propagation_stopped(&self) -> bool {
        self.propagation_stopped
    }

    /// Regions the event visits, innermost first
    pub fn bubble_path(&self) -> Vec<Region> {
        match self.target {
            Region::RowMarkRead(index) | Region::RowDelete(index) => {
                vec![self.target, Region::Row(index), Region::Panel]
            }
            Region::Row(_) | Region::MarkAllRead | Region::Refresh | Region::ViewAll => {
                vec![self.target, Region::Panel]
            }
            Region::Panel => vec![Region::Panel],
            Region::Trigger => vec![Region::Trigger],
        }
    }
}

/// Walk the bubble path, calling `handler` for each region until a handler
/// stops propagation
pub fn dispatch_click(event: &mut ClickEvent, mut handler: impl FnMut(Region, &mut ClickEvent)) {
    for region in event.bubble_path() {
        if event.is_propagation_stopped() {
            break;
        }
        handler(region, event);
    }
}
