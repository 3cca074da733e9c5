//! Layout regions tracking for UI components
//!
//! Tracks where UI components are rendered for position-aware mouse interactions.

use ratatui::layout::Rect;

/// Identifies a clickable UI component
///
/// Row variants carry the row's index in the rendered snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    Trigger,
    Panel,
    MarkAllRead,
    Refresh,
    ViewAll,
    Row(usize),
    RowMarkRead(usize),
    RowDelete(usize),
}

/// Rendered areas of one notification row and its nested controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowRegions {
    pub index: usize,
    pub row: Rect,
    pub mark_read: Option<Rect>,
    pub delete: Rect,
}

/// Tracks rendered areas of UI components
///
/// Updated during each render pass. Regions are `None` (or empty) when the
/// component is not visible.
#[derive(Default, Clone, Debug)]
pub struct LayoutRegions {
    pub trigger: Option<Rect>,
    pub dropdown_panel: Option<Rect>,
    pub mark_all_read: Option<Rect>,
    pub refresh: Option<Rect>,
    pub view_all: Option<Rect>,
    pub rows: Vec<RowRegions>,
}

impl LayoutRegions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clear all regions before a new render pass
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Clear only the dropdown regions, keeping the trigger
    pub fn clear_dropdown(&mut self) {
        let trigger = self.trigger;
        *self = Self {
            trigger,
            ..Self::default()
        };
    }

    /// Whether a point lies inside the dropdown root: the trigger or the open panel
    pub fn dropdown_root_contains(&self, x: u16, y: u16) -> bool {
        [self.trigger, self.dropdown_panel]
            .iter()
            .flatten()
            .any(|rect| contains(rect, x, y))
    }
}

/// Check if a point is within a rectangle
pub(super) fn contains(rect: &Rect, x: u16, y: u16) -> bool {
    x >= rect.x
        && x < rect.x.saturating_add(rect.width)
        && y >= rect.y
        && y < rect.y.saturating_add(rect.height)
}
