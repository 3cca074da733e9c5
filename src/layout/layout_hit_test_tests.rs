//! Tests for region hit testing

use ratatui::layout::Rect;

use super::layout_hit_test::region_at;
use super::layout_regions::{LayoutRegions, Region, RowRegions};

fn create_test_regions() -> LayoutRegions {
    let mut regions = LayoutRegions::new();
    regions.trigger = Some(Rect::new(70, 0, 8, 1));
    regions.dropdown_panel = Some(Rect::new(30, 1, 48, 12));
    regions.refresh = Some(Rect::new(64, 2, 9, 1));
    regions.mark_all_read = Some(Rect::new(50, 3, 20, 1));
    regions.rows = vec![
        RowRegions {
            index: 0,
            row: Rect::new(31, 5, 46, 2),
            mark_read: Some(Rect::new(72, 5, 2, 1)),
            delete: Rect::new(75, 5, 2, 1),
        },
        RowRegions {
            index: 1,
            row: Rect::new(31, 7, 46, 2),
            mark_read: None,
            delete: Rect::new(75, 7, 2, 1),
        },
    ];
    regions.view_all = Some(Rect::new(48, 11, 12, 1));
    regions
}

#[test]
fn test_empty_regions_hit_nothing() {
    let regions = LayoutRegions::new();
    assert_eq!(region_at(&regions, 10, 10), None);
}

#[test]
fn test_trigger_hit() {
    let regions = create_test_regions();
    assert_eq!(region_at(&regions, 72, 0), Some(Region::Trigger));
}

#[test]
fn test_outside_everything() {
    let regions = create_test_regions();
    assert_eq!(region_at(&regions, 5, 20), None);
    assert_eq!(region_at(&regions, 29, 5), None);
}

#[test]
fn test_nested_mark_read_wins_over_row() {
    let regions = create_test_regions();
    assert_eq!(region_at(&regions, 73, 5), Some(Region::RowMarkRead(0)));
}

#[test]
fn test_nested_delete_wins_over_row() {
    let regions = create_test_regions();
    assert_eq!(region_at(&regions, 76, 7), Some(Region::RowDelete(1)));
}

#[test]
fn test_row_body_hit() {
    let regions = create_test_regions();
    assert_eq!(region_at(&regions, 40, 6), Some(Region::Row(0)));
    assert_eq!(region_at(&regions, 40, 8), Some(Region::Row(1)));
}

#[test]
fn test_header_and_footer_controls() {
    let regions = create_test_regions();
    assert_eq!(region_at(&regions, 65, 2), Some(Region::Refresh));
    assert_eq!(region_at(&regions, 55, 3), Some(Region::MarkAllRead));
    assert_eq!(region_at(&regions, 50, 11), Some(Region::ViewAll));
}

#[test]
fn test_panel_padding_falls_back_to_panel() {
    let regions = create_test_regions();
    assert_eq!(region_at(&regions, 31, 2), Some(Region::Panel));
}

#[test]
fn test_root_containment_covers_trigger_and_panel() {
    let regions = create_test_regions();
    assert!(regions.dropdown_root_contains(72, 0));
    assert!(regions.dropdown_root_contains(40, 6));
    assert!(!regions.dropdown_root_contains(5, 5));
}

#[test]
fn test_clear_dropdown_keeps_trigger() {
    let mut regions = create_test_regions();
    regions.clear_dropdown();

    assert!(regions.trigger.is_some());
    assert!(regions.dropdown_panel.is_none());
    assert!(regions.rows.is_empty());
    assert_eq!(region_at(&regions, 40, 6), None);
}
