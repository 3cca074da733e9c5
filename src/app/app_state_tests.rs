//! Tests for app_state

use super::*;
use crate::app::app_render_tests::test_app;
use crate::notification::NotificationId;
use crate::test_utils::test_helpers::{RecordingStore, linked, plain, sample_notifications};

fn sample_app() -> App<RecordingStore> {
    test_app(RecordingStore::new(sample_notifications()))
}

fn store(app: &App<RecordingStore>) -> &RecordingStore {
    app.dropdown.mediator().store()
}

#[test]
fn test_initial_state() {
    let app = sample_app();
    assert!(!app.dropdown.is_open());
    assert!(!app.should_quit());
    assert_eq!(app.selected, None);
    assert_eq!(app.current_route(), None);
    assert!(app.needs_render, "New app should need initial render");
}

#[test]
fn test_dirty_flag() {
    let mut app = sample_app();

    app.clear_dirty();
    assert!(!app.should_render());

    app.mark_dirty();
    assert!(app.should_render());
}

#[test]
fn test_visible_toast_keeps_rendering() {
    let mut app = sample_app();
    app.clear_dirty();

    app.toast.show("Marked as read");

    assert!(app.should_render());
}

#[test]
fn test_selection_moves_within_bounds() {
    let mut app = sample_app();
    app.toggle_dropdown();

    app.select_previous();
    assert_eq!(app.selected, Some(0));

    app.select_next();
    app.select_next();
    app.select_next();
    assert_eq!(app.selected, Some(2));

    app.select_previous();
    assert_eq!(app.selected, Some(1));
    assert_eq!(
        app.selected_notification().map(|n| n.id),
        Some(NotificationId::new("n2"))
    );
}

#[test]
fn test_selection_empty_list() {
    let mut app = test_app(RecordingStore::new(Vec::new()));
    app.toggle_dropdown();

    app.select_next();

    assert_eq!(app.selected, None);
    assert!(app.selected_notification().is_none());
}

#[test]
fn test_closing_clears_selection() {
    let mut app = sample_app();
    app.toggle_dropdown();
    app.select_next();

    app.toggle_dropdown();

    assert_eq!(app.selected, None);
}

#[tokio::test]
async fn test_perform_success_shows_toast() {
    let mut app = sample_app();
    app.spawn_effect(ClickEffect::Perform(Action::MarkAllAsRead));

    app.run_pending_tasks().await;

    assert!(app.poll_outcomes());
    assert_eq!(app.toast.current_message(), Some("Marked all as read"));
    assert_eq!(store(&app).unread_count(), 0);
}

#[tokio::test]
async fn test_failed_action_shows_error_toast() {
    let mut app = sample_app();
    store(&app).fail_requests();
    app.spawn_effect(ClickEffect::Perform(Action::Delete(NotificationId::new("n1"))));

    app.run_pending_tasks().await;
    app.poll_outcomes();

    assert_eq!(
        app.toast.current_message(),
        Some("Could not delete n1: Notification store unavailable: offline")
    );
    assert_eq!(store(&app).notifications().len(), 3);
}

#[tokio::test]
async fn test_error_toast_survives_following_success() {
    let mut app = sample_app();
    store(&app).fail_requests();
    app.spawn_effect(ClickEffect::Perform(Action::Delete(NotificationId::new("n1"))));
    app.run_pending_tasks().await;
    app.poll_outcomes();

    store(&app).recover();
    app.spawn_effect(ClickEffect::Perform(Action::Refresh));
    app.run_pending_tasks().await;
    app.poll_outcomes();

    assert!(
        app.toast
            .current_message()
            .is_some_and(|m| m.starts_with("Could not delete n1"))
    );
}

#[tokio::test]
async fn test_delete_of_selected_last_row_clamps_selection() {
    let mut app = sample_app();
    app.toggle_dropdown();
    app.selected = Some(2);

    app.spawn_effect(ClickEffect::Perform(Action::Delete(NotificationId::new("n3"))));
    app.run_pending_tasks().await;
    app.poll_outcomes();

    assert_eq!(app.selected, Some(1));
}

#[tokio::test]
async fn test_activating_campaign_row_navigates_and_closes() {
    let mut app = test_app(RecordingStore::new(vec![linked("n1", "Sale", false, "c9")]));
    app.toggle_dropdown();
    app.select_next();
    let notification = app.selected_notification().unwrap();

    app.spawn_effect(ClickEffect::Activate(notification));
    app.run_pending_tasks().await;
    app.poll_outcomes();

    assert_eq!(app.current_route(), Some("/campaigns/c9".to_string()));
    assert!(!app.dropdown.is_open());
    assert_eq!(app.selected, None);
    assert_eq!(
        store(&app).events(),
        vec!["mark_as_read:n1", "mark_as_read_resolved:n1"]
    );
}

#[tokio::test]
async fn test_failed_activation_keeps_dropdown_open() {
    let mut app = test_app(RecordingStore::new(vec![linked("n1", "Sale", false, "c9")]));
    app.toggle_dropdown();
    store(&app).fail_requests();
    let notification = store(&app).notifications()[0].clone();

    app.spawn_effect(ClickEffect::Activate(notification));
    app.run_pending_tasks().await;
    app.poll_outcomes();

    assert!(app.dropdown.is_open());
    assert_eq!(app.current_route(), None);
    assert!(
        app.toast
            .current_message()
            .is_some_and(|m| m.starts_with("Could not mark n1 as read"))
    );
}

#[tokio::test]
async fn test_plain_row_activation_marks_read_in_place() {
    let mut app = test_app(RecordingStore::new(vec![plain("n1", "Build", false)]));
    app.toggle_dropdown();
    let notification = store(&app).notifications()[0].clone();

    app.spawn_effect(ClickEffect::Activate(notification));
    app.run_pending_tasks().await;
    app.poll_outcomes();

    assert!(app.dropdown.is_open());
    assert_eq!(store(&app).unread_count(), 0);
    assert!(app.toast.current().is_none());
}

#[test]
fn test_poll_without_outcomes() {
    let mut app = sample_app();
    assert!(!app.poll_outcomes());
}
