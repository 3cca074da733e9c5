//! Tests for actions

use super::*;
use crate::test_utils::test_helpers::{RecordingStore, sample_notifications};

fn mediator() -> (ActionMediator<RecordingStore>, Rc<RecordingStore>) {
    let store = Rc::new(RecordingStore::new(sample_notifications()));
    (ActionMediator::new(Rc::clone(&store)), store)
}

#[tokio::test]
async fn test_mark_as_read_issues_one_request() {
    let (mediator, store) = mediator();

    mediator
        .mark_as_read(&NotificationId::new("n1"))
        .await
        .unwrap();

    assert_eq!(
        store.events(),
        vec!["mark_as_read:n1", "mark_as_read_resolved:n1"]
    );
    assert_eq!(store.unread_count(), 1);
}

#[tokio::test]
async fn test_mark_as_read_twice_on_read_id_changes_nothing() {
    let (mediator, store) = mediator();
    let id = NotificationId::new("n3");
    let before = store.notifications();

    mediator.mark_as_read(&id).await.unwrap();
    mediator.mark_as_read(&id).await.unwrap();

    assert_eq!(store.notifications(), before);
    assert_eq!(store.unread_count(), 2);
}

#[tokio::test]
async fn test_mark_all_as_read() {
    let (mediator, store) = mediator();

    mediator.mark_all_as_read().await.unwrap();

    assert_eq!(store.events(), vec!["mark_all_as_read"]);
    assert_eq!(store.unread_count(), 0);
}

#[tokio::test]
async fn test_delete_removes_from_next_snapshot() {
    let (mediator, store) = mediator();

    mediator
        .delete_notification(&NotificationId::new("n2"))
        .await
        .unwrap();

    assert!(
        store
            .notifications()
            .iter()
            .all(|n| n.id != NotificationId::new("n2"))
    );
}

#[tokio::test]
async fn test_refresh_is_forwarded() {
    let (mediator, store) = mediator();

    mediator.refresh_notifications().await.unwrap();

    assert_eq!(store.events(), vec!["refresh"]);
}

#[tokio::test]
async fn test_failure_propagates_without_retry() {
    let (mediator, store) = mediator();
    store.fail_requests();

    let result = mediator.delete_notification(&NotificationId::new("n1")).await;

    assert!(matches!(result, Err(StoreError::Unavailable(_))));
    assert_eq!(store.events(), vec!["delete:n1"]);
    assert_eq!(store.notifications().len(), 3);
}

#[tokio::test]
async fn test_perform_dispatches_each_action() {
    let (mediator, store) = mediator();

    mediator.perform(&Action::Refresh).await.unwrap();
    mediator
        .perform(&Action::Delete(NotificationId::new("n3")))
        .await
        .unwrap();
    mediator.perform(&Action::MarkAllAsRead).await.unwrap();

    assert_eq!(
        store.events(),
        vec!["refresh", "delete:n3", "mark_all_as_read"]
    );
}

#[test]
fn test_action_messages() {
    assert_eq!(Action::MarkAllAsRead.done_message(), "Marked all as read");
    assert_eq!(
        Action::Delete(NotificationId::new("n1")).to_string(),
        "delete n1"
    );
}
