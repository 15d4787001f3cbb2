//! List Reconciliation Integration Tests
//!
//! Exercises the listing page's load and optimistic-delete behavior against
//! the mock backend, including reconciliation after failed deletes.

mod common;

use common::{stored_project, Harness};
use mentionwatch_api::mock::RecordedOperation;
use uuid::Uuid;

#[tokio::test]
async fn test_load_replaces_list_with_server_truth() {
    let mut h = Harness::new();
    h.backend
        .seed(vec![stored_project("One"), stored_project("Two")]);

    h.list.load().await.unwrap();
    assert_eq!(h.list.projects().len(), 2);

    // A stale record deleted elsewhere disappears on the next load
    let gone = h.list.projects()[0].id;
    h.backend.seed(
        h.backend
            .stored_projects()
            .into_iter()
            .filter(|p| p.id != gone)
            .collect(),
    );
    h.list.load().await.unwrap();
    assert_eq!(h.list.projects().len(), 1);
}

#[tokio::test]
async fn test_failed_load_keeps_previous_list_intact() {
    let mut h = Harness::new();
    h.backend.seed(vec![stored_project("Survivor")]);
    h.list.load().await.unwrap();

    h.backend.behavior().set_fail_list(true);
    let err = h.list.load().await.unwrap_err();

    assert_eq!(err.error_code(), "LOAD_ERROR");
    assert_eq!(h.list.projects().len(), 1);
    assert_eq!(h.list.projects()[0].name, "Survivor");
}

#[tokio::test]
async fn test_optimistic_delete_round_trip() {
    let mut h = Harness::new();
    let keep = stored_project("Keep");
    let doomed = stored_project("Doomed");
    h.backend.seed(vec![keep.clone(), doomed.clone()]);
    h.list.load().await.unwrap();

    h.list.delete(doomed.id).await.unwrap();

    assert_eq!(h.list.projects(), &[keep.clone()]);
    assert_eq!(h.backend.stored_projects(), vec![keep]);
}

#[tokio::test]
async fn test_failed_delete_resynchronizes_with_server() {
    let mut h = Harness::new();
    let sticky = stored_project("Sticky");
    h.backend.seed(vec![sticky.clone()]);
    h.list.load().await.unwrap();
    h.backend.reset_history();

    h.backend.behavior().set_fail_delete(true);
    let err = h.list.delete(sticky.id).await.unwrap_err();

    assert_eq!(err.error_code(), "DELETE_ERROR");
    assert!(err.is_recoverable());

    // Reconciled by a full reload: the held list matches the server's
    // truth, not the optimistically-emptied intermediate state
    assert_eq!(h.list.projects(), &[sticky]);
    assert_eq!(
        h.backend.recorded_operations(),
        vec![
            RecordedOperation::Delete {
                id: h.list.projects()[0].id
            },
            RecordedOperation::List,
        ]
    );
}

#[tokio::test]
async fn test_delete_of_unknown_id_reconciles() {
    let mut h = Harness::new();
    let existing = stored_project("Existing");
    h.backend.seed(vec![existing.clone()]);
    h.list.load().await.unwrap();

    // A record that was never on the server: the backend rejects the
    // delete and reconciliation restores the held list
    let err = h.list.delete(Uuid::new_v4()).await.unwrap_err();
    assert_eq!(err.error_code(), "DELETE_ERROR");
    assert_eq!(h.list.projects(), &[existing]);
}

#[tokio::test]
async fn test_notices_per_operation() {
    let mut h = Harness::new();
    let project = stored_project("One");
    h.backend.seed(vec![project.clone()]);

    h.list.load().await.unwrap();
    h.list.delete(project.id).await.unwrap();

    let notices = h.list.take_notices();
    assert_eq!(notices.len(), 2);
    assert!(notices.iter().all(|n| !n.is_error()));

    h.backend.behavior().set_fail_list(true);
    let _ = h.list.load().await;
    let notices = h.list.take_notices();
    assert_eq!(notices.len(), 1);
    assert!(notices[0].is_error());
}
