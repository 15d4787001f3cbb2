//! Creation Workflow Integration Tests
//!
//! Drives the two-step creation wizard together with the list controller
//! against the mock services, covering the full dialog lifecycle: draft,
//! analysis, review edits, submission, and teardown.

mod common;

use common::{fill_draft, Harness};
use mentionwatch_analysis::mock::MockAnalysisOutcome;
use mentionwatch_analysis::InitialAnalysis;
use mentionwatch_common::NoticeKind;
use mentionwatch_projects::WizardState;

#[tokio::test]
async fn test_full_creation_workflow() {
    let mut h = Harness::new();

    // The listing page starts from the backend's truth
    h.list.load().await.unwrap();
    assert!(h.list.projects().is_empty());

    // Step 1: draft
    fill_draft(&mut h.flow, "Ferris Tracker");
    h.analysis.behavior().set_canned_result(InitialAnalysis {
        keywords: vec!["ferris".to_string(), "tracker".to_string()],
        subreddits: vec!["r/rust".to_string(), "programming".to_string()],
    });
    h.flow.request_analysis().await.unwrap();
    assert_eq!(h.flow.state(), WizardState::Review);

    // Step 2: review and submit through the list controller
    let project = h.list.create(&mut h.flow).await.unwrap();

    // Appended only after server acknowledgement
    assert_eq!(h.list.projects().len(), 1);
    assert_eq!(h.list.projects()[0].id, project.id);

    // The stored payload is normalized
    assert_eq!(project.subreddits, vec!["rust", "programming"]);
    assert_eq!(h.backend.stored_projects(), vec![project]);

    // The dialog closed and reset
    assert_eq!(h.flow.state(), WizardState::Draft);
    assert!(h.flow.draft().is_empty());

    // One success toast per completed operation
    let flow_notices = h.flow.take_notices();
    assert_eq!(flow_notices.len(), 2);
    assert!(flow_notices.iter().all(|n| n.kind == NoticeKind::Success));
}

#[tokio::test]
async fn test_validation_failure_makes_no_network_call() {
    let mut h = Harness::new();
    h.flow.set_name("Ferris").unwrap();
    h.flow.set_description("too short").unwrap();

    let err = h.flow.request_analysis().await.unwrap_err();

    assert_eq!(err.error_code(), "VALIDATION_ERROR");
    assert_eq!(h.analysis.request_count(), 0);
    assert_eq!(h.flow.state(), WizardState::Draft);
}

#[tokio::test]
async fn test_analysis_failure_is_recoverable() {
    let mut h = Harness::new();
    fill_draft(&mut h.flow, "Ferris Tracker");
    h.analysis.behavior().set_outcome(MockAnalysisOutcome::Fail);

    let err = h.flow.request_analysis().await.unwrap_err();
    assert!(err.is_recoverable());
    assert_eq!(h.flow.state(), WizardState::Draft);
    assert_eq!(h.flow.draft().name, "Ferris Tracker");

    // Retry after the analyzer recovers
    h.analysis.behavior().reset();
    h.flow.request_analysis().await.unwrap();
    assert_eq!(h.flow.state(), WizardState::Review);
    assert_eq!(h.analysis.request_count(), 2);
}

#[tokio::test]
async fn test_submission_failure_keeps_dialog_open_and_list_unchanged() {
    let mut h = Harness::new();
    h.list.load().await.unwrap();

    fill_draft(&mut h.flow, "Ferris Tracker");
    h.flow.request_analysis().await.unwrap();

    h.backend.behavior().set_fail_create(true);
    let err = h.list.create(&mut h.flow).await.unwrap_err();

    // The flow's error is re-thrown so the dialog stays open in review
    assert_eq!(err.error_code(), "SUBMISSION_ERROR");
    assert_eq!(h.flow.state(), WizardState::Review);
    assert!(h.list.projects().is_empty());
    assert!(h.backend.stored_projects().is_empty());

    // The same reviewed draft retries cleanly
    h.backend.behavior().reset();
    let project = h.list.create(&mut h.flow).await.unwrap();
    assert_eq!(project.name, "Ferris Tracker");
    assert_eq!(h.list.projects().len(), 1);
}

#[tokio::test]
async fn test_review_edits_reach_the_backend() {
    let mut h = Harness::new();
    fill_draft(&mut h.flow, "Ferris Tracker");
    h.flow.request_analysis().await.unwrap();

    h.flow
        .set_keywords(vec!["ferris".to_string(), "crab".to_string()])
        .unwrap();
    h.flow
        .set_subreddits(vec!["r/rust".to_string(), "r/learnrust".to_string()])
        .unwrap();

    let project = h.list.create(&mut h.flow).await.unwrap();
    assert_eq!(project.keywords, vec!["ferris", "crab"]);
    assert_eq!(project.subreddits, vec!["rust", "learnrust"]);
}

#[tokio::test]
async fn test_go_back_then_reanalyze_replaces_lists() {
    let mut h = Harness::new();
    fill_draft(&mut h.flow, "Ferris Tracker");
    h.analysis.behavior().set_canned_result(InitialAnalysis {
        keywords: vec!["old".to_string()],
        subreddits: vec!["old".to_string()],
    });
    h.flow.request_analysis().await.unwrap();

    h.flow.go_back().unwrap();
    assert_eq!(h.flow.state(), WizardState::Draft);
    // Preserved for inspection
    assert_eq!(h.flow.analysis().unwrap().keywords, vec!["old"]);

    h.analysis.behavior().set_canned_result(InitialAnalysis {
        keywords: vec!["new".to_string()],
        subreddits: vec!["new".to_string()],
    });
    h.flow.request_analysis().await.unwrap();
    assert_eq!(h.flow.analysis().unwrap().keywords, vec!["new"]);
}

#[tokio::test]
async fn test_cancel_leaves_no_residue_at_any_step() {
    let mut h = Harness::new();

    // Cancel from the draft step
    fill_draft(&mut h.flow, "Abandoned");
    h.flow.cancel().unwrap();
    assert_eq!(h.flow.state(), WizardState::Draft);
    assert!(h.flow.draft().is_empty());

    // Cancel from the review step
    fill_draft(&mut h.flow, "Also Abandoned");
    h.flow.request_analysis().await.unwrap();
    h.flow.cancel().unwrap();

    assert!(h.flow.draft().is_empty());
    assert!(h.flow.analysis().is_none());
    assert!(h.backend.stored_projects().is_empty());

    // Reopening starts a fresh draft that analyzes independently
    fill_draft(&mut h.flow, "Fresh Start");
    h.flow.request_analysis().await.unwrap();
    assert_eq!(h.flow.state(), WizardState::Review);
}
