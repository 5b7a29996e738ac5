//! Service orchestration tests for bulk status reconciliation.

use std::sync::Arc;

use super::{FixedClock, utc_instant};
use crate::notify::adapters::RecordingNotifier;
use crate::roster::adapters::StaticDirectory;
use crate::roster::domain::{Member, MemberName, Session};
use crate::task::adapters::InMemoryTaskStore;
use crate::task::domain::{ExpectedDays, TaskName, TaskRecord, TaskStatus};
use crate::task::ports::TaskRepository;
use crate::task::services::StatusReconciler;
use chrono::{DateTime, Utc};
use mockable::DefaultClock;
use rstest::{fixture, rstest};

type TestReconciler =
    StatusReconciler<InMemoryTaskStore, StaticDirectory, RecordingNotifier, FixedClock>;

/// Reconciler under test plus handles on its collaborators.
struct Harness {
    store: Arc<InMemoryTaskStore>,
    notifier: Arc<RecordingNotifier>,
    reconciler: TestReconciler,
}

fn directory() -> StaticDirectory {
    let supervisor = MemberName::new("Howaidi Alsunqur").expect("valid name");
    StaticDirectory::new([
        Member::from_parts("Adel Alharby", "adel@example.com").expect("valid member"),
        Member::from_parts("Howaidi Alsunqur", "howaidi@example.com").expect("valid member"),
    ])
    .with_supervisor(supervisor)
}

fn session() -> Session {
    let member = Member::from_parts("Adel Alharby", "adel@example.com").expect("valid member");
    Session::new(member, &DefaultClock)
}

fn record(name: &str) -> TaskRecord {
    TaskRecord::new(
        TaskName::new(name).expect("valid name"),
        MemberName::new("Adel Alharby").expect("valid assignee"),
        ExpectedDays::new(3).expect("valid day count"),
        &FixedClock(utc_instant(2024, 4, 20, 9, 0, 0)),
    )
    .expect("valid record")
}

fn reconciler_at(store: &Arc<InMemoryTaskStore>, now: DateTime<Utc>) -> TestReconciler {
    StatusReconciler::new(
        Arc::clone(store),
        Arc::new(directory()),
        Arc::new(RecordingNotifier::new()),
        Arc::new(FixedClock(now)),
    )
}

#[fixture]
fn harness() -> Harness {
    let store = Arc::new(InMemoryTaskStore::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let reconciler = StatusReconciler::new(
        Arc::clone(&store),
        Arc::new(directory()),
        Arc::clone(&notifier),
        Arc::new(FixedClock(utc_instant(2024, 5, 1, 10, 0, 0))),
    );
    Harness {
        store,
        notifier,
        reconciler,
    }
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reconcile_stamps_newly_completed_rows(harness: Harness) {
    let mut edited = record("Quarterly report");
    edited.set_status(TaskStatus::Completed);

    let rows = harness
        .reconciler
        .reconcile(&session(), vec![edited])
        .await
        .expect("reconciliation succeeds");

    let stamped = rows.first().expect("one row");
    assert_eq!(stamped.completed_at(), Some(utc_instant(2024, 5, 1, 10, 0, 0)));
    assert_eq!(stamped.status(), TaskStatus::Completed);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reconcile_persists_the_snapshot(harness: Harness) {
    let mut edited = record("Quarterly report");
    edited.set_status(TaskStatus::Completed);

    let rows = harness
        .reconciler
        .reconcile(&session(), vec![edited])
        .await
        .expect("reconciliation succeeds");

    let stored = harness.store.list_all().await.expect("table readable");
    assert_eq!(stored, rows);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reconcile_is_idempotent_under_the_same_clock(harness: Harness) {
    let mut edited = record("Quarterly report");
    edited.set_status(TaskStatus::Completed);

    let first = harness
        .reconciler
        .reconcile(&session(), vec![edited])
        .await
        .expect("first pass succeeds");
    let second = harness
        .reconciler
        .reconcile(&session(), first.clone())
        .await
        .expect("second pass succeeds");

    assert_eq!(first, second);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn stamp_does_not_move_under_a_later_clock() {
    let store = Arc::new(InMemoryTaskStore::new());

    let mut edited = record("Quarterly report");
    edited.set_status(TaskStatus::Completed);

    let first_pass = reconciler_at(&store, utc_instant(2024, 5, 1, 10, 0, 0));
    let stamped = first_pass
        .reconcile(&session(), vec![edited])
        .await
        .expect("first pass succeeds");

    // The board is saved again a day later with the row still marked
    // completed; the original stamp must survive.
    let second_pass = reconciler_at(&store, utc_instant(2024, 5, 2, 9, 0, 0));
    let resubmitted = second_pass
        .reconcile(&session(), stamped)
        .await
        .expect("second pass succeeds");

    assert_eq!(
        resubmitted.first().expect("one row").completed_at(),
        Some(utc_instant(2024, 5, 1, 10, 0, 0))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reopening_a_completed_row_clears_the_stamp() {
    let store = Arc::new(InMemoryTaskStore::new());

    let mut edited = record("Quarterly report");
    edited.set_status(TaskStatus::Completed);

    let first_pass = reconciler_at(&store, utc_instant(2024, 5, 1, 10, 0, 0));
    let stamped = first_pass
        .reconcile(&session(), vec![edited])
        .await
        .expect("first pass succeeds");

    let mut reopened = stamped.first().expect("one row").clone();
    reopened.set_status(TaskStatus::InProgress);

    let second_pass = reconciler_at(&store, utc_instant(2024, 5, 2, 9, 0, 0));
    let cleared = second_pass
        .reconcile(&session(), vec![reopened])
        .await
        .expect("second pass succeeds");

    assert_eq!(cleared.first().expect("one row").completed_at(), None);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn delayed_rows_keep_their_stamp(harness: Harness) {
    let mut edited = record("Quarterly report");
    edited.set_status(TaskStatus::Completed);

    let stamped = harness
        .reconciler
        .reconcile(&session(), vec![edited])
        .await
        .expect("first pass succeeds");

    let mut delayed = stamped.first().expect("one row").clone();
    delayed.set_status(TaskStatus::Delayed);

    let rows = harness
        .reconciler
        .reconcile(&session(), vec![delayed])
        .await
        .expect("second pass succeeds");

    assert_eq!(
        rows.first().expect("one row").completed_at(),
        Some(utc_instant(2024, 5, 1, 10, 0, 0))
    );
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reconcile_preserves_row_order(harness: Harness) {
    let mut first = record("First");
    first.set_status(TaskStatus::Completed);
    let second = record("Second");
    let mut third = record("Third");
    third.set_status(TaskStatus::Delayed);

    let rows = harness
        .reconciler
        .reconcile(&session(), vec![first, second, third])
        .await
        .expect("reconciliation succeeds");

    let names: Vec<&str> = rows.iter().map(|row| row.name().as_str()).collect();
    assert_eq!(names, vec!["First", "Second", "Third"]);
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reconcile_notifies_the_supervisor(harness: Harness) {
    harness
        .reconciler
        .reconcile(&session(), vec![record("Quarterly report")])
        .await
        .expect("reconciliation succeeds");

    let sent = harness.notifier.sent().expect("capture readable");
    assert_eq!(sent.len(), 1);
    let (recipient, notice) = sent.first().expect("one notice");
    assert_eq!(recipient.as_str(), "howaidi@example.com");
    assert!(notice.body().contains("Adel Alharby"));
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn reconcile_sends_nothing_without_a_supervisor() {
    let store = Arc::new(InMemoryTaskStore::new());
    let notifier = Arc::new(RecordingNotifier::new());
    let reconciler = StatusReconciler::new(
        Arc::clone(&store),
        Arc::new(StaticDirectory::new([Member::from_parts(
            "Adel Alharby",
            "adel@example.com",
        )
        .expect("valid member")])),
        Arc::clone(&notifier),
        Arc::new(FixedClock(utc_instant(2024, 5, 1, 10, 0, 0))),
    );

    reconciler
        .reconcile(&session(), vec![record("Quarterly report")])
        .await
        .expect("reconciliation succeeds");

    assert!(notifier.sent().expect("capture readable").is_empty());
}

#[rstest]
#[tokio::test(flavor = "multi_thread")]
async fn interleaved_edits_end_last_write_wins() {
    let store = Arc::new(InMemoryTaskStore::new());
    store
        .append(&record("Quarterly report"))
        .await
        .expect("append succeeds");

    let reconciler = reconciler_at(&store, utc_instant(2024, 5, 1, 10, 0, 0));

    // Two editors read the same snapshot.
    let first_editor = reconciler.snapshot().await.expect("readable");
    let second_editor = reconciler.snapshot().await.expect("readable");

    let mut first_edit = first_editor;
    first_edit
        .first_mut()
        .expect("one row")
        .set_status(TaskStatus::Completed);

    let mut second_edit = second_editor;
    second_edit
        .first_mut()
        .expect("one row")
        .set_status(TaskStatus::Delayed);

    // The whole-table overwrite means the second save silently discards
    // the first editor's completion; nothing merges per-row.
    reconciler
        .reconcile(&session(), first_edit)
        .await
        .expect("first save succeeds");
    reconciler
        .reconcile(&session(), second_edit)
        .await
        .expect("second save succeeds");

    let stored = reconciler.snapshot().await.expect("readable");
    let row = stored.first().expect("one row");
    assert_eq!(row.status(), TaskStatus::Delayed);
    assert_eq!(row.completed_at(), None);
}
