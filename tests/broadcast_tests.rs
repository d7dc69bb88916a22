use group_cleaner_bot::database::models::*;
use group_cleaner_bot::services::access::AdminGate;
use group_cleaner_bot::services::admin::{AdminAction, AdminConsole};
use group_cleaner_bot::services::broadcast::{deliver, run_broadcast, BroadcastReport};
use group_cleaner_bot::services::sessions::{BroadcastMode, BroadcastSessions};
use std::time::Duration;
use teloxide::types::{ChatId, UserId};
use tokio_test::assert_ok;

mod common;
use common::{setup_test_db, RecordingGateway};

const ADMIN: UserId = UserId(7563536517);

#[tokio::test]
async fn test_empty_target_list_sends_nothing() {
    let gateway = RecordingGateway::new();

    let report = deliver(&gateway, BroadcastMode::Groups, &[], "hello").await;

    assert_eq!(report.to_string(), "0/0 delivered");
    assert!(gateway.sent_to().is_empty());
}

#[tokio::test]
async fn test_failed_recipients_are_skipped() {
    let gateway = RecordingGateway::failing_for(&[2, 4]);
    let targets: Vec<ChatId> = (1..=5).map(ChatId).collect();

    let report = deliver(&gateway, BroadcastMode::Users, &targets, "news").await;

    assert_eq!(report, BroadcastReport { mode: BroadcastMode::Users, delivered: 3, total: 5 });
    assert_eq!(report.to_string(), "3/5 delivered");
    assert_eq!(gateway.sent_to(), vec![1, 3, 5]);
}

#[tokio::test]
async fn test_group_broadcast_targets_admin_groups_only() {
    let (db, _temp_dir) = setup_test_db().await;
    Group::record_observation(&db.pool, -1, Some("Admin"), true).await.unwrap();
    Group::record_observation(&db.pool, -2, Some("Member"), false).await.unwrap();
    User::upsert(&db.pool, 10, None, Some("U"), None).await.unwrap();
    let gateway = RecordingGateway::new();

    let report = assert_ok!(run_broadcast(&gateway, &db, BroadcastMode::Groups, "hi groups").await);

    assert_eq!(report.to_string(), "1/1 delivered");
    assert_eq!(gateway.sent.lock().unwrap().clone(), vec![(-1, "hi groups".to_string())]);
}

#[tokio::test]
async fn test_admin_text_with_session_broadcasts_and_clears_session() {
    let (db, _temp_dir) = setup_test_db().await;
    for id in 1..=5 {
        User::upsert(&db.pool, id, None, Some("U"), None).await.unwrap();
    }
    let sessions = BroadcastSessions::new(Duration::from_secs(60));
    let console = AdminConsole::new(db.clone(), AdminGate::new(ADMIN), sessions.clone());
    let gateway = RecordingGateway::failing_for(&[1, 5]);

    assert_ok!(console.press(ADMIN, AdminAction::BroadcastUsers).await);
    assert_eq!(sessions.peek(ADMIN).await, Some(BroadcastMode::Users));

    let report = console
        .handle_private_text(&gateway, ADMIN, "announcement")
        .await
        .unwrap()
        .expect("broadcast ran");

    assert_eq!(report.to_string(), "3/5 delivered");
    assert_eq!(sessions.peek(ADMIN).await, None);
    assert!(sessions.is_empty().await);

    // The next text is ordinary chat again
    let again = console.handle_private_text(&gateway, ADMIN, "second").await.unwrap();
    assert!(again.is_none());
    assert_eq!(gateway.sent_to().len(), 3);
}

#[tokio::test]
async fn test_session_cleared_even_when_every_send_fails() {
    let (db, _temp_dir) = setup_test_db().await;
    Group::record_observation(&db.pool, -9, Some("Locked"), true).await.unwrap();
    let sessions = BroadcastSessions::new(Duration::from_secs(60));
    let console = AdminConsole::new(db.clone(), AdminGate::new(ADMIN), sessions.clone());
    let gateway = RecordingGateway::failing_for(&[-9]);

    console.press(ADMIN, AdminAction::BroadcastGroups).await.unwrap();
    let report = console.handle_private_text(&gateway, ADMIN, "x").await.unwrap();

    assert_eq!(report.map(|r| r.to_string()), Some("0/1 delivered".to_string()));
    assert!(sessions.is_empty().await);
}

#[tokio::test]
async fn test_text_without_session_is_ignored() {
    let (db, _temp_dir) = setup_test_db().await;
    User::upsert(&db.pool, 1, None, Some("U"), None).await.unwrap();
    let console = AdminConsole::new(
        db.clone(),
        AdminGate::new(ADMIN),
        BroadcastSessions::new(Duration::from_secs(60)),
    );
    let gateway = RecordingGateway::new();

    let outcome = console.handle_private_text(&gateway, ADMIN, "just chatting").await.unwrap();

    assert!(outcome.is_none());
    assert!(gateway.sent_to().is_empty());
}

#[tokio::test]
async fn test_expired_session_does_not_broadcast() {
    let (db, _temp_dir) = setup_test_db().await;
    User::upsert(&db.pool, 1, None, Some("U"), None).await.unwrap();
    let sessions = BroadcastSessions::new(Duration::from_millis(5));
    let console = AdminConsole::new(db.clone(), AdminGate::new(ADMIN), sessions.clone());
    let gateway = RecordingGateway::new();

    console.press(ADMIN, AdminAction::BroadcastUsers).await.unwrap();
    tokio::time::sleep(Duration::from_millis(30)).await;
    let outcome = console.handle_private_text(&gateway, ADMIN, "late").await.unwrap();

    assert!(outcome.is_none());
    assert!(gateway.sent_to().is_empty());
    assert!(sessions.is_empty().await);
}
