use pretty_assertions::assert_eq;
use projectboard::domain::notification::NotificationKind;
use projectboard::services::{BoardError, NotificationService};
use projectboard::test_helpers::TestContext;

#[test]
fn test_mark_all_read_clears_the_badge() {
    let mut ctx = TestContext::new_for_test();
    assert_eq!(NotificationService::unread_count(&ctx.repository), 2);

    NotificationService::new(&mut ctx.repository).mark_all_read();

    assert_eq!(NotificationService::unread_count(&ctx.repository), 0);
    assert!(ctx.repository.notifications.values().all(|n| n.read));
}

#[test]
fn test_mark_read_and_dismiss_single_notifications() {
    let mut ctx = TestContext::new_for_test();

    let read = NotificationService::new(&mut ctx.repository).mark_read("1").unwrap();
    assert!(read.read);
    assert_eq!(NotificationService::unread_count(&ctx.repository), 1);

    NotificationService::new(&mut ctx.repository).dismiss("2").unwrap();
    let ids: Vec<_> = ctx.repository.notifications.values().map(|n| n.id.clone()).collect();
    assert_eq!(ids, vec!["1", "3"]);
    assert_eq!(NotificationService::unread_count(&ctx.repository), 0);

    let missing = NotificationService::new(&mut ctx.repository).dismiss("2");
    assert!(matches!(missing, Err(BoardError::NotFound { .. })));
}

#[test]
fn test_pushed_notification_is_unread() {
    let mut ctx = TestContext::empty();

    let pushed = NotificationService::new(&mut ctx.repository).push(
        "Reports refreshed",
        "Report data refreshed",
        NotificationKind::Success,
    );

    assert!(!pushed.read);
    assert_eq!(pushed.kind, NotificationKind::Success);
    assert_eq!(NotificationService::unread_count(&ctx.repository), 1);
}
