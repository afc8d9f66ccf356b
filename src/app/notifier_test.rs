//! Tests for ChangeNotifier pub/sub system.

use super::notifier::{ChangeNotifier, UpdateMessage};

#[tokio::test]
async fn test_multiple_subscribers_receive_same_message() {
    let notifier = ChangeNotifier::new();
    let mut sub1 = notifier.subscribe();
    let mut sub2 = notifier.subscribe();

    let msg = UpdateMessage::ThemeChanged { is_dark_mode: true };

    notifier.notify(msg.clone());

    assert_eq!(sub1.recv().await.unwrap(), msg);
    assert_eq!(sub2.recv().await.unwrap(), msg);
}

#[tokio::test]
async fn test_notify_with_no_subscribers_does_not_panic() {
    let notifier = ChangeNotifier::new();

    // Should not panic
    notifier.notify(UpdateMessage::TaskDeleted { task_id: 3 });
}

#[tokio::test]
async fn test_messages_are_serializable() {
    let msg = UpdateMessage::TaskCreated { task_id: 12 };

    let json = serde_json::to_string(&msg).unwrap();
    assert_eq!(json, r#"{"type":"TaskCreated","data":{"task_id":12}}"#);

    let theme = serde_json::to_string(&UpdateMessage::ThemeChanged { is_dark_mode: false }).unwrap();
    assert_eq!(theme, r#"{"type":"ThemeChanged","data":{"is_dark_mode":false}}"#);
}

#[tokio::test]
async fn test_subscriber_receives_multiple_messages_in_order() {
    let notifier = ChangeNotifier::new();
    let mut sub = notifier.subscribe();

    let msg1 = UpdateMessage::TaskCreated { task_id: 1 };
    let msg2 = UpdateMessage::TaskUpdated { task_id: 1 };
    let msg3 = UpdateMessage::TaskDeleted { task_id: 1 };

    notifier.notify(msg1.clone());
    notifier.notify(msg2.clone());
    notifier.notify(msg3.clone());

    assert_eq!(sub.recv().await.unwrap(), msg1);
    assert_eq!(sub.recv().await.unwrap(), msg2);
    assert_eq!(sub.recv().await.unwrap(), msg3);
}

#[tokio::test]
async fn test_late_subscriber_does_not_receive_old_messages() {
    let notifier = ChangeNotifier::new();

    notifier.notify(UpdateMessage::ThemeChanged { is_dark_mode: true });

    let mut sub = notifier.subscribe();

    let new_msg = UpdateMessage::ThemeChanged {
        is_dark_mode: false,
    };
    notifier.notify(new_msg.clone());

    assert_eq!(sub.recv().await.unwrap(), new_msg);
    assert!(sub.try_recv().is_err());
}
