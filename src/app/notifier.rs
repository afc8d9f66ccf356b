//! Change notification system for broadcasting store updates to views.

use serde::{Deserialize, Serialize};
use tokio::sync::broadcast;

/// Messages broadcast after tasks or the theme preference change.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", content = "data")]
pub enum UpdateMessage {
    // Tasks
    TaskCreated { task_id: i64 },
    TaskUpdated { task_id: i64 },
    TaskDeleted { task_id: i64 },

    // Theme
    ThemeChanged { is_dark_mode: bool },
}

/// Pub/sub notifier for broadcasting changes to all subscribers.
#[derive(Clone)]
pub struct ChangeNotifier {
    tx: broadcast::Sender<UpdateMessage>,
}

impl Default for ChangeNotifier {
    fn default() -> Self {
        Self::new()
    }
}

impl ChangeNotifier {
    /// Create a new ChangeNotifier with a buffer of 100 messages.
    pub fn new() -> Self {
        let (tx, _rx) = broadcast::channel(100);
        Self { tx }
    }

    /// Subscribe to receive update notifications.
    pub fn subscribe(&self) -> broadcast::Receiver<UpdateMessage> {
        self.tx.subscribe()
    }

    /// Broadcast an update message to all subscribers.
    pub fn notify(&self, msg: UpdateMessage) {
        let _ = self.tx.send(msg);
    }
}
