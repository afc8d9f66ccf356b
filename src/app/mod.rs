//! Application state and change notification.

mod notifier;
mod state;

#[cfg(test)]
mod notifier_test;

pub use notifier::{ChangeNotifier, UpdateMessage};
pub use state::AppState;
