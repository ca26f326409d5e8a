//! Notification sink for observable demo side effects.
//!
//! [`Notifier`] is what handlers and demos report through. [`TracingNotifier`] logs each message;
//! [`RecordingNotifier`] keeps them so callers can assert on what was reported.

use std::sync::{Arc, Mutex};

use tracing::info;

/// Receives a human-readable message each time something observable happens. Never blocks on
/// acknowledgment.
pub trait Notifier: Send + Sync {
    fn notify(&self, message: &str);
}

/// Emits every notification as an info-level tracing event.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingNotifier;

impl Notifier for TracingNotifier {
    fn notify(&self, message: &str) {
        info!(notification = %message, "notify");
    }
}

/// Collects notifications in order. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct RecordingNotifier {
    messages: Arc<Mutex<Vec<String>>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    /// Copy of everything recorded so far, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.messages
            .lock()
            .map(|m| m.clone())
            .unwrap_or_else(|poisoned| poisoned.into_inner().clone())
    }

    pub fn len(&self) -> usize {
        self.messages
            .lock()
            .map(|m| m.len())
            .unwrap_or_else(|poisoned| poisoned.into_inner().len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, message: &str) {
        let mut messages = self
            .messages
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        messages.push(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_notifier_keeps_order() {
        let notifier = RecordingNotifier::new();
        notifier.notify("first");
        notifier.notify("second");
        assert_eq!(notifier.messages(), vec!["first", "second"]);
    }

    #[test]
    fn test_recording_notifier_clones_share_buffer() {
        let notifier = RecordingNotifier::new();
        let shared = notifier.clone();
        shared.notify("hello");
        assert_eq!(notifier.len(), 1);
        assert!(!notifier.is_empty());
    }

    #[test]
    fn test_recording_notifier_len_tracks_each_message() {
        let notifier = RecordingNotifier::new();
        assert_eq!(notifier.len(), 0);
        assert!(notifier.is_empty());
        notifier.notify("a");
        notifier.notify("b");
        notifier.notify("c");
        assert_eq!(notifier.len(), 3);
        assert_eq!(notifier.len(), notifier.messages().len());
    }

    #[test]
    fn test_tracing_notifier_does_not_panic_without_subscriber() {
        TracingNotifier.notify("nobody listening");
    }
}
