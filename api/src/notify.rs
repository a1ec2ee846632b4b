use serde::Serialize;
use std::{
    collections::VecDeque,
    sync::{Arc, Mutex},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Variant {
    Default,
    Destructive,
}

/// A transient, user-visible message ("toast").
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub title: String,
    pub description: String,
    pub variant: Variant,
}

impl Notification {
    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Default,
        }
    }

    pub fn destructive(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            variant: Variant::Destructive,
        }
    }

    /// The single failure shape every store error is reported with.
    pub fn failure(description: impl Into<String>) -> Self {
        Self::destructive("Error", description)
    }
}

/// Most notifications kept while nobody drains the queue. Older ones are
/// dropped first.
pub const MAX_PENDING: usize = 50;

/// Pending notifications, shared by the collections and drained by whoever
/// presents them.
#[derive(Clone, Default)]
pub struct Notifier {
    pending: Arc<Mutex<VecDeque<Notification>>>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, notification: Notification) {
        // A poisoned queue only means a presenter panicked mid-drain.
        let mut pending = self
            .pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        if pending.len() >= MAX_PENDING {
            pending.pop_front();
        }
        pending.push_back(notification);
    }

    /// Take every pending notification, oldest first.
    pub fn drain(&self) -> Vec<Notification> {
        let mut pending = self
            .pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        pending.drain(..).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_empties_queue_in_order() {
        let notifier = Notifier::new();
        let handle = notifier.clone();

        handle.push(Notification::success("User created", "first"));
        handle.push(Notification::failure("second"));

        let drained = notifier.drain();
        assert_eq!(drained.len(), 2);
        assert_eq!(drained[0].description, "first");
        assert_eq!(drained[1].variant, Variant::Destructive);
        assert_eq!(drained[1].title, "Error");
        assert!(notifier.drain().is_empty());
    }

    #[test]
    fn test_undrained_queue_keeps_only_newest() {
        let notifier = Notifier::new();
        for i in 0..MAX_PENDING + 5 {
            notifier.push(Notification::success("Post published", i.to_string()));
        }

        let drained = notifier.drain();
        assert_eq!(drained.len(), MAX_PENDING);
        assert_eq!(drained[0].description, "5");
        assert_eq!(
            drained[MAX_PENDING - 1].description,
            (MAX_PENDING + 4).to_string()
        );
    }
}
