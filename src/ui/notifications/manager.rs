// SPDX-License-Identifier: MPL-2.0
//! Toast bookkeeping.
//!
//! At most [`MAX_VISIBLE`] toasts are on screen; later ones wait in a queue.
//! A toast's lifetime starts when it becomes visible, so queued toasts are
//! not lost to the timer while they wait.

use super::notification::{Notification, NotificationId, Severity};
use std::collections::VecDeque;
use std::time::Instant;

const MAX_VISIBLE: usize = 3;

#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug)]
struct Shown {
    id: NotificationId,
    notification: Notification,
    since: Instant,
}

#[derive(Debug, Default)]
pub struct Manager {
    /// Newest first.
    shown: VecDeque<Shown>,
    waiting: VecDeque<(NotificationId, Notification)>,
    next_id: u64,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues a toast, showing it at once when there is room.
    ///
    /// Warnings and errors are logged with their key.
    pub fn push(&mut self, notification: Notification) {
        self.enqueue(notification);
    }

    fn enqueue(&mut self, notification: Notification) -> NotificationId {
        match notification.severity() {
            Severity::Warning => log::warn!("Toast: {}", notification.message_key()),
            Severity::Error => log::error!("Toast: {}", notification.message_key()),
            Severity::Success | Severity::Info => log::debug!("Toast: {}", notification.message_key()),
        }

        let id = NotificationId(self.next_id);
        self.next_id += 1;

        if self.shown.len() < MAX_VISIBLE {
            self.shown.push_front(Shown {
                id,
                notification,
                since: Instant::now(),
            });
        } else {
            self.waiting.push_back((id, notification));
        }
        id
    }

    /// Removes a toast wherever it is. Returns whether it was found.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.shown.iter().position(|s| s.id == id) {
            self.shown.remove(pos);
            self.fill(Instant::now());
            true
        } else if let Some(pos) = self.waiting.iter().position(|(waiting, _)| *waiting == id) {
            self.waiting.remove(pos);
            true
        } else {
            false
        }
    }

    pub fn tick(&mut self) {
        self.expire(Instant::now());
    }

    /// Drops every visible toast whose lifetime has elapsed at `now`.
    fn expire(&mut self, now: Instant) {
        let before = self.shown.len();
        self.shown.retain(|s| {
            s.notification
                .severity()
                .lifetime()
                .is_none_or(|lifetime| now.duration_since(s.since) < lifetime)
        });
        if self.shown.len() != before {
            self.fill(now);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    /// Visible toasts, newest first.
    pub fn visible(&self) -> impl Iterator<Item = (NotificationId, &Notification)> {
        self.shown.iter().map(|s| (s.id, &s.notification))
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.shown.len()
    }

    #[must_use]
    pub fn queued_count(&self) -> usize {
        self.waiting.len()
    }

    /// Drives the tick subscription: true while anything is shown or waiting.
    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.shown.is_empty() || !self.waiting.is_empty()
    }

    fn fill(&mut self, now: Instant) {
        while self.shown.len() < MAX_VISIBLE {
            let Some((id, notification)) = self.waiting.pop_front() else {
                break;
            };
            self.shown.push_back(Shown {
                id,
                notification,
                since: now,
            });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn keys(manager: &Manager) -> Vec<&str> {
        manager.visible().map(|(_, n)| n.message_key()).collect()
    }

    #[test]
    fn overflow_waits_in_queue() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE + 2 {
            manager.push(Notification::info(format!("toast-{i}")));
        }
        assert_eq!(manager.visible_count(), MAX_VISIBLE);
        assert_eq!(manager.queued_count(), 2);
        assert_eq!(keys(&manager), vec!["toast-2", "toast-1", "toast-0"]);
    }

    #[test]
    fn dismissing_a_visible_toast_promotes_the_oldest_waiting() {
        let mut manager = Manager::new();
        let first = manager.enqueue(Notification::info("a"));
        manager.push(Notification::info("b"));
        manager.push(Notification::info("c"));
        manager.push(Notification::info("d"));
        manager.push(Notification::info("e"));

        assert!(manager.dismiss(first));
        assert_eq!(keys(&manager), vec!["c", "b", "d"]);
        assert_eq!(manager.queued_count(), 1);
    }

    #[test]
    fn queued_toasts_can_be_dismissed() {
        let mut manager = Manager::new();
        for key in ["a", "b", "c"] {
            manager.push(Notification::info(key));
        }
        let queued = manager.enqueue(Notification::info("d"));
        manager.handle_message(&Message::Dismiss(queued));
        assert_eq!(manager.queued_count(), 0);
        assert!(!manager.dismiss(queued));
    }

    #[test]
    fn expiry_follows_severity() {
        let mut manager = Manager::new();
        manager.push(Notification::error("notification-bookmarks-clear-error"));
        manager.push(Notification::warning("notification-drop-not-pdf"));
        manager.push(Notification::success("notification-image-saved"));

        let now = Instant::now();
        manager.expire(now);
        assert_eq!(manager.visible_count(), 3);

        manager.expire(now + Duration::from_secs(4));
        assert_eq!(
            keys(&manager),
            vec!["notification-drop-not-pdf", "notification-bookmarks-clear-error"]
        );

        manager.expire(now + Duration::from_secs(60));
        assert_eq!(keys(&manager), vec!["notification-bookmarks-clear-error"]);
        assert!(manager.has_notifications());
    }

    #[test]
    fn promoted_toast_gets_a_fresh_lifetime() {
        let mut manager = Manager::new();
        for key in ["a", "b", "c", "late"] {
            manager.push(Notification::info(key));
        }

        let later = Instant::now() + Duration::from_secs(4);
        manager.expire(later);
        assert_eq!(keys(&manager), vec!["late"]);

        manager.expire(later + Duration::from_secs(1));
        assert_eq!(keys(&manager), vec!["late"]);
    }
}
