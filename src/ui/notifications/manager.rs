// SPDX-License-Identifier: MPL-2.0
//! Notification lifecycle management: queuing, display limits, and
//! auto-dismiss timing.

use super::notification::{Notification, NotificationId};
use std::collections::VecDeque;

/// Maximum number of toasts visible at once; the rest wait in the queue.
const MAX_VISIBLE: usize = 3;

/// Messages emitted by the toast overlay.
#[derive(Debug, Clone)]
pub enum Message {
    Dismiss(NotificationId),
}

#[derive(Debug, Default)]
pub struct Manager {
    visible: VecDeque<Notification>,
    queue: VecDeque<Notification>,
}

impl Manager {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Shows the notification immediately if there is room, otherwise queues
    /// it until a visible slot frees up.
    pub fn push(&mut self, notification: Notification) {
        if self.visible.len() < MAX_VISIBLE {
            self.visible.push_front(notification);
        } else {
            self.queue.push_back(notification);
        }
    }

    /// Removes a notification wherever it currently lives.
    pub fn dismiss(&mut self, id: NotificationId) -> bool {
        if let Some(pos) = self.visible.iter().position(|n| n.id() == id) {
            self.visible.remove(pos);
            self.promote();
            return true;
        }
        if let Some(pos) = self.queue.iter().position(|n| n.id() == id) {
            self.queue.remove(pos);
            return true;
        }
        false
    }

    /// Drops expired toasts; call from the periodic app tick.
    pub fn tick(&mut self) {
        let expired: Vec<NotificationId> = self
            .visible
            .iter()
            .filter(|n| n.is_expired())
            .map(Notification::id)
            .collect();
        for id in expired {
            self.dismiss(id);
        }
    }

    pub fn handle_message(&mut self, message: &Message) {
        match message {
            Message::Dismiss(id) => {
                self.dismiss(*id);
            }
        }
    }

    pub fn visible(&self) -> impl Iterator<Item = &Notification> {
        self.visible.iter()
    }

    #[must_use]
    pub fn has_notifications(&self) -> bool {
        !self.visible.is_empty() || !self.queue.is_empty()
    }

    /// Drops everything, visible and queued.
    pub fn clear(&mut self) {
        self.visible.clear();
        self.queue.clear();
    }

    fn promote(&mut self) {
        while self.visible.len() < MAX_VISIBLE {
            match self.queue.pop_front() {
                Some(notification) => self.visible.push_back(notification),
                None => break,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_empty() {
        let manager = Manager::new();
        assert!(!manager.has_notifications());
    }

    #[test]
    fn overflow_goes_to_queue() {
        let mut manager = Manager::new();
        for i in 0..MAX_VISIBLE {
            manager.push(Notification::info(format!("toast-{i}")));
        }
        manager.push(Notification::info("queued"));

        assert_eq!(manager.visible().count(), MAX_VISIBLE);
        assert!(manager.has_notifications());
    }

    #[test]
    fn dismissing_a_visible_toast_promotes_from_queue() {
        let mut manager = Manager::new();
        let mut first_id = None;
        for i in 0..MAX_VISIBLE {
            let n = Notification::info(format!("toast-{i}"));
            if i == 0 {
                first_id = Some(n.id());
            }
            manager.push(n);
        }
        manager.push(Notification::warning("queued"));

        assert!(manager.dismiss(first_id.unwrap()));
        assert_eq!(manager.visible().count(), MAX_VISIBLE);
        assert!(manager
            .visible()
            .any(|n| n.message_key() == "queued"));
    }

    #[test]
    fn dismiss_unknown_id_is_false() {
        let mut manager = Manager::new();
        let orphan = Notification::info("never-pushed");
        assert!(!manager.dismiss(orphan.id()));
    }

    #[test]
    fn tick_keeps_errors_until_dismissed() {
        let mut manager = Manager::new();
        let error = Notification::error("notification-icon-save-failed");
        let id = error.id();
        manager.push(error);

        manager.tick();
        assert_eq!(manager.visible().count(), 1);

        manager.dismiss(id);
        assert!(!manager.has_notifications());
    }

    #[test]
    fn clear_empties_both_lanes() {
        let mut manager = Manager::new();
        for i in 0..(MAX_VISIBLE + 2) {
            manager.push(Notification::info(format!("toast-{i}")));
        }
        manager.clear();
        assert!(!manager.has_notifications());
    }
}
