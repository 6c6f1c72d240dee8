//! Notification Banner State
//!
//! At most one notice is visible. A newer notice replaces the old one, and
//! each notice's timer only ever clears that same notice.

use leptos::prelude::*;
use leptos::task::spawn_local;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    /// In-progress / informational
    Warning,
    Danger,
}

impl NoticeKind {
    pub fn css(&self) -> &'static str {
        match self {
            NoticeKind::Success => "alert alert-success",
            NoticeKind::Warning => "alert alert-warning",
            NoticeKind::Danger => "alert alert-danger",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            NoticeKind::Success => "✔",
            NoticeKind::Warning => "ℹ",
            NoticeKind::Danger => "⚠",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub id: u64,
    pub kind: NoticeKind,
    pub message: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct NoticeBoard {
    current: Option<Notice>,
    next_id: u64,
}

impl NoticeBoard {
    /// Replace whatever is showing; returns the id to expire later
    pub fn post(&mut self, kind: NoticeKind, message: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.current = Some(Notice { id: self.next_id, kind, message: message.into() });
        self.next_id
    }

    /// Clear the notice only if it is still the one with `id`
    pub fn expire(&mut self, id: u64) {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
        }
    }

    pub fn current(&self) -> Option<&Notice> {
        self.current.as_ref()
    }
}

/// Anything that can show a notice to the user
pub trait Notify {
    fn notify(&self, kind: NoticeKind, message: String);
}

/// Leptos-side notifier backed by a signal
#[derive(Clone, Copy)]
pub struct Notifier {
    board: RwSignal<NoticeBoard>,
    ttl_ms: u32,
}

impl Notifier {
    pub fn new(ttl_ms: u32) -> Self {
        Self { board: RwSignal::new(NoticeBoard::default()), ttl_ms }
    }

    pub fn current(&self) -> Option<Notice> {
        self.board.with(|b| b.current().cloned())
    }

    pub fn dismiss(&self) {
        self.board.update(|b| b.current = None);
    }
}

impl Notify for Notifier {
    fn notify(&self, kind: NoticeKind, message: String) {
        let mut id = 0;
        self.board.update(|b| id = b.post(kind, message));

        let board = self.board;
        let ttl_ms = self.ttl_ms;
        spawn_local(async move {
            gloo_timers::future::TimeoutFuture::new(ttl_ms).await;
            board.update(|b| b.expire(id));
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_notice_replaces_old() {
        let mut board = NoticeBoard::default();
        board.post(NoticeKind::Warning, "Syncing products...");
        board.post(NoticeKind::Success, "Synced 3 products");
        let current = board.current().unwrap();
        assert_eq!(current.kind, NoticeKind::Success);
        assert_eq!(current.message, "Synced 3 products");
    }

    #[test]
    fn test_stale_expiry_keeps_newer_notice() {
        let mut board = NoticeBoard::default();
        let first = board.post(NoticeKind::Warning, "one");
        let second = board.post(NoticeKind::Danger, "two");

        board.expire(first);
        assert_eq!(board.current().map(|n| n.id), Some(second));

        board.expire(second);
        assert!(board.current().is_none());
    }
}
