//! Notices
//!
//! Short confirmation or error messages shown after an action. Each new
//! notice supersedes the previous one and restarts its dismiss countdown.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Mutex;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub text: String,
    pub tone: Tone,
}

impl Notice {
    pub fn success(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Success,
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            tone: Tone::Error,
        }
    }

    pub fn is_error(&self) -> bool {
        self.tone == Tone::Error
    }
}

/// Handle returned by [`NoticeBoard::show`], redeemed by the dismiss timer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeTicket(u64);

/// Holds the single visible notice
#[derive(Debug, Default)]
pub struct NoticeBoard {
    generation: AtomicU64,
    current: Mutex<Option<(NoticeTicket, Notice)>>,
}

impl NoticeBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the visible notice; the returned ticket dismisses only this one
    pub fn show(&self, notice: Notice) -> NoticeTicket {
        let ticket = NoticeTicket(self.generation.fetch_add(1, Ordering::SeqCst) + 1);
        if let Ok(mut current) = self.current.lock() {
            *current = Some((ticket, notice));
        }
        ticket
    }

    /// Clear the notice if `ticket` is still the latest; false if superseded
    pub fn dismiss(&self, ticket: NoticeTicket) -> bool {
        let Ok(mut current) = self.current.lock() else {
            return false;
        };
        match current.as_ref() {
            Some((shown, _)) if *shown == ticket => {
                *current = None;
                true
            }
            _ => false,
        }
    }

    pub fn current(&self) -> Option<Notice> {
        self.current
            .lock()
            .ok()
            .and_then(|current| current.as_ref().map(|(_, notice)| notice.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dismiss_current() {
        let board = NoticeBoard::new();
        let ticket = board.show(Notice::success("Item pinned!"));
        assert_eq!(board.current().unwrap().text, "Item pinned!");
        assert!(board.dismiss(ticket));
        assert!(board.current().is_none());
        assert!(!board.dismiss(ticket));
    }

    #[test]
    fn test_newer_notice_restarts_countdown() {
        let board = NoticeBoard::new();
        let first = board.show(Notice::success("Item archived!"));
        let second = board.show(Notice::error("Failed to save changes"));

        // The first timer fires but must not hide the second notice
        assert!(!board.dismiss(first));
        assert_eq!(board.current(), Some(Notice::error("Failed to save changes")));
        assert!(board.dismiss(second));
    }
}
