//! User-facing side effects requested by the wizard: transient notifications
//! and scrolling the form back to its top.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Mutex, PoisonError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Success,
    Warning,
    Error,
}

/// A transient, dismissible message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    pub fn new(level: NoticeLevel, message: impl Into<String>) -> Self {
        Self {
            level,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Info, message)
    }

    pub fn success(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Success, message)
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Warning, message)
    }

    pub fn error(message: impl Into<String>) -> Self {
        Self::new(NoticeLevel::Error, message)
    }
}

pub trait WizardSurface: Send + Sync {
    fn notify(&self, notice: Notice);

    fn scroll_to_top(&self) {}
}

/// Keeps every notice and counts scroll requests.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    notices: Mutex<Vec<Notice>>,
    scrolls: AtomicUsize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub fn last_notice(&self) -> Option<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .last()
            .cloned()
    }

    pub fn scroll_count(&self) -> usize {
        self.scrolls.load(Ordering::SeqCst)
    }

    pub fn clear(&self) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
        self.scrolls.store(0, Ordering::SeqCst);
    }
}

impl WizardSurface for RecordingSurface {
    fn notify(&self, notice: Notice) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice);
    }

    fn scroll_to_top(&self) {
        self.scrolls.fetch_add(1, Ordering::SeqCst);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_surface_keeps_order_and_counts_scrolls() {
        let surface = RecordingSurface::new();
        surface.notify(Notice::error("Please select a platform"));
        surface.scroll_to_top();
        surface.notify(Notice::success("Brand deal created successfully!"));

        assert_eq!(surface.notices().len(), 2);
        assert_eq!(surface.notices()[0].level, NoticeLevel::Error);
        assert_eq!(
            surface.last_notice(),
            Some(Notice::success("Brand deal created successfully!"))
        );
        assert_eq!(surface.scroll_count(), 1);

        surface.clear();
        assert!(surface.notices().is_empty());
        assert_eq!(surface.scroll_count(), 0);
    }
}
