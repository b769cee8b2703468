use std::sync::{Mutex, PoisonError};
use tracing::error;

/// A user-facing failure notification.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub title: String,
    pub description: String,
}

impl Notice {
    pub fn failure(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
        }
    }
}

/// Sink for notifications raised by the invoke workflow.
pub trait Reporter: Send + Sync {
    fn report(&self, notice: &Notice);
}

/// Writes notices to the tracing subscriber.
pub struct TracingReporter;

impl TracingReporter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TracingReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter for TracingReporter {
    fn report(&self, notice: &Notice) {
        error!(title = notice.title.as_str(), "{}", notice.description);
    }
}

/// Keeps every notice in memory, for callers that render them later.
#[derive(Default)]
pub struct CollectingReporter {
    notices: Mutex<Vec<Notice>>,
}

impl CollectingReporter {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn notices(&self) -> Vec<Notice> {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }
}

impl Reporter for CollectingReporter {
    fn report(&self, notice: &Notice) {
        self.notices
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push(notice.clone());
    }
}
