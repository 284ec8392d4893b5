//! Toast notifications: transient, self-expiring messages.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

/// Display duration used by the sales workflow.
pub const DEFAULT_TOAST_DURATION: Duration = Duration::from_millis(3000);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastStatus {
    Success,
    Error,
    Warning,
    Info,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ToastPosition {
    #[default]
    Top,
    Bottom,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub status: ToastStatus,
    pub position: ToastPosition,
    pub duration: Duration,
    pub description: Option<String>,
    pub shown_at: Instant,
}

impl Toast {
    pub fn is_expired(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.shown_at) >= self.duration
    }
}

/// Queue of visible toasts, oldest first.
#[derive(Debug, Default)]
pub struct Toasts {
    items: VecDeque<Toast>,
    next_id: u64,
}

impl Toasts {
    pub fn new() -> Self {
        Self::default()
    }

    /// Show a toast at the top for [`DEFAULT_TOAST_DURATION`].
    pub fn push(
        &mut self,
        title: impl Into<String>,
        status: ToastStatus,
        description: Option<String>,
    ) -> u64 {
        self.push_at(title, status, description, Instant::now())
    }

    pub fn push_at(
        &mut self,
        title: impl Into<String>,
        status: ToastStatus,
        description: Option<String>,
        now: Instant,
    ) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        let toast = Toast {
            id,
            title: title.into(),
            status,
            position: ToastPosition::Top,
            duration: DEFAULT_TOAST_DURATION,
            description,
            shown_at: now,
        };
        tracing::debug!(id, status = ?toast.status, title = %toast.title, "Toast");
        self.items.push_back(toast);
        id
    }

    pub fn success(&mut self, title: impl Into<String>) -> u64 {
        self.push(title, ToastStatus::Success, None)
    }

    pub fn error(&mut self, title: impl Into<String>, description: impl Into<String>) -> u64 {
        self.push(title, ToastStatus::Error, Some(description.into()))
    }

    pub fn dismiss(&mut self, id: u64) {
        self.items.retain(|t| t.id != id);
    }

    /// Remove toasts whose duration has elapsed at `now`.
    pub fn prune(&mut self, now: Instant) {
        self.items.retain(|t| !t.is_expired(now));
    }

    pub fn visible(&self) -> impl Iterator<Item = &Toast> {
        self.items.iter()
    }

    pub fn latest(&self) -> Option<&Toast> {
        self.items.back()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_defaults() {
        let mut toasts = Toasts::new();
        toasts.success("success");
        let t = toasts.latest().unwrap();
        assert_eq!(t.status, ToastStatus::Success);
        assert_eq!(t.position, ToastPosition::Top);
        assert_eq!(t.duration, Duration::from_millis(3000));
        assert!(t.description.is_none());
    }

    #[test]
    fn test_prune_after_duration() {
        let mut toasts = Toasts::new();
        let start = Instant::now();
        toasts.push_at("a", ToastStatus::Info, None, start);
        toasts.prune(start + Duration::from_millis(2999));
        assert_eq!(toasts.len(), 1);
        toasts.prune(start + Duration::from_millis(3000));
        assert!(toasts.is_empty());
    }

    #[test]
    fn test_dismiss_by_id() {
        let mut toasts = Toasts::new();
        let a = toasts.success("a");
        toasts.error("b", "boom");
        toasts.dismiss(a);
        assert_eq!(toasts.len(), 1);
        assert_eq!(toasts.latest().unwrap().description.as_deref(), Some("boom"));
    }
}
