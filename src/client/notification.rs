//! Notification banner state.
//!
//! At most one notification exists at a time. Showing a new one replaces the
//! current one immediately. Dismissal, explicit or after [`AUTO_DISMISS`],
//! first moves the notification to [`NotificationPhase::Leaving`] for
//! [`SLIDE_OUT`] so the UI can animate it out, then clears it.

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;

/// Time a notification stays visible before dismissing itself.
pub const AUTO_DISMISS: Duration = Duration::from_millis(5000);

/// Duration of the slide-out phase before removal.
pub const SLIDE_OUT: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationKind {
    Success,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NotificationPhase {
    Visible,
    Leaving,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notification {
    pub id: u64,
    pub kind: NotificationKind,
    pub message: String,
    pub phase: NotificationPhase,
}

type Slot = Arc<watch::Sender<Option<Notification>>>;

struct Inner {
    slot: Slot,
    next_id: AtomicU64,
    auto_dismiss: Mutex<Option<JoinHandle<()>>>,
}

/// Publishes the current notification to observers.
///
/// Cheap to clone; clones share the same banner. Timers run on the tokio
/// runtime, so [`show`](Self::show) and [`dismiss`](Self::dismiss) must be
/// called from within one.
#[derive(Clone)]
pub struct NotificationCenter {
    inner: Arc<Inner>,
}

impl NotificationCenter {
    pub fn new() -> Self {
        let (slot, _) = watch::channel(None);

        Self {
            inner: Arc::new(Inner {
                slot: Arc::new(slot),
                next_id: AtomicU64::new(1),
                auto_dismiss: Mutex::new(None),
            }),
        }
    }

    /// Registers an observer of the banner state.
    pub fn subscribe(&self) -> watch::Receiver<Option<Notification>> {
        self.inner.slot.subscribe()
    }

    /// Returns the notification currently shown, if any.
    pub fn current(&self) -> Option<Notification> {
        self.inner.slot.borrow().clone()
    }

    pub fn success(&self, message: impl Into<String>) -> u64 {
        self.show(NotificationKind::Success, message)
    }

    pub fn error(&self, message: impl Into<String>) -> u64 {
        self.show(NotificationKind::Error, message)
    }

    /// Replaces any current notification and schedules its auto-dismissal.
    ///
    /// Returns the id of the new notification.
    pub fn show(&self, kind: NotificationKind, message: impl Into<String>) -> u64 {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);

        self.inner.slot.send_replace(Some(Notification {
            id,
            kind,
            message: message.into(),
            phase: NotificationPhase::Visible,
        }));

        let slot = self.inner.slot.clone();
        let timer = tokio::spawn(async move {
            tokio::time::sleep(AUTO_DISMISS).await;
            begin_dismiss(&slot, id);
        });

        if let Ok(mut pending) = self.inner.auto_dismiss.lock()
            && let Some(previous) = pending.replace(timer)
        {
            previous.abort();
        }

        id
    }

    /// Starts the slide-out of notification `id`.
    ///
    /// Returns `false` if `id` is no longer shown or is already leaving.
    pub fn dismiss(&self, id: u64) -> bool {
        begin_dismiss(&self.inner.slot, id)
    }

    /// Starts the slide-out of whatever notification is shown.
    pub fn dismiss_current(&self) -> bool {
        match self.current() {
            Some(notification) => self.dismiss(notification.id),
            None => false,
        }
    }
}

impl Default for NotificationCenter {
    fn default() -> Self {
        Self::new()
    }
}

fn begin_dismiss(slot: &Slot, id: u64) -> bool {
    let started = slot.send_if_modified(|current| match current {
        Some(n) if n.id == id && n.phase == NotificationPhase::Visible => {
            n.phase = NotificationPhase::Leaving;
            true
        }
        _ => false,
    });

    if started {
        let slot = slot.clone();
        tokio::spawn(async move {
            tokio::time::sleep(SLIDE_OUT).await;
            slot.send_if_modified(|current| {
                if current.as_ref().is_some_and(|n| n.id == id) {
                    *current = None;
                    true
                } else {
                    false
                }
            });
        });
    }

    started
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    fn phase(center: &NotificationCenter) -> Option<NotificationPhase> {
        center.current().map(|n| n.phase)
    }

    #[tokio::test(start_paused = true)]
    async fn test_auto_dismiss_timeline() {
        let center = NotificationCenter::new();
        center.success("Thanks!");

        sleep(Duration::from_millis(4900)).await;
        assert_eq!(phase(&center), Some(NotificationPhase::Visible));

        sleep(Duration::from_millis(200)).await;
        assert_eq!(phase(&center), Some(NotificationPhase::Leaving));

        sleep(Duration::from_millis(300)).await;
        assert_eq!(center.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_new_notification_replaces_current() {
        let center = NotificationCenter::new();
        let first = center.error("first");

        sleep(Duration::from_millis(1000)).await;
        let second = center.success("second");

        let current = center.current().unwrap();
        assert_ne!(first, second);
        assert_eq!(current.id, second);
        assert_eq!(current.message, "second");

        // The first notification's timer no longer applies
        sleep(Duration::from_millis(4500)).await;
        assert_eq!(phase(&center), Some(NotificationPhase::Visible));

        sleep(Duration::from_millis(600)).await;
        assert_eq!(phase(&center), Some(NotificationPhase::Leaving));
    }

    #[tokio::test(start_paused = true)]
    async fn test_explicit_dismiss() {
        let center = NotificationCenter::new();
        let id = center.error("oops");

        assert!(center.dismiss(id));
        assert_eq!(phase(&center), Some(NotificationPhase::Leaving));

        // Already leaving
        assert!(!center.dismiss(id));

        sleep(SLIDE_OUT).await;
        sleep(Duration::from_millis(1)).await;
        assert_eq!(center.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn test_dismiss_unknown_id() {
        let center = NotificationCenter::new();
        assert!(!center.dismiss_current());

        let id = center.success("hi");
        assert!(!center.dismiss(id + 1));
        assert_eq!(phase(&center), Some(NotificationPhase::Visible));
    }

    #[tokio::test(start_paused = true)]
    async fn test_replacing_leaving_notification() {
        let center = NotificationCenter::new();
        let first = center.error("first");
        center.dismiss(first);

        let second = center.success("second");

        // The first slide-out must not remove the second notification
        sleep(Duration::from_millis(400)).await;
        let current = center.current().unwrap();
        assert_eq!(current.id, second);
        assert_eq!(current.phase, NotificationPhase::Visible);
    }

    #[tokio::test(start_paused = true)]
    async fn test_observer_sees_changes() {
        let center = NotificationCenter::new();
        let mut rx = center.subscribe();

        center.success("hello");
        rx.changed().await.unwrap();

        let seen = rx.borrow_and_update().clone().unwrap();
        assert_eq!(seen.kind, NotificationKind::Success);
        assert_eq!(seen.message, "hello");
    }
}
