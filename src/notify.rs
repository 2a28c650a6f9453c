//! Toast notifications. At most one notification exists at a time: `show`
//! evicts the current one synchronously before inserting the next. Each
//! toast walks `Entering → Visible → Leaving → removed` on timers, and the
//! timers of an evicted toast are tied to its id so they never touch its
//! successor.

use crate::config::NotificationTimings;
use serde::Serialize;
use std::{
    fmt,
    sync::{
        Arc,
        atomic::{AtomicU64, Ordering},
    },
};
use tokio::sync::watch;
use tracing::debug;

pub type NotificationId = u64;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
    #[default]
    Default,
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Success => "success",
            Self::Error => "error",
            Self::Info => "info",
            Self::Default => "default",
        };
        f.write_str(label)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    Entering,
    Visible,
    Leaving,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Notification {
    pub id: NotificationId,
    pub message: String,
    pub kind: NotificationKind,
    pub stage: Stage,
}

#[derive(Clone, Debug)]
pub struct NotificationPresenter {
    slot: Arc<watch::Sender<Option<Notification>>>,
    next_id: Arc<AtomicU64>,
    timings: NotificationTimings,
}

impl NotificationPresenter {
    #[must_use]
    pub fn new(timings: NotificationTimings) -> Self {
        let (slot, _) = watch::channel(None);
        Self {
            slot: Arc::new(slot),
            next_id: Arc::new(AtomicU64::new(1)),
            timings,
        }
    }

    /// Shows a notification, replacing any existing one. Must be called from
    /// within a tokio runtime since the lifecycle runs on timers.
    pub fn show(&self, message: impl Into<String>, kind: NotificationKind) -> NotificationId {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        let notification = Notification {
            id,
            message: message.into(),
            kind,
            stage: Stage::Entering,
        };
        debug!(id, %kind, "notification shown");
        self.slot.send_replace(Some(notification));

        let slot = self.slot.clone();
        let timings = self.timings;
        tokio::spawn(async move {
            tokio::time::sleep(timings.enter).await;
            if !advance(&slot, id, Stage::Visible) {
                return;
            }
            tokio::time::sleep(timings.display.saturating_sub(timings.enter)).await;
            if !advance(&slot, id, Stage::Leaving) {
                return;
            }
            tokio::time::sleep(timings.exit).await;
            if remove(&slot, id) {
                debug!(id, "notification expired");
            }
        });

        id
    }

    /// User-initiated close: removes the notification right away.
    pub fn dismiss(&self, id: NotificationId) -> bool {
        let removed = remove(&self.slot, id);
        if removed {
            debug!(id, "notification dismissed");
        }
        removed
    }

    #[must_use]
    pub fn current(&self) -> Option<Notification> {
        self.slot.borrow().clone()
    }

    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<Notification>> {
        self.slot.subscribe()
    }
}

impl Default for NotificationPresenter {
    fn default() -> Self {
        Self::new(NotificationTimings::default())
    }
}

/// Moves notification `id` to `stage`; false once it is gone or replaced.
fn advance(slot: &watch::Sender<Option<Notification>>, id: NotificationId, stage: Stage) -> bool {
    slot.send_if_modified(|current| match current {
        Some(notification) if notification.id == id => {
            notification.stage = stage;
            true
        }
        _ => false,
    })
}

fn remove(slot: &watch::Sender<Option<Notification>>, id: NotificationId) -> bool {
    slot.send_if_modified(|current| {
        if current.as_ref().is_some_and(|n| n.id == id) {
            *current = None;
            true
        } else {
            false
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::sleep;

    #[tokio::test(start_paused = true)]
    async fn lifecycle_enters_shows_leaves_and_expires() {
        let presenter = NotificationPresenter::default();
        let id = presenter.show("Saved", NotificationKind::Success);

        let current = presenter.current();
        assert_eq!(current.as_ref().map(|n| n.stage), Some(Stage::Entering));
        assert_eq!(current.as_ref().map(|n| n.id), Some(id));

        sleep(Duration::from_millis(150)).await;
        assert_eq!(presenter.current().map(|n| n.stage), Some(Stage::Visible));

        sleep(Duration::from_millis(4900)).await;
        assert_eq!(presenter.current().map(|n| n.stage), Some(Stage::Leaving));

        sleep(Duration::from_millis(300)).await;
        assert_eq!(presenter.current(), None);
    }

    #[tokio::test(start_paused = true)]
    async fn second_show_evicts_first() {
        let presenter = NotificationPresenter::default();
        let first = presenter.show("first", NotificationKind::Info);
        let second = presenter.show("second", NotificationKind::Error);
        assert_ne!(first, second);

        let current = presenter.current();
        assert_eq!(current.as_ref().map(|n| n.message.as_str()), Some("second"));
        assert_eq!(current.as_ref().map(|n| n.kind), Some(NotificationKind::Error));
        assert!(!presenter.dismiss(first));
    }

    #[tokio::test(start_paused = true)]
    async fn stale_timers_do_not_remove_successor() {
        let presenter = NotificationPresenter::default();
        presenter.show("first", NotificationKind::Info);

        sleep(Duration::from_millis(4000)).await;
        let second = presenter.show("second", NotificationKind::Success);

        // First toast's removal deadline (5300ms) passes here.
        sleep(Duration::from_millis(1500)).await;
        let current = presenter.current();
        assert_eq!(current.as_ref().map(|n| n.id), Some(second));
        assert_eq!(current.as_ref().map(|n| n.stage), Some(Stage::Visible));
    }

    #[tokio::test(start_paused = true)]
    async fn dismiss_removes_immediately() {
        let presenter = NotificationPresenter::default();
        let mut updates = presenter.subscribe();
        let id = presenter.show("bye", NotificationKind::Default);

        assert!(presenter.dismiss(id));
        assert_eq!(presenter.current(), None);
        assert!(updates.has_changed().unwrap_or(false));
        updates.mark_unchanged();
        assert!(!presenter.dismiss(id));
    }
}
