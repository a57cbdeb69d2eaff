//! Delivery of interpreter snapshots to views.

use super::projection::{TransitionProjection, TransitionView};
use crate::core::MachineSnapshot;
use std::sync::Arc;
use thiserror::Error;
use tokio::sync::watch;

/// The publishing side was dropped
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
#[error("Snapshot feed closed")]
pub struct FeedClosed;

/// Publisher owned by the interpreter side.
///
/// Each publish replaces the previous snapshot; subscribers only ever see the
/// most recent one.
#[derive(Debug)]
pub struct SnapshotFeed {
    tx: watch::Sender<Option<Arc<MachineSnapshot>>>,
}

impl SnapshotFeed {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    /// Replace the current snapshot.
    pub fn publish(&self, snapshot: MachineSnapshot) {
        self.tx.send_replace(Some(Arc::new(snapshot)));
    }

    /// Withdraw the snapshot, e.g. when the simulated service stops.
    pub fn clear(&self) {
        self.tx.send_replace(None);
    }

    pub fn current(&self) -> Option<Arc<MachineSnapshot>> {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> SnapshotSubscription {
        SnapshotSubscription {
            rx: self.tx.subscribe(),
        }
    }
}

impl Default for SnapshotFeed {
    fn default() -> Self {
        Self::new()
    }
}

/// Receiving side held by a view.
#[derive(Debug, Clone)]
pub struct SnapshotSubscription {
    rx: watch::Receiver<Option<Arc<MachineSnapshot>>>,
}

impl SnapshotSubscription {
    /// Most recent snapshot, if any.
    pub fn latest(&self) -> Option<Arc<MachineSnapshot>> {
        self.rx.borrow().clone()
    }

    /// Wait for the next replacement and return it.
    pub async fn changed(&mut self) -> Result<Option<Arc<MachineSnapshot>>, FeedClosed> {
        self.rx.changed().await.map_err(|_| FeedClosed)?;
        Ok(self.rx.borrow_and_update().clone())
    }

    /// Project `view` against the most recent snapshot.
    pub fn project(&self, view: &TransitionView) -> Option<TransitionProjection> {
        let latest = self.latest();
        view.project(latest.as_deref())
    }
}
