//! Per-snapshot view model of a transition edge.
//!
//! The external interpreter replaces its snapshot on every step. A
//! [`SnapshotFeed`] carries those snapshots to subscribers, and each delivery
//! is turned into a fresh [`TransitionProjection`]. Projections are never
//! reused across snapshots.

mod feed;
mod projection;

pub use feed::{FeedClosed, SnapshotFeed, SnapshotSubscription};
pub use projection::{TransitionProjection, TransitionView};
