//! Mount identifiers.
//!
//! Every time a view that owns deferred work (a reveal timer, a fetch) is
//! created, it receives a fresh [`MountId`]. Deferred results carry the id
//! they were scheduled for and are dropped when it no longer matches, which
//! is how results for destroyed or recreated views are ignored.

use std::fmt;

/// Identifies one mount of a view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MountId(u64);

impl fmt::Display for MountId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Hands out mount ids that are never reused within a run.
#[derive(Debug, Default)]
pub struct MountIds {
    next: u64,
}

impl MountIds {
    pub fn new() -> Self {
        Self::default()
    }

    /// Allocate the next id.
    pub fn next_id(&mut self) -> MountId {
        self.next += 1;
        MountId(self.next)
    }
}
