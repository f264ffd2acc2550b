//! Staged reveal of long subject lists.
//!
//! Building every subject table of a large report at once delays the first
//! frame. The report view therefore shows only the first few subjects when it
//! is mounted and reveals the rest once a short delay has elapsed. The reveal
//! happens once per mount and is never undone.

use std::time::Duration;

use crate::ids::SubjectId;
use crate::report::{Report, Subject};

/// Number of subjects shown immediately on mount.
pub const INITIAL_BATCH: usize = 3;

/// Delay after mount before the remaining subjects are shown.
pub const REVEAL_DELAY: Duration = Duration::from_millis(50);

/// Reveal state of one mounted report view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StagedReveal {
    initial_batch: usize,
    revealed: bool,
}

impl Default for StagedReveal {
    fn default() -> Self {
        Self::new()
    }
}

impl StagedReveal {
    /// Fresh state for a new mount, using [`INITIAL_BATCH`].
    pub fn new() -> Self {
        Self::with_initial_batch(INITIAL_BATCH)
    }

    /// Fresh state for a new mount with a custom initial batch size.
    pub fn with_initial_batch(initial_batch: usize) -> Self {
        Self {
            initial_batch,
            revealed: false,
        }
    }

    /// Whether the delay has elapsed.
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    /// Mark the delay as elapsed. Returns `true` only on the first call.
    pub fn reveal(&mut self) -> bool {
        let changed = !self.revealed;
        self.revealed = true;
        changed
    }

    /// Whether the item at `index` is rendered.
    pub fn is_shown(&self, index: usize) -> bool {
        self.revealed || index < self.initial_batch
    }

    /// Number of items rendered out of `total`.
    pub fn shown_count(&self, total: usize) -> usize {
        if self.revealed {
            total
        } else {
            total.min(self.initial_batch)
        }
    }

    /// The subjects of `report` that are rendered, with their layout flags.
    pub fn slots<'a>(&self, report: &'a Report) -> Vec<SubjectSlot<'a>> {
        let last_index = report.subjects.len().checked_sub(1);
        report
            .subjects
            .iter()
            .enumerate()
            .filter(|(index, _)| self.is_shown(*index))
            .map(|(index, (subject_uuid, subject))| SubjectSlot {
                index,
                subject_uuid,
                subject,
                first_subject: index == 0,
                last_subject: Some(index) == last_index,
            })
            .collect()
    }
}

/// A subject that is rendered, with its position in the report.
#[derive(Debug, Clone, Copy)]
pub struct SubjectSlot<'a> {
    pub index: usize,
    pub subject_uuid: &'a SubjectId,
    pub subject: &'a Subject,
    /// True for the first subject of the report.
    pub first_subject: bool,
    /// True for the last subject of the report, even while it is not yet revealed.
    pub last_subject: bool,
}
