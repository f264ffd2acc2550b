//! State of the subjects view.
//!
//! The subjects view renders a report's subjects in two stages and owns the
//! view options shared by every subject of the report. The state lives only
//! while the view is mounted; switching away drops it and switching back
//! creates a new one with a new [`MountId`].

use qt_model::{History, Report, StagedReveal, SubjectSlot, ViewOptions};

use super::mount::MountId;

/// Mounted subjects view.
#[derive(Debug, Clone)]
pub struct SubjectsState {
    mount: MountId,
    reveal: StagedReveal,
    options: ViewOptions,
}

impl SubjectsState {
    /// Mount the view.
    ///
    /// The caller is responsible for scheduling the reveal timer for `mount`.
    pub fn mount(mount: MountId, options: ViewOptions, initial_batch: usize) -> Self {
        tracing::debug!(%mount, ?options, "Mounting subjects view");
        Self {
            mount,
            reveal: StagedReveal::with_initial_batch(initial_batch),
            options,
        }
    }

    pub fn mount_id(&self) -> MountId {
        self.mount
    }

    pub fn options(&self) -> &ViewOptions {
        &self.options
    }

    pub fn is_revealed(&self) -> bool {
        self.reveal.is_revealed()
    }

    /// Apply an elapsed reveal timer.
    ///
    /// Timers scheduled for another mount are ignored. Returns whether the
    /// reveal state changed.
    pub fn on_reveal_elapsed(&mut self, mount: MountId) -> bool {
        if mount != self.mount {
            tracing::debug!(%mount, current = %self.mount, "Ignoring stale reveal timer");
            return false;
        }
        self.reveal.reveal()
    }

    /// Replace the hidden columns and write the options to the query string.
    pub fn set_hidden_columns(&mut self, hidden_columns: Vec<String>, history: &mut dyn History) {
        self.options.hidden_columns = hidden_columns;
        self.options.write_to(history);
    }

    /// Replace the hide flag and write the options to the query string.
    pub fn set_hide_metrics_not_requiring_action(&mut self, hide: bool, history: &mut dyn History) {
        self.options.hide_metrics_not_requiring_action = hide;
        self.options.write_to(history);
    }

    /// The subjects to render right now.
    pub fn slots<'a>(&self, report: &'a Report) -> Vec<SubjectSlot<'a>> {
        self.reveal.slots(report)
    }
}
