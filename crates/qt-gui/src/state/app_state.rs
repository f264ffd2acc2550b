//! Application-level state.
//!
//! This module contains `AppState` which is the root of all state.

use std::path::PathBuf;

use chrono::{DateTime, Local};
use qt_client::ApiClient;
use qt_model::{DataModel, History, Location, Report, ReportId};

use super::metrics::MetricsState;
use super::mount::{MountId, MountIds};
use super::settings::Settings;
use super::subjects::SubjectsState;
use crate::error::GuiError;

/// The two views of a report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Tab {
    /// Subjects with their metric tables.
    #[default]
    Subjects,
    /// One card per metric with a search box.
    Metrics,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Subjects, Tab::Metrics];

    pub fn label(self) -> &'static str {
        match self {
            Self::Subjects => "Subjects",
            Self::Metrics => "Metrics",
        }
    }
}

/// The mounted view.
///
/// Only one of the two report views exists at a time; the other one's state
/// is dropped when switching tabs.
#[derive(Debug, Clone, Default)]
pub enum ViewState {
    /// Nothing to show yet (first load pending or failed).
    #[default]
    Waiting,
    /// The server has no reports.
    NoReports,
    /// Subjects view of the current report.
    Subjects(SubjectsState),
    /// Metrics view of the current report.
    Metrics(MetricsState),
}

/// Top-level application state.
pub struct AppState {
    /// Application settings (persisted).
    pub settings: Settings,
    /// Where `settings` is saved.
    pub settings_path: PathBuf,
    /// Server client; `None` when the configured URLs are unusable.
    pub client: Option<ApiClient>,
    /// Report being shown.
    pub report_uuid: Option<ReportId>,
    /// All reports, as last fetched.
    pub reports: Vec<Report>,
    /// Type catalog, as last fetched.
    pub datamodel: DataModel,
    /// Location of the current report, including the view options.
    pub location: Location,
    /// Selected tab.
    pub tab: Tab,
    /// Mounted view.
    pub view: ViewState,
    /// Error shown in the banner.
    pub error: Option<GuiError>,
    /// Whether a reload is in flight.
    pub is_loading: bool,
    /// Generation of the most recent reload; older results are dropped.
    pub reload_generation: Option<MountId>,
    /// When the reports were last fetched.
    pub loaded_at: Option<DateTime<Local>>,
    /// Source of mount ids for views and cards.
    pub mount_ids: MountIds,
}

impl AppState {
    /// Create new app state with loaded settings.
    pub fn new(settings: Settings, settings_path: PathBuf, client: Option<ApiClient>) -> Self {
        Self {
            location: Location::new(settings.client.api_url.clone(), ""),
            settings,
            settings_path,
            client,
            report_uuid: None,
            reports: Vec::new(),
            datamodel: DataModel::default(),
            tab: Tab::default(),
            view: ViewState::default(),
            error: None,
            is_loading: false,
            reload_generation: None,
            loaded_at: None,
            mount_ids: MountIds::new(),
        }
    }

    /// The report being shown, if it has been fetched.
    pub fn current_report(&self) -> Option<&Report> {
        let report_uuid = self.report_uuid.as_ref()?;
        self.reports.iter().find(|r| &r.report_uuid == report_uuid)
    }

    /// Point the location at a report, keeping the query string.
    pub fn set_report(&mut self, report_uuid: ReportId) {
        let base = report_location(&self.settings.client.api_url, &report_uuid);
        self.location = Location::new(base, self.location.search().to_string());
        self.report_uuid = Some(report_uuid);
    }

    /// Pick the report to show after the reports were fetched.
    ///
    /// Keeps the current report if it still exists, else falls back to the
    /// first one. Returns whether the selection changed.
    pub fn select_report_after_load(&mut self) -> bool {
        if self.current_report().is_some() {
            return false;
        }
        if let Some(report_uuid) = &self.report_uuid {
            tracing::warn!(report = %report_uuid, "Report not found, showing the first report");
        }
        match self.reports.first().map(|r| r.report_uuid.clone()) {
            Some(first) => {
                self.set_report(first);
                true
            }
            None => {
                self.report_uuid = None;
                false
            }
        }
    }

    /// Show an error in the banner, replacing any previous one.
    pub fn show_error(&mut self, error: GuiError) {
        tracing::warn!(%error, "Showing error");
        self.error = Some(error);
    }

    /// Remember the current report for the next start.
    ///
    /// Only `general.last_report` is written back; the file is re-read so
    /// command-line overrides held in `settings` never reach the disk. A
    /// settings file that cannot be read is left untouched.
    pub fn remember_report(&mut self) {
        if self.settings.general.last_report == self.report_uuid {
            return;
        }
        self.settings.general.last_report = self.report_uuid.clone();

        let (mut stored, load_error) = Settings::load_from(&self.settings_path);
        if let Some(error) = load_error {
            tracing::warn!(%error, "Not saving the last report over an unreadable settings file");
            return;
        }
        stored.general.last_report = self.report_uuid.clone();
        if let Err(error) = stored.save_to(&self.settings_path) {
            self.show_error(error);
        }
    }

    /// Start a new reload generation and mark a load as in flight.
    pub fn begin_reload(&mut self) -> MountId {
        let generation = self.mount_ids.next_id();
        self.reload_generation = Some(generation);
        self.is_loading = true;
        generation
    }

    /// Whether a fetch result belongs to the most recent reload.
    pub fn is_current_reload(&self, generation: MountId) -> bool {
        self.reload_generation == Some(generation)
    }
}

/// Location of a report view.
pub fn report_location(api_url: &str, report_uuid: &ReportId) -> String {
    format!("{}/{}", api_url.trim_end_matches('/'), report_uuid)
}
