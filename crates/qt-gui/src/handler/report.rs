//! Report message handler.
//!
//! Handles:
//! - Fetching reports and the data model
//! - Report selection
//! - Tab switches, which unmount one view and mount the other

use chrono::Local;
use iced::Task;
use qt_client::ClientError;
use qt_model::{DataModel, History, Reports, ViewOptions};

use super::MessageHandler;
use super::metrics::sync_cards;
use crate::error::GuiError;
use crate::message::{Message, ReportMessage, SubjectsMessage};
use crate::service::{fetch_datamodel, fetch_reports, reveal_timer};
use crate::state::{AppState, MetricsState, SubjectsState, Tab, ViewState};

/// Handler for report-level messages.
pub struct ReportHandler;

impl MessageHandler<ReportMessage> for ReportHandler {
    fn handle(&self, state: &mut AppState, msg: ReportMessage) -> Task<Message> {
        match msg {
            ReportMessage::Reload => reload(state),

            ReportMessage::ReportsLoaded { generation, result } => {
                if !state.is_current_reload(generation) {
                    tracing::debug!(%generation, "Ignoring reports of a superseded reload");
                    return Task::none();
                }
                handle_reports_loaded(state, result)
            }

            ReportMessage::DataModelLoaded { generation, result } => {
                if !state.is_current_reload(generation) {
                    tracing::debug!(%generation, "Ignoring data model of a superseded reload");
                    return Task::none();
                }
                handle_datamodel_loaded(state, result);
                Task::none()
            }

            ReportMessage::Select(choice) => {
                if state.report_uuid.as_ref() == Some(&choice.report_uuid) {
                    return Task::none();
                }
                tracing::info!(report = %choice.report_uuid, title = %choice.title, "Opening report");
                state.set_report(choice.report_uuid);
                state.remember_report();
                mount_tab(state)
            }

            ReportMessage::ShowTab(tab) => {
                let mounted = matches!(
                    (&state.view, tab),
                    (ViewState::Subjects(_), Tab::Subjects) | (ViewState::Metrics(_), Tab::Metrics)
                );
                if mounted {
                    return Task::none();
                }
                state.tab = tab;
                mount_tab(state)
            }
        }
    }
}

/// Fetch the reports and the data model.
///
/// Each call starts a new generation; results of earlier, still running
/// reloads are dropped when they arrive.
pub fn reload(state: &mut AppState) -> Task<Message> {
    let Some(client) = state.client.clone() else {
        tracing::debug!("No usable server settings, not loading");
        return Task::none();
    };
    let generation = state.begin_reload();
    tracing::debug!(%generation, "Reloading reports");
    Task::batch([
        Task::perform(fetch_reports(client.clone()), move |result| {
            Message::from(ReportMessage::ReportsLoaded { generation, result })
        }),
        Task::perform(fetch_datamodel(client), move |result| {
            Message::from(ReportMessage::DataModelLoaded { generation, result })
        }),
    ])
}

fn handle_reports_loaded(
    state: &mut AppState,
    result: Result<Reports, ClientError>,
) -> Task<Message> {
    state.is_loading = false;

    let reports = match result {
        Ok(reports) => reports,
        Err(error) => {
            tracing::error!(%error, "Failed to load reports");
            state.show_error(GuiError::report_load(&error));
            return Task::none();
        }
    };

    state.reports = reports.reports;
    state.loaded_at = Some(Local::now());
    if matches!(state.error, Some(GuiError::ReportLoad { .. })) {
        state.error = None;
    }

    let changed = state.select_report_after_load();
    if state.current_report().is_none() {
        state.view = ViewState::NoReports;
        return Task::none();
    }
    state.remember_report();

    let subjects_mounted = matches!(state.view, ViewState::Subjects(_));
    let metrics_mounted = matches!(state.view, ViewState::Metrics(_));
    if changed || !(subjects_mounted || metrics_mounted) {
        mount_tab(state)
    } else if metrics_mounted {
        sync_cards(state)
    } else {
        // The mounted subjects view renders the new report as is.
        Task::none()
    }
}

fn handle_datamodel_loaded(state: &mut AppState, result: Result<DataModel, ClientError>) {
    match result {
        Ok(datamodel) => state.datamodel = datamodel,
        Err(error) => {
            tracing::error!(%error, "Failed to load data model");
            state.show_error(GuiError::datamodel_load(&error));
        }
    }
}

/// Mount the selected tab's view for the current report.
///
/// Always creates a fresh view with a new mount id; anything scheduled for
/// the previous view is ignored when it completes.
pub fn mount_tab(state: &mut AppState) -> Task<Message> {
    if state.current_report().is_none() {
        state.view = ViewState::Waiting;
        return Task::none();
    }

    match state.tab {
        Tab::Subjects => {
            let mount = state.mount_ids.next_id();
            let options = ViewOptions::from_search(state.location.search());
            state.view = ViewState::Subjects(SubjectsState::mount(
                mount,
                options,
                state.settings.display.initial_batch,
            ));
            let delay = state.settings.display.reveal_delay();
            Task::perform(reveal_timer(delay), move |()| {
                Message::from(SubjectsMessage::RevealElapsed(mount))
            })
        }
        Tab::Metrics => {
            state.view = ViewState::Metrics(MetricsState::default());
            sync_cards(state)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::message::ReportChoice;
    use crate::state::Settings;
    use qt_client::{ApiClient, ClientSettings};
    use qt_model::ReportId;

    const REPORTS: &str = r#"{"reports": [
        {"report_uuid": "r-1", "title": "First", "subjects": {
            "s-1": {"name": "Backend", "type": "software", "metrics": {
                "m-1": {"name": "Coverage", "type": "uncovered_lines", "status": "target_met", "sources": {}}
            }}
        }},
        {"report_uuid": "r-2", "title": "Second", "subjects": {}}
    ]}"#;

    fn app_state(dir: &tempfile::TempDir) -> AppState {
        let client = ApiClient::new(&ClientSettings::default()).unwrap();
        AppState::new(
            Settings::default(),
            dir.path().join("settings.toml"),
            Some(client),
        )
    }

    fn reports_loaded(state: &mut AppState, json: &str) {
        let generation = state.begin_reload();
        let result = Ok(Reports::from_json(json).unwrap());
        let _ = ReportHandler.handle(state, ReportMessage::ReportsLoaded { generation, result });
    }

    fn loaded(dir: &tempfile::TempDir) -> AppState {
        let mut state = app_state(dir);
        reports_loaded(&mut state, REPORTS);
        state
    }

    #[test]
    fn test_first_load_mounts_subjects() {
        let dir = tempfile::tempdir().unwrap();
        let state = loaded(&dir);
        assert!(matches!(state.view, ViewState::Subjects(_)));
        assert_eq!(state.report_uuid, Some(ReportId::new("r-1")));
        assert_eq!(
            state.settings.general.last_report,
            Some(ReportId::new("r-1"))
        );
        assert!(dir.path().join("settings.toml").exists());
    }

    #[test]
    fn test_reload_keeps_subjects_mount() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = loaded(&dir);
        let ViewState::Subjects(before) = &state.view else {
            panic!("expected subjects view");
        };
        let mount = before.mount_id();

        reports_loaded(&mut state, REPORTS);
        let ViewState::Subjects(after) = &state.view else {
            panic!("expected subjects view");
        };
        assert_eq!(after.mount_id(), mount);
    }

    #[test]
    fn test_tab_switch_remounts() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = loaded(&dir);
        let ViewState::Subjects(first) = &state.view else {
            panic!("expected subjects view");
        };
        let first = first.mount_id();

        let _ = ReportHandler.handle(&mut state, ReportMessage::ShowTab(Tab::Metrics));
        let ViewState::Metrics(metrics) = &state.view else {
            panic!("expected metrics view");
        };
        assert_eq!(metrics.cards().len(), 1);

        let _ = ReportHandler.handle(&mut state, ReportMessage::ShowTab(Tab::Subjects));
        let ViewState::Subjects(second) = &state.view else {
            panic!("expected subjects view");
        };
        assert_ne!(second.mount_id(), first);
        assert!(!second.is_revealed());
    }

    #[test]
    fn test_select_report() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = loaded(&dir);
        let _ = ReportHandler.handle(
            &mut state,
            ReportMessage::Select(ReportChoice {
                report_uuid: ReportId::new("r-2"),
                title: "Second".into(),
            }),
        );
        assert_eq!(state.current_report().map(|r| r.title.as_str()), Some("Second"));
        assert!(state.location.base().ends_with("/r-2"));
    }

    #[test]
    fn test_failed_load_shows_error() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = app_state(&dir);
        let generation = state.begin_reload();
        let _ = ReportHandler.handle(
            &mut state,
            ReportMessage::ReportsLoaded {
                generation,
                result: Err(ClientError::Network("refused".into())),
            },
        );
        assert!(!state.is_loading);
        assert!(matches!(state.view, ViewState::Waiting));
        assert!(matches!(state.error, Some(GuiError::ReportLoad { .. })));
    }

    #[test]
    fn test_empty_server() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = app_state(&dir);
        reports_loaded(&mut state, r#"{"reports": []}"#);
        assert!(matches!(state.view, ViewState::NoReports));
    }

    #[test]
    fn test_superseded_reload_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = app_state(&dir);
        let _ = ReportHandler.handle(&mut state, ReportMessage::Reload);
        let older = state.reload_generation.unwrap();
        let _ = ReportHandler.handle(&mut state, ReportMessage::Reload);
        let newer = state.reload_generation.unwrap();
        assert_ne!(older, newer);

        let _ = ReportHandler.handle(
            &mut state,
            ReportMessage::ReportsLoaded {
                generation: newer,
                result: Ok(Reports::from_json(REPORTS).unwrap()),
            },
        );
        assert!(!state.is_loading);

        let stale = r#"{"reports": [{"report_uuid": "r-1", "title": "First", "subjects": {}}]}"#;
        let _ = ReportHandler.handle(
            &mut state,
            ReportMessage::ReportsLoaded {
                generation: older,
                result: Ok(Reports::from_json(stale).unwrap()),
            },
        );
        let report = state.current_report().unwrap();
        assert_eq!(report.subjects.len(), 1);
        assert_eq!(state.reports.len(), 2);
    }

    #[test]
    fn test_superseded_reload_keeps_loading_flag() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = app_state(&dir);
        let older = state.begin_reload();
        let newer = state.begin_reload();

        let _ = ReportHandler.handle(
            &mut state,
            ReportMessage::ReportsLoaded {
                generation: older,
                result: Ok(Reports::from_json(REPORTS).unwrap()),
            },
        );
        assert!(state.is_loading);
        assert!(state.reports.is_empty());
        assert!(matches!(state.view, ViewState::Waiting));

        let _ = ReportHandler.handle(
            &mut state,
            ReportMessage::DataModelLoaded {
                generation: older,
                result: Err(ClientError::Network("refused".into())),
            },
        );
        assert!(state.error.is_none());

        let _ = ReportHandler.handle(
            &mut state,
            ReportMessage::DataModelLoaded {
                generation: newer,
                result: Err(ClientError::Network("refused".into())),
            },
        );
        assert!(matches!(state.error, Some(GuiError::DataModelLoad { .. })));
    }
}
