//! Metrics view message handler.
//!
//! Handles the search box and the per-card fetches. Fetch results carry the
//! card's mount id; a result whose card no longer exists is dropped.

use iced::Task;
use qt_client::ApiClient;
use qt_model::Report;

use super::MessageHandler;
use crate::message::{Message, MetricsMessage};
use crate::service::fetch_metric_record;
use crate::state::{AppState, MetricsState, MountId, ViewState};

/// Handler for metrics view messages.
pub struct MetricsHandler;

impl MessageHandler<MetricsMessage> for MetricsHandler {
    fn handle(&self, state: &mut AppState, msg: MetricsMessage) -> Task<Message> {
        let ViewState::Metrics(metrics) = &mut state.view else {
            tracing::debug!(?msg, "Metrics view not mounted, ignoring message");
            return Task::none();
        };

        match msg {
            MetricsMessage::SearchChanged(search) => {
                metrics.set_search(search);
                Task::none()
            }

            MetricsMessage::SearchCleared => {
                metrics.set_search(String::new());
                Task::none()
            }

            MetricsMessage::RecordLoaded { mount, result } => {
                match metrics.card_mut(mount) {
                    Some(card) => {
                        card.finish_loading(result);
                    }
                    None => tracing::debug!(%mount, "Dropping record for unmounted card"),
                }
                Task::none()
            }

            MetricsMessage::Retry(mount) => {
                start_fetch(state.client.as_ref(), metrics, mount).unwrap_or_else(Task::none)
            }
        }
    }
}

/// Align the mounted metrics view with the current report and fetch the
/// records of newly mounted cards.
pub(crate) fn sync_cards(state: &mut AppState) -> Task<Message> {
    let metric_ids = state
        .current_report()
        .map(Report::metric_ids)
        .unwrap_or_default();
    let ViewState::Metrics(metrics) = &mut state.view else {
        return Task::none();
    };

    let mounted = metrics.sync(&metric_ids, &mut state.mount_ids);
    let tasks: Vec<_> = mounted
        .into_iter()
        .filter_map(|mount| start_fetch(state.client.as_ref(), metrics, mount))
        .collect();
    Task::batch(tasks)
}

fn start_fetch(
    client: Option<&ApiClient>,
    metrics: &mut MetricsState,
    mount: MountId,
) -> Option<Task<Message>> {
    let client = client?.clone();
    let card = metrics.card_mut(mount)?;
    if !card.start_loading() {
        return None;
    }
    let metric = card.metric_uuid().clone();
    tracing::debug!(%mount, %metric, "Fetching metric record");
    Some(Task::perform(
        fetch_metric_record(client, metric),
        move |result| Message::from(MetricsMessage::RecordLoaded { mount, result }),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::handler::{ReportHandler, mount_tab};
    use crate::message::ReportMessage;
    use crate::state::{LoadState, Settings, Tab};
    use qt_client::{ClientError, ClientSettings};
    use qt_model::{MetricRecord, Reports};

    const REPORTS: &str = r#"{"reports": [
        {"report_uuid": "r-1", "title": "Report", "subjects": {
            "s-1": {"name": "Backend", "type": "software", "metrics": {
                "m-1": {"name": "Coverage", "type": "uncovered_lines", "sources": {}},
                "m-2": {"name": "Velocity", "type": "velocity", "sources": {}}
            }}
        }}
    ]}"#;

    fn metrics_view(dir: &tempfile::TempDir) -> AppState {
        let client = ApiClient::new(&ClientSettings::default()).unwrap();
        let mut state = AppState::new(
            Settings::default(),
            dir.path().join("settings.toml"),
            Some(client),
        );
        state.tab = Tab::Metrics;
        let generation = state.begin_reload();
        let result = Ok(Reports::from_json(REPORTS).unwrap());
        let _ = ReportHandler.handle(&mut state, ReportMessage::ReportsLoaded { generation, result });
        state
    }

    fn cards(state: &AppState) -> &MetricsState {
        match &state.view {
            ViewState::Metrics(metrics) => metrics,
            _ => panic!("expected metrics view"),
        }
    }

    fn record(name: &str) -> MetricRecord {
        MetricRecord::from_json(&format!(
            r#"{{"measurement": {{}}, "metric": {{"name": "{name}"}}, "source": {{}}}}"#
        ))
        .unwrap()
    }

    #[test]
    fn test_cards_start_loading_on_mount() {
        let dir = tempfile::tempdir().unwrap();
        let state = metrics_view(&dir);
        let metrics = cards(&state);
        assert_eq!(metrics.cards().len(), 2);
        assert!(
            metrics
                .cards()
                .iter()
                .all(|card| card.state() == &LoadState::Loading)
        );
    }

    #[test]
    fn test_record_applies_to_its_card() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = metrics_view(&dir);
        let mount = cards(&state).cards()[0].mount_id();

        let _ = MetricsHandler.handle(
            &mut state,
            MetricsMessage::RecordLoaded {
                mount,
                result: Ok(record("Coverage")),
            },
        );
        let metrics = cards(&state);
        assert!(matches!(metrics.cards()[0].state(), LoadState::Loaded(_)));
        assert_eq!(metrics.cards()[1].state(), &LoadState::Loading);
    }

    #[test]
    fn test_stale_record_is_dropped() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = metrics_view(&dir);
        let stale = cards(&state).cards()[0].mount_id();

        // Remount: every card gets a new mount id.
        let _ = mount_tab(&mut state);
        let _ = MetricsHandler.handle(
            &mut state,
            MetricsMessage::RecordLoaded {
                mount: stale,
                result: Ok(record("Coverage")),
            },
        );
        assert!(
            cards(&state)
                .cards()
                .iter()
                .all(|card| card.state() == &LoadState::Loading)
        );
    }

    #[test]
    fn test_retry_after_failure() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = metrics_view(&dir);
        let mount = cards(&state).cards()[1].mount_id();

        let _ = MetricsHandler.handle(
            &mut state,
            MetricsMessage::RecordLoaded {
                mount,
                result: Err(ClientError::Status {
                    code: 502,
                    url: "http://localhost:8080/m-2".into(),
                }),
            },
        );
        assert!(matches!(cards(&state).cards()[1].state(), LoadState::Failed(_)));

        let _ = MetricsHandler.handle(&mut state, MetricsMessage::Retry(mount));
        assert_eq!(cards(&state).cards()[1].state(), &LoadState::Loading);
    }

    #[test]
    fn test_search() {
        let dir = tempfile::tempdir().unwrap();
        let mut state = metrics_view(&dir);
        let _ = MetricsHandler.handle(&mut state, MetricsMessage::SearchChanged("cov".into()));
        assert_eq!(cards(&state).search_filter(), Some("cov"));
        let _ = MetricsHandler.handle(&mut state, MetricsMessage::SearchCleared);
        assert_eq!(cards(&state).search_filter(), None);
    }
}
