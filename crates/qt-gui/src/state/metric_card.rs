//! State of a metric card.
//!
//! A card fetches one metric record when it is created and never again,
//! unless the user retries after a failure.

use qt_client::ClientError;
use qt_model::{MetricId, MetricRecord};

use super::mount::MountId;

/// Progress of a card's single fetch.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum LoadState {
    /// Not requested yet.
    #[default]
    Idle,
    /// Request in flight.
    Loading,
    /// Record received.
    Loaded(MetricRecord),
    /// Request failed; the card offers a retry.
    Failed(ClientError),
}

/// What a card shows for a given search string.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum CardContent<'a> {
    /// Render nothing.
    Nothing,
    /// Render the error with a retry button.
    Failed(&'a ClientError),
    /// Render the measurement view with the record's three fields.
    Record(&'a MetricRecord),
}

/// One mounted metric card.
#[derive(Debug, Clone)]
pub struct MetricCard {
    mount: MountId,
    metric_uuid: MetricId,
    state: LoadState,
}

impl MetricCard {
    /// Create a card. The caller issues the fetch for `mount`.
    pub fn mount(mount: MountId, metric_uuid: MetricId) -> Self {
        Self {
            mount,
            metric_uuid,
            state: LoadState::Idle,
        }
    }

    pub fn mount_id(&self) -> MountId {
        self.mount
    }

    pub fn metric_uuid(&self) -> &MetricId {
        &self.metric_uuid
    }

    pub fn state(&self) -> &LoadState {
        &self.state
    }

    /// Mark the fetch as started.
    ///
    /// Returns `false` if a fetch is already in flight or the record is
    /// already loaded, in which case no new request should be sent.
    pub fn start_loading(&mut self) -> bool {
        match self.state {
            LoadState::Idle | LoadState::Failed(_) => {
                self.state = LoadState::Loading;
                true
            }
            LoadState::Loading | LoadState::Loaded(_) => false,
        }
    }

    /// Store the fetch result.
    ///
    /// Results only apply while the card waits for them.
    pub fn finish_loading(&mut self, result: Result<MetricRecord, ClientError>) -> bool {
        if self.state != LoadState::Loading {
            tracing::debug!(metric = %self.metric_uuid, "Ignoring unexpected fetch result");
            return false;
        }
        self.state = match result {
            Ok(record) => LoadState::Loaded(record),
            Err(error) => {
                tracing::warn!(metric = %self.metric_uuid, %error, "Failed to load metric record");
                LoadState::Failed(error)
            }
        };
        true
    }

    /// Change the metric id. The loaded record is kept; nothing is refetched.
    pub fn set_metric_uuid(&mut self, metric_uuid: MetricId) {
        self.metric_uuid = metric_uuid;
    }

    /// Decide what to render.
    ///
    /// Nothing is shown before a record arrives, or when a search string is
    /// given and the metric's name does not contain it (ignoring case).
    pub fn content(&self, search: Option<&str>) -> CardContent<'_> {
        match &self.state {
            LoadState::Idle | LoadState::Loading => CardContent::Nothing,
            LoadState::Failed(error) => CardContent::Failed(error),
            LoadState::Loaded(record) if record.matches_search(search) => {
                CardContent::Record(record)
            }
            LoadState::Loaded(_) => CardContent::Nothing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state::MountIds;

    fn record(name: &str) -> MetricRecord {
        MetricRecord::from_json(&format!(
            r#"{{"measurement": {{"count": {{"value": "12"}}}}, "metric": {{"name": "{name}"}}, "source": {{"type": "sonarqube"}}}}"#
        ))
        .unwrap()
    }

    fn loaded(name: &str) -> MetricCard {
        let mut card = MetricCard::mount(MountIds::new().next_id(), MetricId::new("m-1"));
        assert!(card.start_loading());
        assert!(card.finish_loading(Ok(record(name))));
        card
    }

    #[test]
    fn test_nothing_before_load() {
        let mut card = MetricCard::mount(MountIds::new().next_id(), MetricId::new("m-1"));
        assert_eq!(card.content(None), CardContent::Nothing);
        assert_eq!(card.content(Some("")), CardContent::Nothing);
        card.start_loading();
        assert_eq!(card.content(Some("anything")), CardContent::Nothing);
    }

    #[test]
    fn test_search_filter() {
        let card = loaded("Code Coverage");
        assert!(matches!(card.content(Some("cov")), CardContent::Record(_)));
        assert!(matches!(card.content(Some("COVERAGE")), CardContent::Record(_)));
        assert!(matches!(card.content(None), CardContent::Record(_)));
        assert!(matches!(card.content(Some("")), CardContent::Record(_)));
        assert_eq!(card.content(Some("test")), CardContent::Nothing);
    }

    #[test]
    fn test_record_passed_unmodified() {
        let card = loaded("Test Count");
        let CardContent::Record(shown) = card.content(Some("count")) else {
            panic!("expected record");
        };
        assert_eq!(shown, &record("Test Count"));
    }

    #[test]
    fn test_single_fetch() {
        let mut card = loaded("Test Count");
        assert!(!card.start_loading());
        assert!(!card.finish_loading(Ok(record("Other"))));
        assert!(matches!(card.content(Some("test")), CardContent::Record(_)));
    }

    #[test]
    fn test_failure_and_retry() {
        let mut card = MetricCard::mount(MountIds::new().next_id(), MetricId::new("m-1"));
        card.start_loading();
        card.finish_loading(Err(ClientError::Timeout {
            url: "http://localhost:8080/m-1".into(),
        }));
        assert!(matches!(card.content(None), CardContent::Failed(_)));

        assert!(card.start_loading());
        assert_eq!(card.state(), &LoadState::Loading);
        card.finish_loading(Ok(record("Velocity")));
        assert!(matches!(card.content(None), CardContent::Record(_)));
    }

    #[test]
    fn test_changing_id_keeps_record() {
        let mut card = loaded("Velocity");
        card.set_metric_uuid(MetricId::new("m-2"));
        assert_eq!(card.metric_uuid().as_str(), "m-2");
        assert!(matches!(card.state(), LoadState::Loaded(_)));
    }
}
