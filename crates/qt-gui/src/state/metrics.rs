//! State of the metrics view: one card per metric plus the search box.

use qt_model::MetricId;

use super::metric_card::MetricCard;
use super::mount::{MountId, MountIds};

/// Mounted metrics view.
#[derive(Debug, Clone, Default)]
pub struct MetricsState {
    search: String,
    cards: Vec<MetricCard>,
}

impl MetricsState {
    pub fn new(search: String) -> Self {
        Self {
            search,
            cards: Vec::new(),
        }
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    /// The search string to filter by; an empty box filters nothing.
    pub fn search_filter(&self) -> Option<&str> {
        Some(self.search.as_str()).filter(|s| !s.is_empty())
    }

    pub fn set_search(&mut self, search: String) {
        self.search = search;
    }

    pub fn cards(&self) -> &[MetricCard] {
        &self.cards
    }

    pub fn card_mut(&mut self, mount: MountId) -> Option<&mut MetricCard> {
        self.cards.iter_mut().find(|card| card.mount_id() == mount)
    }

    /// Align the cards with the report's metrics.
    ///
    /// Cards for metrics that are still present are kept as they are, so their
    /// records are not fetched again. Cards for removed metrics are dropped and
    /// new metrics get a freshly mounted card. Returns the new cards' mount ids.
    pub fn sync(&mut self, metric_ids: &[MetricId], ids: &mut MountIds) -> Vec<MountId> {
        let mut previous = std::mem::take(&mut self.cards);
        let mut mounted = Vec::new();
        for metric_uuid in metric_ids {
            if let Some(position) = previous.iter().position(|c| c.metric_uuid() == metric_uuid) {
                self.cards.push(previous.swap_remove(position));
            } else {
                let card = MetricCard::mount(ids.next_id(), metric_uuid.clone());
                mounted.push(card.mount_id());
                self.cards.push(card);
            }
        }
        if !previous.is_empty() {
            tracing::debug!(count = previous.len(), "Unmounting metric cards");
        }
        mounted
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn metric_ids(ids: &[&str]) -> Vec<MetricId> {
        ids.iter().map(|id| MetricId::new(*id)).collect()
    }

    #[test]
    fn test_sync_mounts_new_cards_only() {
        let mut ids = MountIds::new();
        let mut state = MetricsState::default();

        let first = state.sync(&metric_ids(&["a", "b"]), &mut ids);
        assert_eq!(first.len(), 2);

        let second = state.sync(&metric_ids(&["b", "c"]), &mut ids);
        assert_eq!(second.len(), 1);
        let order: Vec<&str> = state.cards().iter().map(|c| c.metric_uuid().as_str()).collect();
        assert_eq!(order, ["b", "c"]);
        assert_eq!(state.cards()[0].mount_id(), first[1]);
    }

    #[test]
    fn test_dropped_card_is_not_found() {
        let mut ids = MountIds::new();
        let mut state = MetricsState::default();
        let mounted = state.sync(&metric_ids(&["a"]), &mut ids);
        state.sync(&[], &mut ids);
        assert!(state.card_mut(mounted[0]).is_none());
    }

    #[test]
    fn test_empty_search_filters_nothing() {
        let mut state = MetricsState::new(String::new());
        assert_eq!(state.search_filter(), None);
        state.set_search("cov".into());
        assert_eq!(state.search_filter(), Some("cov"));
    }
}
