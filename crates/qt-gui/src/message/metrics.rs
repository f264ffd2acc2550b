//! Metrics view messages.

use qt_client::ClientError;
use qt_model::MetricRecord;

use crate::state::MountId;

/// Messages for the metrics view and its cards.
#[derive(Debug, Clone)]
pub enum MetricsMessage {
    /// Search box text changed
    SearchChanged(String),
    /// Search box cleared
    SearchCleared,
    /// A card's fetch finished
    RecordLoaded {
        mount: MountId,
        result: Result<MetricRecord, ClientError>,
    },
    /// Retry a card's failed fetch
    Retry(MountId),
}
