//! Application state management.
//!
//! - **AppState**: Root state (settings, client, reports, location)
//! - **SubjectsState**: Mounted subjects view (staged reveal, view options)
//! - **MetricsState** / **MetricCard**: Mounted metrics view and its cards
//! - **MountId**: Liveness token for deferred results

mod app_state;
mod metric_card;
mod metrics;
mod mount;
mod settings;
mod subjects;

pub use app_state::{AppState, Tab, ViewState, report_location};
pub use metric_card::{CardContent, LoadState, MetricCard};
pub use metrics::MetricsState;
pub use mount::{MountId, MountIds};
pub use settings::{DisplaySettings, GeneralSettings, Permissions, Settings};
pub use subjects::SubjectsState;
