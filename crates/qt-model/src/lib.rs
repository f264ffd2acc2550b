//! Report data model and view state for the Quality-time report viewer.
//!
//! This crate holds everything the viewer needs that does not touch the
//! network or the widget toolkit:
//!
//! # Module Organization
//!
//! - [`ids`]: Identifier newtypes for reports, subjects, metrics, and sources
//! - [`ordered`]: An insertion-ordered map that keeps JSON key order
//! - [`report`]: Reports, subjects, metrics, and sources as served by the API
//! - [`status`]: Metric status and the "requires action" classification
//! - [`datamodel`]: Catalog of subject, metric, and source types
//! - [`record`]: A single metric record (measurement + metric + source)
//! - [`view_options`]: Hidden columns / hide-metrics flag and their query-string form
//! - [`location`]: Navigation handle used to rewrite the query string
//! - [`reveal`]: Staged reveal of long subject lists
//! - [`options`]: Copy/move menu options for subjects

pub mod datamodel;
pub mod error;
pub mod ids;
pub mod location;
pub mod options;
pub mod ordered;
pub mod record;
pub mod report;
pub mod reveal;
pub mod status;
pub mod view_options;

pub use datamodel::{DataModel, EntityType};
pub use error::{ModelError, Result};
pub use ids::{MetricId, ReportId, SourceId, SubjectId};
pub use location::{History, Location};
pub use options::{SubjectOption, subject_options};
pub use ordered::OrderedMap;
pub use record::{MetricRecord, matches_search};
pub use report::{Metric, Report, Reports, Source, Subject};
pub use reveal::{INITIAL_BATCH, REVEAL_DELAY, StagedReveal, SubjectSlot};
pub use status::MetricStatus;
pub use view_options::{Column, ViewOptions};
