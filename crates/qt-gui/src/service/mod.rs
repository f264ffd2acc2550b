//! Background services.
//!
//! Async functions run through `Task::perform` on Iced's tokio executor.
//! They take owned inputs and never touch application state.

pub mod api;
pub mod reveal;

pub use api::{fetch_datamodel, fetch_metric_record, fetch_reports, mutate_subject};
pub use reveal::reveal_timer;
