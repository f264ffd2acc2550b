//! HTTP client for the Quality-time server.
//!
//! The viewer talks to two endpoints families:
//!
//! - the report API (`/api/v3/...`) for reports, the data model, and the
//!   add/copy/move subject mutations
//! - the record endpoint (`<record_url>/<metric_id>`) that serves one metric
//!   together with its latest measurement and source
//!
//! All calls are plain async functions so the GUI can run them with
//! `Task::perform()`. Every request is bounded by the configured timeout.
//!
//! # Example
//!
//! ```no_run
//! use qt_client::{ApiClient, ClientSettings};
//! use qt_model::MetricId;
//!
//! async fn show(metric: MetricId) -> qt_client::Result<()> {
//!     let client = ApiClient::new(&ClientSettings::default())?;
//!     let record = client.metric_record(&metric).await?;
//!     println!("{:?}", record.metric_name());
//!     Ok(())
//! }
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod client;
pub mod config;
pub mod error;

pub use client::{ApiClient, MutationResponse};
pub use config::ClientSettings;
pub use error::{ClientError, Result};

/// User agent sent with every request.
pub const USER_AGENT: &str = concat!("quality-time-viewer/", env!("CARGO_PKG_VERSION"));
