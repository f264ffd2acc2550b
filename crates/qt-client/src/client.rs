//! Async client for the report API and the metric record endpoint.

use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use qt_model::{DataModel, MetricId, MetricRecord, ReportId, Reports, SubjectId};

use crate::USER_AGENT;
use crate::config::ClientSettings;
use crate::error::{ClientError, Result};

/// Path prefix of the versioned report API.
const API_PREFIX: &str = "api/v3";

/// Body returned by subject mutations.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MutationResponse {
    /// Whether the server applied the change.
    #[serde(default)]
    pub ok: bool,

    /// Id of the subject created by an add or copy.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub new_subject_uuid: Option<SubjectId>,
}

/// Client for the Quality-time server.
///
/// Cheap to clone; clones share the underlying connection pool.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    api_url: String,
    record_url: String,
}

impl ApiClient {
    /// Creates a client from settings.
    ///
    /// Fails when either base URL is not an `http(s)` URL.
    pub fn new(settings: &ClientSettings) -> Result<Self> {
        let api_url = validate_base_url(&settings.api_url)?;
        let record_url = validate_base_url(&settings.record_url)?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .timeout(settings.timeout())
            .build()
            .map_err(|e| ClientError::Network(e.to_string()))?;

        Ok(Self {
            client,
            api_url,
            record_url,
        })
    }

    /// URL of a report API endpoint.
    #[must_use]
    pub fn api_endpoint(&self, path: &str) -> String {
        format!("{}/{}/{}", self.api_url, API_PREFIX, path)
    }

    /// URL of the record endpoint for a metric.
    ///
    /// The id is appended verbatim as a path segment.
    #[must_use]
    pub fn record_endpoint(&self, metric: &MetricId) -> String {
        format!("{}/{}", self.record_url, metric)
    }

    /// Fetches all reports.
    pub async fn reports(&self) -> Result<Reports> {
        let url = self.api_endpoint("reports");
        let body = self.get_text(&url).await?;
        Ok(Reports::from_json(&body)?)
    }

    /// Fetches the data model catalog.
    pub async fn datamodel(&self) -> Result<DataModel> {
        let url = self.api_endpoint("datamodel");
        let body = self.get_text(&url).await?;
        Ok(DataModel::from_json(&body)?)
    }

    /// Fetches one metric record (measurement, metric, and source).
    pub async fn metric_record(&self, metric: &MetricId) -> Result<MetricRecord> {
        let url = self.record_endpoint(metric);
        let body = self.get_text(&url).await?;
        Ok(MetricRecord::from_json(&body)?)
    }

    /// Adds a new subject to a report.
    pub async fn add_subject(&self, report: &ReportId) -> Result<MutationResponse> {
        let url = self.api_endpoint(&format!("subject/new/{report}"));
        self.mutate("add subject", &url).await
    }

    /// Copies a subject from any report into `report`.
    pub async fn copy_subject(
        &self,
        subject: &SubjectId,
        report: &ReportId,
    ) -> Result<MutationResponse> {
        let url = self.api_endpoint(&format!("subject/{subject}/copy/{report}"));
        self.mutate("copy subject", &url).await
    }

    /// Moves a subject from another report into `report`.
    pub async fn move_subject(
        &self,
        subject: &SubjectId,
        report: &ReportId,
    ) -> Result<MutationResponse> {
        let url = self.api_endpoint(&format!("subject/{subject}/move/{report}"));
        self.mutate("move subject", &url).await
    }

    async fn get_text(&self, url: &str) -> Result<String> {
        tracing::debug!(url, "GET");
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ClientError::from_reqwest(&e, url))?;
        read_body(response, url).await
    }

    async fn mutate(&self, operation: &'static str, url: &str) -> Result<MutationResponse> {
        tracing::info!(url, operation, "POST");
        let response = self
            .client
            .post(url)
            .json(&serde_json::json!({}))
            .send()
            .await
            .map_err(|e| ClientError::from_reqwest(&e, url))?;
        let body = read_body(response, url).await?;
        let result: MutationResponse = decode(&body)?;
        if result.ok {
            Ok(result)
        } else {
            tracing::warn!(url, operation, "server rejected mutation");
            Err(ClientError::Rejected { operation })
        }
    }
}

async fn read_body(response: reqwest::Response, url: &str) -> Result<String> {
    let status = response.status();
    if !status.is_success() {
        tracing::warn!(url, status = status.as_u16(), "request failed");
        return Err(ClientError::Status {
            code: status.as_u16(),
            url: url.to_string(),
        });
    }
    response
        .text()
        .await
        .map_err(|e| ClientError::from_reqwest(&e, url))
}

fn decode<T: DeserializeOwned>(body: &str) -> Result<T> {
    Ok(serde_json::from_str(body)?)
}

/// Trim trailing slashes and require an `http://` or `https://` scheme.
fn validate_base_url(url: &str) -> Result<String> {
    let trimmed = url.trim().trim_end_matches('/');
    let has_host = trimmed
        .strip_prefix("http://")
        .or_else(|| trimmed.strip_prefix("https://"))
        .is_some_and(|rest| !rest.is_empty());
    if has_host {
        Ok(trimmed.to_string())
    } else {
        Err(ClientError::InvalidUrl(url.to_string()))
    }
}
