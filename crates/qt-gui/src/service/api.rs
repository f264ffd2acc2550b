//! Server requests.

use std::time::Instant;

use qt_client::{ApiClient, ClientError, MutationResponse};
use qt_model::{DataModel, MetricId, MetricRecord, Reports};

use crate::message::SubjectMutation;

/// Fetch all reports.
pub async fn fetch_reports(client: ApiClient) -> Result<Reports, ClientError> {
    let start = Instant::now();
    let reports = client.reports().await?;
    tracing::info!(
        count = reports.reports.len(),
        elapsed_ms = start.elapsed().as_millis(),
        "Loaded reports"
    );
    Ok(reports)
}

/// Fetch the data model catalog.
pub async fn fetch_datamodel(client: ApiClient) -> Result<DataModel, ClientError> {
    let datamodel = client.datamodel().await?;
    tracing::debug!(
        subjects = datamodel.subjects.len(),
        metrics = datamodel.metrics.len(),
        sources = datamodel.sources.len(),
        "Loaded data model"
    );
    Ok(datamodel)
}

/// Fetch the record of one metric.
pub async fn fetch_metric_record(
    client: ApiClient,
    metric: MetricId,
) -> Result<MetricRecord, ClientError> {
    client.metric_record(&metric).await
}

/// Apply a subject mutation.
pub async fn mutate_subject(
    client: ApiClient,
    mutation: SubjectMutation,
) -> Result<MutationResponse, ClientError> {
    let response = match &mutation {
        SubjectMutation::Add { report } => client.add_subject(report).await?,
        SubjectMutation::Copy { subject, report } => client.copy_subject(subject, report).await?,
        SubjectMutation::Move { subject, report } => client.move_subject(subject, report).await?,
    };
    tracing::info!(
        operation = mutation.operation(),
        new_subject = ?response.new_subject_uuid,
        "Subject mutation applied"
    );
    Ok(response)
}
