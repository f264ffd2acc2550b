//! Client behavior against a server that is not there.
//!
//! Port 9 (discard) on localhost is closed on any sane test machine, so the
//! connection is refused immediately without touching the network.

use qt_client::{ApiClient, ClientError, ClientSettings};
use qt_model::{MetricId, ReportId};

fn unreachable_client() -> ApiClient {
    ApiClient::new(&ClientSettings {
        api_url: "http://127.0.0.1:9".to_string(),
        record_url: "http://127.0.0.1:9".to_string(),
        timeout_secs: 2,
    })
    .unwrap()
}

#[tokio::test]
async fn record_fetch_failure_is_reported_not_swallowed() {
    let err = unreachable_client()
        .metric_record(&MetricId::new("m-1"))
        .await
        .unwrap_err();
    assert!(err.is_retryable(), "unexpected error: {err:?}");
}

#[tokio::test]
async fn mutation_failure_is_reported() {
    let err = unreachable_client()
        .add_subject(&ReportId::new("r-1"))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        ClientError::Network(_) | ClientError::Timeout { .. }
    ));
}

#[test]
fn invalid_settings_are_rejected() {
    let err = ApiClient::new(&ClientSettings {
        api_url: "localhost".to_string(),
        ..ClientSettings::default()
    })
    .unwrap_err();
    assert_eq!(err, ClientError::InvalidUrl("localhost".to_string()));
}
