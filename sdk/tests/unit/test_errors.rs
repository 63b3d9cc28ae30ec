//! Error classification tests

use fit2cloud_sdk::{Fit2CloudClient, SdkError};
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::support::setup;

#[tokio::test]
async fn test_non_200_success_codes_are_api_errors() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/clusters"))
        .respond_with(ResponseTemplate::new(204))
        .mount(&server)
        .await;

    let err = client.get_clusters().await.unwrap_err();
    assert!(matches!(err, SdkError::Api { status: 204, .. }));
    assert_eq!(err.api_message(), Some(""));
}

#[tokio::test]
async fn test_client_error_carries_body() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/server/1"))
        .respond_with(ResponseTemplate::new(401).set_body_string("invalid consumer key"))
        .mount(&server)
        .await;

    let err = client.get_server(1).await.unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.to_string(), "invalid consumer key");
}

#[tokio::test]
async fn test_connection_refused_is_transport_error() {
    // Nothing listens on the discard port
    let client = Fit2CloudClient::new("k", "s", "http://127.0.0.1:9/api").unwrap();

    let err = client.get_clusters().await.unwrap_err();
    assert!(matches!(err, SdkError::Http(_)));
    assert!(err.is_transport());
    assert!(err.api_message().is_none());
}
