//! Cluster API tests

use std::time::Duration;

use fit2cloud_sdk::{ClientOptions, Fit2CloudClient};
use serde_json::json;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::support::{body_text, setup, single_request};

#[tokio::test]
async fn test_get_clusters() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/clusters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 1, "name": "prod"},
            {"id": 2, "name": "staging"}
        ])))
        .mount(&server)
        .await;

    let clusters = client.get_clusters().await.unwrap();
    let names: Vec<_> = clusters.iter().filter_map(|c| c.name.as_deref()).collect();
    assert_eq!(names, vec!["prod", "staging"]);
}

#[tokio::test]
async fn test_get_cluster_and_roles() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/cluster/1"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"id": 1, "name": "prod"})))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/cluster/1/roles"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"id": 10, "clusterId": 1, "name": "web"}
        ])))
        .mount(&server)
        .await;

    let cluster = client.get_cluster(1).await.unwrap();
    assert_eq!(cluster.name.as_deref(), Some("prod"));

    let roles = client.get_cluster_roles(1).await.unwrap();
    assert_eq!(roles[0].cluster_id, Some(1));
}

#[tokio::test]
async fn test_cluster_params() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/cluster/1/params"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"clusterId": 1, "name": "db.host", "value": "10.0.0.5"}
        ])))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/api/cluster/1/param"))
        .and(query_param("name", "db.host"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "clusterId": 1, "name": "db.host", "value": "10.0.0.5"
        })))
        .mount(&server)
        .await;

    let params = client.get_cluster_params(1).await.unwrap();
    assert_eq!(params.len(), 1);

    let param = client.get_cluster_param(1, "db.host").await.unwrap();
    assert_eq!(param.value.as_deref(), Some("10.0.0.5"));
}

#[tokio::test]
async fn test_set_cluster_param_posts_form() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/cluster/1/param"))
        .respond_with(ResponseTemplate::new(200).set_body_string("true"))
        .mount(&server)
        .await;

    assert!(client.set_cluster_param(1, "db.port", "5432").await.unwrap());

    let request = single_request(&server).await;
    assert_eq!(body_text(&request), "name=db.port&value=5432");
}

#[tokio::test]
async fn test_delete_cluster_param_uses_query() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/cluster/1/param/delete"))
        .and(query_param("name", "db.port"))
        .respond_with(ResponseTemplate::new(200).set_body_string("true"))
        .mount(&server)
        .await;

    assert!(client.delete_cluster_param(1, "db.port").await.unwrap());
}

#[tokio::test]
async fn test_sub_second_timeout_still_reaches_server() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/clusters"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&server)
        .await;

    let options = ClientOptions::new("test-key", "test-secret", format!("{}/api", server.uri()))
        .with_timeout(Duration::from_millis(500));
    let client = Fit2CloudClient::from_options(options).unwrap();

    let clusters = client.get_clusters().await.unwrap();
    assert!(clusters.is_empty());
}
