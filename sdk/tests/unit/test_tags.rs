//! Tag API tests

use fit2cloud_sdk::{TagQuery, TagServerQuery};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::support::{body_text, setup, single_request};

#[tokio::test]
async fn test_get_tags_query_order() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/tags"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"serverId": 11, "tagName": "env", "tagValue": "prod"}
        ])))
        .mount(&server)
        .await;

    let tags = client.get_tags(&TagQuery::new().cluster(5).name("env")).await.unwrap();
    assert_eq!(tags[0].name.as_deref(), Some("env"));
    assert_eq!(tags[0].value.as_deref(), Some("prod"));

    let request = single_request(&server).await;
    assert_eq!(request.url.query(), Some("clusterId=5&tagName=env"));
}

#[tokio::test]
async fn test_save_tag_trims_form_values() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/tags/save"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "serverId": 11, "name": "env", "value": "prod eu"
        })))
        .mount(&server)
        .await;

    let tag = client
        .save_tag(Some(11), Some(" env "), Some(" prod eu "))
        .await
        .unwrap();
    assert_eq!(tag.value.as_deref(), Some("prod eu"));

    let request = single_request(&server).await;
    assert_eq!(body_text(&request), "serverId=11&tagName=env&tagValue=prod%20eu");
}

#[tokio::test]
async fn test_delete_tag_omits_missing_server() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/tags/delete"))
        .respond_with(ResponseTemplate::new(200).set_body_string("true"))
        .mount(&server)
        .await;

    assert!(client.delete_tag(None, Some("env")).await.unwrap());

    let request = single_request(&server).await;
    assert_eq!(body_text(&request), "tagName=env");
}

#[tokio::test]
async fn test_get_servers_by_tag_encodes_value() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/tags/servers"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 3}])))
        .mount(&server)
        .await;

    let query = TagServerQuery::new().cluster(1).tag("team", "a&b c");
    let servers = client.get_servers_by_tag(&query).await.unwrap();
    assert_eq!(servers[0].id, Some(3));

    let request = single_request(&server).await;
    assert_eq!(
        request.url.query(),
        Some("clusterId=1&tagName=team&tagValue=a%26b%20c")
    );
    let pairs: Vec<(String, String)> = request.url.query_pairs().into_owned().collect();
    assert!(pairs.contains(&("tagValue".to_string(), "a&b c".to_string())));
}
