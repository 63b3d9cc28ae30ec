//! Script, event and execution log tests

use fit2cloud_sdk::{LoggingQuery, SdkError};
use serde_json::json;
use wiremock::matchers::{body_string, header, method, path};
use wiremock::{Mock, ResponseTemplate};

use crate::support::{body_text, setup, single_request};

#[tokio::test]
async fn test_get_script_populates_fields() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/script/7"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 7,
            "name": "disk usage",
            "description": "report disk usage",
            "scriptText": "df -h"
        })))
        .mount(&server)
        .await;

    let script = client.get_script(7).await.unwrap();
    assert_eq!(script.id, Some(7));
    assert_eq!(script.name.as_deref(), Some("disk usage"));
    assert_eq!(script.description.as_deref(), Some("report disk usage"));
    assert_eq!(script.script_text.as_deref(), Some("df -h"));
}

#[tokio::test]
async fn test_get_script_malformed_json() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/script/7"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>"))
        .mount(&server)
        .await;

    let err = client.get_script(7).await.unwrap_err();
    assert!(matches!(err, SdkError::Json(_)));
    assert!(err.is_deserialization());
    assert!(!err.is_api());
}

#[tokio::test]
async fn test_get_scripts_without_paging_has_no_query() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/scripts"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([{"id": 1}, {"id": 2}])))
        .mount(&server)
        .await;

    let scripts = client.get_scripts(None, None).await.unwrap();
    assert_eq!(scripts.len(), 2);

    let request = single_request(&server).await;
    assert!(request.url.query().is_none());
}

#[tokio::test]
async fn test_execute_script_returns_event_id() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/executescript/server"))
        .and(header("content-type", "application/x-www-form-urlencoded; charset=UTF-8"))
        .and(body_string("serverId=42&scriptContent=echo%20%22hi%22%20%26%26%20uptime"))
        .respond_with(ResponseTemplate::new(200).set_body_string("1001"))
        .mount(&server)
        .await;

    let event_id = client.execute_script(42, "echo \"hi\" && uptime").await.unwrap();
    assert_eq!(event_id, 1001);
}

#[tokio::test]
async fn test_execute_script_non_numeric_body() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/executescript/server"))
        .respond_with(ResponseTemplate::new(200).set_body_string("queued"))
        .mount(&server)
        .await;

    let err = client.execute_script(42, "uptime").await.unwrap_err();
    match &err {
        SdkError::InvalidNumber { body, .. } => assert_eq!(body, "queued"),
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.is_deserialization());
}

#[tokio::test]
async fn test_add_script_returns_id_and_encodes_utf8() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/script/add"))
        .respond_with(ResponseTemplate::new(200).set_body_string("15"))
        .mount(&server)
        .await;

    let id = client
        .add_script("清理", None, "rm -rf /tmp/cache")
        .await
        .unwrap();
    assert_eq!(id, 15);

    let request = single_request(&server).await;
    assert_eq!(
        body_text(&request),
        "name=%E6%B8%85%E7%90%86&scriptText=rm%20-rf%20%2Ftmp%2Fcache"
    );
}

#[tokio::test]
async fn test_edit_and_delete_script() {
    let (server, client) = setup().await;
    Mock::given(method("POST"))
        .and(path("/api/script/3/update"))
        .and(body_string("description=new&scriptText=ls"))
        .respond_with(ResponseTemplate::new(200).set_body_string("true"))
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path("/api/script/3/delete"))
        .respond_with(ResponseTemplate::new(200).set_body_string("false"))
        .mount(&server)
        .await;

    assert!(client.edit_script(3, Some("new"), "ls").await.unwrap());
    assert!(!client.delete_script(3).await.unwrap());
}

#[tokio::test]
async fn test_get_loggings_by_event_id_uses_logging_url() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/event/loggings/1001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"eventId": 1001, "text": "step 1"},
            {"eventId": 1001, "text": "step 2"}
        ])))
        .mount(&server)
        .await;

    let lines = client.get_loggings_by_event_id(1001).await.unwrap();
    let texts: Vec<_> = lines.iter().filter_map(|l| l.text.as_deref()).collect();
    assert_eq!(texts, vec!["step 1", "step 2"]);
}

#[tokio::test]
async fn test_get_event() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/event/1001"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": 1001,
            "code": "EXECUTE_SCRIPT",
            "status": "success",
            "startTime": 1700000000000i64
        })))
        .mount(&server)
        .await;

    let event = client.get_event(1001).await.unwrap();
    assert_eq!(event.code.as_deref(), Some("EXECUTE_SCRIPT"));
    assert_eq!(event.start_time, Some(1_700_000_000_000));
}

#[tokio::test]
async fn test_get_loggings_view_filters() {
    let (server, client) = setup().await;
    Mock::given(method("GET"))
        .and(path("/api/event/loggings"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"eventId": 5, "serverName": "web-1", "scriptName": "deploy"}
        ])))
        .mount(&server)
        .await;

    let query = LoggingQuery::new().cluster(1).script(2).status("failed");
    let rows = client.get_loggings(&query).await.unwrap();
    assert_eq!(rows[0].server_name.as_deref(), Some("web-1"));

    let request = single_request(&server).await;
    assert_eq!(request.url.query(), Some("clusterId=1&scriptId=2&status=failed"));
}
