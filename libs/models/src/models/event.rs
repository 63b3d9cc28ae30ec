use serde::{Deserialize, Serialize};

/// An asynchronous operation, such as a script execution
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Event {
    pub id: Option<i64>,
    pub code: Option<String>,
    pub name: Option<String>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub created: Option<i64>,
}

/// One log line emitted while an event runs
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Logging {
    pub id: Option<i64>,
    pub event_id: Option<i64>,
    pub server_id: Option<i64>,
    pub level: Option<String>,
    pub text: Option<String>,
    pub created: Option<i64>,
}

/// Denormalized script execution log row (server + script + event)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ViewScriptlog {
    pub event_id: Option<i64>,
    pub event_code: Option<String>,
    pub event_status: Option<String>,
    pub event_start_time: Option<i64>,
    pub event_end_time: Option<i64>,
    pub server_id: Option<i64>,
    pub server_name: Option<String>,
    pub cluster_id: Option<i64>,
    pub cluster_role_id: Option<i64>,
    pub script_id: Option<i64>,
    pub script_name: Option<String>,
}
