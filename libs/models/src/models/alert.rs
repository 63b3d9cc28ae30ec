use serde::{Deserialize, Serialize};

/// Alert raised against a virtual machine group or server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClusterRoleAlertLogging {
    pub id: Option<i64>,
    pub cluster_id: Option<i64>,
    pub cluster_role_id: Option<i64>,
    pub server_id: Option<i64>,
    pub alert_type: Option<String>,
    pub alert_status: Option<String>,
    pub message: Option<String>,
    pub created: Option<i64>,
}
