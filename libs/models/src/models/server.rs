use serde::{Deserialize, Serialize};

/// A virtual machine instance
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Server {
    pub id: Option<i64>,
    pub cluster_id: Option<i64>,
    pub cluster_role_id: Option<i64>,
    pub name: Option<String>,

    /// Lifecycle status as reported by the platform (e.g. "Running", "Terminated")
    pub status: Option<String>,

    /// Cloud provider instance id
    pub instance_id: Option<String>,
    pub instance_type: Option<String>,
    pub region: Option<String>,
    pub zone: Option<String>,
    pub local_ip: Option<String>,
    pub remote_ip: Option<String>,
    pub os: Option<String>,

    /// Template the server was launched from
    pub launch_configuration_id: Option<i64>,
    pub created: Option<i64>,
}
