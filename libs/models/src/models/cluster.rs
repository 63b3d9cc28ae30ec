use serde::{Deserialize, Serialize};

/// A cluster groups virtual machine groups and their servers
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Cluster {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Creation time, epoch millis
    pub created: Option<i64>,
}

/// A virtual machine group inside a cluster
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClusterRole {
    pub id: Option<i64>,
    pub cluster_id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub created: Option<i64>,
}

/// Per-cluster key/value configuration entry
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClusterParam {
    pub id: Option<i64>,
    pub cluster_id: Option<i64>,
    pub name: Option<String>,
    pub value: Option<String>,
}
