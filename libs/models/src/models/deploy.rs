//! Application deployment pipeline records

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Application {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub repo_id: Option<i64>,
    pub created: Option<i64>,
}

/// Artifact repository an application revision is fetched from
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationRepo {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    #[serde(rename = "type")]
    pub repo_type: Option<String>,
    pub url: Option<String>,
    pub created: Option<i64>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationRevision {
    pub id: Option<i64>,
    pub application_id: Option<i64>,
    pub repo_id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    /// Artifact location inside the repository
    pub location: Option<String>,
    pub status: Option<String>,
    pub created: Option<i64>,
}

/// One rollout of a revision onto a cluster, group or single server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicationDeployment {
    pub id: Option<i64>,
    pub revision_id: Option<i64>,
    pub cluster_id: Option<i64>,
    pub cluster_role_id: Option<i64>,
    pub server_id: Option<i64>,
    pub deploy_policy: Option<String>,
    pub start_time: Option<i64>,
    pub end_time: Option<i64>,
    pub status: Option<String>,
    pub description: Option<String>,
    pub msg: Option<String>,
    pub application_id: Option<i64>,
}
