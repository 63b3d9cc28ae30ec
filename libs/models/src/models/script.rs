use serde::{Deserialize, Serialize};

/// A reusable script stored on the platform
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Script {
    pub id: Option<i64>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub script_text: Option<String>,
    pub created: Option<i64>,
    pub last_modified: Option<i64>,
}
