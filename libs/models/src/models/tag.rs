use serde::{Deserialize, Serialize};

/// Key/value label attached to a server
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Tag {
    pub id: Option<i64>,
    pub server_id: Option<i64>,
    #[serde(alias = "tagName")]
    pub name: Option<String>,
    #[serde(alias = "tagValue")]
    pub value: Option<String>,
    pub created: Option<i64>,
}
