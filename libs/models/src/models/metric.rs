use serde::{Deserialize, Serialize};

/// A monitoring metric available for top-N queries
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Metric {
    pub name: Option<String>,
    pub description: Option<String>,
    pub unit: Option<String>,
}

/// One ranked entry of a top-N metric query
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MetricTop {
    pub server_id: Option<i64>,
    pub server_name: Option<String>,
    pub metric: Option<String>,
    pub value: Option<f64>,
    pub rank: Option<i32>,
    pub time: Option<i64>,
}
