//! Alert API

use fit2cloud_models::ClusterRoleAlertLogging;

use crate::errors::Result;
use crate::http::client::{ApiRequest, Fit2CloudClient};
use crate::http::params::Params;

/// Filters for [`Fit2CloudClient::get_alert_loggings`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlertQuery {
    pub cluster_id: Option<i64>,
    pub cluster_role_id: Option<i64>,
    pub server_id: Option<i64>,
    pub alert_type: Option<String>,
    pub alert_status: Option<String>,
    pub page_size: Option<u32>,
    pub page_num: Option<u32>,
}

impl AlertQuery {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cluster(mut self, cluster_id: i64) -> Self {
        self.cluster_id = Some(cluster_id);
        self
    }

    pub fn cluster_role(mut self, cluster_role_id: i64) -> Self {
        self.cluster_role_id = Some(cluster_role_id);
        self
    }

    pub fn server(mut self, server_id: i64) -> Self {
        self.server_id = Some(server_id);
        self
    }

    pub fn alert_type(mut self, alert_type: impl Into<String>) -> Self {
        self.alert_type = Some(alert_type.into());
        self
    }

    pub fn alert_status(mut self, alert_status: impl Into<String>) -> Self {
        self.alert_status = Some(alert_status.into());
        self
    }

    pub fn page(mut self, page_size: u32, page_num: u32) -> Self {
        self.page_size = Some(page_size);
        self.page_num = Some(page_num);
        self
    }

    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .id("clusterId", self.cluster_id)
            .id("clusterRoleId", self.cluster_role_id)
            .id("serverId", self.server_id)
            .trimmed("alertType", self.alert_type.as_deref())
            .trimmed("alertStatus", self.alert_status.as_deref())
            .count("pageSize", self.page_size)
            .count("pageNum", self.page_num)
    }
}

impl Fit2CloudClient {
    /// Alert records matching the given filters
    pub async fn get_alert_loggings(&self, query: &AlertQuery) -> Result<Vec<ClusterRoleAlertLogging>> {
        let request = ApiRequest::get(self.url("/alerts")).query(query.to_params());
        self.json(request).await
    }
}
