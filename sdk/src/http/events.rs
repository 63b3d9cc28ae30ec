//! Event and execution log API

use fit2cloud_models::{Event, Logging, ViewScriptlog};

use crate::errors::Result;
use crate::http::client::{ApiRequest, Fit2CloudClient};
use crate::http::params::Params;

/// Filters for [`Fit2CloudClient::get_loggings`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoggingQuery {
    pub cluster_id: Option<i64>,
    pub cluster_role_id: Option<i64>,
    pub server_id: Option<i64>,
    pub script_id: Option<i64>,
    /// Event status
    pub status: Option<String>,
    pub page_size: Option<u32>,
    pub page_num: Option<u32>,
    pub sort: Option<String>,
    pub order: Option<String>,
}

impl LoggingQuery {
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

    pub fn script(mut self, script_id: i64) -> Self {
        self.script_id = Some(script_id);
        self
    }

    pub fn status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn sort(mut self, sort: impl Into<String>, order: impl Into<String>) -> Self {
        self.sort = Some(sort.into());
        self.order = Some(order.into());
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
            .id("scriptId", self.script_id)
            .text("status", self.status.as_deref())
            .text("sort", self.sort.as_deref())
            .text("order", self.order.as_deref())
            .count("pageSize", self.page_size)
            .count("pageNum", self.page_num)
    }
}

impl Fit2CloudClient {
    /// Log lines produced by one event, e.g. a script execution
    pub async fn get_loggings_by_event_id(&self, event_id: i64) -> Result<Vec<Logging>> {
        let url = format!("{}{}", self.logging_url(), event_id);
        self.json(ApiRequest::get(url)).await
    }

    /// Status of an asynchronous operation
    pub async fn get_event(&self, event_id: i64) -> Result<Event> {
        let url = self.url(&format!("/event/{}", event_id));
        self.json(ApiRequest::get(url)).await
    }

    /// Script execution log view
    pub async fn get_loggings(&self, query: &LoggingQuery) -> Result<Vec<ViewScriptlog>> {
        let request = ApiRequest::get(self.url("/event/loggings")).query(query.to_params());
        self.json(request).await
    }
}
