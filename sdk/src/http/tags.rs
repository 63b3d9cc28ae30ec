//! Tag API

use fit2cloud_models::{Server, Tag};

use crate::errors::Result;
use crate::http::client::{ApiRequest, Fit2CloudClient};
use crate::http::params::Params;

/// Filters for [`Fit2CloudClient::get_tags`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagQuery {
    pub cluster_id: Option<i64>,
    pub cluster_role_id: Option<i64>,
    pub server_id: Option<i64>,
    pub tag_name: Option<String>,
    pub page_size: Option<u32>,
    pub page_num: Option<u32>,
}

impl TagQuery {
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

    pub fn name(mut self, tag_name: impl Into<String>) -> Self {
        self.tag_name = Some(tag_name.into());
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
            .trimmed("tagName", self.tag_name.as_deref())
            .count("pageSize", self.page_size)
            .count("pageNum", self.page_num)
    }
}

/// Filters for [`Fit2CloudClient::get_servers_by_tag`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagServerQuery {
    pub cluster_id: Option<i64>,
    pub cluster_role_id: Option<i64>,
    pub tag_name: Option<String>,
    pub tag_value: Option<String>,
    pub page_size: Option<u32>,
    pub page_num: Option<u32>,
}

impl TagServerQuery {
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

    pub fn tag(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.tag_name = Some(name.into());
        self.tag_value = Some(value.into());
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
            .text("tagName", self.tag_name.as_deref())
            .text("tagValue", self.tag_value.as_deref())
            .count("pageSize", self.page_size)
            .count("pageNum", self.page_num)
    }
}

impl Fit2CloudClient {
    pub async fn get_tags(&self, query: &TagQuery) -> Result<Vec<Tag>> {
        let request = ApiRequest::get(self.url("/tags")).query(query.to_params());
        self.json(request).await
    }

    /// Create or update a tag on a server
    pub async fn save_tag(
        &self,
        server_id: Option<i64>,
        tag_name: Option<&str>,
        tag_value: Option<&str>,
    ) -> Result<Tag> {
        let form = Params::new()
            .id("serverId", server_id)
            .trimmed("tagName", tag_name)
            .trimmed("tagValue", tag_value);
        self.json(ApiRequest::post(self.url("/tags/save")).form(form)).await
    }

    pub async fn delete_tag(&self, server_id: Option<i64>, tag_name: Option<&str>) -> Result<bool> {
        let form = Params::new()
            .id("serverId", server_id)
            .trimmed("tagName", tag_name);
        self.boolean(ApiRequest::post(self.url("/tags/delete")).form(form)).await
    }

    /// Servers carrying a tag
    pub async fn get_servers_by_tag(&self, query: &TagServerQuery) -> Result<Vec<Server>> {
        let request = ApiRequest::get(self.url("/tags/servers")).query(query.to_params());
        self.json(request).await
    }
}
