//! Server (virtual machine) API

use fit2cloud_models::Server;
use tracing::info;

use crate::errors::Result;
use crate::http::client::{ApiRequest, Fit2CloudClient};
use crate::http::params::Params;

/// Filters for [`Fit2CloudClient::get_servers`]
///
/// Unset, blank or non-positive filters are left out of the request.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ServerQuery {
    pub cluster_id: Option<i64>,
    pub cluster_role_id: Option<i64>,
    /// Field to sort by
    pub sort: Option<String>,
    /// `asc` or `desc`
    pub order: Option<String>,
    pub page_size: Option<u32>,
    pub page_num: Option<u32>,
    /// Include terminated servers. Always sent.
    pub show_terminated: bool,
}

impl ServerQuery {
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

    pub fn show_terminated(mut self, show: bool) -> Self {
        self.show_terminated = show;
        self
    }

    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .id("clusterId", self.cluster_id)
            .id("clusterRoleId", self.cluster_role_id)
            .text("sort", self.sort.as_deref())
            .text("order", self.order.as_deref())
            .count("pageSize", self.page_size)
            .count("pageNum", self.page_num)
            .flag("showTerminated", self.show_terminated)
    }
}

impl Fit2CloudClient {
    /// List servers matching the given filters
    pub async fn get_servers(&self, query: &ServerQuery) -> Result<Vec<Server>> {
        let request = ApiRequest::get(self.url("/servers")).query(query.to_params());
        self.json(request).await
    }

    pub async fn get_server(&self, server_id: i64) -> Result<Server> {
        let url = self.url(&format!("/server/{}", server_id));
        self.json(ApiRequest::get(url)).await
    }

    /// Launch a server from a launch configuration and wait until the
    /// platform has created it
    pub async fn launch_server(
        &self,
        cluster_id: i64,
        cluster_role_id: i64,
        launch_configuration_id: i64,
    ) -> Result<Server> {
        let url = self.url(&format!(
            "/launchserver/cluster/{}/clusterrole/{}",
            cluster_id, cluster_role_id
        ));
        self.launch(url, launch_configuration_id).await
    }

    /// Launch a server without waiting; the returned server is still being
    /// created
    pub async fn launch_server_async(
        &self,
        cluster_id: i64,
        cluster_role_id: i64,
        launch_configuration_id: i64,
    ) -> Result<Server> {
        let url = self.url(&format!(
            "/launchserver/async/cluster/{}/clusterrole/{}",
            cluster_id, cluster_role_id
        ));
        self.launch(url, launch_configuration_id).await
    }

    async fn launch(&self, url: String, launch_configuration_id: i64) -> Result<Server> {
        let query = Params::new().required("launchConfigurationId", launch_configuration_id);
        let server: Server = self.json(ApiRequest::post(url).query(query)).await?;
        info!("Launched server {:?} from configuration {}", server.id, launch_configuration_id);
        Ok(server)
    }

    pub async fn terminate_server(&self, server_id: i64) -> Result<bool> {
        let url = self.url(&format!("/terminateserver/server/{}", server_id));
        self.boolean(ApiRequest::post(url)).await
    }

    pub async fn start_server(&self, server_id: i64) -> Result<Server> {
        let url = self.url(&format!("/startserver/server/{}", server_id));
        self.json(ApiRequest::post(url)).await
    }

    pub async fn stop_server(&self, server_id: i64) -> Result<bool> {
        let url = self.url(&format!("/stopserver/server/{}", server_id));
        self.boolean(ApiRequest::post(url)).await
    }
}
