//! Cluster API

use fit2cloud_models::{Cluster, ClusterParam, ClusterRole};

use crate::errors::Result;
use crate::http::client::{ApiRequest, Fit2CloudClient};
use crate::http::params::Params;

impl Fit2CloudClient {
    /// List all clusters of the account
    pub async fn get_clusters(&self) -> Result<Vec<Cluster>> {
        self.json(ApiRequest::get(self.url("/clusters"))).await
    }

    pub async fn get_cluster(&self, cluster_id: i64) -> Result<Cluster> {
        let url = self.url(&format!("/cluster/{}", cluster_id));
        self.json(ApiRequest::get(url)).await
    }

    /// List the virtual machine groups of a cluster
    pub async fn get_cluster_roles(&self, cluster_id: i64) -> Result<Vec<ClusterRole>> {
        let url = self.url(&format!("/cluster/{}/roles", cluster_id));
        self.json(ApiRequest::get(url)).await
    }

    pub async fn get_cluster_params(&self, cluster_id: i64) -> Result<Vec<ClusterParam>> {
        let url = self.url(&format!("/cluster/{}/params", cluster_id));
        self.json(ApiRequest::get(url)).await
    }

    /// Get one cluster parameter by name
    pub async fn get_cluster_param(&self, cluster_id: i64, name: &str) -> Result<ClusterParam> {
        let url = self.url(&format!("/cluster/{}/param", cluster_id));
        let query = Params::new().required("name", name);
        self.json(ApiRequest::get(url).query(query)).await
    }

    /// Create or overwrite a cluster parameter
    pub async fn set_cluster_param(&self, cluster_id: i64, name: &str, value: &str) -> Result<bool> {
        let url = self.url(&format!("/cluster/{}/param", cluster_id));
        let form = Params::new().required("name", name).required("value", value);
        self.boolean(ApiRequest::post(url).form(form)).await
    }

    pub async fn delete_cluster_param(&self, cluster_id: i64, name: &str) -> Result<bool> {
        let url = self.url(&format!("/cluster/{}/param/delete", cluster_id));
        let query = Params::new().required("name", name);
        self.boolean(ApiRequest::post(url).query(query)).await
    }
}
