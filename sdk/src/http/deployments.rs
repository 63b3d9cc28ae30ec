//! Application deployment API

use fit2cloud_models::{Application, ApplicationDeployment, ApplicationRepo, ApplicationRevision};
use tracing::info;

use crate::errors::Result;
use crate::http::client::{ApiRequest, Fit2CloudClient};
use crate::http::params::Params;

/// A new application revision
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewRevision {
    pub name: String,
    pub description: Option<String>,
    pub application_name: String,
    /// Repository holding the artifact; the application's default when unset
    pub repository_name: Option<String>,
    /// Artifact location inside the repository
    pub location: String,
}

impl NewRevision {
    pub fn new(
        name: impl Into<String>,
        application_name: impl Into<String>,
        location: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            application_name: application_name.into(),
            location: location.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn repository(mut self, repository_name: impl Into<String>) -> Self {
        self.repository_name = Some(repository_name.into());
        self
    }

    pub(crate) fn to_params(&self) -> Params {
        let params = Params::new()
            .required("revName", &self.name)
            .text("revDescription", self.description.as_deref())
            .required("appName", &self.application_name);
        // An empty repository name is still sent; only an unset one is left out
        let params = match &self.repository_name {
            Some(repo) => params.required("repoName", repo),
            None => params,
        };
        params.required("location", &self.location)
    }
}

/// A deployment of a revision onto a cluster, a virtual machine group or one server
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewDeployment {
    pub application_name: String,
    pub revision_name: String,
    pub cluster_name: String,
    pub cluster_role_name: Option<String>,
    pub server_id: Option<i64>,
    /// One of `allAtOnce`, `halfAtATime` or `oneAtATime`
    pub deploy_policy: String,
    pub description: Option<String>,
}

impl NewDeployment {
    pub fn new(
        application_name: impl Into<String>,
        revision_name: impl Into<String>,
        cluster_name: impl Into<String>,
        deploy_policy: impl Into<String>,
    ) -> Self {
        Self {
            application_name: application_name.into(),
            revision_name: revision_name.into(),
            cluster_name: cluster_name.into(),
            deploy_policy: deploy_policy.into(),
            ..Default::default()
        }
    }

    pub fn cluster_role(mut self, cluster_role_name: impl Into<String>) -> Self {
        self.cluster_role_name = Some(cluster_role_name.into());
        self
    }

    pub fn server(mut self, server_id: i64) -> Self {
        self.server_id = Some(server_id);
        self
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .required("appName", &self.application_name)
            .required("revName", &self.revision_name)
            .required("clusterName", &self.cluster_name)
            .text("clusterRoleName", self.cluster_role_name.as_deref())
            .id("serverId", self.server_id)
            .required("deployPolicy", &self.deploy_policy)
            .text("description", self.description.as_deref())
    }
}

impl Fit2CloudClient {
    /// Register a new revision of an application
    pub async fn add_application_revision(&self, revision: &NewRevision) -> Result<ApplicationRevision> {
        let url = self.url("/deploy/app/revision/add.json");
        self.json(ApiRequest::post(url).form(revision.to_params())).await
    }

    /// Deploy a revision
    pub async fn add_deployment(&self, deployment: &NewDeployment) -> Result<ApplicationDeployment> {
        let url = self.url("/deploy/app/revision/deployment/add.json");
        let created: ApplicationDeployment =
            self.json(ApiRequest::post(url).form(deployment.to_params())).await?;
        info!(
            "Deployment {:?} of {}@{} created",
            created.id, deployment.application_name, deployment.revision_name
        );
        Ok(created)
    }

    /// Look up an application by name
    pub async fn get_application(&self, application_name: &str) -> Result<Application> {
        let query = Params::new().required("name", application_name);
        self.json(ApiRequest::get(self.url("/deploy/app/search")).query(query)).await
    }

    /// Look up an application repository by name
    pub async fn get_application_repo(&self, repo_name: &str) -> Result<ApplicationRepo> {
        let query = Params::new().required("name", repo_name);
        self.json(ApiRequest::get(self.url("/deploy/repo/search")).query(query)).await
    }
}
