//! Script API

use fit2cloud_models::Script;
use tracing::info;

use crate::errors::Result;
use crate::http::client::{ApiRequest, Fit2CloudClient};
use crate::http::params::Params;

impl Fit2CloudClient {
    /// List stored scripts, optionally one page at a time
    pub async fn get_scripts(&self, page_size: Option<u32>, page_num: Option<u32>) -> Result<Vec<Script>> {
        let query = Params::new()
            .count("pageSize", page_size)
            .count("pageNum", page_num);
        self.json(ApiRequest::get(self.url("/scripts")).query(query)).await
    }

    pub async fn get_script(&self, script_id: i64) -> Result<Script> {
        let url = self.url(&format!("/script/{}", script_id));
        self.json(ApiRequest::get(url)).await
    }

    /// Store a new script and return its id
    pub async fn add_script(
        &self,
        name: &str,
        description: Option<&str>,
        script_text: &str,
    ) -> Result<i64> {
        let form = Params::new()
            .required("name", name)
            .text("description", description)
            .required("scriptText", script_text);
        self.number(ApiRequest::post(self.url("/script/add")).form(form)).await
    }

    pub async fn edit_script(
        &self,
        script_id: i64,
        description: Option<&str>,
        script_text: &str,
    ) -> Result<bool> {
        let url = self.url(&format!("/script/{}/update", script_id));
        let form = Params::new()
            .text("description", description)
            .required("scriptText", script_text);
        self.boolean(ApiRequest::post(url).form(form)).await
    }

    pub async fn delete_script(&self, script_id: i64) -> Result<bool> {
        let url = self.url(&format!("/script/{}/delete", script_id));
        self.boolean(ApiRequest::post(url)).await
    }

    /// Run a script on a server.
    ///
    /// Execution is asynchronous on the platform side: the returned value is
    /// the id of the [`fit2cloud_models::Event`] tracking it, to be polled with
    /// [`Fit2CloudClient::get_event`] and [`Fit2CloudClient::get_loggings_by_event_id`].
    pub async fn execute_script(&self, server_id: i64, script_content: &str) -> Result<i64> {
        let form = Params::new()
            .required("serverId", server_id)
            .required("scriptContent", script_content);
        let request = ApiRequest::post(self.execute_script_url().to_string()).form(form);
        let event_id = self.number(request).await?;
        info!("Script submitted to server {} as event {}", server_id, event_id);
        Ok(event_id)
    }
}
