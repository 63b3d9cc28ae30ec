//! Monitoring API

use fit2cloud_models::{Metric, MetricTop};

use crate::errors::Result;
use crate::http::client::{ApiRequest, Fit2CloudClient};
use crate::http::params::Params;

impl Fit2CloudClient {
    /// Metrics that support top-N queries
    pub async fn get_top_metrics(&self) -> Result<Vec<Metric>> {
        self.json(ApiRequest::get(self.url("/top/metrics"))).await
    }

    /// Servers ranked by one metric
    pub async fn get_top_metric_data(
        &self,
        metric_name: Option<&str>,
        limit: Option<u32>,
    ) -> Result<Vec<MetricTop>> {
        let query = Params::new()
            .text("metric", metric_name)
            .count("limit", limit);
        self.json(ApiRequest::get(self.url("/top/metric/data")).query(query)).await
    }
}
