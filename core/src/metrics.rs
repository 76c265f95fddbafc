//! Metric and metric point operations.
//!
//! Points live under their metric, so every point operation takes the metric
//! id first. Deleting a point needs both ids.

use crate::client::CachetClient;
use crate::http::HttpResponse;
use crate::params::{ParamValue, Params};
use crate::transport::Transport;
use crate::types::{Id, MetricOptions, MetricPointOptions, MetricUpdate};

impl<T: Transport> CachetClient<T> {
    /// `GET /metrics`
    pub fn list_metrics(&self) -> Result<HttpResponse, T::Error> {
        self.get("/metrics", Params::new())
    }

    /// `GET /metrics/{id}`
    pub fn get_metric(&self, id: Id) -> Result<HttpResponse, T::Error> {
        self.get(&format!("/metrics/{id}"), Params::new())
    }

    /// `POST /metrics`
    pub fn create_metric(
        &self,
        name: &str,
        suffix: &str,
        description: &str,
        default_value: impl Into<ParamValue>,
        options: MetricOptions,
    ) -> Result<HttpResponse, T::Error> {
        let mut params = Params::new()
            .with("name", name)
            .with("suffix", suffix)
            .with("description", description)
            .with("default_value", default_value);
        params.merge(options.into());
        self.post("/metrics", params)
    }

    /// `PUT /metrics/{id}`
    pub fn update_metric(&self, id: Id, update: MetricUpdate) -> Result<HttpResponse, T::Error> {
        self.put(&format!("/metrics/{id}"), update.into())
    }

    /// `DELETE /metrics/{id}`
    pub fn delete_metric(&self, id: Id) -> Result<HttpResponse, T::Error> {
        self.delete(&format!("/metrics/{id}"))
    }

    /// `GET /metrics/{id}/points`
    pub fn list_metric_points(&self, metric_id: Id) -> Result<HttpResponse, T::Error> {
        self.get(&format!("/metrics/{metric_id}/points"), Params::new())
    }

    /// `POST /metrics/{id}/points`
    pub fn create_metric_point(
        &self,
        metric_id: Id,
        value: impl Into<ParamValue>,
        options: MetricPointOptions,
    ) -> Result<HttpResponse, T::Error> {
        let mut params = Params::new().with("value", value);
        params.merge(options.into());
        self.post(&format!("/metrics/{metric_id}/points"), params)
    }

    /// `DELETE /metrics/{id}/points/{point_id}`
    pub fn delete_metric_point(&self, metric_id: Id, point_id: Id) -> Result<HttpResponse, T::Error> {
        self.delete(&format!("/metrics/{metric_id}/points/{point_id}"))
    }
}
