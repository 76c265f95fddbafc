//! Incident operations.

use crate::client::CachetClient;
use crate::http::HttpResponse;
use crate::params::Params;
use crate::transport::Transport;
use crate::types::{Id, IncidentOptions, IncidentSearch, IncidentStatus, IncidentUpdate};

impl<T: Transport> CachetClient<T> {
    /// `GET /incidents`
    pub fn list_incidents(&self) -> Result<HttpResponse, T::Error> {
        self.get("/incidents", Params::new())
    }

    /// `GET /incidents` with filters; `order` defaults to `desc`.
    pub fn search_incidents(&self, search: IncidentSearch) -> Result<HttpResponse, T::Error> {
        self.get("/incidents", search.into())
    }

    /// `GET /incidents/{id}`
    pub fn get_incident(&self, id: Id) -> Result<HttpResponse, T::Error> {
        self.get(&format!("/incidents/{id}"), Params::new())
    }

    /// `POST /incidents`. `message` is Markdown.
    pub fn create_incident(
        &self,
        name: &str,
        message: &str,
        status: IncidentStatus,
        visible: bool,
        options: IncidentOptions,
    ) -> Result<HttpResponse, T::Error> {
        let mut params = Params::new()
            .with("name", name)
            .with("message", message)
            .with("status", status)
            .with("visible", visible);
        params.merge(options.into());
        self.post("/incidents", params)
    }

    /// `PUT /incidents/{id}`
    pub fn update_incident(&self, id: Id, update: IncidentUpdate) -> Result<HttpResponse, T::Error> {
        self.put(&format!("/incidents/{id}"), update.into())
    }

    /// `DELETE /incidents/{id}`
    pub fn delete_incident(&self, id: Id) -> Result<HttpResponse, T::Error> {
        self.delete(&format!("/incidents/{id}"))
    }
}
