//! Component group operations.

use crate::client::CachetClient;
use crate::http::HttpResponse;
use crate::params::Params;
use crate::transport::Transport;
use crate::types::{ComponentGroupOptions, ComponentGroupSearch, ComponentGroupUpdate, Id};

impl<T: Transport> CachetClient<T> {
    /// `GET /components/groups`
    pub fn list_component_groups(&self) -> Result<HttpResponse, T::Error> {
        self.get("/components/groups", Params::new())
    }

    /// `GET /components/groups` with filters; `order` defaults to `desc`.
    pub fn search_component_groups(&self, search: ComponentGroupSearch) -> Result<HttpResponse, T::Error> {
        self.get("/components/groups", search.into())
    }

    /// `GET /components/groups/{id}`
    pub fn get_component_group(&self, id: Id) -> Result<HttpResponse, T::Error> {
        self.get(&format!("/components/groups/{id}"), Params::new())
    }

    /// `POST /components/groups`
    pub fn create_component_group(
        &self,
        name: &str,
        options: ComponentGroupOptions,
    ) -> Result<HttpResponse, T::Error> {
        let mut params = Params::new().with("name", name);
        params.merge(options.into());
        self.post("/components/groups", params)
    }

    /// `PUT /components/groups/{id}`
    pub fn update_component_group(
        &self,
        id: Id,
        update: ComponentGroupUpdate,
    ) -> Result<HttpResponse, T::Error> {
        self.put(&format!("/components/groups/{id}"), update.into())
    }

    /// `DELETE /components/groups/{id}`
    pub fn delete_component_group(&self, id: Id) -> Result<HttpResponse, T::Error> {
        self.delete(&format!("/components/groups/{id}"))
    }
}
