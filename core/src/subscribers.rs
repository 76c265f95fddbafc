//! Subscriber operations.

use crate::client::CachetClient;
use crate::http::HttpResponse;
use crate::params::Params;
use crate::transport::Transport;
use crate::types::{Id, SubscriberOptions};

impl<T: Transport> CachetClient<T> {
    /// `GET /subscribers`
    pub fn list_subscribers(&self) -> Result<HttpResponse, T::Error> {
        self.get("/subscribers", Params::new())
    }

    /// `POST /subscribers`
    pub fn create_subscriber(&self, email: &str, options: SubscriberOptions) -> Result<HttpResponse, T::Error> {
        let mut params = Params::new().with("email", email);
        params.merge(options.into());
        self.post("/subscribers", params)
    }

    /// `DELETE /subscribers/{id}`
    pub fn delete_subscriber(&self, id: Id) -> Result<HttpResponse, T::Error> {
        self.delete(&format!("/subscribers/{id}"))
    }
}
