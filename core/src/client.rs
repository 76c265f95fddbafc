//! Request dispatch shared by every Cachet operation.
//!
//! # Design
//! `CachetClient` holds an immutable `ClientConfig` and a `Transport` and
//! carries no per-call state, so one instance can serve concurrent callers.
//! Each operation (see the resource modules) reduces to a verb, a path and a
//! `Params` map; `request` turns those into an `HttpRequest` and `dispatch`
//! sends it. Responses are returned exactly as the transport produced them.

use tracing::{debug, trace};

use crate::config::ClientConfig;
use crate::http::{HttpMethod, HttpRequest, HttpResponse};
use crate::params::Params;
use crate::transport::Transport;

/// Header carrying the API token on every request.
pub const TOKEN_HEADER: &str = "X-Cachet-Token";

/// Client for the Cachet v1 API.
///
/// Every operation issues exactly one request and returns the raw
/// `HttpResponse`, whatever its status. `Err` means the transport could not
/// produce a response at all.
#[derive(Debug, Clone)]
pub struct CachetClient<T> {
    config: ClientConfig,
    transport: T,
}

#[cfg(feature = "ureq")]
impl CachetClient<crate::transport::UreqTransport> {
    /// Client over the bundled blocking transport. `base_url` should include
    /// the API prefix, e.g. `https://status.example.com/api/v1`.
    pub fn new(base_url: impl Into<String>, token: impl Into<String>) -> Self {
        Self::from_config(ClientConfig::new(base_url, token))
    }

    /// Client over the bundled blocking transport, honouring the configured
    /// timeout.
    pub fn from_config(config: ClientConfig) -> Self {
        let transport = crate::transport::UreqTransport::with_timeout(config.timeout());
        Self::with_transport(config, transport)
    }
}

impl<T: Transport> CachetClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Build the request for `method` on `path` without sending it.
    ///
    /// GET and DELETE put present parameters in the query string; POST and
    /// PUT send them as a JSON object. Absent parameters are dropped either
    /// way.
    pub fn request(&self, method: HttpMethod, path: &str, params: &Params) -> HttpRequest {
        let mut url = format!("{}{path}", self.config.base_url());
        let mut headers = vec![
            (TOKEN_HEADER.to_string(), self.config.token().to_string()),
            ("Accept".to_string(), "application/json".to_string()),
        ];

        let body = if method.has_body() {
            headers.push(("Content-Type".to_string(), "application/json".to_string()));
            Some(params.to_json().to_string())
        } else {
            if let Some(query) = params.to_query() {
                url.push('?');
                url.push_str(&query);
            }
            None
        };

        HttpRequest {
            method,
            url,
            headers,
            body,
        }
    }

    /// Build and send one request.
    pub fn dispatch(&self, method: HttpMethod, path: &str, params: Params) -> Result<HttpResponse, T::Error> {
        let request = self.request(method, path, &params);
        debug!(%method, url = %request.url, "sending Cachet request");

        match self.transport.send(request) {
            Ok(response) => {
                trace!(%method, path, status = response.status, "Cachet response");
                Ok(response)
            }
            Err(err) => {
                debug!(%method, path, error = %err, "Cachet request failed");
                Err(err)
            }
        }
    }

    pub(crate) fn get(&self, path: &str, params: Params) -> Result<HttpResponse, T::Error> {
        self.dispatch(HttpMethod::Get, path, params)
    }

    pub(crate) fn post(&self, path: &str, params: Params) -> Result<HttpResponse, T::Error> {
        self.dispatch(HttpMethod::Post, path, params)
    }

    pub(crate) fn put(&self, path: &str, params: Params) -> Result<HttpResponse, T::Error> {
        self.dispatch(HttpMethod::Put, path, params)
    }

    pub(crate) fn delete(&self, path: &str) -> Result<HttpResponse, T::Error> {
        self.dispatch(HttpMethod::Delete, path, Params::new())
    }

    /// Liveness probe: `GET /ping`.
    pub fn ping(&self) -> Result<HttpResponse, T::Error> {
        self.get("/ping", Params::new())
    }
}
