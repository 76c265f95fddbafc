//! The I/O seam between `CachetClient` and the network.
//!
//! # Design
//! `CachetClient` only ever builds `HttpRequest` values; a `Transport`
//! executes them. Transports must hand back every HTTP status as an
//! `HttpResponse` and reserve `Err` for failures where no response exists
//! (refused connection, DNS, timeout). The client returns that error to the
//! caller untouched, so `Transport::Error` is also the client's error type.

use std::sync::Arc;

use crate::http::{HttpRequest, HttpResponse};

/// Executes one HTTP request.
pub trait Transport {
    type Error: std::error::Error + Send + Sync + 'static;

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, Self::Error>;
}

impl<T: Transport + ?Sized> Transport for &T {
    type Error = T::Error;

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, Self::Error> {
        (**self).send(request)
    }
}

impl<T: Transport + ?Sized> Transport for Arc<T> {
    type Error = T::Error;

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, Self::Error> {
        (**self).send(request)
    }
}

#[cfg(feature = "ureq")]
pub use self::blocking::UreqTransport;

#[cfg(feature = "ureq")]
mod blocking {
    use std::time::Duration;

    use ureq::typestate::WithBody;
    use ureq::{Agent, Body, RequestBuilder};

    use super::Transport;
    use crate::http::{HttpMethod, HttpRequest, HttpResponse};

    /// Blocking transport backed by a shared `ureq::Agent`.
    ///
    /// The agent is configured not to treat 4xx/5xx as errors, so those
    /// responses come back as data. Cloning shares the connection pool.
    #[derive(Debug, Clone)]
    pub struct UreqTransport {
        agent: Agent,
    }

    impl UreqTransport {
        pub fn new() -> Self {
            Self::with_timeout(None)
        }

        /// `timeout` bounds the whole request, from connect to the last body
        /// byte.
        pub fn with_timeout(timeout: Option<Duration>) -> Self {
            let agent = Agent::config_builder()
                .http_status_as_error(false)
                .timeout_global(timeout)
                .build()
                .new_agent();
            Self { agent }
        }
    }

    impl Default for UreqTransport {
        fn default() -> Self {
            Self::new()
        }
    }

    impl Transport for UreqTransport {
        type Error = ureq::Error;

        fn send(&self, request: HttpRequest) -> Result<HttpResponse, Self::Error> {
            let HttpRequest {
                method,
                url,
                headers,
                body,
            } = request;

            let mut response = match method {
                HttpMethod::Get => with_headers(self.agent.get(&url), &headers).call(),
                HttpMethod::Delete => with_headers(self.agent.delete(&url), &headers).call(),
                HttpMethod::Post => send_body(with_headers(self.agent.post(&url), &headers), body),
                HttpMethod::Put => send_body(with_headers(self.agent.put(&url), &headers), body),
            }?;

            let status = response.status().as_u16();
            let headers = response
                .headers()
                .iter()
                .filter_map(|(name, value)| {
                    value
                        .to_str()
                        .ok()
                        .map(|value| (name.as_str().to_string(), value.to_string()))
                })
                .collect();
            let body = response.body_mut().read_to_string()?;

            Ok(HttpResponse {
                status,
                headers,
                body,
            })
        }
    }

    fn with_headers<B>(builder: RequestBuilder<B>, headers: &[(String, String)]) -> RequestBuilder<B> {
        headers
            .iter()
            .fold(builder, |builder, (name, value)| builder.header(name.as_str(), value.as_str()))
    }

    fn send_body(
        builder: RequestBuilder<WithBody>,
        body: Option<String>,
    ) -> Result<ureq::http::Response<Body>, ureq::Error> {
        match body {
            Some(body) => builder.send(body.as_bytes()),
            None => builder.send_empty(),
        }
    }
}
