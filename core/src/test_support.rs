//! Transports for unit tests.

use std::convert::Infallible;
use std::io;
use std::sync::{Arc, Mutex};

use crate::client::CachetClient;
use crate::config::ClientConfig;
use crate::http::{HttpRequest, HttpResponse};
use crate::transport::Transport;

pub const BASE_URL: &str = "https://status.example.com";

/// Records every request and answers with a canned response. Clones share
/// the same log.
#[derive(Debug, Clone)]
pub struct Recorder {
    requests: Arc<Mutex<Vec<HttpRequest>>>,
    response: Arc<Mutex<HttpResponse>>,
}

impl Default for Recorder {
    fn default() -> Self {
        Self {
            requests: Arc::default(),
            response: Arc::new(Mutex::new(HttpResponse {
                status: 200,
                headers: Vec::new(),
                body: r#"{"data":[]}"#.to_string(),
            })),
        }
    }
}

impl Recorder {
    pub fn respond_with(&self, status: u16, body: &str) {
        *self.response.lock().unwrap() = HttpResponse {
            status,
            headers: Vec::new(),
            body: body.to_string(),
        };
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().unwrap().clone()
    }

    pub fn last(&self) -> HttpRequest {
        self.requests.lock().unwrap().last().cloned().expect("no request sent")
    }

    /// Query pairs of the last request, decoded.
    pub fn last_query(&self) -> Vec<(String, String)> {
        let url = url::Url::parse(&self.last().url).unwrap();
        url.query_pairs().into_owned().collect()
    }

    /// Body of the last request as JSON.
    pub fn last_body(&self) -> serde_json::Value {
        serde_json::from_str(self.last().body.as_deref().expect("request has no body")).unwrap()
    }
}

impl Transport for Recorder {
    type Error = Infallible;

    fn send(&self, request: HttpRequest) -> Result<HttpResponse, Self::Error> {
        self.requests.lock().unwrap().push(request);
        Ok(self.response.lock().unwrap().clone())
    }
}

/// Fails every request the way a refused connection would.
#[derive(Debug, Clone, Copy)]
pub struct FailingTransport;

impl Transport for FailingTransport {
    type Error = io::Error;

    fn send(&self, _request: HttpRequest) -> Result<HttpResponse, Self::Error> {
        Err(io::Error::new(io::ErrorKind::ConnectionRefused, "connection refused"))
    }
}

pub fn client() -> (CachetClient<Recorder>, Recorder) {
    let recorder = Recorder::default();
    let client = CachetClient::with_transport(ClientConfig::new(BASE_URL, "T"), recorder.clone());
    (client, recorder)
}
