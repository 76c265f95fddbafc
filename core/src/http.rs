//! HTTP transport types for the host-does-IO pattern.
//!
//! # Design
//! Requests and responses are plain data. `CachetClient` builds an
//! `HttpRequest`, hands it to a `Transport`, and returns whatever
//! `HttpResponse` comes back. Status codes are never interpreted on the way
//! through; the helpers at the bottom of this file exist for callers that
//! want to opt in to that.

use serde::de::DeserializeOwned;

use crate::error::ApiError;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HttpMethod {
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    pub fn as_str(self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }

    /// GET and DELETE carry parameters in the query string, POST and PUT in
    /// the body.
    pub fn has_body(self) -> bool {
        matches!(self, HttpMethod::Post | HttpMethod::Put)
    }
}

impl std::fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An HTTP request described as plain data.
///
/// `url` is absolute and already includes the encoded query string.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpRequest {
    pub method: HttpMethod,
    pub url: String,
    pub headers: Vec<(String, String)>,
    pub body: Option<String>,
}

impl HttpRequest {
    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }
}

/// An HTTP response described as plain data, exactly as the transport
/// produced it.
#[derive(Debug, Clone, PartialEq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Case-insensitive header lookup.
    pub fn header(&self, name: &str) -> Option<&str> {
        find_header(&self.headers, name)
    }

    /// Deserialize the whole body after checking for a 2xx status.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        self.check_status()?;
        Ok(serde_json::from_str(&self.body)?)
    }

    /// Deserialize the `data` member of Cachet's `{"data": ...}` envelope.
    pub fn data<T: DeserializeOwned>(&self) -> Result<T, ApiError> {
        let mut envelope: serde_json::Value = self.json()?;
        let data = envelope
            .get_mut("data")
            .map(serde_json::Value::take)
            .ok_or(ApiError::MissingData)?;
        Ok(serde_json::from_value(data)?)
    }

    /// Map non-success status codes to the appropriate `ApiError` variant.
    fn check_status(&self) -> Result<(), ApiError> {
        if self.is_success() {
            return Ok(());
        }
        if self.status == 404 {
            return Err(ApiError::NotFound);
        }
        Err(ApiError::HttpError {
            status: self.status,
            body: self.body.clone(),
        })
    }
}

fn find_header<'a>(headers: &'a [(String, String)], name: &str) -> Option<&'a str> {
    headers
        .iter()
        .find(|(key, _)| key.eq_ignore_ascii_case(name))
        .map(|(_, value)| value.as_str())
}
