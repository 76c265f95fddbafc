//! Error types for interpreting Cachet responses.
//!
//! # Design
//! `CachetClient` never produces these: transport failures surface as the
//! transport's own error type and every HTTP status comes back as a plain
//! `HttpResponse`. `ApiError` is returned only by the opt-in decoding helpers
//! on `HttpResponse`.

use thiserror::Error;

/// Errors returned by `HttpResponse::json` and `HttpResponse::data`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The server returned 404.
    #[error("resource not found")]
    NotFound,

    /// The server returned a non-2xx status other than 404.
    #[error("HTTP {status}: {body}")]
    HttpError { status: u16, body: String },

    /// The response body could not be deserialized into the expected type.
    #[error("deserialization failed: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// The body was JSON but had no `data` member.
    #[error("response has no data envelope")]
    MissingData,
}
