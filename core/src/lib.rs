//! Blocking client for the Cachet status-page API.
//!
//! # Overview
//! `CachetClient` maps one method to each Cachet v1 endpoint (components,
//! component groups, incidents, metrics and their points, subscribers, and
//! `/ping`). Every call authenticates with the `X-Cachet-Token` header,
//! issues exactly one request, and returns the raw `HttpResponse`.
//!
//! ```no_run
//! use cachet_core::{CachetClient, ComponentOptions, ComponentStatus};
//!
//! let client = CachetClient::new("https://status.example.com/api/v1", "token");
//! let resp = client.create_component("API", ComponentStatus::Operational, ComponentOptions::default())?;
//! if !resp.is_success() {
//!     eprintln!("Cachet said {}: {}", resp.status, resp.body);
//! }
//! # Ok::<(), ureq::Error>(())
//! ```
//!
//! # Design
//! - The client is stateless apart from an immutable `ClientConfig`, so it
//!   can be shared across threads.
//! - I/O goes through the `Transport` trait. The default `ureq` feature
//!   provides `UreqTransport`; tests and embedders can supply their own.
//! - Status codes are never interpreted. `HttpResponse::json` and
//!   `HttpResponse::data` are opt-in helpers for callers.
//! - Optional arguments are `Option` fields on per-operation records and are
//!   dropped from the request when unset.

pub mod client;
pub mod config;
pub mod error;
pub mod http;
pub mod params;
pub mod transport;
pub mod types;

mod component_groups;
mod components;
mod incidents;
mod metrics;
mod subscribers;

#[cfg(test)]
mod test_support;

pub use client::{CachetClient, TOKEN_HEADER};
pub use config::ClientConfig;
pub use error::ApiError;
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use params::{ParamValue, Params, SortOrder};
#[cfg(feature = "ureq")]
pub use transport::UreqTransport;
pub use transport::Transport;
pub use types::{
    ComponentGroupOptions, ComponentGroupSearch, ComponentGroupUpdate, ComponentOptions, ComponentSearch,
    ComponentStatus, ComponentUpdate, Extra, Id, IncidentOptions, IncidentSearch, IncidentStatus, IncidentUpdate,
    MetricOptions, MetricPointOptions, MetricUpdate, SubscriberOptions,
};
