//! Typed HTTP API client core.
//!
//! # Overview
//! Callers describe an API call as a value implementing [`NetworkRequest`].
//! [`ApiClient::dispatch`] renders it against a base URL, sends it through an
//! [`HttpTransport`], maps failures into [`ApiError`] and decodes the response
//! body into the request's declared `Output` type.
//!
//! # Design
//! - Rendering (`request::render`) is pure; it produces a plain-data
//!   `HttpRequest` and never touches the network.
//! - `Dispatcher` issues exactly one transport call per dispatch. No retries,
//!   no caching.
//! - The transport is a trait. `ReqwestTransport` is the default
//!   implementation, behind the `reqwest` feature.

pub mod client;
pub mod config;
pub mod dispatcher;
pub mod error;
pub mod http;
pub mod request;
#[cfg(feature = "reqwest")]
pub mod reqwest_transport;
pub mod transport;
pub mod types;

pub use client::ApiClient;
pub use config::{ClientConfig, TransportConfig};
pub use dispatcher::{status_error, Dispatcher};
pub use error::{ApiError, BoxError, RenderError};
pub use http::{HttpMethod, HttpRequest, HttpResponse};
pub use request::{render, NetworkRequest};
#[cfg(feature = "reqwest")]
pub use reqwest_transport::ReqwestTransport;
pub use transport::HttpTransport;
pub use types::{ParamValue, Params};
