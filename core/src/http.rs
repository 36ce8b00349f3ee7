//! HTTP transport types passed between the renderer, the dispatcher and the
//! transport.
//!
//! # Design
//! These types describe HTTP requests and responses as plain data. Rendering a
//! `NetworkRequest` produces an `HttpRequest`; an `HttpTransport` turns it into
//! an `HttpResponse`. Keeping both sides as owned data makes rendering
//! deterministic and lets tests script the transport without a network.

use std::fmt;

/// HTTP method for a request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    #[default]
    Get,
    Post,
    Put,
    Delete,
}

impl HttpMethod {
    /// The uppercase verb as it appears on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            HttpMethod::Get => "GET",
            HttpMethod::Post => "POST",
            HttpMethod::Put => "PUT",
            HttpMethod::Delete => "DELETE",
        }
    }
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A fully resolved HTTP request described as plain data.
///
/// Produced by [`render`](crate::request::render) and consumed once by an
/// [`HttpTransport`](crate::transport::HttpTransport).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpRequest {
    /// Absolute URL including the encoded query string.
    pub url: String,
    pub method: HttpMethod,
    pub headers: Vec<(String, String)>,
    pub body: Option<Vec<u8>>,
}

/// An HTTP response described as plain data.
///
/// Transports return every status here, including 4xx/5xx; interpreting the
/// status is the dispatcher's job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: Vec<(String, String)>,
    pub body: Vec<u8>,
}

impl HttpResponse {
    /// Whether the status is in the 200..=299 success range.
    pub fn is_success(&self) -> bool {
        (200..=299).contains(&self.status)
    }
}
