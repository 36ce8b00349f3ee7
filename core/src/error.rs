//! Error types for request rendering and dispatch.
//!
//! # Design
//! `ApiError` is the closed set of outcomes a caller can observe besides a
//! decoded value. Well-known statuses get dedicated variants; the rest of the
//! 4xx/5xx ranges carry the literal code. `RenderError` explains why a request
//! could not be turned into a URL, but callers only ever see it as
//! `ApiError::BadRequest`.

use thiserror::Error;

/// Boxed error from the underlying HTTP transport.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors returned by `ApiClient::dispatch` and `Dispatcher::dispatch`.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The request could not be rendered, or the server returned 400.
    #[error("bad request")]
    BadRequest,

    #[error("unauthorized")]
    Unauthorized,

    #[error("forbidden")]
    Forbidden,

    #[error("resource not found")]
    NotFound,

    /// A 4xx status without a dedicated variant (402, 405..=499).
    #[error("client error: HTTP {0}")]
    Error4xx(u16),

    #[error("internal server error")]
    ServerError,

    /// A 5xx status other than 500.
    #[error("server error: HTTP {0}")]
    Error5xx(u16),

    /// A success response body did not decode into the declared type.
    #[error("response body could not be decoded")]
    Decoding,

    /// No response was obtained from the transport.
    #[error("transport failed: {0}")]
    Transport(#[source] BoxError),

    #[error("unknown error")]
    Unknown,
}

impl ApiError {
    /// The HTTP status code this error stands for, if any.
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::BadRequest => Some(400),
            ApiError::Unauthorized => Some(401),
            ApiError::Forbidden => Some(403),
            ApiError::NotFound => Some(404),
            ApiError::Error4xx(code) | ApiError::Error5xx(code) => Some(*code),
            ApiError::ServerError => Some(500),
            ApiError::Decoding | ApiError::Transport(_) | ApiError::Unknown => None,
        }
    }

    pub fn is_client_error(&self) -> bool {
        self.status().is_some_and(|s| (400..=499).contains(&s))
    }

    pub fn is_server_error(&self) -> bool {
        self.status().is_some_and(|s| (500..=599).contains(&s))
    }
}

/// Why a `NetworkRequest` could not be rendered into an `HttpRequest`.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("invalid base URL: {0}")]
    InvalidBaseUrl(#[from] url::ParseError),

    /// The base URL has no hierarchical path to append to (`mailto:`, `data:`).
    #[error("base URL cannot carry a path: {0}")]
    CannotBeABase(String),
}
