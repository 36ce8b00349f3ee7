//! Executes rendered requests and turns responses into typed results.
//!
//! # Design
//! `Dispatcher` owns the transport and nothing else. Each call issues exactly
//! one transport request; a non-2xx status is mapped to an `ApiError` without
//! looking at the body, and a 2xx body is decoded with `serde_json`. Decoder
//! behavior (field renames, defaults) lives on the output type's serde
//! attributes.

use serde::de::DeserializeOwned;
use tracing::debug;

use crate::error::ApiError;
use crate::http::HttpRequest;
use crate::transport::HttpTransport;

/// Sends `HttpRequest`s through a transport and decodes the responses.
#[derive(Debug, Clone)]
pub struct Dispatcher<T> {
    transport: T,
}

impl<T: HttpTransport> Dispatcher<T> {
    pub fn new(transport: T) -> Self {
        Self { transport }
    }

    pub fn transport(&self) -> &T {
        &self.transport
    }

    /// Execute `request` and decode a successful body into `O`.
    pub async fn dispatch<O: DeserializeOwned>(&self, request: HttpRequest) -> Result<O, ApiError> {
        debug!(method = %request.method, url = %request.url, "dispatching request");

        let response = self
            .transport
            .execute(request)
            .await
            .map_err(|e| ApiError::Transport(Box::new(e)))?;

        if !response.is_success() {
            let err = status_error(response.status);
            debug!(status = response.status, error = %err, "request failed with HTTP status");
            return Err(err);
        }

        serde_json::from_slice(&response.body).map_err(|e| {
            debug!(status = response.status, error = %e, "failed to decode response body");
            ApiError::Decoding
        })
    }
}

/// Map a non-success HTTP status code to its `ApiError`.
pub fn status_error(status: u16) -> ApiError {
    match status {
        400 => ApiError::BadRequest,
        401 => ApiError::Unauthorized,
        403 => ApiError::Forbidden,
        404 => ApiError::NotFound,
        402 | 405..=499 => ApiError::Error4xx(status),
        500 => ApiError::ServerError,
        501..=599 => ApiError::Error5xx(status),
        _ => ApiError::Unknown,
    }
}
