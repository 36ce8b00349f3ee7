//! The HTTP transport seam.
//!
//! This trait decouples the dispatcher from any specific HTTP implementation.
//! A `reqwest`-backed transport is provided behind the `reqwest` feature; tests
//! and embedders can supply their own.

use std::future::Future;

use crate::http::{HttpRequest, HttpResponse};

/// Executes a single rendered request.
pub trait HttpTransport: Send + Sync {
    /// The error returned when no response could be obtained.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Executes `request` and returns the response, whatever its status.
    ///
    /// Implementations must not retry and must report 4xx/5xx responses as
    /// `Ok`; only failures that leave no response (connection refused, DNS,
    /// timeouts, a truncated body) are `Err`.
    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, Self::Error>> + Send;
}

impl<T: HttpTransport + ?Sized> HttpTransport for std::sync::Arc<T> {
    type Error = T::Error;

    fn execute(
        &self,
        request: HttpRequest,
    ) -> impl Future<Output = Result<HttpResponse, Self::Error>> + Send {
        (**self).execute(request)
    }
}
