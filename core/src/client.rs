//! Typed API client: render a `NetworkRequest`, dispatch it, decode the result.
//!
//! # Design
//! `ApiClient` holds only a `base_url` and a `Dispatcher`, both immutable, so
//! one instance can be cloned or shared across tasks. A request that fails to
//! render never reaches the transport.

use tracing::warn;

use crate::dispatcher::Dispatcher;
use crate::error::ApiError;
use crate::request::{render, NetworkRequest};
use crate::transport::HttpTransport;

#[cfg(feature = "reqwest")]
use crate::{config::ClientConfig, reqwest_transport::ReqwestTransport};

/// Client for a single API rooted at `base_url`.
#[derive(Debug, Clone)]
pub struct ApiClient<T> {
    base_url: String,
    dispatcher: Dispatcher<T>,
}

impl<T: HttpTransport> ApiClient<T> {
    pub fn new(base_url: impl Into<String>, dispatcher: Dispatcher<T>) -> Self {
        Self {
            base_url: base_url.into(),
            dispatcher,
        }
    }

    pub fn with_transport(base_url: impl Into<String>, transport: T) -> Self {
        Self::new(base_url, Dispatcher::new(transport))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn dispatcher(&self) -> &Dispatcher<T> {
        &self.dispatcher
    }

    /// Render `request` against the base URL and dispatch it.
    ///
    /// Returns `ApiError::BadRequest` without issuing a call when the request
    /// cannot be rendered.
    pub async fn dispatch<R>(&self, request: &R) -> Result<R::Output, ApiError>
    where
        R: NetworkRequest + ?Sized,
    {
        let http_request = match render(request, &self.base_url) {
            Ok(http_request) => http_request,
            Err(e) => {
                warn!(base_url = %self.base_url, error = %e, "failed to render request");
                return Err(ApiError::BadRequest);
            }
        };
        self.dispatcher.dispatch(http_request).await
    }
}

#[cfg(feature = "reqwest")]
impl ApiClient<ReqwestTransport> {
    /// Build a client over a `reqwest` transport configured from `config`.
    pub fn from_config(config: &ClientConfig) -> Result<Self, ApiError> {
        let transport = ReqwestTransport::new(&config.transport)
            .map_err(|e| ApiError::Transport(Box::new(e)))?;
        Ok(Self::with_transport(config.base_url.clone(), transport))
    }
}
