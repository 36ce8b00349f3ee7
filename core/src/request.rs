//! The request contract and its rendering into an `HttpRequest`.
//!
//! # Design
//! A `NetworkRequest` is a value describing one API call. Only `path` and the
//! `Output` type are required; everything else has a default provided by the
//! trait, which implementors override as needed. `render` is a pure function of
//! the request and the base URL.

use serde::de::DeserializeOwned;
use tracing::warn;
use url::Url;

use crate::error::RenderError;
use crate::http::{HttpMethod, HttpRequest};
use crate::types::Params;

pub const DEFAULT_CONTENT_TYPE: &str = "application/json";
pub const DEFAULT_CLIENT: &str = "ios";

/// Describes one logical API call and the type its response decodes into.
pub trait NetworkRequest {
    /// The type the response body is decoded into.
    type Output: DeserializeOwned;

    /// Path appended verbatim to the base URL's path.
    fn path(&self) -> String;

    fn method(&self) -> HttpMethod {
        HttpMethod::Get
    }

    fn content_type(&self) -> String {
        DEFAULT_CONTENT_TYPE.to_string()
    }

    /// Tag identifying the calling client, sent in the `client` header.
    fn client(&self) -> String {
        DEFAULT_CLIENT.to_string()
    }

    fn query_items(&self) -> Option<Params> {
        None
    }

    /// Parameters serialized as a JSON object body.
    fn body(&self) -> Option<Params> {
        None
    }

    fn headers(&self) -> Vec<(String, String)> {
        vec![
            ("contentType".to_string(), self.content_type()),
            ("client".to_string(), self.client()),
        ]
    }
}

/// Render `request` against `base_url` into a fully resolved `HttpRequest`.
///
/// The request path is appended to the base path by plain concatenation;
/// separators are not normalized. Query items replace any query on the base
/// URL. A body that cannot be serialized is dropped rather than reported.
pub fn render<R>(request: &R, base_url: &str) -> Result<HttpRequest, RenderError>
where
    R: NetworkRequest + ?Sized,
{
    let mut url = Url::parse(base_url)?;
    if url.cannot_be_a_base() {
        return Err(RenderError::CannotBeABase(base_url.to_string()));
    }

    // A host-only URL reports its implicit root as `/`.
    let base_path = if url.path() == "/" { "" } else { url.path() };
    let path = format!("{base_path}{}", request.path());
    url.set_path(&path);

    url.set_query(None);
    if let Some(items) = request.query_items() {
        url.query_pairs_mut()
            .extend_pairs(items.iter().map(|(key, value)| (key, value.to_string())));
    }

    let method = request.method();
    let body = request.body().and_then(|params| match serde_json::to_vec(&params) {
        Ok(bytes) => Some(bytes),
        Err(e) => {
            warn!(url = %url, error = %e, "dropping request body that is not valid JSON");
            None
        }
    });

    Ok(HttpRequest {
        url: url.into(),
        method,
        headers: request.headers(),
        body,
    })
}
