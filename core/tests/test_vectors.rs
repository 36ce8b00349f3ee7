//! Verify rendering and status mapping against JSON test vectors stored in
//! `test-vectors/`.
//!
//! Each vector file describes inputs and expected outcomes. Request bodies are
//! compared as parsed JSON and query strings as sorted pairs, so neither field
//! order nor query order can cause false negatives.

use std::sync::atomic::{AtomicUsize, Ordering};

use netreq_core::{
    render, ApiClient, ApiError, HttpMethod, HttpRequest, HttpResponse, HttpTransport,
    NetworkRequest, ParamValue, Params,
};
use url::Url;

/// Transport that always answers with one status and counts calls.
struct FixedTransport {
    status: u16,
    calls: AtomicUsize,
}

impl FixedTransport {
    fn new(status: u16) -> Self {
        Self {
            status,
            calls: AtomicUsize::new(0),
        }
    }
}

impl HttpTransport for FixedTransport {
    type Error = std::io::Error;

    async fn execute(&self, _request: HttpRequest) -> Result<HttpResponse, Self::Error> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        Ok(HttpResponse {
            status: self.status,
            headers: Vec::new(),
            body: br#"{"ok":true}"#.to_vec(),
        })
    }
}

/// A request whose every field comes from a vector.
struct VectorRequest {
    path: String,
    method: HttpMethod,
    query: Option<Params>,
    body: Option<Params>,
}

impl NetworkRequest for VectorRequest {
    type Output = serde_json::Value;

    fn path(&self) -> String {
        self.path.clone()
    }

    fn method(&self) -> HttpMethod {
        self.method
    }

    fn query_items(&self) -> Option<Params> {
        self.query.clone()
    }

    fn body(&self) -> Option<Params> {
        self.body.clone()
    }
}

/// Parse the method string from test vectors into `HttpMethod`.
fn parse_method(s: &str) -> HttpMethod {
    match s {
        "GET" => HttpMethod::Get,
        "POST" => HttpMethod::Post,
        "PUT" => HttpMethod::Put,
        "DELETE" => HttpMethod::Delete,
        other => panic!("unknown method: {other}"),
    }
}

fn parse_params(value: &serde_json::Value) -> Option<Params> {
    let object = value.as_object()?;
    let params = object
        .iter()
        .map(|(key, value)| {
            let value = match value {
                serde_json::Value::Null => ParamValue::Null,
                serde_json::Value::Bool(b) => ParamValue::Bool(*b),
                serde_json::Value::Number(n) => match n.as_i64() {
                    Some(i) => ParamValue::Int(i),
                    None => ParamValue::Float(n.as_f64().unwrap()),
                },
                serde_json::Value::String(s) => ParamValue::String(s.clone()),
                other => panic!("not a scalar parameter: {other}"),
            };
            (key.clone(), value)
        })
        .collect();
    Some(params)
}

fn block_on<F: std::future::Future>(future: F) -> F::Output {
    tokio::runtime::Builder::new_current_thread()
        .build()
        .unwrap()
        .block_on(future)
}

// ---------------------------------------------------------------------------
// Render
// ---------------------------------------------------------------------------

#[test]
fn render_test_vectors() {
    let raw = include_str!("../../test-vectors/render.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    for case in vectors["cases"].as_array().unwrap() {
        let name = case["name"].as_str().unwrap();
        let base_url = case["base_url"].as_str().unwrap();
        let request = VectorRequest {
            path: case["path"].as_str().unwrap().to_string(),
            method: parse_method(case["method"].as_str().unwrap()),
            query: parse_params(&case["query"]),
            body: parse_params(&case["body"]),
        };

        if let Some(expected_error) = case.get("expected_error") {
            assert_eq!(expected_error, "BadRequest", "{name}: unknown expected_error");
            assert!(render(&request, base_url).is_err(), "{name}: render should fail");

            let client = ApiClient::with_transport(base_url, FixedTransport::new(200));
            let err = block_on(client.dispatch(&request)).unwrap_err();
            assert!(matches!(err, ApiError::BadRequest), "{name}: expected BadRequest");
            assert_eq!(
                client.dispatcher().transport().calls.load(Ordering::SeqCst),
                0,
                "{name}: no call should be issued"
            );
            continue;
        }

        let expected = &case["expected_request"];
        let req = render(&request, base_url).unwrap();

        if expected.get("query").is_none() {
            assert_eq!(req.url, expected["url"].as_str().unwrap(), "{name}: exact url");
        }

        let mut url = Url::parse(&req.url).unwrap();
        let mut pairs: Vec<(String, String)> = url.query_pairs().into_owned().collect();
        pairs.sort();
        url.set_query(None);

        let mut expected_url = Url::parse(expected["url"].as_str().unwrap()).unwrap();
        let expected_pairs: Vec<(String, String)> = match expected.get("query") {
            Some(query) => serde_json::from_value(query.clone()).unwrap(),
            None => expected_url.query_pairs().into_owned().collect(),
        };
        expected_url.set_query(None);

        assert_eq!(url, expected_url, "{name}: url");
        assert_eq!(pairs, expected_pairs, "{name}: query");

        assert_eq!(req.method, parse_method(expected["method"].as_str().unwrap()), "{name}: method");

        let expected_headers: Vec<(String, String)> =
            serde_json::from_value(expected["headers"].clone()).unwrap();
        assert_eq!(req.headers, expected_headers, "{name}: headers");

        match req.body.as_deref() {
            Some(bytes) => {
                let body: serde_json::Value = serde_json::from_slice(bytes).unwrap();
                assert_eq!(body, expected["body"], "{name}: body");
            }
            None => assert!(expected["body"].is_null(), "{name}: body should be None"),
        }

        assert_eq!(render(&request, base_url).unwrap(), req, "{name}: deterministic");
    }
}

// ---------------------------------------------------------------------------
// Status codes
// ---------------------------------------------------------------------------

#[test]
fn status_code_test_vectors() {
    let raw = include_str!("../../test-vectors/status_codes.json");
    let vectors: serde_json::Value = serde_json::from_str(raw).unwrap();

    let request = VectorRequest {
        path: "/weather".to_string(),
        method: HttpMethod::Get,
        query: None,
        body: None,
    };

    for case in vectors["cases"].as_array().unwrap() {
        let status = case["status"].as_u64().unwrap() as u16;
        let expected = case["expected"].as_str().unwrap();

        let client = ApiClient::with_transport("https://api.example.com", FixedTransport::new(status));
        let result = block_on(client.dispatch(&request));
        assert_eq!(client.dispatcher().transport().calls.load(Ordering::SeqCst), 1);

        match (expected, result) {
            ("Ok", Ok(value)) => assert_eq!(value, serde_json::json!({ "ok": true })),
            ("BadRequest", Err(ApiError::BadRequest))
            | ("Unauthorized", Err(ApiError::Unauthorized))
            | ("Forbidden", Err(ApiError::Forbidden))
            | ("NotFound", Err(ApiError::NotFound))
            | ("ServerError", Err(ApiError::ServerError))
            | ("Unknown", Err(ApiError::Unknown)) => {}
            ("Error4xx", Err(ApiError::Error4xx(code))) | ("Error5xx", Err(ApiError::Error5xx(code))) => {
                assert_eq!(code, status, "{status}: carried code");
            }
            (expected, other) => panic!("{status}: expected {expected}, got {other:?}"),
        }
    }
}
