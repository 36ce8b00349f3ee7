use std::collections::BTreeMap;

use axum::{
    body::Bytes,
    extract::{Path, Query},
    http::{HeaderMap, Method, StatusCode},
    routing::{any, get},
    Json, Router,
};
use serde::{Deserialize, Serialize};
use tokio::net::TcpListener;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Weather {
    pub city: String,
    pub temperature: f64,
    pub summary: String,
}

/// What the server saw of a request sent to `/v1/echo`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Echo {
    pub method: String,
    pub query: BTreeMap<String, String>,
    pub headers: BTreeMap<String, String>,
    pub body: Option<serde_json::Value>,
}

#[derive(Deserialize)]
pub struct WeatherQuery {
    pub city: Option<String>,
}

pub fn app() -> Router {
    Router::new()
        .route("/v1/weather", get(weather))
        .route("/v1/status/{code}", any(status))
        .route("/v1/echo", any(echo))
        .route("/v1/garbage", get(garbage))
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    if let Ok(addr) = listener.local_addr() {
        tracing::info!(%addr, "mock server listening");
    }
    axum::serve(listener, app()).await
}

fn known_weather(city: &str) -> Option<Weather> {
    let (temperature, summary) = match city {
        "Paris" => (18.5, "Sunny"),
        "London" => (12.0, "Rain"),
        "Oslo" => (-3.5, "Snow"),
        _ => return None,
    };
    Some(Weather {
        city: city.to_string(),
        temperature,
        summary: summary.to_string(),
    })
}

async fn weather(Query(query): Query<WeatherQuery>) -> Result<Json<Weather>, StatusCode> {
    let city = query.city.ok_or(StatusCode::BAD_REQUEST)?;
    known_weather(&city).map(Json).ok_or(StatusCode::NOT_FOUND)
}

/// Respond with `code` and a body that would decode as `Weather`.
async fn status(Path(code): Path<u16>) -> Result<(StatusCode, Json<Weather>), StatusCode> {
    let status = StatusCode::from_u16(code).map_err(|_| StatusCode::BAD_REQUEST)?;
    let body = known_weather("Paris").ok_or(StatusCode::INTERNAL_SERVER_ERROR)?;
    Ok((status, Json(body)))
}

async fn echo(
    method: Method,
    Query(query): Query<BTreeMap<String, String>>,
    headers: HeaderMap,
    body: Bytes,
) -> Json<Echo> {
    let headers = headers
        .iter()
        .filter_map(|(name, value)| {
            value
                .to_str()
                .ok()
                .map(|value| (name.as_str().to_string(), value.to_string()))
        })
        .collect();
    let body = if body.is_empty() {
        None
    } else {
        serde_json::from_slice(&body).ok()
    };
    Json(Echo {
        method: method.to_string(),
        query,
        headers,
        body,
    })
}

async fn garbage() -> &'static str {
    "this is not json"
}
