//! Open Classrooms Lambda - proxies availability queries to the backend.
//!
//! Endpoints:
//! - GET /open-classrooms - default, non-personalized availability
//! - POST /open-classrooms - availability relative to a { lat, lng } point
//!
//! The backend response is reshaped for the UI: the per-building rooms
//! mapping becomes an ordered list and slot statuses are lowercased.

use lambda_http::{run, service_fn, Body, Error, Request, Response};
use serde_json::Value;
use shared::{error_response, json_response, normalize, Config, RawBuilding};
use std::sync::Arc;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

/// Application state shared across requests.
struct AppState {
    config: Config,
    http: reqwest::Client,
}

impl AppState {
    fn new() -> Self {
        Self {
            config: Config::from_env(),
            http: reqwest::Client::new(),
        }
    }
}

/// Coerce a loose JSON value to a coordinate, `Number(x) || 0` style:
/// numbers pass through, numeric strings parse, anything falsy or
/// non-numeric becomes 0. A genuine coordinate of 0 is indistinguishable
/// from "unset"; the backend treats 0 as the no-location fallback.
fn coerce_coord(value: Option<&Value>) -> f64 {
    let n = match value {
        Some(Value::Number(n)) => n.as_f64().unwrap_or(0.0),
        Some(Value::String(s)) => s.trim().parse().unwrap_or(0.0),
        Some(Value::Bool(true)) => 1.0,
        _ => 0.0,
    };
    if n.is_finite() {
        n
    } else {
        0.0
    }
}

/// Call the availability backend, mirroring the inbound method.
async fn fetch_open_classrooms(
    state: &AppState,
    coords: Option<(f64, f64)>,
) -> shared::Result<Vec<RawBuilding>> {
    let url = format!("{}/api/open-classrooms", state.config.backend_url);

    let request = match coords {
        Some((lat, lng)) => state
            .http
            .post(&url)
            .json(&serde_json::json!({ "lat": lat, "lng": lng })),
        None => state.http.get(&url),
    };

    // Server-to-server call; never serve from a cache
    let response = request.header("cache-control", "no-store").send().await?;

    if !response.status().is_success() {
        return Err(shared::Error::BackendStatus(response.status().as_u16()));
    }

    Ok(response.json().await?)
}

async fn proxy(state: &AppState, coords: Option<(f64, f64)>) -> Result<Response<Body>, Error> {
    match fetch_open_classrooms(state, coords).await {
        Ok(raw) => {
            let buildings = normalize(raw);
            info!("Returning {} buildings", buildings.len());
            json_response(200, &buildings)
        }
        Err(e) => {
            error!("Error in /open-classrooms: {}", e);
            error_response(e.status_code(), e.user_message())
        }
    }
}

async fn handler(state: Arc<AppState>, event: Request) -> Result<Response<Body>, Error> {
    let raw_path = event.uri().path();
    // Strip /api stage prefix if present (API Gateway REST API includes stage in path)
    let path = raw_path.strip_prefix("/api").unwrap_or(raw_path);
    let method = event.method().as_str();

    match (method, path) {
        ("GET", "/open-classrooms") => proxy(&state, None).await,

        ("POST", "/open-classrooms") => {
            let body: Value = match serde_json::from_slice(event.body().as_ref()) {
                Ok(parsed) => parsed,
                Err(e) => {
                    error!("Error in POST /open-classrooms: {}", e);
                    return error_response(500, "Failed to process request");
                }
            };

            let lat = coerce_coord(body.get("lat"));
            let lng = coerce_coord(body.get("lng"));
            proxy(&state, Some((lat, lng))).await
        }

        (_, "/open-classrooms") => error_response(405, "Method not allowed"),

        _ => error_response(404, "Not found"),
    }
}

#[tokio::main]
async fn main() -> Result<(), Error> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .json()
        .init();

    let state = Arc::new(AppState::new());
    info!("Proxying open-classrooms to {}", state.config.backend_url);

    run(service_fn(move |event| {
        let state = Arc::clone(&state);
        async move { handler(state, event).await }
    }))
    .await
}
