//! HTTP surface of the host: widget page, invoke API, and SSE events.

use std::sync::Arc;

use axum::{
    body::Body,
    extract::State,
    http::{header, StatusCode, Uri},
    response::sse::{Event, KeepAlive},
    response::{IntoResponse, Redirect, Response, Sse},
    routing::{get, post},
    Json, Router,
};
use mime_guess::from_path;
use rust_embed::RustEmbed;
use serde_json::Value;
use tokio::sync::broadcast;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;
use tracing::{debug, info};

use crate::component::ComponentSource;
use crate::protocol::{dispatch, InvokeRequest};
use crate::session::SessionStore;

#[derive(Clone)]
pub struct WebState {
    pub sessions: Arc<SessionStore>,
    pub source: ComponentSource,
    pub events: broadcast::Sender<String>,
}

impl WebState {
    pub fn new(source: ComponentSource) -> Self {
        let (events, _) = broadcast::channel(100);
        Self {
            sessions: Arc::new(SessionStore::new()),
            source,
            events,
        }
    }
}

#[derive(RustEmbed)]
#[folder = "../dist"]
struct Frontend;

pub fn build_router(state: WebState) -> Router {
    // The widget page lives on the Trunk dev server during development and
    // still has to reach this API across origins.
    Router::new()
        .route("/health", get(|| async { "ok" }))
        .route("/", get(index))
        .route("/index.html", get(index))
        .route("/api/invoke", post(invoke))
        .route("/api/events", get(sse_handler))
        .route("/*path", get(static_asset))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

async fn index(State(state): State<WebState>) -> Response {
    match &state.source {
        ComponentSource::DevServer { url } => {
            debug!("GET / -> dev server {url}");
            Redirect::temporary(url).into_response()
        }
        ComponentSource::Packaged => asset_to_response("index.html"),
    }
}

async fn static_asset(State(state): State<WebState>, uri: Uri) -> Response {
    let p = uri.path().trim_start_matches('/');

    if let ComponentSource::DevServer { url } = &state.source {
        return Redirect::temporary(&format!("{url}/{p}")).into_response();
    }

    if p.is_empty() {
        return asset_to_response("index.html");
    }
    if Frontend::get(p).is_some() {
        return asset_to_response(p);
    }
    // SPA fallback to index.html
    asset_to_response("index.html")
}

fn asset_to_response(path: &str) -> Response {
    // Embedded copy first (works in the bundled release binary)
    if let Some(content) = Frontend::get(path) {
        let body = Body::from(content.data.into_owned());
        let mime = from_path(path).first_or_octet_stream();
        return Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, mime.as_ref())
            .body(body)
            .unwrap();
    }

    // In dev, fall back to the on-disk dist folder so changes appear without recompiling
    #[cfg(debug_assertions)]
    if let Some(bytes) = read_from_dist(path) {
        let mime = from_path(path).first_or_octet_stream();
        return Response::builder()
            .status(StatusCode::OK)
            .header(header::CONTENT_TYPE, mime.as_ref())
            .body(Body::from(bytes))
            .unwrap();
    }

    Response::builder()
        .status(StatusCode::NOT_FOUND)
        .body(Body::from("Not Found"))
        .unwrap()
}

#[cfg(debug_assertions)]
fn read_from_dist(path: &str) -> Option<Vec<u8>> {
    use std::path::PathBuf;

    // Candidate base directories where dist may reside in dev
    let bases = [
        PathBuf::from("dist"),
        PathBuf::from("../dist"),
        PathBuf::from("../../dist"),
    ];
    for base in bases {
        let p = base.join(path);
        if p.exists() && p.is_file() {
            if let Ok(bytes) = std::fs::read(&p) {
                return Some(bytes);
            }
        }
        let idx = base.join("index.html");
        if idx.exists() && idx.is_file() {
            if let Ok(bytes) = std::fs::read(&idx) {
                return Some(bytes);
            }
        }
    }
    None
}

/// Always answers 200 with a JSON body; the browser shim resolves every
/// call and hands the body to the widget as-is.
async fn invoke(State(state): State<WebState>, Json(req): Json<InvokeRequest>) -> impl IntoResponse {
    debug!(cmd = %req.cmd, "POST /api/invoke");

    let outcome = dispatch(&state.sessions, &state.source, req);

    if let Some(event) = outcome.event {
        let payload = event.to_json().to_string();
        // send only fails when nobody is subscribed
        if state.events.send(payload).is_err() {
            debug!("no SSE subscribers for event");
        }
    }

    (StatusCode::OK, Json(outcome.response))
}

async fn sse_handler(State(state): State<WebState>) -> impl IntoResponse {
    info!("SSE connection established");

    let mut receiver = state.events.subscribe();

    let stream = async_stream::stream! {
        // Heartbeat so the client knows the stream is live
        yield Ok::<Event, std::convert::Infallible>(Event::default().event("heartbeat").data("connected"));

        loop {
            match receiver.recv().await {
                Ok(event_data) => {
                    debug!("broadcasting SSE event: {event_data}");

                    if let Ok(event_json) = serde_json::from_str::<Value>(&event_data) {
                        if let Some(event_type) = event_json.get("event").and_then(|v| v.as_str()) {
                            yield Ok::<Event, std::convert::Infallible>(Event::default().event(event_type).data(event_data));
                        } else {
                            yield Ok::<Event, std::convert::Infallible>(Event::default().event("unknown").data(event_data));
                        }
                    }
                },
                Err(broadcast::error::RecvError::Closed) => {
                    debug!("SSE event channel closed");
                    break;
                },
                Err(broadcast::error::RecvError::Lagged(_)) => {
                    continue;
                }
            }
        }
    };

    Sse::new(stream).keep_alive(KeepAlive::default())
}
