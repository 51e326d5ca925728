//! End-to-end tests of the host's HTTP surface.

use axum::body::Body;
use axum::http::{header, Request, StatusCode};
use serde_json::{json, Value};
use tower::ServiceExt;

use kanban_board_host::component::ComponentSource;
use kanban_board_host::web::{build_router, WebState};

fn packaged_app() -> axum::Router {
    build_router(WebState::new(ComponentSource::Packaged))
}

fn dev_app(url: &str) -> axum::Router {
    build_router(WebState::new(ComponentSource::DevServer {
        url: url.to_string(),
    }))
}

fn sample_board() -> Value {
    json!([
        { "id": "todo", "title": "To Do", "items": [
            { "id": "item-1", "content": "Write docs" }
        ]},
        { "id": "done", "title": "Done", "items": [] }
    ])
}

fn invoke_request(cmd: &str, args: Value) -> Request<Body> {
    let body = json!({ "cmd": cmd, "args": args });
    Request::builder()
        .method("POST")
        .uri("/api/invoke")
        .header("content-type", "application/json")
        .body(Body::from(serde_json::to_string(&body).unwrap()))
        .unwrap()
}

async fn invoke(app: &axum::Router, cmd: &str, args: Value) -> Value {
    let res = app
        .clone()
        .oneshot(invoke_request(cmd, args))
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

#[tokio::test]
async fn test_health_answers_ok() {
    let app = packaged_app();
    let req = Request::builder()
        .method("GET")
        .uri("/health")
        .body(Body::empty())
        .unwrap();
    let res = app.oneshot(req).await.unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    let bytes = axum::body::to_bytes(res.into_body(), usize::MAX)
        .await
        .unwrap();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn test_load_returns_null_for_a_fresh_session() {
    let app = packaged_app();
    let loaded = invoke(&app, "load_board_state", json!({ "session": "s1" })).await;
    assert_eq!(loaded, Value::Null);
}

#[tokio::test]
async fn test_save_then_load_round_trips_the_board() {
    let app = packaged_app();
    let board = sample_board();

    let saved = invoke(
        &app,
        "save_board_state",
        json!({ "session": "s1", "board": board }),
    )
    .await;
    assert_eq!(saved, json!("Board state saved"));

    let loaded = invoke(&app, "load_board_state", json!({ "session": "s1" })).await;
    assert_eq!(loaded, board);

    // Another session still sees nothing
    let other = invoke(&app, "load_board_state", json!({ "session": "s2" })).await;
    assert_eq!(other, Value::Null);
}

#[tokio::test]
async fn test_reset_clears_the_saved_board() {
    let app = packaged_app();
    invoke(
        &app,
        "save_board_state",
        json!({ "session": "s1", "board": sample_board() }),
    )
    .await;

    let reset = invoke(&app, "reset_board_state", json!({ "session": "s1" })).await;
    assert_eq!(reset, json!("Board state reset"));

    let loaded = invoke(&app, "load_board_state", json!({ "session": "s1" })).await;
    assert_eq!(loaded, Value::Null);
}

#[tokio::test]
async fn test_is_dev_mode_follows_the_component_source() {
    let packaged = invoke(&packaged_app(), "is_dev_mode", Value::Null).await;
    assert_eq!(packaged, json!(false));

    let dev = invoke(&dev_app("http://localhost:8080"), "is_dev_mode", Value::Null).await;
    assert_eq!(dev, json!(true));
}

#[tokio::test]
async fn test_unknown_commands_answer_200_with_an_error_value() {
    let app = packaged_app();
    let out = invoke(&app, "explode", Value::Null).await;
    assert_eq!(out, json!({ "error": "Unknown command: explode" }));
}

#[tokio::test]
async fn test_save_broadcasts_a_board_updated_event() {
    let state = WebState::new(ComponentSource::Packaged);
    let mut events = state.events.subscribe();
    let app = build_router(state);

    invoke(
        &app,
        "save_board_state",
        json!({ "session": "s1", "board": sample_board() }),
    )
    .await;

    let event: Value = serde_json::from_str(&events.try_recv().unwrap()).unwrap();
    assert_eq!(event["event"], "board_updated");
    assert_eq!(event["payload"]["session"], "s1");
    assert!(event["payload"]["at"].is_string());
}

#[tokio::test]
async fn test_load_does_not_broadcast() {
    let state = WebState::new(ComponentSource::Packaged);
    let mut events = state.events.subscribe();
    let app = build_router(state);

    invoke(&app, "load_board_state", json!({ "session": "s1" })).await;

    assert!(events.try_recv().is_err());
}

#[tokio::test]
async fn test_page_redirects_to_the_dev_server_in_dev_mode() {
    let app = dev_app("http://localhost:8080");
    let req = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let res = app.oneshot(req).await.unwrap();

    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        res.headers().get(header::LOCATION).unwrap(),
        "http://localhost:8080"
    );
}

#[tokio::test]
async fn test_assets_redirect_to_the_dev_server_in_dev_mode() {
    let app = dev_app("http://localhost:8080");
    let req = Request::builder()
        .method("GET")
        .uri("/pkg/app.js")
        .body(Body::empty())
        .unwrap();
    let res = app.oneshot(req).await.unwrap();

    assert_eq!(res.status(), StatusCode::TEMPORARY_REDIRECT);
    assert_eq!(
        res.headers().get(header::LOCATION).unwrap(),
        "http://localhost:8080/pkg/app.js"
    );
}

#[tokio::test]
async fn test_page_is_served_locally_when_packaged() {
    let app = packaged_app();
    let req = Request::builder()
        .method("GET")
        .uri("/")
        .body(Body::empty())
        .unwrap();
    let res = app.oneshot(req).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let content_type = res.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().contains("text/html"));
}

#[tokio::test]
async fn test_events_endpoint_opens_an_sse_stream() {
    let app = packaged_app();
    let req = Request::builder()
        .method("GET")
        .uri("/api/events")
        .body(Body::empty())
        .unwrap();
    let res = app.oneshot(req).await.unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let content_type = res.headers().get(header::CONTENT_TYPE).unwrap();
    assert!(content_type.to_str().unwrap().contains("text/event-stream"));
}
