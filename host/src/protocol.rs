//! Command protocol between the widget and the host.
//!
//! The page posts `{ "cmd": ..., "args": {...} }` and always gets a JSON
//! body back. Failures travel as an `"error"` field in that body rather
//! than as HTTP errors, so the browser shim can resolve every call and let
//! the widget decide what to do with the result.

use serde::Deserialize;
use serde_json::{json, Value};

use crate::component::ComponentSource;
use crate::session::SessionStore;

/// One call from the page's bridge shim.
#[derive(Debug, Deserialize)]
pub struct InvokeRequest {
    pub cmd: String,
    #[serde(default)]
    pub args: Value,
}

/// Broadcast to SSE subscribers after a state change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HostEvent {
    BoardUpdated { session: String },
}

impl HostEvent {
    pub fn to_json(&self) -> Value {
        match self {
            HostEvent::BoardUpdated { session } => json!({
                "event": "board_updated",
                "payload": {
                    "session": session,
                    "at": chrono::Utc::now().to_rfc3339(),
                },
            }),
        }
    }
}

/// What one dispatched command produced.
#[derive(Debug)]
pub struct DispatchOutcome {
    /// Body handed back to the caller.
    pub response: Value,
    /// Event for SSE subscribers, when the command changed state.
    pub event: Option<HostEvent>,
}

impl DispatchOutcome {
    fn reply(response: Value) -> Self {
        Self {
            response,
            event: None,
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self::reply(json!({ "error": message.into() }))
    }
}

fn str_arg(args: &Value, key: &str) -> Option<String> {
    args.get(key)
        .and_then(Value::as_str)
        .map(|s| s.to_string())
        .filter(|s| !s.is_empty())
}

/// Route a command to its effect on the store.
///
/// Boards pass through as opaque JSON; the widget validates them before it
/// ever saves, and validates again on load, so the store stays dumb.
pub fn dispatch(
    sessions: &SessionStore,
    source: &ComponentSource,
    req: InvokeRequest,
) -> DispatchOutcome {
    match req.cmd.as_str() {
        "load_board_state" => {
            let Some(session) = str_arg(&req.args, "session") else {
                return DispatchOutcome::error("Missing session");
            };
            DispatchOutcome::reply(sessions.get(&session).unwrap_or(Value::Null))
        }
        "save_board_state" => {
            let Some(session) = str_arg(&req.args, "session") else {
                return DispatchOutcome::error("Missing session");
            };
            let Some(board) = req.args.get("board").filter(|b| !b.is_null()).cloned() else {
                return DispatchOutcome::error("Missing board");
            };
            sessions.set(session.clone(), board);
            DispatchOutcome {
                response: json!("Board state saved"),
                event: Some(HostEvent::BoardUpdated { session }),
            }
        }
        "reset_board_state" => {
            let Some(session) = str_arg(&req.args, "session") else {
                return DispatchOutcome::error("Missing session");
            };
            sessions.reset(&session);
            DispatchOutcome::reply(json!("Board state reset"))
        }
        "is_dev_mode" => DispatchOutcome::reply(json!(source.is_dev())),
        _ => DispatchOutcome::error(format!("Unknown command: {}", req.cmd)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(cmd: &str, args: Value) -> InvokeRequest {
        InvokeRequest {
            cmd: cmd.to_string(),
            args,
        }
    }

    fn packaged() -> ComponentSource {
        ComponentSource::Packaged
    }

    #[test]
    fn load_returns_null_for_a_fresh_session() {
        let store = SessionStore::new();
        let out = dispatch(
            &store,
            &packaged(),
            request("load_board_state", json!({ "session": "s1" })),
        );

        assert_eq!(out.response, Value::Null);
        assert!(out.event.is_none());
    }

    #[test]
    fn save_then_load_round_trips_the_board() {
        let store = SessionStore::new();
        let board = json!([{ "id": "todo", "title": "To Do", "items": [] }]);

        let saved = dispatch(
            &store,
            &packaged(),
            request(
                "save_board_state",
                json!({ "session": "s1", "board": board }),
            ),
        );
        assert_eq!(saved.response, json!("Board state saved"));
        assert_eq!(
            saved.event,
            Some(HostEvent::BoardUpdated {
                session: "s1".to_string()
            })
        );

        let loaded = dispatch(
            &store,
            &packaged(),
            request("load_board_state", json!({ "session": "s1" })),
        );
        assert_eq!(loaded.response, board);
    }

    #[test]
    fn reset_clears_the_session() {
        let store = SessionStore::new();
        store.set("s1".to_string(), json!([]));

        let out = dispatch(
            &store,
            &packaged(),
            request("reset_board_state", json!({ "session": "s1" })),
        );

        assert_eq!(out.response, json!("Board state reset"));
        assert!(out.event.is_none());
        assert_eq!(store.get("s1"), None);
    }

    #[test]
    fn is_dev_mode_reflects_the_source() {
        let store = SessionStore::new();

        let out = dispatch(&store, &packaged(), request("is_dev_mode", Value::Null));
        assert_eq!(out.response, json!(false));

        let dev = ComponentSource::DevServer {
            url: "http://localhost:8080".to_string(),
        };
        let out = dispatch(&store, &dev, request("is_dev_mode", Value::Null));
        assert_eq!(out.response, json!(true));
    }

    #[test]
    fn unknown_commands_report_an_error_value() {
        let store = SessionStore::new();
        let out = dispatch(&store, &packaged(), request("do_magic", Value::Null));

        assert_eq!(
            out.response,
            json!({ "error": "Unknown command: do_magic" })
        );
        assert!(out.event.is_none());
    }

    #[test]
    fn missing_session_is_an_error_value() {
        let store = SessionStore::new();
        for cmd in ["load_board_state", "save_board_state", "reset_board_state"] {
            let out = dispatch(&store, &packaged(), request(cmd, json!({})));
            assert_eq!(out.response, json!({ "error": "Missing session" }), "{cmd}");
        }
    }

    #[test]
    fn save_without_a_board_is_an_error_value() {
        let store = SessionStore::new();
        for args in [json!({ "session": "s1" }), json!({ "session": "s1", "board": null })] {
            let out = dispatch(&store, &packaged(), request("save_board_state", args));
            assert_eq!(out.response, json!({ "error": "Missing board" }));
        }
        assert!(store.is_empty());
    }
}
