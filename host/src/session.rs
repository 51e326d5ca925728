//! Per-session board storage.
//!
//! Boards are held verbatim as JSON, one slot per browser session. The
//! widget owns validation; the host just remembers what it was last given
//! so a reload lands on the same board.

use std::collections::HashMap;
use std::sync::Mutex;

use serde_json::Value;

/// In-memory map of session id to the board JSON last saved for it.
#[derive(Debug, Default)]
pub struct SessionStore {
    boards: Mutex<HashMap<String, Value>>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Board last saved for `session`, if any.
    pub fn get(&self, session: &str) -> Option<Value> {
        self.boards.lock().unwrap().get(session).cloned()
    }

    /// Store `board` for `session`, replacing any previous board.
    pub fn set(&self, session: String, board: Value) {
        self.boards.lock().unwrap().insert(session, board);
    }

    /// Drop the board for `session`. Returns whether one existed.
    pub fn reset(&self, session: &str) -> bool {
        self.boards.lock().unwrap().remove(session).is_some()
    }

    /// Number of sessions currently holding a board.
    pub fn len(&self) -> usize {
        self.boards.lock().unwrap().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn get_returns_none_for_unknown_session() {
        let store = SessionStore::new();
        assert_eq!(store.get("nobody"), None);
        assert!(store.is_empty());
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = SessionStore::new();
        let board = json!([{ "id": "todo", "title": "To Do", "items": [] }]);

        store.set("abc".to_string(), board.clone());

        assert_eq!(store.get("abc"), Some(board));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn set_replaces_previous_board() {
        let store = SessionStore::new();
        store.set("abc".to_string(), json!([]));
        store.set("abc".to_string(), json!([{ "id": "todo" }]));

        assert_eq!(store.get("abc"), Some(json!([{ "id": "todo" }])));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn sessions_do_not_share_boards() {
        let store = SessionStore::new();
        store.set("a".to_string(), json!([1]));
        store.set("b".to_string(), json!([2]));

        assert_eq!(store.get("a"), Some(json!([1])));
        assert_eq!(store.get("b"), Some(json!([2])));
    }

    #[test]
    fn reset_clears_only_the_named_session() {
        let store = SessionStore::new();
        store.set("a".to_string(), json!([1]));
        store.set("b".to_string(), json!([2]));

        assert!(store.reset("a"));
        assert!(!store.reset("a"));

        assert_eq!(store.get("a"), None);
        assert_eq!(store.get("b"), Some(json!([2])));
    }
}
