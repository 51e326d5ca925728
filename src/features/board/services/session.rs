use uuid::Uuid;

const SESSION_KEY: &str = "kanban-session";

/// Stable id for this browser tab, minted on first use and kept in
/// `sessionStorage`. A reload keeps its board; a new tab gets a fresh
/// session on the host.
pub fn session_id() -> String {
    let storage = web_sys::window().and_then(|win| win.session_storage().ok().flatten());

    if let Some(storage) = &storage {
        if let Ok(Some(existing)) = storage.get_item(SESSION_KEY) {
            return existing;
        }
    }

    let minted = Uuid::new_v4().to_string();
    if let Some(storage) = &storage {
        if storage.set_item(SESSION_KEY, &minted).is_err() {
            web_sys::console::error_1(
                &"Failed to persist session id; continuing with a per-load session".into(),
            );
        }
    }
    minted
}
