//! Host Bridge Wrappers
//!
//! Frontend bindings to the host's invoke-style commands.

mod board;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__KANBAN_HOST__"])]
    async fn invoke(cmd: &str, args: JsValue) -> JsValue;
}

/// True when the hosting page installed the bridge global. The page checks
/// this before mounting anything that talks to the host, so opening the
/// bundle without its host shows an explanation instead of a dead board.
pub fn host_available() -> bool {
    let Some(window) = web_sys::window() else {
        return false;
    };
    js_sys::Reflect::get(&window, &JsValue::from_str("__KANBAN_HOST__"))
        .map(|bridge| !bridge.is_undefined() && !bridge.is_null())
        .unwrap_or(false)
}

// Re-export all public items
pub use board::*;
