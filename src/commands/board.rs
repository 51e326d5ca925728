//! Board State Commands
//!
//! Frontend bindings for the host's per-session board-state commands.

use serde::Serialize;
use wasm_bindgen::prelude::*;

use super::invoke;
use crate::models::Board;

#[derive(Serialize)]
struct SessionArgs<'a> {
    session: &'a str,
}

#[derive(Serialize)]
struct SaveBoardArgs<'a> {
    session: &'a str,
    board: &'a Board,
}

// Generic command executor with error handling. The bridge always resolves
// with plain JSON; command failures arrive as an `error` field rather than
// a rejected promise.
async fn execute_host_command(command: &str, args: JsValue) -> Result<JsValue, String> {
    let result = invoke(command, args).await;
    if result.is_undefined() {
        return Err(format!("No response from {} command", command));
    }
    if let Ok(error) = js_sys::Reflect::get(&result, &JsValue::from_str("error")) {
        if let Some(message) = error.as_string() {
            return Err(message);
        }
    }
    Ok(result)
}

/// Fetches the stored board for a session. `None` means the host has never
/// seen this session, i.e. the page should seed it.
pub async fn load_board_state(session: &str) -> Result<Option<Board>, String> {
    let args = serde_wasm_bindgen::to_value(&SessionArgs { session }).map_err(|e| e.to_string())?;
    let result = execute_host_command("load_board_state", args).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn save_board_state(session: &str, board: &Board) -> Result<(), String> {
    let args =
        serde_wasm_bindgen::to_value(&SaveBoardArgs { session, board }).map_err(|e| e.to_string())?;
    let _ = execute_host_command("save_board_state", args).await?;
    Ok(())
}

pub async fn reset_board_state(session: &str) -> Result<(), String> {
    let args = serde_wasm_bindgen::to_value(&SessionArgs { session }).map_err(|e| e.to_string())?;
    let _ = execute_host_command("reset_board_state", args).await?;
    Ok(())
}

pub async fn is_dev_mode() -> Result<bool, String> {
    let result = execute_host_command("is_dev_mode", JsValue::NULL).await?;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}
