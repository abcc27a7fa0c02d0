//! Board Commands
//!
//! Frontend bindings for board- and group-level backend commands.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::{BoardMeta, Group};
use super::invoke;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
struct BoardIdArgs {
    #[serde(rename = "boardId")]
    board_id: u32,
}

#[derive(Serialize)]
struct NameArgs<'a> {
    name: &'a str,
}

#[derive(Serialize)]
struct SaveGroupArgs<'a> {
    group: &'a Group,
}

// ========================
// Commands
// ========================

pub async fn list_boards() -> Result<Vec<BoardMeta>, String> {
    let result = invoke("list_boards", JsValue::NULL).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn list_groups(board_id: u32) -> Result<Vec<Group>, String> {
    let js_args = serde_wasm_bindgen::to_value(&BoardIdArgs { board_id }).map_err(|e| e.to_string())?;
    let result = invoke("list_groups", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn create_board(name: &str) -> Result<BoardMeta, String> {
    let js_args = serde_wasm_bindgen::to_value(&NameArgs { name }).map_err(|e| e.to_string())?;
    let result = invoke("create_board", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

/// Persist a full group replacement after a finalized move.
/// The backend echoes the stored group.
pub async fn save_group(group: &Group) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&SaveGroupArgs { group }).map_err(|e| e.to_string())?;
    let result = invoke("save_group", js_args).await;
    serde_wasm_bindgen::from_value::<Group>(result)
        .map(|_| ())
        .map_err(|e| e.to_string())
}
