//! Item Commands
//!
//! Frontend bindings for item-related backend commands.

use wasm_bindgen::prelude::*;
use serde::Serialize;
use crate::models::{Item, Status};
use super::invoke;

// ========================
// Argument Structs
// ========================

#[derive(Serialize)]
pub struct CreateItemArgs<'a> {
    #[serde(rename = "groupId")]
    pub group_id: &'a str,
    pub name: &'a str,
}

#[derive(Serialize)]
pub struct UpdateItemArgs<'a> {
    pub id: &'a str,
    pub name: Option<&'a str>,
    pub status: Option<Status>,
    pub assignee: Option<&'a str>,
}

#[derive(Serialize)]
struct IdArgs<'a> {
    id: &'a str,
}

// ========================
// Commands
// ========================

pub async fn create_item(args: &CreateItemArgs<'_>) -> Result<Item, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("create_item", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn update_item(args: &UpdateItemArgs<'_>) -> Result<Item, String> {
    let js_args = serde_wasm_bindgen::to_value(args).map_err(|e| e.to_string())?;
    let result = invoke("update_item", js_args).await;
    serde_wasm_bindgen::from_value(result).map_err(|e| e.to_string())
}

pub async fn delete_item(id: &str) -> Result<(), String> {
    let js_args = serde_wasm_bindgen::to_value(&IdArgs { id }).map_err(|e| e.to_string())?;
    let _ = invoke("delete_item", js_args).await;
    Ok(())
}
