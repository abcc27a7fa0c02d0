//! Tauri Command Wrappers
//!
//! Frontend bindings to backend commands, organized by domain.

mod board;
mod item;

use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    #[wasm_bindgen(js_namespace = ["window", "__TAURI__", "core"])]
    async fn invoke(cmd: &str, args: JsValue) -> JsValue;
}

// Re-export all public items
pub use board::*;
pub use item::*;
