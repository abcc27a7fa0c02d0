//! Application Context
//!
//! Shared state provided via Leptos Context API.

use leptos::prelude::*;

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Trigger to reload groups from backend - read
    pub reload_trigger: ReadSignal<u32>,
    /// Trigger to reload groups from backend - write
    set_reload_trigger: WriteSignal<u32>,
    /// Last recoverable error, shown on the status line - read
    pub last_error: ReadSignal<Option<String>>,
    /// Last recoverable error - write
    pub set_last_error: WriteSignal<Option<String>>,
    /// Current board ID - read
    pub current_board: ReadSignal<u32>,
}

impl AppContext {
    pub fn new(
        reload_trigger: (ReadSignal<u32>, WriteSignal<u32>),
        last_error: (ReadSignal<Option<String>>, WriteSignal<Option<String>>),
        current_board: ReadSignal<u32>,
    ) -> Self {
        Self {
            reload_trigger: reload_trigger.0,
            set_reload_trigger: reload_trigger.1,
            last_error: last_error.0,
            set_last_error: last_error.1,
            current_board,
        }
    }

    /// Trigger a reload of boards and groups
    pub fn reload(&self) {
        self.set_reload_trigger.update(|v| *v += 1);
    }

    /// Surface a recoverable error on the status line
    pub fn report_error(&self, message: String) {
        self.set_last_error.set(Some(message));
    }
}
