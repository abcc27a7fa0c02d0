//! Group Mutation Gateway - command-backed implementation
//!
//! Forwards finalized group replacements to the backend `save_group`
//! command. Fire-and-forget: a failure surfaces on the app status line
//! and never rolls back the in-memory board.

use leptos::prelude::*;
use leptos::task::spawn_local;

use board_reorder::{GatewayError, Group, GroupGateway};

use crate::commands;

#[derive(Clone, Copy)]
pub struct CommandGateway {
    set_last_error: WriteSignal<Option<String>>,
}

impl CommandGateway {
    pub fn new(set_last_error: WriteSignal<Option<String>>) -> Self {
        Self { set_last_error }
    }
}

impl GroupGateway for CommandGateway {
    fn group_updated(&self, group: &Group) -> Result<(), GatewayError> {
        let group = group.clone();
        let set_last_error = self.set_last_error;
        spawn_local(async move {
            if let Err(err) = commands::save_group(&group).await {
                web_sys::console::log_1(&format!("[DND] save_group failed for {}: {}", group.id, err).into());
                set_last_error.set(Some(format!("Couldn't save \"{}\": {}", group.title, err)));
            }
        });
        Ok(())
    }
}
