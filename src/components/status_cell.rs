//! Status Cell Component
//!
//! Colored status label that cycles through the workflow states on click.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands::{self, UpdateItemArgs};
use crate::context::AppContext;
use crate::models::Status;
use crate::store::{store_update_item, use_app_store};

#[component]
pub fn StatusCell(item_id: String, status: Status) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let on_click = move |_| {
        let id = item_id.clone();
        let next = status.cycled();
        spawn_local(async move {
            let args = UpdateItemArgs {
                id: &id,
                name: None,
                status: Some(next),
                assignee: None,
            };
            match commands::update_item(&args).await {
                Ok(updated) => store_update_item(&store, updated),
                Err(err) => ctx.report_error(format!("Couldn't update status: {}", err)),
            }
        });
    };

    view! {
        <button
            class=format!("status-cell {}", status.css_token())
            on:click=on_click
        >
            {status.label()}
        </button>
    }
}
