//! New Item Form Component
//!
//! Inline add-item input at the bottom of each group.

use leptos::prelude::*;
use leptos::task::spawn_local;
use wasm_bindgen::JsCast;

use crate::commands::{self, CreateItemArgs};
use crate::context::AppContext;

#[component]
pub fn NewItemForm(group_id: String) -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");

    let (new_name, set_new_name) = signal(String::new());

    let create_item = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get();
        if name.is_empty() { return; }
        let group = group_id.clone();

        spawn_local(async move {
            let args = CreateItemArgs {
                group_id: &group,
                name: &name,
            };
            if commands::create_item(&args).await.is_ok() {
                set_new_name.set(String::new());
                ctx.reload();
            }
        });
    };

    view! {
        <form class="new-item-form" on:submit=create_item>
            <input
                type="text"
                placeholder="+ Add item..."
                prop:value=move || new_name.get()
                on:input=move |ev| {
                    let target = ev.target().unwrap();
                    let input = target.dyn_ref::<web_sys::HtmlInputElement>().unwrap();
                    set_new_name.set(input.value());
                }
            />
        </form>
    }
}
