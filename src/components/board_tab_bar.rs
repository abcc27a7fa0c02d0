//! Board Tab Bar Component
//!
//! Tab bar for switching between boards in the main content area.

use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::commands;
use crate::store::{store_add_board, use_app_store, AppStateStoreFields};

#[component]
pub fn BoardTabBar(
    current_board: ReadSignal<u32>,
    set_current_board: WriteSignal<u32>,
) -> impl IntoView {
    let store = use_app_store();
    let (adding, set_adding) = signal(false);
    let (new_name, set_new_name) = signal(String::new());

    let on_add = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get();
        if name.is_empty() { return; }

        spawn_local(async move {
            if let Ok(board) = commands::create_board(&name).await {
                // Fine-grained update: push new board to store
                store_add_board(&store, board);
            }
        });

        set_new_name.set(String::new());
        set_adding.set(false);
    };

    view! {
        <div class="board-tab-bar">
            <For
                each=move || store.boards().get()
                key=|board| board.id
                children=move |board| {
                    let id = board.id;
                    let is_active = move || current_board.get() == id;
                    let tab_class = move || {
                        if is_active() { "board-tab active" } else { "board-tab" }
                    };

                    view! {
                        <button
                            class=tab_class
                            on:click=move |_| set_current_board.set(id)
                        >
                            {board.name.clone()}
                        </button>
                    }
                }
            />

            {move || if adding.get() {
                view! {
                    <form class="board-add-form" on:submit=on_add>
                        <input
                            type="text"
                            placeholder="Board name"
                            prop:value=move || new_name.get()
                            on:input=move |ev| set_new_name.set(event_target_value(&ev))
                        />
                        <button type="submit">"+"</button>
                        <button type="button" on:click=move |_| set_adding.set(false)>"×"</button>
                    </form>
                }.into_any()
            } else {
                view! {
                    <button
                        class="board-add-btn"
                        on:click=move |_| set_adding.set(true)
                    >
                        "+"
                    </button>
                }.into_any()
            }}
        </div>
    }
}
