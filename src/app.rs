//! Boardflow Frontend App
//!
//! Main application component: loads boards and groups, provides the
//! store and context, renders the tab bar and the board.

use leptos::prelude::*;
use leptos::task::spawn_local;
use reactive_stores::Store;

use crate::commands;
use crate::components::{BoardTabBar, BoardView};
use crate::context::AppContext;
use crate::store::{AppState, AppStateStoreFields};

#[component]
pub fn App() -> impl IntoView {
    let store = Store::new(AppState::new());
    provide_context(store);

    // State
    let (reload_trigger, set_reload_trigger) = signal(0u32);
    let (current_board, set_current_board) = signal(1u32); // Default board ID = 1
    let (last_error, set_last_error) = signal::<Option<String>>(None);

    // Provide context to all children
    provide_context(AppContext::new(
        (reload_trigger, set_reload_trigger),
        (last_error, set_last_error),
        current_board,
    ));

    // Load boards on mount and on reload
    Effect::new(move |_| {
        let _ = reload_trigger.get();
        spawn_local(async move {
            if let Ok(loaded) = commands::list_boards().await {
                store.boards().set(loaded);
            }
        });
    });

    // Load groups when board or trigger changes
    Effect::new(move |_| {
        let trigger = reload_trigger.get();
        let board_id = current_board.get();
        web_sys::console::log_1(&format!("[APP] Loading groups for board {}, trigger={}", board_id, trigger).into());
        spawn_local(async move {
            if let Ok(groups) = commands::list_groups(board_id).await {
                web_sys::console::log_1(&format!("[APP] Loaded {} groups", groups.len()).into());
                store.current_board_id().set(board_id);
                store.groups().set(groups);
            }
        });
    });

    view! {
        <div class="app-layout">
            <main class="main-content">
                <BoardTabBar
                    current_board=current_board
                    set_current_board=set_current_board
                />

                <h1>"Boardflow"</h1>

                <BoardView />

                {move || last_error.get().map(|err| view! {
                    <div class="error-banner">{err}</div>
                })}

                <p class="item-count">{move || {
                    let groups = store.groups().get();
                    let items: usize = groups.iter().map(|g| g.items.len()).sum();
                    format!("{} groups, {} items", groups.len(), items)
                }}</p>
            </main>
        </div>
    }
}
