//! Board View Component
//!
//! Renders the grouped board and wires the drag-and-drop engine: global
//! mouse handlers, the hover effect applying provisional moves, and the
//! drop/cancel paths.

use leptos::prelude::*;

use board_reorder::{DropOutcome, ReorderEngine};
use leptos_dnd::*;

use crate::components::GroupSection;
use crate::context::AppContext;
use crate::gateway::CommandGateway;
use crate::store::{use_app_store, AppStateStoreFields};

#[component]
pub fn BoardView() -> impl IntoView {
    let ctx = use_context::<AppContext>().expect("AppContext should be provided");
    let store = use_app_store();

    let engine = StoredValue::new(ReorderEngine::default());
    let dnd = create_dnd_signals();
    let (drag_accent, set_drag_accent) = signal(String::new());

    // Threshold crossed: open a drag session on a fresh snapshot
    let on_drag_start = move |item_id: String| {
        web_sys::console::log_1(&format!("[DND] Drag start: {}", item_id).into());
        let groups = store.groups().get_untracked();
        engine.update_value(|eng| {
            eng.set_board(groups);
            if eng.drag_start(&item_id) {
                if let Some(session) = eng.session() {
                    set_drag_accent.set(session.origin_accent.clone());
                }
            }
        });
    };

    // Every qualifying hover applies a provisional move
    Effect::new(move |_| {
        let target = dnd.hover_target_read.get();
        let pointer_y = dnd.pointer_y_read.get();
        let over_rect = dnd.over_rect_read.get();
        if dnd.dragging_id_read.get().is_none() {
            return;
        }
        engine.update_value(|eng| {
            if eng.drag_over(target.as_ref(), pointer_y, over_rect) {
                store.groups().set(eng.board().clone());
            }
        });
    });

    let gateway = CommandGateway::new(ctx.set_last_error);
    bind_global_dnd(dnd, on_drag_start, move |dragged_id, target, pointer_y, over_rect| {
        web_sys::console::log_1(&format!("[DND] Drop: dragged={}, target={:?}", dragged_id, target).into());
        engine.update_value(|eng| {
            // Apply the final hover synchronously in case the effect
            // queued behind this mouseup
            eng.drag_over(target.as_ref(), pointer_y, over_rect);
            match eng.drag_end(target.as_ref(), &gateway) {
                DropOutcome::Committed { persist } => {
                    store.groups().set(eng.board().clone());
                    if let Err(err) = persist {
                        ctx.report_error(err.to_string());
                    }
                }
                DropOutcome::Cancelled => {
                    store.groups().set(eng.board().clone());
                }
                DropOutcome::Ignored => {}
            }
        });
        set_drag_accent.set(String::new());
    });

    bind_escape_cancel(dnd, move || {
        web_sys::console::log_1(&"[DND] Drag cancelled".into());
        engine.update_value(|eng| {
            if eng.is_dragging() {
                eng.drag_cancel();
                store.groups().set(eng.board().clone());
            }
        });
        set_drag_accent.set(String::new());
    });

    view! {
        <div class="board-view">
            <For
                each=move || store.groups().get()
                // Key on the full record so any field edit re-renders the section
                key=|group| group.clone()
                children=move |group| {
                    view! {
                        <GroupSection group=group dnd=dnd drag_accent=drag_accent />
                    }
                }
            />
        </div>
    }
}
