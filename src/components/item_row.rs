//! Item Row Component
//!
//! A single task row: selection checkbox, name, status cell, assignee
//! chip, due date and delete button, plus the drag handlers.

use leptos::prelude::*;
use leptos::task::spawn_local;

use board_reorder::HoverTarget;
use leptos_dnd::{make_on_mousedown, make_on_mouseleave, make_on_row_mousemove, DndSignals};

use crate::commands;
use crate::components::StatusCell;
use crate::models::Item;
use crate::store::{store_remove_item, store_toggle_selected, use_app_store};

/// Up to two initials for the assignee chip
fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .collect()
}

#[component]
pub fn ItemRow(
    item: Item,
    dnd: DndSignals,
    drag_accent: ReadSignal<String>,
) -> impl IntoView {
    let store = use_app_store();

    let on_mousedown = make_on_mousedown(dnd, item.id.clone());
    let on_mousemove = make_on_row_mousemove(dnd, item.id.clone());
    let on_mouseleave = make_on_mouseleave(dnd);

    // Visual state
    let drag_id = item.id.clone();
    let is_dragging = move || dnd.dragging_id_read.get().as_deref() == Some(drag_id.as_str());
    let target_id = item.id.clone();
    let is_drop_target = move || {
        matches!(dnd.hover_target_read.get(), Some(HoverTarget::Item(tid)) if tid == target_id)
    };

    let selected = item.selected;
    let is_dragging_class = is_dragging.clone();
    let row_class = move || {
        let mut c = String::from("item-row");
        if selected { c.push_str(" selected"); }
        if is_dragging_class() { c.push_str(" dragging"); }
        if is_drop_target() { c.push_str(" drop-target"); }
        c
    };
    // Ghost rows carry the origin group's accent
    let accent_style = move || {
        if is_dragging() {
            format!("border-left: 3px solid {};", drag_accent.get())
        } else {
            String::new()
        }
    };

    let toggle_id = item.id.clone();
    let delete_id = item.id.clone();

    view! {
        <div
            class=row_class
            style=accent_style
            on:mousedown=on_mousedown
            on:mousemove=on_mousemove
            on:mouseleave=on_mouseleave
        >
            // Selection checkbox
            <input
                type="checkbox"
                checked=item.selected
                on:change=move |_| {
                    if dnd.drag_just_ended_read.get_untracked() { return; }
                    store_toggle_selected(&store, &toggle_id);
                }
            />

            // Name
            <span class="item-name">{item.name.clone()}</span>

            <StatusCell item_id=item.id.clone() status=item.status />

            // Assignee chip
            {item.assignee.as_deref().map(|name| view! {
                <span class="assignee-chip" title=name.to_string()>{initials(name)}</span>
            })}

            // Due date
            {item.due_date.map(|date| view! {
                <span class="due-date">{date.to_string()}</span>
            })}

            // Delete button
            <button class="delete-btn" on:click=move |_| {
                let id = delete_id.clone();
                spawn_local(async move {
                    if commands::delete_item(&id).await.is_ok() {
                        store_remove_item(&store, &id);
                    }
                });
            }>"×"</button>
        </div>
    }
}
