//! Group Section Component
//!
//! One group of the board: accent header, item rows, a drop zone for
//! empty-group and past-the-last-row drops, and the add-item form.

use leptos::prelude::*;

use board_reorder::HoverTarget;
use leptos_dnd::{make_on_mouseleave, make_on_zone_mouseenter, DndSignals};

use crate::components::{ItemRow, NewItemForm};
use crate::models::Group;

#[component]
pub fn GroupSection(
    group: Group,
    dnd: DndSignals,
    drag_accent: ReadSignal<String>,
) -> impl IntoView {
    let title = group.title.clone();
    let color = group.color.clone();
    let zone_group_id = group.id.clone();
    let form_group_id = group.id.clone();
    let items = group.items.clone();
    let count = items.len();
    let each_items = move || items.clone();

    view! {
        <section class="group-section">
            <header class="group-header" style=format!("border-left: 4px solid {};", color)>
                <span class="group-title" style=format!("color: {};", color)>{title}</span>
                <span class="group-count">{format!("{} items", count)}</span>
            </header>

            <div class="group-items">
                <For
                    each=each_items
                    // Key on the full record so field edits re-render the row
                    key=|item| item.clone()
                    children=move |item| {
                        view! {
                            <ItemRow item=item dnd=dnd drag_accent=drag_accent />
                        }
                    }
                />
            </div>

            // Append target: also the drop zone when the group is empty
            <GroupDropZone dnd=dnd group_id=zone_group_id />

            <NewItemForm group_id=form_group_id />
        </section>
    }
}

/// Drop zone at the bottom of a group - a horizontal bar for dropping
/// items past the last row, or into an empty group
#[component]
pub fn GroupDropZone(dnd: DndSignals, group_id: String) -> impl IntoView {
    let zone_group = group_id.clone();
    let on_mouseenter = make_on_zone_mouseenter(dnd, group_id);
    let on_mouseleave = make_on_mouseleave(dnd);

    // Is this zone the current drop target?
    let is_active = move || {
        matches!(dnd.hover_target_read.get(), Some(HoverTarget::GroupZone(gid)) if gid == zone_group)
    };

    // Only show when dragging
    let is_dragging = move || dnd.dragging_id_read.get().is_some();

    let zone_class = move || {
        let mut c = String::from("group-drop-zone");
        if !is_dragging() { c.push_str(" hidden"); }
        if is_active() { c.push_str(" active"); }
        c
    };

    view! {
        <div
            class=zone_class
            on:mouseenter=on_mouseenter
            on:mouseleave=on_mouseleave
        />
    }
}
