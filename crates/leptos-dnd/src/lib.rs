//! Leptos DnD Glue
//!
//! Mouse-event drag controller for board rows. Uses a movement threshold
//! to distinguish click from drag. Captures the hovered row's bounding
//! box and the pointer position for the reorder engine's midpoint
//! tie-break.

use board_reorder::{HoverTarget, Rect};
use leptos::prelude::*;
use wasm_bindgen::JsCast;

/// DnD state signals
#[derive(Clone, Copy)]
pub struct DndSignals {
    pub dragging_id_read: ReadSignal<Option<String>>,
    pub dragging_id_write: WriteSignal<Option<String>>,
    pub hover_target_read: ReadSignal<Option<HoverTarget>>,
    pub hover_target_write: WriteSignal<Option<HoverTarget>>,
    /// Pointer y of the last row hover
    pub pointer_y_read: ReadSignal<Option<f64>>,
    pub pointer_y_write: WriteSignal<Option<f64>>,
    /// Bounding box of the hovered row
    pub over_rect_read: ReadSignal<Option<Rect>>,
    pub over_rect_write: WriteSignal<Option<Rect>>,
    pub drag_just_ended_read: ReadSignal<bool>,
    pub drag_just_ended_write: WriteSignal<bool>,
    /// Pending item id (mousedown but not yet dragging)
    pub pending_id_read: ReadSignal<Option<String>>,
    pub pending_id_write: WriteSignal<Option<String>>,
    /// Start position for movement detection
    pub start_x_read: ReadSignal<i32>,
    pub start_x_write: WriteSignal<i32>,
    pub start_y_read: ReadSignal<i32>,
    pub start_y_write: WriteSignal<i32>,
}

/// Movement threshold in pixels to start dragging
const DRAG_THRESHOLD_PX: i32 = 5;

pub fn create_dnd_signals() -> DndSignals {
    let (dragging_id_read, dragging_id_write) = signal(None::<String>);
    let (hover_target_read, hover_target_write) = signal(None::<HoverTarget>);
    let (pointer_y_read, pointer_y_write) = signal(None::<f64>);
    let (over_rect_read, over_rect_write) = signal(None::<Rect>);
    let (drag_just_ended_read, drag_just_ended_write) = signal(false);
    let (pending_id_read, pending_id_write) = signal(None::<String>);
    let (start_x_read, start_x_write) = signal(0i32);
    let (start_y_read, start_y_write) = signal(0i32);
    DndSignals {
        dragging_id_read,
        dragging_id_write,
        hover_target_read,
        hover_target_write,
        pointer_y_read,
        pointer_y_write,
        over_rect_read,
        over_rect_write,
        drag_just_ended_read,
        drag_just_ended_write,
        pending_id_read,
        pending_id_write,
        start_x_read,
        start_x_write,
        start_y_read,
        start_y_write,
    }
}

/// Convert a DOM bounding box into the engine's opaque geometry
pub fn dom_rect_to_rect(rect: &web_sys::DomRect) -> Rect {
    Rect::new(rect.x(), rect.y(), rect.width(), rect.height())
}

/// End drag operation
pub fn end_drag(dnd: &DndSignals) {
    dnd.dragging_id_write.set(None);
    dnd.hover_target_write.set(None);
    dnd.pointer_y_write.set(None);
    dnd.over_rect_write.set(None);
    dnd.pending_id_write.set(None);
    dnd.drag_just_ended_write.set(true);

    if let Some(win) = web_sys::window() {
        let clear = dnd.drag_just_ended_write;
        let cb = wasm_bindgen::closure::Closure::<dyn FnMut()>::new(move || {
            clear.set(false);
        });
        let _ = win.set_timeout_with_callback_and_timeout_and_arguments_0(cb.as_ref().unchecked_ref(), 100);
        cb.forget();
    }
}

/// Create mousedown handler for draggable rows.
/// Records a pending drag with its start position.
pub fn make_on_mousedown(dnd: DndSignals, item_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        if ev.button() == 0 {
            // Ignore if target is input or button
            if let Some(target) = ev.target() {
                if target.dyn_ref::<web_sys::HtmlInputElement>().is_some() { return; }
                if target.dyn_ref::<web_sys::HtmlButtonElement>().is_some() { return; }
            }
            dnd.pending_id_write.set(Some(item_id.clone()));
            dnd.start_x_write.set(ev.client_x());
            dnd.start_y_write.set(ev.client_y());
        }
    }
}

/// Create mousemove handler for item rows: records the row as the hover
/// target together with the pointer position and the row's bounding box.
pub fn make_on_row_mousemove(dnd: DndSignals, item_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |ev: web_sys::MouseEvent| {
        let dragging = match dnd.dragging_id_read.get_untracked() {
            Some(id) => id,
            None => return,
        };
        if dragging == item_id {
            // Hovering the dragged row itself carries no target
            return;
        }
        dnd.pointer_y_write.set(Some(ev.client_y() as f64));
        if let Some(target) = ev.current_target() {
            if let Some(el) = target.dyn_ref::<web_sys::Element>() {
                dnd.over_rect_write.set(Some(dom_rect_to_rect(&el.get_bounding_client_rect())));
            }
        }
        dnd.hover_target_write.set(Some(HoverTarget::Item(item_id.clone())));
    }
}

/// Create mouseenter handler for group drop zones
pub fn make_on_zone_mouseenter(dnd: DndSignals, group_id: String) -> impl Fn(web_sys::MouseEvent) + Clone + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.pointer_y_write.set(None);
            dnd.over_rect_write.set(None);
            dnd.hover_target_write.set(Some(HoverTarget::GroupZone(group_id.clone())));
        }
    }
}

/// Create mouseleave handler
pub fn make_on_mouseleave(dnd: DndSignals) -> impl Fn(web_sys::MouseEvent) + Copy + 'static {
    move |_ev: web_sys::MouseEvent| {
        if dnd.dragging_id_read.get_untracked().is_some() {
            dnd.hover_target_write.set(None);
        }
    }
}

/// Bind the document-level handlers driving the drag lifecycle.
///
/// `on_start` fires once when a pending press crosses the movement
/// threshold. `on_drop` fires on mouseup while dragging, with the last
/// hover target and its geometry (a `None` target means the pointer was
/// outside every valid target, i.e. cancel semantics downstream).
pub fn bind_global_dnd<S, F>(dnd: DndSignals, on_start: S, on_drop: F)
where
    S: Fn(String) + Clone + 'static,
    F: Fn(String, Option<HoverTarget>, Option<f64>, Option<Rect>) + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_mousemove = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |ev: web_sys::MouseEvent| {
        let pending = dnd.pending_id_read.get_untracked();

        if let Some(pending) = pending {
            if dnd.dragging_id_read.get_untracked().is_none() {
                let dx = (ev.client_x() - dnd.start_x_read.get_untracked()).abs();
                let dy = (ev.client_y() - dnd.start_y_read.get_untracked()).abs();

                // Start dragging if moved beyond threshold
                if dx > DRAG_THRESHOLD_PX || dy > DRAG_THRESHOLD_PX {
                    dnd.dragging_id_write.set(Some(pending.clone()));
                    on_start(pending);
                }
            }
        }
    });

    let on_mouseup = Closure::<dyn FnMut(web_sys::MouseEvent)>::new(move |_ev: web_sys::MouseEvent| {
        let dragging = dnd.dragging_id_read.get_untracked();
        let target = dnd.hover_target_read.get_untracked();
        let pointer_y = dnd.pointer_y_read.get_untracked();
        let over_rect = dnd.over_rect_read.get_untracked();

        if let Some(dragged) = dragging {
            end_drag(&dnd);
            on_drop(dragged, target, pointer_y, over_rect);
        } else {
            // Plain click: clear the pending press, let the click fire
            dnd.pending_id_write.set(None);
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("mousemove", on_mousemove.as_ref().unchecked_ref());
            let _ = doc.add_event_listener_with_callback("mouseup", on_mouseup.as_ref().unchecked_ref());
        }
    }
    on_mousemove.forget();
    on_mouseup.forget();
}

/// Bind Escape to cancel the active drag
pub fn bind_escape_cancel<F>(dnd: DndSignals, on_cancel: F)
where
    F: Fn() + Clone + 'static,
{
    use wasm_bindgen::closure::Closure;

    let on_keydown = Closure::<dyn FnMut(web_sys::KeyboardEvent)>::new(move |ev: web_sys::KeyboardEvent| {
        if ev.key() == "Escape" && dnd.dragging_id_read.get_untracked().is_some() {
            end_drag(&dnd);
            on_cancel();
        }
    });

    if let Some(win) = web_sys::window() {
        if let Some(doc) = win.document() {
            let _ = doc.add_event_listener_with_callback("keydown", on_keydown.as_ref().unchecked_ref());
        }
    }
    on_keydown.forget();
}
