//! Drag Session
//!
//! Transient state for the active drag gesture. Created on drag-start,
//! destroyed on drag-end or cancel regardless of outcome.

use crate::model::Board;

/// State captured when a gesture begins
#[derive(Debug, Clone, PartialEq)]
pub struct DragSession {
    /// Item being dragged
    pub active_item_id: String,
    /// Group that owned the item when the gesture began
    pub origin_group_id: String,
    /// Origin group accent, used for the ghost row while dragging
    pub origin_accent: String,
    /// Board as of drag-start, restored on cancel
    pub(crate) snapshot: Board,
}
