//! Drop Finalizer
//!
//! Same-group moves happen here, at drop time, with exact-slot semantics:
//! the dropped item always lands at the hovered row's index with no
//! midpoint tie-break. Cross-group drops need no structural work; the
//! last hover pass already shaped the board.

use crate::locate::locate_item;
use crate::model::{Board, Group};

/// Move `active_id` onto `over_id`'s slot within their shared group.
/// Returns `None` when the items live in different groups or nothing
/// would change.
pub fn same_group_move(board: &[Group], active_id: &str, over_id: &str) -> Option<Board> {
    if active_id == over_id {
        return None;
    }
    let active = locate_item(board, active_id)?;
    let over = locate_item(board, over_id)?;
    if active.group_idx != over.group_idx || active.item_idx == over.item_idx {
        return None;
    }

    let mut next: Board = board.to_vec();
    let items = &mut next[active.group_idx].items;
    let item = items.remove(active.item_idx);
    items.insert(over.item_idx, item);
    Some(next)
}
