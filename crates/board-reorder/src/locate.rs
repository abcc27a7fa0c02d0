//! Item Locator
//!
//! Resolves which group currently owns an item. Always scans the live
//! board: provisional moves can change ownership between any two events,
//! so callers must never cache group references.

use crate::model::Group;

/// Position of an item within the board
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemLocation {
    pub group_idx: usize,
    pub item_idx: usize,
}

/// Find the unique group whose item sequence contains `item_id`
pub fn find_group_containing<'a>(board: &'a [Group], item_id: &str) -> Option<&'a Group> {
    board.iter().find(|g| g.items.iter().any(|i| i.id == item_id))
}

/// Resolve an item id to its (group, item) indices
pub fn locate_item(board: &[Group], item_id: &str) -> Option<ItemLocation> {
    board.iter().enumerate().find_map(|(group_idx, group)| {
        group
            .items
            .iter()
            .position(|i| i.id == item_id)
            .map(|item_idx| ItemLocation { group_idx, item_idx })
    })
}

/// Index of a group by id
pub fn group_index(board: &[Group], group_id: &str) -> Option<usize> {
    board.iter().position(|g| g.id == group_id)
}
