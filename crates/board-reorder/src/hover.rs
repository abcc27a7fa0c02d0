//! Hover Reorder Resolver
//!
//! Computes the provisional board produced by hovering the dragged item
//! over a row or a group drop zone. Applied optimistically on every
//! qualifying hover event; `None` means the board is unchanged.

use crate::geom::Rect;
use crate::locate::{group_index, locate_item};
use crate::model::{Board, Group};

/// What the pointer is currently over
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HoverTarget {
    /// Another item row
    Item(String),
    /// A group's drop zone (empty group, or past the last row)
    GroupZone(String),
}

/// Resolve a hover of `active_id` over `target` into a new board, or
/// `None` when nothing should move.
///
/// Same-group hovers never move anything: live reordering within one
/// group is deferred entirely to drop time. Cross-group hovers remove the
/// active item from its group and insert it at the hovered row's index,
/// one past it when the pointer sits below the row's vertical midpoint.
/// A zone target appends. Missing geometry counts as above the midpoint.
pub fn resolve_hover(
    board: &[Group],
    active_id: &str,
    target: &HoverTarget,
    pointer_y: Option<f64>,
    over_rect: Option<Rect>,
) -> Option<Board> {
    let source = match locate_item(board, active_id) {
        Some(loc) => loc,
        None => {
            log::debug!("hover ignored: active item {} is not on the board", active_id);
            return None;
        }
    };

    let (target_group_idx, insert_idx) = match target {
        HoverTarget::Item(over_id) => {
            if over_id == active_id {
                return None;
            }
            let over = match locate_item(board, over_id) {
                Some(loc) => loc,
                None => {
                    log::debug!("hover ignored: hovered item {} is not on the board", over_id);
                    return None;
                }
            };
            if over.group_idx == source.group_idx {
                return None;
            }
            let below_midpoint = match (pointer_y, over_rect) {
                (Some(y), Some(rect)) => y > rect.mid_y(),
                _ => false,
            };
            (over.group_idx, over.item_idx + usize::from(below_midpoint))
        }
        HoverTarget::GroupZone(group_id) => {
            let group_idx = match group_index(board, group_id) {
                Some(idx) => idx,
                None => {
                    log::debug!("hover ignored: group {} is not on the board", group_id);
                    return None;
                }
            };
            if group_idx == source.group_idx {
                return None;
            }
            (group_idx, board[group_idx].items.len())
        }
    };

    let mut next: Board = board.to_vec();
    let item = next[source.group_idx].items.remove(source.item_idx);
    next[target_group_idx].items.insert(insert_idx, item);
    Some(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Group, Item, Status};

    fn make_item(id: &str) -> Item {
        Item {
            id: id.to_string(),
            name: format!("Item {}", id),
            assignee: None,
            status: Status::NotStarted,
            due_date: None,
            selected: false,
        }
    }

    fn make_group(id: &str, item_ids: &[&str]) -> Group {
        Group {
            id: id.to_string(),
            title: id.to_string(),
            color: "#579bfc".to_string(),
            items: item_ids.iter().map(|i| make_item(i)).collect(),
        }
    }

    fn ids(group: &Group) -> Vec<&str> {
        group.items.iter().map(|i| i.id.as_str()).collect()
    }

    /// Hovered row geometry: y 100, height 40, midpoint 120
    fn row_rect() -> Rect {
        Rect::new(0.0, 100.0, 240.0, 40.0)
    }

    #[test]
    fn test_self_hover_is_noop() {
        let board = vec![make_group("g1", &["a", "b"])];
        let target = HoverTarget::Item("a".to_string());
        assert!(resolve_hover(&board, "a", &target, None, None).is_none());
    }

    #[test]
    fn test_same_group_hover_is_noop() {
        let board = vec![make_group("g1", &["a", "b"])];
        let target = HoverTarget::Item("b".to_string());
        assert!(resolve_hover(&board, "a", &target, Some(110.0), Some(row_rect())).is_none());
    }

    #[test]
    fn test_unknown_active_is_noop() {
        let board = vec![make_group("g1", &["a"])];
        let target = HoverTarget::Item("a".to_string());
        assert!(resolve_hover(&board, "zzz", &target, None, None).is_none());
    }

    #[test]
    fn test_unknown_group_zone_is_noop() {
        let board = vec![make_group("g1", &["a"])];
        let target = HoverTarget::GroupZone("g9".to_string());
        assert!(resolve_hover(&board, "a", &target, None, None).is_none());
    }

    #[test]
    fn test_cross_group_above_midpoint_inserts_before() {
        let board = vec![make_group("g1", &["a"]), make_group("g2", &["x", "y"])];
        let target = HoverTarget::Item("x".to_string());
        let next = resolve_hover(&board, "a", &target, Some(110.0), Some(row_rect())).unwrap();
        assert_eq!(ids(&next[0]), Vec::<&str>::new());
        assert_eq!(ids(&next[1]), vec!["a", "x", "y"]);
    }

    #[test]
    fn test_cross_group_below_midpoint_inserts_after() {
        let board = vec![make_group("g1", &["a"]), make_group("g2", &["x", "y"])];
        let target = HoverTarget::Item("x".to_string());
        let next = resolve_hover(&board, "a", &target, Some(130.0), Some(row_rect())).unwrap();
        assert_eq!(ids(&next[1]), vec!["x", "a", "y"]);
    }

    #[test]
    fn test_missing_geometry_inserts_before() {
        let board = vec![make_group("g1", &["a"]), make_group("g2", &["x"])];
        let target = HoverTarget::Item("x".to_string());
        let next = resolve_hover(&board, "a", &target, None, None).unwrap();
        assert_eq!(ids(&next[1]), vec!["a", "x"]);
    }

    #[test]
    fn test_empty_group_zone_appends() {
        let board = vec![make_group("g1", &["a", "b"]), make_group("g2", &[])];
        let target = HoverTarget::GroupZone("g2".to_string());
        let next = resolve_hover(&board, "a", &target, None, None).unwrap();
        assert_eq!(ids(&next[0]), vec!["b"]);
        assert_eq!(ids(&next[1]), vec!["a"]);
    }

    #[test]
    fn test_zone_of_own_group_is_noop() {
        let board = vec![make_group("g1", &["a", "b"])];
        let target = HoverTarget::GroupZone("g1".to_string());
        assert!(resolve_hover(&board, "a", &target, None, None).is_none());
    }

    #[test]
    fn test_hover_is_idempotent() {
        let board = vec![make_group("g1", &["a", "b"]), make_group("g2", &["x"])];
        let target = HoverTarget::Item("x".to_string());
        let once = resolve_hover(&board, "a", &target, Some(130.0), Some(row_rect())).unwrap();
        // Second identical hover hits the same-group guard
        assert!(resolve_hover(&once, "a", &target, Some(130.0), Some(row_rect())).is_none());
    }

    #[test]
    fn test_no_item_duplicated_or_lost() {
        let board = vec![make_group("g1", &["a", "b"]), make_group("g2", &["x", "y"])];
        let target = HoverTarget::Item("y".to_string());
        let next = resolve_hover(&board, "b", &target, Some(130.0), Some(row_rect())).unwrap();
        let mut all: Vec<&str> = next.iter().flat_map(|g| g.items.iter()).map(|i| i.id.as_str()).collect();
        all.sort();
        assert_eq!(all, vec!["a", "b", "x", "y"]);
    }
}
