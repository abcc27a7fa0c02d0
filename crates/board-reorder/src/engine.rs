//! Reorder Engine
//!
//! The state-transition core. Owns the live board snapshot and the drag
//! session, and maps drag lifecycle events (start, hover, end, cancel)
//! to board mutations. All operations run synchronously inside a single
//! event handler; the engine never talks to storage directly.

use crate::finalize::same_group_move;
use crate::gateway::{GatewayError, GroupGateway};
use crate::geom::Rect;
use crate::hover::{resolve_hover, HoverTarget};
use crate::locate::{find_group_containing, group_index, locate_item};
use crate::model::Board;
use crate::session::DragSession;

/// Result of a drag-end event
#[derive(Debug)]
pub enum DropOutcome {
    /// The move was committed and the affected groups forwarded to the
    /// gateway. A persist failure leaves the in-memory board in place.
    Committed { persist: Result<(), GatewayError> },
    /// The gesture was cancelled; the board reverted to its drag-start shape
    Cancelled,
    /// Nothing to do (no active session, or the item vanished mid-drag)
    Ignored,
}

#[derive(Debug, Default)]
pub struct ReorderEngine {
    board: Board,
    session: Option<DragSession>,
}

impl ReorderEngine {
    pub fn new(board: Board) -> Self {
        Self { board, session: None }
    }

    /// Current board snapshot
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Replace the board wholesale (external CRUD reload). Any active
    /// session is dropped: its drag-start snapshot no longer applies.
    pub fn set_board(&mut self, board: Board) {
        self.session = None;
        self.board = board;
    }

    /// Active session, when a gesture is in flight
    pub fn session(&self) -> Option<&DragSession> {
        self.session.as_ref()
    }

    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Idle -> Dragging. Silently stays idle when the item cannot be
    /// resolved or another gesture is already active.
    pub fn drag_start(&mut self, item_id: &str) -> bool {
        if self.session.is_some() {
            log::warn!("drag_start ignored: a drag session is already active");
            return false;
        }
        let origin = match find_group_containing(&self.board, item_id) {
            Some(group) => group,
            None => {
                log::debug!("drag_start ignored: item {} is not on the board", item_id);
                return false;
            }
        };
        self.session = Some(DragSession {
            active_item_id: item_id.to_string(),
            origin_group_id: origin.id.clone(),
            origin_accent: origin.color.clone(),
            snapshot: self.board.clone(),
        });
        true
    }

    /// Hover update during a drag. Returns true when the board changed.
    pub fn drag_over(
        &mut self,
        target: Option<&HoverTarget>,
        pointer_y: Option<f64>,
        over_rect: Option<Rect>,
    ) -> bool {
        let session = match &self.session {
            Some(s) => s,
            None => return false,
        };
        let target = match target {
            Some(t) => t,
            None => return false,
        };
        match resolve_hover(&self.board, &session.active_item_id, target, pointer_y, over_rect) {
            Some(next) => {
                self.board = next;
                true
            }
            None => false,
        }
    }

    /// Dragging -> Idle, committing the final placement. The session is
    /// cleared regardless of outcome.
    pub fn drag_end(
        &mut self,
        target: Option<&HoverTarget>,
        gateway: &dyn GroupGateway,
    ) -> DropOutcome {
        let session = match self.session.take() {
            Some(s) => s,
            None => return DropOutcome::Ignored,
        };
        let target = match target {
            Some(t) => t,
            None => {
                // Dropped outside any valid target: discard the preview
                self.board = session.snapshot;
                return DropOutcome::Cancelled;
            }
        };
        let active_id = session.active_item_id.clone();
        let active = match locate_item(&self.board, &active_id) {
            Some(loc) => loc,
            None => {
                // Deleted by a collaborator mid-drag; leave the board alone
                log::warn!("drop ignored: item {} vanished mid-drag", active_id);
                return DropOutcome::Ignored;
            }
        };

        match target {
            HoverTarget::Item(over_id) => {
                let over = match locate_item(&self.board, over_id) {
                    Some(loc) => loc,
                    None => {
                        self.board = session.snapshot;
                        return DropOutcome::Cancelled;
                    }
                };
                if over.group_idx == active.group_idx {
                    if let Some(next) = same_group_move(&self.board, &active_id, over_id) {
                        self.board = next;
                    }
                }
                // Cross-group: the last hover pass already shaped the board
            }
            HoverTarget::GroupZone(group_id) => {
                if group_index(&self.board, group_id).is_none() {
                    self.board = session.snapshot;
                    return DropOutcome::Cancelled;
                }
                // A zone the hover pass never visited still lands as append
                if let Some(next) = resolve_hover(&self.board, &active_id, target, None, None) {
                    self.board = next;
                }
            }
        }

        self.commit(&session, gateway)
    }

    /// Dragging -> Idle without committing. Safe to call repeatedly.
    pub fn drag_cancel(&mut self) {
        if let Some(session) = self.session.take() {
            self.board = session.snapshot;
        }
    }

    /// Forward the affected groups (origin and final owner, deduped, in
    /// board order) to the gateway.
    fn commit(&mut self, session: &DragSession, gateway: &dyn GroupGateway) -> DropOutcome {
        let mut persist = Ok(());
        for group in &self.board {
            let owns_active = group.items.iter().any(|i| i.id == session.active_item_id);
            if group.id != session.origin_group_id && !owns_active {
                continue;
            }
            if let Err(err) = gateway.group_updated(group) {
                log::warn!("gateway rejected group {}: {}", group.id, err);
                if persist.is_ok() {
                    persist = Err(err);
                }
            }
        }
        DropOutcome::Committed { persist }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::gateway::LoggingGateway;
    use crate::model::{Group, Item, Status};
    use std::cell::RefCell;

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

    fn make_group(id: &str, color: &str, item_ids: &[&str]) -> Group {
        Group {
            id: id.to_string(),
            title: id.to_string(),
            color: color.to_string(),
            items: item_ids.iter().map(|i| make_item(i)).collect(),
        }
    }

    fn ids(group: &Group) -> Vec<&str> {
        group.items.iter().map(|i| i.id.as_str()).collect()
    }

    fn row_rect() -> Rect {
        Rect::new(0.0, 100.0, 240.0, 40.0)
    }

    /// Gateway that records the group ids it receives
    #[derive(Default)]
    struct RecordingGateway {
        updated: RefCell<Vec<String>>,
        fail: bool,
    }

    impl GroupGateway for RecordingGateway {
        fn group_updated(&self, group: &Group) -> Result<(), GatewayError> {
            self.updated.borrow_mut().push(group.id.clone());
            if self.fail {
                Err(GatewayError::Persist {
                    id: group.id.clone(),
                    reason: "backend unavailable".to_string(),
                })
            } else {
                Ok(())
            }
        }
    }

    #[test]
    fn test_drag_start_records_session() {
        let mut engine = ReorderEngine::new(vec![make_group("g1", "#579bfc", &["a"])]);
        assert!(engine.drag_start("a"));
        let session = engine.session().unwrap();
        assert_eq!(session.active_item_id, "a");
        assert_eq!(session.origin_group_id, "g1");
        assert_eq!(session.origin_accent, "#579bfc");
    }

    #[test]
    fn test_drag_start_unknown_item_stays_idle() {
        let mut engine = ReorderEngine::new(vec![make_group("g1", "#579bfc", &["a"])]);
        assert!(!engine.drag_start("zzz"));
        assert!(!engine.is_dragging());
    }

    #[test]
    fn test_second_drag_start_is_ignored() {
        let mut engine = ReorderEngine::new(vec![make_group("g1", "#579bfc", &["a", "b"])]);
        assert!(engine.drag_start("a"));
        assert!(!engine.drag_start("b"));
        assert_eq!(engine.session().unwrap().active_item_id, "a");
    }

    #[test]
    fn test_drag_end_without_session_is_ignored() {
        let mut engine = ReorderEngine::new(vec![make_group("g1", "#579bfc", &["a"])]);
        let outcome = engine.drag_end(None, &LoggingGateway);
        assert!(matches!(outcome, DropOutcome::Ignored));
    }

    #[test]
    fn test_drop_outside_target_cancels() {
        let mut engine = ReorderEngine::new(vec![
            make_group("g1", "#579bfc", &["a", "b"]),
            make_group("g2", "#a25ddc", &[]),
        ]);
        engine.drag_start("a");
        let zone = HoverTarget::GroupZone("g2".to_string());
        assert!(engine.drag_over(Some(&zone), None, None));
        assert_eq!(ids(&engine.board()[1]), vec!["a"]);

        let outcome = engine.drag_end(None, &LoggingGateway);
        assert!(matches!(outcome, DropOutcome::Cancelled));
        assert_eq!(ids(&engine.board()[0]), vec!["a", "b"]);
        assert!(engine.board()[1].items.is_empty());
        assert!(!engine.is_dragging());
    }

    #[test]
    fn test_cancel_restores_drag_start_board() {
        let board = vec![
            make_group("g1", "#579bfc", &["a", "b"]),
            make_group("g2", "#a25ddc", &["x"]),
        ];
        let mut engine = ReorderEngine::new(board.clone());
        engine.drag_start("a");
        let target = HoverTarget::Item("x".to_string());
        engine.drag_over(Some(&target), Some(110.0), Some(row_rect()));
        assert_ne!(*engine.board(), board);

        engine.drag_cancel();
        assert_eq!(*engine.board(), board);

        // Idempotent
        engine.drag_cancel();
        assert_eq!(*engine.board(), board);
    }

    #[test]
    fn test_same_group_drop_uses_exact_slot() {
        let mut engine = ReorderEngine::new(vec![make_group("g1", "#579bfc", &["b", "x", "a"])]);
        engine.drag_start("a");
        let target = HoverTarget::Item("b".to_string());
        let outcome = engine.drag_end(Some(&target), &LoggingGateway);
        assert!(matches!(outcome, DropOutcome::Committed { persist: Ok(()) }));
        assert_eq!(ids(&engine.board()[0]), vec!["a", "b", "x"]);
    }

    #[test]
    fn test_cross_group_drop_commits_preview_shape() {
        let mut engine = ReorderEngine::new(vec![
            make_group("g1", "#579bfc", &["a", "b"]),
            make_group("g2", "#a25ddc", &["x", "y"]),
        ]);
        engine.drag_start("a");
        let target = HoverTarget::Item("x".to_string());
        engine.drag_over(Some(&target), Some(130.0), Some(row_rect()));
        assert_eq!(ids(&engine.board()[1]), vec!["x", "a", "y"]);

        let outcome = engine.drag_end(Some(&target), &LoggingGateway);
        assert!(matches!(outcome, DropOutcome::Committed { persist: Ok(()) }));
        assert_eq!(ids(&engine.board()[0]), vec!["b"]);
        assert_eq!(ids(&engine.board()[1]), vec!["x", "a", "y"]);
    }

    #[test]
    fn test_empty_group_scenario() {
        // Board = [g1: [1, 2], g2: []]; drag 1 onto g2's zone
        let mut engine = ReorderEngine::new(vec![
            make_group("g1", "#579bfc", &["1", "2"]),
            make_group("g2", "#a25ddc", &[]),
        ]);
        engine.drag_start("1");
        let zone = HoverTarget::GroupZone("g2".to_string());
        engine.drag_over(Some(&zone), None, None);
        assert_eq!(ids(&engine.board()[0]), vec!["2"]);
        assert_eq!(ids(&engine.board()[1]), vec!["1"]);

        let outcome = engine.drag_end(Some(&zone), &LoggingGateway);
        assert!(matches!(outcome, DropOutcome::Committed { persist: Ok(()) }));
        assert_eq!(ids(&engine.board()[0]), vec!["2"]);
        assert_eq!(ids(&engine.board()[1]), vec!["1"]);
    }

    #[test]
    fn test_zone_drop_without_prior_hover_appends() {
        let mut engine = ReorderEngine::new(vec![
            make_group("g1", "#579bfc", &["a", "b"]),
            make_group("g2", "#a25ddc", &["x"]),
        ]);
        engine.drag_start("a");
        let zone = HoverTarget::GroupZone("g2".to_string());
        let outcome = engine.drag_end(Some(&zone), &LoggingGateway);
        assert!(matches!(outcome, DropOutcome::Committed { persist: Ok(()) }));
        assert_eq!(ids(&engine.board()[1]), vec!["x", "a"]);
    }

    #[test]
    fn test_drop_on_vanished_group_cancels() {
        let mut engine = ReorderEngine::new(vec![make_group("g1", "#579bfc", &["a", "b"])]);
        engine.drag_start("a");
        let zone = HoverTarget::GroupZone("g9".to_string());
        let outcome = engine.drag_end(Some(&zone), &LoggingGateway);
        assert!(matches!(outcome, DropOutcome::Cancelled));
        assert_eq!(ids(&engine.board()[0]), vec!["a", "b"]);
    }

    #[test]
    fn test_gateway_receives_affected_groups_in_board_order() {
        let mut engine = ReorderEngine::new(vec![
            make_group("g1", "#579bfc", &["a"]),
            make_group("g2", "#a25ddc", &["x"]),
        ]);
        engine.drag_start("a");
        let target = HoverTarget::Item("x".to_string());
        engine.drag_over(Some(&target), Some(110.0), Some(row_rect()));

        let gateway = RecordingGateway::default();
        engine.drag_end(Some(&target), &gateway);
        assert_eq!(*gateway.updated.borrow(), vec!["g1".to_string(), "g2".to_string()]);
    }

    #[test]
    fn test_same_group_commit_notifies_once() {
        let mut engine = ReorderEngine::new(vec![make_group("g1", "#579bfc", &["a", "b", "c"])]);
        engine.drag_start("c");
        let target = HoverTarget::Item("a".to_string());
        let gateway = RecordingGateway::default();
        engine.drag_end(Some(&target), &gateway);
        assert_eq!(*gateway.updated.borrow(), vec!["g1".to_string()]);
    }

    #[test]
    fn test_gateway_failure_keeps_moved_board() {
        let mut engine = ReorderEngine::new(vec![
            make_group("g1", "#579bfc", &["a"]),
            make_group("g2", "#a25ddc", &[]),
        ]);
        engine.drag_start("a");
        let zone = HoverTarget::GroupZone("g2".to_string());
        engine.drag_over(Some(&zone), None, None);

        let gateway = RecordingGateway { fail: true, ..Default::default() };
        let outcome = engine.drag_end(Some(&zone), &gateway);
        match outcome {
            DropOutcome::Committed { persist } => assert!(persist.is_err()),
            other => panic!("expected Committed, got {:?}", other),
        }
        // No rollback on persist failure
        assert_eq!(ids(&engine.board()[1]), vec!["a"]);
    }

    #[test]
    fn test_set_board_drops_session() {
        let mut engine = ReorderEngine::new(vec![make_group("g1", "#579bfc", &["a"])]);
        engine.drag_start("a");
        engine.set_board(vec![make_group("g1", "#579bfc", &["a", "b"])]);
        assert!(!engine.is_dragging());
    }

    #[test]
    fn test_every_item_appears_exactly_once_after_gesture_storm() {
        let mut engine = ReorderEngine::new(vec![
            make_group("g1", "#579bfc", &["a", "b", "c"]),
            make_group("g2", "#a25ddc", &["x"]),
            make_group("g3", "#00c875", &[]),
        ]);
        engine.drag_start("b");
        let over_x = HoverTarget::Item("x".to_string());
        let zone3 = HoverTarget::GroupZone("g3".to_string());
        engine.drag_over(Some(&over_x), Some(110.0), Some(row_rect()));
        engine.drag_over(Some(&zone3), None, None);
        engine.drag_over(Some(&over_x), Some(130.0), Some(row_rect()));
        engine.drag_end(Some(&over_x), &LoggingGateway);

        let mut all: Vec<&str> = engine
            .board()
            .iter()
            .flat_map(|g| g.items.iter())
            .map(|i| i.id.as_str())
            .collect();
        all.sort();
        assert_eq!(all, vec!["a", "b", "c", "x"]);
    }
}
