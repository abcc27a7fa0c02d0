//! Frontend Models
//!
//! Board snapshot types come from the reorder engine crate so the
//! rendering layer and the mutation gateway read the same shape.

use serde::{Deserialize, Serialize};

pub use board_reorder::{Board, Group, Item, Status};

/// Board list entry (matches backend)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BoardMeta {
    pub id: u32,
    pub name: String,
}
