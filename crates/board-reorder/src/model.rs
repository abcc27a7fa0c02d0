//! Board Data Model
//!
//! Snapshot types shared by the engine, the rendering layer and the
//! mutation gateway.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Workflow status of an item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Status {
    NotStarted,
    Working,
    Stuck,
    Done,
}

impl Status {
    /// Next status in click-cycle order
    pub fn cycled(self) -> Self {
        match self {
            Status::NotStarted => Status::Working,
            Status::Working => Status::Stuck,
            Status::Stuck => Status::Done,
            Status::Done => Status::NotStarted,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Status::NotStarted => "Not Started",
            Status::Working => "Working on it",
            Status::Stuck => "Stuck",
            Status::Done => "Done",
        }
    }

    /// CSS class token for the status cell
    pub fn css_token(self) -> &'static str {
        match self {
            Status::NotStarted => "status-not-started",
            Status::Working => "status-working",
            Status::Stuck => "status-stuck",
            Status::Done => "status-done",
        }
    }
}

impl Default for Status {
    fn default() -> Self {
        Status::NotStarted
    }
}

/// Task item. Identity (`id`) is stable; every other field may change
/// independent of position.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    pub assignee: Option<String>,
    #[serde(default)]
    pub status: Status,
    pub due_date: Option<NaiveDate>,
    #[serde(default)]
    pub selected: bool,
}

/// A named, colored, ordered bucket of items. Owns its items exclusively;
/// no item belongs to more than one group at a time.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub title: String,
    pub color: String,
    pub items: Vec<Item>,
}

/// The full board: ordered groups, insertion order is display order and
/// the order the mutation gateway persists.
pub type Board = Vec<Group>;
