//! UI Components
//!
//! Reusable Leptos components.

mod board_tab_bar;
mod board_view;
mod group_section;
mod item_row;
mod new_item_form;
mod status_cell;

pub use board_tab_bar::BoardTabBar;
pub use board_view::BoardView;
pub use group_section::GroupSection;
pub use item_row::ItemRow;
pub use new_item_form::NewItemForm;
pub use status_cell::StatusCell;
