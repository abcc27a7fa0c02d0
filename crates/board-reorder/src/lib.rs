//! Grouped-List Reorder Engine
//!
//! Pure, platform-free core for board drag-and-drop: the snapshot data
//! model, item locator, drag session tracking, optimistic hover previews
//! and drop finalization. Event plumbing and row geometry are injected
//! by the host; persistence goes out through [`GroupGateway`].

mod engine;
mod finalize;
mod gateway;
mod geom;
mod hover;
mod locate;
mod model;
mod session;

pub use engine::{DropOutcome, ReorderEngine};
pub use finalize::same_group_move;
pub use gateway::{GatewayError, GroupGateway, LoggingGateway};
pub use geom::Rect;
pub use hover::{resolve_hover, HoverTarget};
pub use locate::{find_group_containing, group_index, locate_item, ItemLocation};
pub use model::{Board, Group, Item, Status};
pub use session::DragSession;
