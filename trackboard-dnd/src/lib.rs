//! Board reordering engine for drag-and-drop kanban boards
//!
//! This crate decides how a dragged card or column changes a two-level
//! ordered board (columns holding cards). It is pure data transformation:
//! no rendering, no persistence, no I/O. A UI host feeds it drag events and
//! renders whatever board it hands back.
//!
//! ## Overview
//!
//! - **Entry model** - [`EntryModel`] is the nested value the host supplies
//!   and receives back; [`Board`] is the arena form the engine works on
//! - **Locator** - [`Board::locate`] and friends map a raw id to its column
//! - **Move reducer** - [`preview_move`] / [`commit_move`] compute the next
//!   board; column reordering only happens on commit
//! - **Overlay selector** - [`select_overlay`] derives the floating preview
//! - **Session** - [`DragSession`] runs the start/over/end/cancel state
//!   machine and emits a [`MoveRecord`] to listeners for each committed move
//!
//! Drag gestures never fail. An id that does not resolve, a self-drop or a
//! missing drop target leaves the board unchanged.
//!
//! ## Basic Usage
//!
//! ```rust
//! use trackboard_dnd::{Board, Container, DragSession, Item, RoleDetection};
//!
//! # fn example() -> trackboard_dnd::Result<()> {
//! let board = Board::from_containers(vec![
//!     Container::new("container-1", "To Do")
//!         .with_item(Item::new("item-1a", "Write parser"))
//!         .with_item(Item::new("item-1b", "Write tests")),
//!     Container::new("container-2", "Done").with_item(Item::new("item-2a", "Plan")),
//! ])?;
//!
//! let mut session = DragSession::new(board).with_detection(RoleDetection::Substring);
//! session.start("item-1a");
//! session.over(Some("item-2a".into()));
//! let record = session.end(Some("item-2a".into()));
//!
//! assert!(record.is_some());
//! assert_eq!(session.board().container(&"container-2".into()).unwrap().len(), 2);
//! # Ok(())
//! # }
//! # example().unwrap();
//! ```

pub mod board;
mod error;
mod locate;
pub mod overlay;
pub mod reorder;
pub mod session;
pub mod subject;
pub mod types;

pub use board::{Board, ContainerRecord};
pub use error::{DndError, Result};
pub use overlay::{select_overlay, DragState, Overlay};
pub use reorder::{
    apply_move, array_move, commit_move, preview_move, reduce_ids, Move, MoveOutcome, MovePhase,
    Reduction, SkipReason,
};
pub use session::{DragSession, MoveListener, RecordingListener};
pub use subject::{DragRole, DragSubject, RoleDetection};

// Re-export commonly used types
pub use types::{
    Container, ContainerId, EntryModel, Identifier, Item, ItemId, Location, MoveChange,
    MoveRecord, MoveRecordId,
};
