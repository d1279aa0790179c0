//! Core types for the reordering engine

mod entry;
mod ids;
mod location;
mod log;

// Re-export all types
pub use entry::{Container, EntryModel, Item};
pub use ids::{ContainerId, Identifier, ItemId, MoveRecordId};
pub use location::Location;
pub use log::{MoveChange, MoveRecord};
