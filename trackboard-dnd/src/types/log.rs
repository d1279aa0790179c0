//! Move records emitted to the host when a drag gesture commits a change

use super::ids::{ContainerId, ItemId, MoveRecordId};
use super::location::Location;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// What a committed gesture changed
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum MoveChange {
    /// A card changed container and/or position
    ItemMoved {
        item: ItemId,
        from: Location,
        to: Location,
    },
    /// A column changed position
    ContainerMoved {
        container: ContainerId,
        from: usize,
        to: usize,
    },
}

/// A record of one committed move, handed to every listener
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoveRecord {
    /// Unique ID for this record
    pub id: MoveRecordId,

    /// When the gesture was committed
    pub timestamp: DateTime<Utc>,

    #[serde(flatten)]
    pub change: MoveChange,
}

impl MoveRecord {
    /// Create a record stamped now
    pub fn new(change: MoveChange) -> Self {
        Self {
            id: MoveRecordId::new(),
            timestamp: Utc::now(),
            change,
        }
    }

    /// Record for a card move
    pub fn item_moved(item: ItemId, from: Location, to: Location) -> Self {
        Self::new(MoveChange::ItemMoved { item, from, to })
    }

    /// Record for a column move
    pub fn container_moved(container: ContainerId, from: usize, to: usize) -> Self {
        Self::new(MoveChange::ContainerMoved {
            container,
            from,
            to,
        })
    }

    /// Whether the item changed container (not just position)
    pub fn is_cross_container(&self) -> bool {
        match &self.change {
            MoveChange::ItemMoved { from, to, .. } => from.container != to.container,
            MoveChange::ContainerMoved { .. } => false,
        }
    }
}
