//! Where an item sits on the board.

use super::ids::ContainerId;
use serde::{Deserialize, Serialize};

/// Container + index of an item at a point in time
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Location {
    pub container: ContainerId,
    pub index: usize,
}

impl Location {
    /// Create a new location
    pub fn new(container: impl Into<ContainerId>, index: usize) -> Self {
        Self {
            container: container.into(),
            index,
        }
    }
}
