//! Entry model: the nested board value exchanged with the host.

use super::ids::{ContainerId, ItemId};
use crate::error::{DndError, Result};
use serde::{Deserialize, Serialize};

/// A card on the board
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Item {
    pub id: ItemId,
    #[serde(default)]
    pub title: String,
}

impl Item {
    /// Create a new item
    pub fn new(id: impl Into<ItemId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}

/// A column holding an ordered list of cards
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Container {
    pub id: ContainerId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub items: Vec<Item>,
}

impl Container {
    /// Create a new, empty container
    pub fn new(id: impl Into<ContainerId>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            items: Vec::new(),
        }
    }

    /// Append an item, builder style
    pub fn with_item(mut self, item: Item) -> Self {
        self.items.push(item);
        self
    }

    /// Replace the item list, builder style
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }
}

/// The whole board as an ordered list of containers.
///
/// Serializes as a bare list so board documents read naturally:
///
/// ```yaml
/// - id: container-todo
///   title: To Do
///   items:
///     - id: item-1
///       title: Write the parser
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EntryModel {
    pub containers: Vec<Container>,
}

impl EntryModel {
    /// Create a board from containers in display order
    pub fn new(containers: Vec<Container>) -> Self {
        Self { containers }
    }

    /// Decode a board from YAML text
    pub fn from_yaml_str(text: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(text)?)
    }

    /// Decode a board from JSON text
    pub fn from_json_str(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Decode a board, picking the format from a file extension
    /// (`yaml`, `yml` or `json`).
    pub fn from_str_with_extension(text: &str, extension: &str) -> Result<Self> {
        match extension.to_ascii_lowercase().as_str() {
            "yaml" | "yml" => Self::from_yaml_str(text),
            "json" => Self::from_json_str(text),
            other => Err(DndError::parse(format!(
                "unsupported board format '{other}', expected yaml or json"
            ))),
        }
    }

    /// Total number of items across all containers
    pub fn item_count(&self) -> usize {
        self.containers.iter().map(|c| c.items.len()).sum()
    }
}

impl From<Vec<Container>> for EntryModel {
    fn from(containers: Vec<Container>) -> Self {
        Self::new(containers)
    }
}
