//! Drag roles and typed drag payloads.

use crate::types::{ContainerId, Identifier, ItemId};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Whether a dragged or hovered id refers to a card or a column
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DragRole {
    Item,
    Container,
}

impl DragRole {
    /// Text a role-tagged id must contain under [`RoleDetection::Substring`]
    pub fn tag(self) -> &'static str {
        match self {
            Self::Item => "item",
            Self::Container => "container",
        }
    }
}

impl fmt::Display for DragRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Typed payload attached to a draggable or droppable element.
///
/// `Item::container` is the owner at the time the payload was built. The
/// reducer never trusts it for index arithmetic and re-resolves ownership
/// from the current board on every call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum DragSubject {
    Item { id: ItemId, container: ContainerId },
    Container { id: ContainerId },
}

impl DragSubject {
    /// Dragged or hovered item in `container`
    pub fn item(id: impl Into<ItemId>, container: impl Into<ContainerId>) -> Self {
        Self::Item {
            id: id.into(),
            container: container.into(),
        }
    }

    /// Dragged or hovered container
    pub fn container(id: impl Into<ContainerId>) -> Self {
        Self::Container { id: id.into() }
    }

    /// Role of the subject
    pub fn role(&self) -> DragRole {
        match self {
            Self::Item { .. } => DragRole::Item,
            Self::Container { .. } => DragRole::Container,
        }
    }

    /// The raw id, regardless of role
    pub fn identifier(&self) -> &Identifier {
        match self {
            Self::Item { id, .. } => id.as_identifier(),
            Self::Container { id } => id.as_identifier(),
        }
    }
}

/// How a raw id is mapped to a [`DragRole`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RoleDetection {
    /// Look the id up on the board: items first, then containers
    #[default]
    Lookup,
    /// Infer the role from the id text: `"item"` wins over `"container"`
    Substring,
}

impl RoleDetection {
    /// Role implied by the id text alone.
    ///
    /// Only meaningful for [`RoleDetection::Substring`]; the lookup strategy
    /// needs a board, see [`crate::Board::role_of`].
    pub fn role_from_text(id: &Identifier) -> Option<DragRole> {
        if id.contains(DragRole::Item.tag()) {
            Some(DragRole::Item)
        } else if id.contains(DragRole::Container.tag()) {
            Some(DragRole::Container)
        } else {
            None
        }
    }
}
