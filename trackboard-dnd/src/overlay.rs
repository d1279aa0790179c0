//! Overlay selector: the floating preview shown under the pointer while dragging.

use crate::board::Board;
use crate::subject::{DragRole, RoleDetection};
use crate::types::{Identifier, Item};
use serde::{Deserialize, Serialize};

/// Transient drag state; `active_id` is set on drag start and cleared on end
/// or cancel.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DragState {
    pub active_id: Option<Identifier>,
}

impl DragState {
    /// No drag in progress
    pub fn idle() -> Self {
        Self::default()
    }

    /// Dragging `active`
    pub fn dragging(active: impl Into<Identifier>) -> Self {
        Self {
            active_id: Some(active.into()),
        }
    }

    /// Whether a drag is in progress
    pub fn is_dragging(&self) -> bool {
        self.active_id.is_some()
    }
}

/// Preview content for the element being dragged
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "role", rename_all = "snake_case")]
pub enum Overlay {
    /// A single card
    Item { id: Identifier, title: String },
    /// A whole column with its current cards
    Container {
        id: Identifier,
        title: String,
        items: Vec<Item>,
    },
}

/// Derive the overlay from the current board and drag state.
///
/// Titles and items come from the total locator helpers, so a role-tagged id
/// that is missing from the board still yields a blank preview under the
/// substring protocol. Container previews read the live board, so cards moved
/// into or out of the dragged column show up immediately.
pub fn select_overlay(
    board: &Board,
    state: &DragState,
    detection: RoleDetection,
) -> Option<Overlay> {
    let active = state.active_id.as_ref()?;
    let overlay = match board.role_of(active, detection)? {
        DragRole::Item => Overlay::Item {
            id: active.clone(),
            title: board.item_title(active),
        },
        DragRole::Container => Overlay::Container {
            id: active.clone(),
            title: board.container_title(active),
            items: board.container_items(active),
        },
    };
    Some(overlay)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Container;

    fn board() -> Board {
        Board::from_containers(vec![Container::new("container-1", "Todo")
            .with_item(Item::new("item-1a", "Write tests"))
            .with_item(Item::new("item-1b", "Ship"))])
        .unwrap()
    }

    #[test]
    fn test_idle_renders_nothing() {
        assert_eq!(select_overlay(&board(), &DragState::idle(), RoleDetection::Lookup), None);
    }

    #[test]
    fn test_item_overlay() {
        let overlay = select_overlay(
            &board(),
            &DragState::dragging("item-1b"),
            RoleDetection::Substring,
        );
        assert_eq!(
            overlay,
            Some(Overlay::Item {
                id: "item-1b".into(),
                title: "Ship".into(),
            })
        );
    }

    #[test]
    fn test_container_overlay_includes_items() {
        let overlay = select_overlay(
            &board(),
            &DragState::dragging("container-1"),
            RoleDetection::Lookup,
        );
        match overlay {
            Some(Overlay::Container { title, items, .. }) => {
                assert_eq!(title, "Todo");
                assert_eq!(items.len(), 2);
            }
            other => panic!("expected container overlay, got {other:?}"),
        }
    }

    #[test]
    fn test_missing_id_by_strategy() {
        let state = DragState::dragging("item-ghost");
        assert_eq!(select_overlay(&board(), &state, RoleDetection::Lookup), None);
        assert_eq!(
            select_overlay(&board(), &state, RoleDetection::Substring),
            Some(Overlay::Item {
                id: "item-ghost".into(),
                title: String::new(),
            })
        );
    }
}
