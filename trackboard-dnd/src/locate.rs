//! Locator: map a raw dragged id to the container that owns it.
//!
//! Every function here is total. A miss is `None` (or an empty fallback for
//! the display helpers) and callers treat it as "abort, no-op".

use crate::board::{Board, ContainerRecord};
use crate::subject::{DragRole, DragSubject, RoleDetection};
use crate::types::{ContainerId, Identifier, Item, ItemId};

impl Board {
    /// Find the container for `id` under the given role.
    ///
    /// For [`DragRole::Container`] this is the container with that id; for
    /// [`DragRole::Item`] it is the container whose items include that id.
    pub fn locate(&self, id: &Identifier, role: DragRole) -> Option<&ContainerRecord> {
        match role {
            DragRole::Container => self.container(&ContainerId::from(id)),
            DragRole::Item => {
                let owner = self.owner_of(&ItemId::from(id))?;
                self.container(owner)
            }
        }
    }

    /// Title of the item `id`, or `""`
    pub fn item_title(&self, id: &Identifier) -> String {
        self.item(&ItemId::from(id))
            .map(|item| item.title.clone())
            .unwrap_or_default()
    }

    /// Title of the container `id`, or `""`
    pub fn container_title(&self, id: &Identifier) -> String {
        self.locate(id, DragRole::Container)
            .map(|record| record.title().to_string())
            .unwrap_or_default()
    }

    /// Items of the container `id` in display order, or `[]`
    pub fn container_items(&self, id: &Identifier) -> Vec<Item> {
        self.locate(id, DragRole::Container)
            .map(|record| self.items_in(record).cloned().collect())
            .unwrap_or_default()
    }

    /// Role of a raw id under the given detection strategy.
    ///
    /// `Substring` answers from the text alone, so it may name a role for an
    /// id that is not on the board.
    pub fn role_of(&self, id: &Identifier, detection: RoleDetection) -> Option<DragRole> {
        match detection {
            RoleDetection::Substring => RoleDetection::role_from_text(id),
            RoleDetection::Lookup => {
                if self.item(&ItemId::from(id)).is_some() {
                    Some(DragRole::Item)
                } else if self.container(&ContainerId::from(id)).is_some() {
                    Some(DragRole::Container)
                } else {
                    None
                }
            }
        }
    }

    /// Build a typed drag payload for a raw id, if it is on the board.
    pub fn resolve(&self, id: &Identifier, detection: RoleDetection) -> Option<DragSubject> {
        let role = self.role_of(id, detection)?;
        let record = self.locate(id, role)?;
        Some(match role {
            DragRole::Item => DragSubject::Item {
                id: ItemId::from(id),
                container: record.id().clone(),
            },
            DragRole::Container => DragSubject::Container {
                id: record.id().clone(),
            },
        })
    }
}
