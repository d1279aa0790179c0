//! Board invariant checks

use super::Board;
use crate::error::{DndError, Result};
use crate::subject::{DragRole, RoleDetection};
use crate::types::{EntryModel, Identifier};
use std::collections::HashSet;

/// Reject boards whose ids are not unique and disjoint across roles.
pub(super) fn validate_entries(model: &EntryModel) -> Result<()> {
    let mut containers: HashSet<&Identifier> = HashSet::new();
    let mut items: HashSet<&Identifier> = HashSet::new();

    for container in &model.containers {
        let id = container.id.as_identifier();
        if !containers.insert(id) {
            return Err(DndError::DuplicateContainer { id: id.to_string() });
        }
    }

    for item in model.containers.iter().flat_map(|c| &c.items) {
        let id = item.id.as_identifier();
        if !items.insert(id) {
            return Err(DndError::DuplicateItem { id: id.to_string() });
        }
        if containers.contains(id) {
            return Err(DndError::AmbiguousId { id: id.to_string() });
        }
    }

    Ok(())
}

impl Board {
    /// Check that every id resolves to its own role under the substring
    /// protocol: item ids contain `"item"`, container ids contain
    /// `"container"` and not `"item"`.
    ///
    /// Boards that fail this still work with [`RoleDetection::Lookup`].
    pub fn check_role_tags(&self) -> Result<()> {
        for record in self.containers() {
            let id = record.id().as_identifier();
            if RoleDetection::role_from_text(id) != Some(DragRole::Container) {
                return Err(DndError::untagged(DragRole::Container.tag(), id.to_string()));
            }
            for item in record.item_ids() {
                let id = item.as_identifier();
                if RoleDetection::role_from_text(id) != Some(DragRole::Item) {
                    return Err(DndError::untagged(DragRole::Item.tag(), id.to_string()));
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Container, Item};

    #[test]
    fn test_duplicate_container() {
        let model = EntryModel::new(vec![
            Container::new("container-1", "A"),
            Container::new("container-1", "B"),
        ]);
        assert!(matches!(
            validate_entries(&model),
            Err(DndError::DuplicateContainer { .. })
        ));
    }

    #[test]
    fn test_item_id_shadowing_container() {
        let model = EntryModel::new(vec![
            Container::new("todo", "Todo").with_item(Item::new("todo", "Same id"))
        ]);
        assert!(matches!(
            validate_entries(&model),
            Err(DndError::AmbiguousId { .. })
        ));
    }

    #[test]
    fn test_number_and_text_ids_do_not_collide() {
        let model = EntryModel::new(vec![
            Container::new(1_i64, "One").with_item(Item::new("1", "Text one"))
        ]);
        assert!(validate_entries(&model).is_ok());
    }

    #[test]
    fn test_role_tags() {
        let tagged = Board::from_containers(vec![
            Container::new("container-1", "").with_item(Item::new("item-1", ""))
        ])
        .unwrap();
        assert!(tagged.check_role_tags().is_ok());

        let untagged = Board::from_containers(vec![
            Container::new("todo", "").with_item(Item::new("item-1", ""))
        ])
        .unwrap();
        assert!(matches!(
            untagged.check_role_tags(),
            Err(DndError::UntaggedId { role, .. }) if role == "container"
        ));

        let misread = Board::from_containers(vec![Container::new("container-item-bin", "")])
            .unwrap();
        assert!(misread.check_role_tags().is_err());
    }
}
