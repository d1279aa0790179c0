//! Arena representation of a board.
//!
//! Items live in a shared arena keyed by id and never change during a drag.
//! Containers only hold ordered lists of item ids, and a back-reference map
//! records which container owns each item. A move therefore touches id lists
//! and one map entry; it never copies item payloads.

mod validate;

use crate::error::Result;
use crate::types::{Container, ContainerId, EntryModel, Item, ItemId, Location};
use std::collections::HashMap;
use std::sync::Arc;

/// One column in arena form: its metadata plus the ordered ids of its cards
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContainerRecord {
    id: ContainerId,
    title: String,
    items: Vec<ItemId>,
}

impl ContainerRecord {
    /// Container id
    pub fn id(&self) -> &ContainerId {
        &self.id
    }

    /// Display title
    pub fn title(&self) -> &str {
        &self.title
    }

    /// Item ids in display order
    pub fn item_ids(&self) -> &[ItemId] {
        &self.items
    }

    /// Number of items in the container
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the container holds no items
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Index of an item within this container
    pub fn position_of(&self, item: &ItemId) -> Option<usize> {
        self.items.iter().position(|id| id == item)
    }
}

/// An immutable board snapshot.
///
/// Every move produces a new `Board`; clones share the item arena.
#[derive(Debug, Clone)]
pub struct Board {
    arena: Arc<HashMap<ItemId, Item>>,
    containers: Vec<ContainerRecord>,
    owners: HashMap<ItemId, ContainerId>,
}

impl Board {
    /// Build a board from the nested entry model, checking id invariants.
    pub fn from_entries(model: EntryModel) -> Result<Self> {
        validate::validate_entries(&model)?;

        let mut arena = HashMap::with_capacity(model.item_count());
        let mut owners = HashMap::with_capacity(model.item_count());
        let mut containers = Vec::with_capacity(model.containers.len());

        for container in model.containers {
            let mut ids = Vec::with_capacity(container.items.len());
            for item in container.items {
                ids.push(item.id.clone());
                owners.insert(item.id.clone(), container.id.clone());
                arena.insert(item.id.clone(), item);
            }
            containers.push(ContainerRecord {
                id: container.id,
                title: container.title,
                items: ids,
            });
        }

        tracing::trace!(
            containers = containers.len(),
            items = arena.len(),
            "built board"
        );

        Ok(Self {
            arena: Arc::new(arena),
            containers,
            owners,
        })
    }

    /// Build a board from a list of containers
    pub fn from_containers(containers: Vec<Container>) -> Result<Self> {
        Self::from_entries(EntryModel::new(containers))
    }

    /// Nested snapshot for the host to render or persist
    pub fn to_entries(&self) -> EntryModel {
        let containers = self
            .containers
            .iter()
            .map(|record| Container {
                id: record.id.clone(),
                title: record.title.clone(),
                items: self.items_in(record).cloned().collect(),
            })
            .collect();
        EntryModel::new(containers)
    }

    /// Containers in display order
    pub fn containers(&self) -> &[ContainerRecord] {
        &self.containers
    }

    /// Number of containers
    pub fn len(&self) -> usize {
        self.containers.len()
    }

    /// Whether the board has no containers
    pub fn is_empty(&self) -> bool {
        self.containers.is_empty()
    }

    /// Number of items across all containers
    pub fn item_count(&self) -> usize {
        self.arena.len()
    }

    /// Container record by id
    pub fn container(&self, id: &ContainerId) -> Option<&ContainerRecord> {
        self.containers.iter().find(|c| &c.id == id)
    }

    /// Display index of a container
    pub fn container_index(&self, id: &ContainerId) -> Option<usize> {
        self.containers.iter().position(|c| &c.id == id)
    }

    /// Item payload from the arena
    pub fn item(&self, id: &ItemId) -> Option<&Item> {
        self.arena.get(id)
    }

    /// Container currently owning an item
    pub fn owner_of(&self, id: &ItemId) -> Option<&ContainerId> {
        self.owners.get(id)
    }

    /// Current container and index of an item
    pub fn location_of(&self, id: &ItemId) -> Option<Location> {
        let owner = self.owners.get(id)?;
        let index = self.container(owner)?.position_of(id)?;
        Some(Location {
            container: owner.clone(),
            index,
        })
    }

    /// Items of a container record, in display order
    pub fn items_in<'a>(&'a self, record: &'a ContainerRecord) -> impl Iterator<Item = &'a Item> {
        record.items.iter().filter_map(|id| self.arena.get(id))
    }

    pub(crate) fn reorder_containers(&mut self, from: usize, to: usize) {
        crate::reorder::array_move(&mut self.containers, from, to);
    }

    pub(crate) fn reorder_within(&mut self, container: usize, from: usize, to: usize) {
        crate::reorder::array_move(&mut self.containers[container].items, from, to);
    }

    /// Remove the item at `from_index` of container `from` and insert it into
    /// container `to` at `to_index`, or append it when `to_index` is `None`.
    /// Returns the index the item landed at.
    pub(crate) fn transfer_item(
        &mut self,
        from: usize,
        from_index: usize,
        to: usize,
        to_index: Option<usize>,
    ) -> usize {
        let item = self.containers[from].items.remove(from_index);
        let target = &mut self.containers[to];
        let landed = match to_index {
            Some(index) => {
                let index = index.min(target.items.len());
                target.items.insert(index, item.clone());
                index
            }
            None => {
                target.items.push(item.clone());
                target.items.len() - 1
            }
        };
        self.owners.insert(item, target.id.clone());
        landed
    }
}

impl PartialEq for Board {
    fn eq(&self, other: &Self) -> bool {
        self.containers == other.containers
            && (Arc::ptr_eq(&self.arena, &other.arena) || self.arena == other.arena)
    }
}

impl Eq for Board {}

impl TryFrom<EntryModel> for Board {
    type Error = crate::error::DndError;

    fn try_from(model: EntryModel) -> Result<Self> {
        Self::from_entries(model)
    }
}
