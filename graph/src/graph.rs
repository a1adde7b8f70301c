//! Core graph storage implementation.

use crate::index::NameIndex;
use pairing_core::{Entity, EntityId, GraphError, GraphResult};
use std::collections::BTreeMap;

/// ID allocator for entities.
#[derive(Debug)]
struct IdAllocator {
    next_entity_id: u64,
}

impl IdAllocator {
    fn new() -> Self {
        Self { next_entity_id: 1 }
    }

    fn alloc_entity_id(&mut self) -> EntityId {
        let id = EntityId::new(self.next_entity_id);
        self.next_entity_id += 1;
        id
    }
}

/// The in-memory entity storage.
///
/// Entities are only ever handed out by shared reference; the partner
/// relation can change solely through [`Graph::link_partners`], which
/// keeps it symmetric.
#[derive(Debug)]
pub struct Graph {
    /// Entity storage
    entities: BTreeMap<EntityId, Entity>,
    /// ID allocator
    id_alloc: IdAllocator,
    /// Name index
    name_index: NameIndex,
}

impl Default for Graph {
    fn default() -> Self {
        Self::new()
    }
}

impl Graph {
    /// Create a new empty graph.
    pub fn new() -> Self {
        Self {
            entities: BTreeMap::new(),
            id_alloc: IdAllocator::new(),
            name_index: NameIndex::new(),
        }
    }

    // ==================== Entity Operations ====================

    /// Create a new, unpaired entity with the given name.
    pub fn spawn_entity(&mut self, name: impl Into<String>) -> EntityId {
        let id = self.id_alloc.alloc_entity_id();
        let entity = Entity::new(id, name);

        self.name_index.insert(entity.name(), id);
        tracing::debug!(entity = %id, name = entity.name(), "spawned entity");

        self.entities.insert(id, entity);
        id
    }

    /// Get an entity by ID.
    pub fn get_entity(&self, id: EntityId) -> Option<&Entity> {
        self.entities.get(&id)
    }

    /// Check if an entity exists.
    pub fn contains(&self, id: EntityId) -> bool {
        self.entities.contains_key(&id)
    }

    /// Change an entity's name.
    pub fn rename_entity(&mut self, id: EntityId, name: impl Into<String>) -> GraphResult<()> {
        let entity = self
            .entities
            .get_mut(&id)
            .ok_or(GraphError::EntityNotFound(id))?;
        let name = name.into();

        self.name_index.remove(entity.name(), id);
        self.name_index.insert(&name, id);
        entity.set_name(name);

        Ok(())
    }

    /// Find entities by exact name.
    pub fn find_by_name<'a>(&'a self, name: &str) -> impl Iterator<Item = EntityId> + 'a {
        self.name_index.get(name)
    }

    // ==================== Partner Operations ====================

    /// Get the partner of an entity.
    ///
    /// Returns `None` if the entity is unpaired or does not exist.
    pub fn partner_of(&self, id: EntityId) -> Option<EntityId> {
        self.entities.get(&id).and_then(Entity::partner)
    }

    /// Make `a` and `b` each other's partner.
    ///
    /// Both entities are checked before anything is written, so either both
    /// partner fields change or neither does. Previous partners that still
    /// point back at `a` or `b` are detached. `a == b` is allowed.
    ///
    /// Returns `false` if the two were already partners (nothing changed).
    pub fn link_partners(&mut self, a: EntityId, b: EntityId) -> GraphResult<bool> {
        let old_a = self
            .entities
            .get(&a)
            .ok_or(GraphError::EntityNotFound(a))?
            .partner();
        let old_b = self
            .entities
            .get(&b)
            .ok_or(GraphError::EntityNotFound(b))?
            .partner();

        if old_a == Some(b) && old_b == Some(a) {
            return Ok(false);
        }

        for (stale, owner) in [(old_a, a), (old_b, b)] {
            if let Some(stale) = stale {
                if stale != a && stale != b {
                    self.detach(stale, owner);
                }
            }
        }

        self.set_partner(a, b);
        self.set_partner(b, a);
        tracing::debug!(a = %a, b = %b, "linked partners");

        Ok(true)
    }

    /// Check that the partner relation is symmetric across the whole graph.
    pub fn partners_consistent(&self) -> bool {
        self.entities.values().all(|entity| match entity.partner() {
            None => true,
            Some(partner) => self.partner_of(partner) == Some(entity.id),
        })
    }

    /// Clear `id`'s partner field if it still points at `from`.
    fn detach(&mut self, id: EntityId, from: EntityId) {
        if let Some(entity) = self.entities.get_mut(&id) {
            if entity.is_partner_of(from) {
                entity.set_partner(None);
                tracing::debug!(entity = %id, former = %from, "detached stale partner");
            }
        }
    }

    fn set_partner(&mut self, id: EntityId, partner: EntityId) {
        if let Some(entity) = self.entities.get_mut(&id) {
            entity.set_partner(Some(partner));
        }
    }

    // ==================== Statistics ====================

    /// Get the number of entities.
    pub fn entity_count(&self) -> usize {
        self.entities.len()
    }

    /// Iterate over all entity IDs in allocation order.
    pub fn entity_ids(&self) -> impl Iterator<Item = EntityId> + '_ {
        self.entities.keys().copied()
    }

    /// Iterate over all entities in allocation order.
    pub fn entities(&self) -> impl Iterator<Item = &Entity> {
        self.entities.values()
    }
}
