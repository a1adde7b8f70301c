//! Entity structure.
//!
//! An entity has a name and at most one partner. The partner field is
//! plain data here; keeping the relation symmetric is the graph's job.

use crate::EntityId;

/// A pairable entity.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entity {
    /// Unique identifier for this entity.
    pub id: EntityId,
    name: String,
    partner: Option<EntityId>,
}

impl Entity {
    /// Create a new unpaired entity.
    pub fn new(id: EntityId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            partner: None,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    /// The current partner, if any.
    pub fn partner(&self) -> Option<EntityId> {
        self.partner
    }

    /// Overwrite the partner field.
    ///
    /// Does not touch the other side of the relation.
    pub fn set_partner(&mut self, partner: Option<EntityId>) {
        self.partner = partner;
    }

    pub fn is_paired(&self) -> bool {
        self.partner.is_some()
    }

    /// Check if this entity is partnered with `other`.
    pub fn is_partner_of(&self, other: EntityId) -> bool {
        self.partner == Some(other)
    }
}
