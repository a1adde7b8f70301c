//! Mutation result types.

use pairing_core::EntityId;

/// Outcome of a pairing operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PairOutcome {
    /// The two entities are now partners.
    Paired { entity: EntityId, partner: EntityId },
    /// The two entities were already partners.
    Unchanged { entity: EntityId, partner: EntityId },
}

impl PairOutcome {
    pub fn entity(&self) -> EntityId {
        match self {
            PairOutcome::Paired { entity, .. } | PairOutcome::Unchanged { entity, .. } => *entity,
        }
    }

    pub fn partner(&self) -> EntityId {
        match self {
            PairOutcome::Paired { partner, .. } | PairOutcome::Unchanged { partner, .. } => {
                *partner
            }
        }
    }

    /// Returns true if the graph was modified.
    pub fn is_changed(&self) -> bool {
        matches!(self, PairOutcome::Paired { .. })
    }
}
