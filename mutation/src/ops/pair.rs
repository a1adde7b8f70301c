//! PAIR operation - links two entities as each other's partner.

use pairing_core::{EntityId, GraphError, PairingError, PairingResult, Value};
use pairing_graph::Graph;

use crate::error::MutationResult;
use crate::result::PairOutcome;

/// Execute a pairing between `entity` and whatever `other` holds.
///
/// The partner argument is validated before anything is written, so a
/// rejected pairing leaves the graph untouched.
pub fn execute_pair(
    graph: &mut Graph,
    entity: EntityId,
    other: &Value,
) -> MutationResult<PairOutcome> {
    if !graph.contains(entity) {
        return Err(GraphError::EntityNotFound(entity).into());
    }

    let partner = resolve_partner(graph, other)?;

    let outcome = if graph.link_partners(entity, partner)? {
        PairOutcome::Paired { entity, partner }
    } else {
        PairOutcome::Unchanged { entity, partner }
    };

    Ok(outcome)
}

/// Resolve a value to an entity in `graph`.
///
/// Only an `EntityRef` naming an entity that exists in this graph counts.
pub fn resolve_partner(graph: &Graph, value: &Value) -> PairingResult<EntityId> {
    match value.as_entity_ref() {
        Some(id) if graph.contains(id) => Ok(id),
        Some(_) => Err(PairingError::invalid_partner_type("EntityRef (dangling)")),
        None => Err(PairingError::invalid_partner_type(value.type_name())),
    }
}
