//! Output formatting utilities.

use pairing_core::EntityId;
use pairing_graph::Graph;

/// Format an entity and its partner for display.
pub fn format_entity(graph: &Graph, id: EntityId) -> String {
    let Some(entity) = graph.get_entity(id) else {
        return format!("entity#{} (missing)", id.raw());
    };

    match entity.partner().and_then(|p| graph.get_entity(p)) {
        Some(partner) => format!("{} (partner: {})", entity.name(), partner.name()),
        None => format!("{} (unpaired)", entity.name()),
    }
}
