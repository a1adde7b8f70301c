//! The pairing walkthrough.
//!
//! Each act builds its own graph, runs one pairing through the recovering
//! `pair`, and writes what a reader of the walkthrough would see: the
//! reported error line (if any) followed by the entity's name.

use std::io::{self, Write};

use pairing_core::EntityId;
use pairing_graph::Graph;
use pairing_mutation::{BufferReporter, PairingExecutor};

use crate::format::format_entity;

/// Run every act in order.
pub fn run_narrative<W: Write>(out: &mut W) -> io::Result<()> {
    run_failed_pairing(out)?;
    run_successful_pairing(out)?;
    Ok(())
}

/// Pair an entity with a plain string.
///
/// Prints the fixed error line, then the entity's name: the failure does
/// not stop the statements after it.
pub fn run_failed_pairing<W: Write>(out: &mut W) -> io::Result<()> {
    let mut graph = Graph::new();
    let beyonce = graph.spawn_entity("Beyonce");

    let mut executor = PairingExecutor::with_reporter(&mut graph, BufferReporter::new());
    executor.pair(beyonce, "Jay-Z");
    drain(executor.reporter_mut(), out)?;

    writeln!(out, "{}", name_of(&graph, beyonce))
}

/// Pair two entities.
///
/// Nothing is reported; the resulting link is printed from both sides.
pub fn run_successful_pairing<W: Write>(out: &mut W) -> io::Result<()> {
    let mut graph = Graph::new();
    let beyonce = graph.spawn_entity("Beyonce");
    let jayz = graph.spawn_entity("Jay-Z");

    let mut executor = PairingExecutor::with_reporter(&mut graph, BufferReporter::new());
    executor.pair(beyonce, jayz);
    drain(executor.reporter_mut(), out)?;

    writeln!(out, "{}", format_entity(&graph, beyonce))?;
    writeln!(out, "{}", format_entity(&graph, jayz))
}

fn drain<W: Write>(reporter: &mut BufferReporter, out: &mut W) -> io::Result<()> {
    for line in reporter.take() {
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn name_of(graph: &Graph, id: EntityId) -> &str {
    graph.get_entity(id).map_or("", |e| e.name())
}
