//! Pairing executor - the entry point for the pairing operation.
//!
//! Two flavors of the same operation:
//! - `try_pair` validates, links, and returns any error to the caller
//! - `pair` does the same but recovers locally: a rejected pairing is
//!   reported as one line and the caller carries on

use pairing_core::{EntityId, Value};
use pairing_graph::Graph;

use crate::error::MutationResult;
use crate::ops;
use crate::report::{Reporter, StdoutReporter};
use crate::result::PairOutcome;

/// Pairing executor.
pub struct PairingExecutor<'g, R: Reporter = StdoutReporter> {
    graph: &'g mut Graph,
    reporter: R,
}

impl<'g> PairingExecutor<'g, StdoutReporter> {
    /// Create an executor that reports to standard output.
    pub fn new(graph: &'g mut Graph) -> Self {
        Self::with_reporter(graph, StdoutReporter)
    }
}

impl<'g, R: Reporter> PairingExecutor<'g, R> {
    /// Create an executor with a custom reporter.
    pub fn with_reporter(graph: &'g mut Graph, reporter: R) -> Self {
        Self { graph, reporter }
    }

    /// Pair `entity` with `other`, propagating any failure.
    pub fn try_pair(
        &mut self,
        entity: EntityId,
        other: impl Into<Value>,
    ) -> MutationResult<PairOutcome> {
        let other = other.into();
        let outcome = ops::execute_pair(self.graph, entity, &other)?;

        tracing::debug!(
            entity = %outcome.entity(),
            partner = %outcome.partner(),
            changed = outcome.is_changed(),
            "paired"
        );
        Ok(outcome)
    }

    /// Pair `entity` with `other`, recovering from any failure.
    ///
    /// On failure the error message is handed to the reporter and nothing
    /// in the graph changes. Never returns an error.
    pub fn pair(&mut self, entity: EntityId, other: impl Into<Value>) {
        let other = other.into();
        let actual = other.type_name();
        if let Err(e) = self.try_pair(entity, other) {
            tracing::debug!(
                entity = %entity,
                actual,
                error = %e,
                "pairing rejected"
            );
            self.reporter.report(&e.to_string());
        }
    }

    /// Get the underlying graph.
    pub fn graph(&self) -> &Graph {
        self.graph
    }

    /// Get the reporter.
    pub fn reporter(&self) -> &R {
        &self.reporter
    }

    /// Get the reporter mutably.
    pub fn reporter_mut(&mut self) -> &mut R {
        &mut self.reporter
    }

    /// Consume the executor, returning its reporter.
    pub fn into_reporter(self) -> R {
        self.reporter
    }
}
