//! Assertion types and builders for verifying step results.

use pairing_core::EntityId;
use pairing_graph::Graph;
use std::collections::HashMap;

use crate::error::{ScenarioError, ScenarioResult};

/// What a step left behind: the graph, the label table, and the lines the
/// step reported.
pub struct StepContext<'a> {
    pub graph: &'a Graph,
    pub labels: &'a HashMap<String, EntityId>,
    pub output: &'a [String],
}

impl StepContext<'_> {
    /// Look up a label declared in the scenario.
    pub fn resolve(&self, step: &str, label: &str) -> ScenarioResult<EntityId> {
        self.labels
            .get(label)
            .copied()
            .ok_or_else(|| ScenarioError::unknown_label(step, label))
    }

    fn name_of(&self, id: EntityId) -> String {
        self.graph
            .get_entity(id)
            .map(|e| e.name().to_string())
            .unwrap_or_else(|| id.to_string())
    }
}

/// A complete assertion for a step result.
#[derive(Default)]
pub struct Assertion {
    // Output assertions
    pub output: Option<Vec<String>>,
    pub output_pattern: Option<String>,

    // Graph assertions
    pub partners: Vec<(String, String)>,
    pub unpaired: Vec<String>,
    pub names: Vec<(String, String)>,
    pub consistent: bool,

    // Custom assertion function
    #[allow(clippy::type_complexity)]
    pub custom: Option<Box<dyn Fn(&StepContext<'_>) -> bool + Send + Sync>>,
}

impl std::fmt::Debug for Assertion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Assertion")
            .field("output", &self.output)
            .field("output_pattern", &self.output_pattern)
            .field("partners", &self.partners)
            .field("unpaired", &self.unpaired)
            .field("names", &self.names)
            .field("consistent", &self.consistent)
            .field("custom", &self.custom.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

impl Assertion {
    /// Create a new empty assertion.
    pub fn new() -> Self {
        Self::default()
    }

    /// Verify the assertion against what a step left behind.
    pub fn verify(&self, step: &str, ctx: &StepContext<'_>) -> ScenarioResult<()> {
        if let Some(ref expected) = self.output {
            if ctx.output != expected.as_slice() {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "output mismatch:\n  expected: {:?}\n  actual:   {:?}",
                        expected, ctx.output
                    ),
                ));
            }
        }

        if let Some(ref pattern) = self.output_pattern {
            let re = regex_lite::Regex::new(pattern).map_err(|e| {
                ScenarioError::assertion_failed(step, format!("invalid regex pattern: {}", e))
            })?;
            if ctx.output.is_empty() || !ctx.output.iter().all(|line| re.is_match(line)) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "expected every output line to match '{}', got: {:?}",
                        pattern, ctx.output
                    ),
                ));
            }
        }

        for (a, b) in &self.partners {
            let id_a = ctx.resolve(step, a)?;
            let id_b = ctx.resolve(step, b)?;
            let partner_a = ctx.graph.partner_of(id_a);
            let partner_b = ctx.graph.partner_of(id_b);
            if partner_a != Some(id_b) || partner_b != Some(id_a) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "expected '{}' and '{}' to be partners, got {} -> {:?}, {} -> {:?}",
                        a,
                        b,
                        a,
                        partner_a.map(|p| ctx.name_of(p)),
                        b,
                        partner_b.map(|p| ctx.name_of(p))
                    ),
                ));
            }
        }

        for label in &self.unpaired {
            let id = ctx.resolve(step, label)?;
            if let Some(partner) = ctx.graph.partner_of(id) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "expected '{}' to be unpaired, but its partner is '{}'",
                        label,
                        ctx.name_of(partner)
                    ),
                ));
            }
        }

        for (label, expected) in &self.names {
            let id = ctx.resolve(step, label)?;
            let actual = ctx.graph.get_entity(id).map(|e| e.name());
            if actual != Some(expected.as_str()) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    format!(
                        "name mismatch for '{}':\n  expected: {:?}\n  actual:   {:?}",
                        label, expected, actual
                    ),
                ));
            }
        }

        if self.consistent && !ctx.graph.partners_consistent() {
            return Err(ScenarioError::assertion_failed(
                step,
                "partner relation is not symmetric",
            ));
        }

        if let Some(ref custom) = self.custom {
            if !custom(ctx) {
                return Err(ScenarioError::assertion_failed(
                    step,
                    "custom assertion returned false",
                ));
            }
        }

        Ok(())
    }
}

/// Builder for creating assertions.
pub struct AssertionBuilder {
    assertion: Assertion,
}

impl AssertionBuilder {
    /// Create a new assertion builder.
    pub fn new() -> Self {
        Self {
            assertion: Assertion::new(),
        }
    }

    /// Build the assertion.
    pub fn build(self) -> Assertion {
        self.assertion
    }

    // ========== Output assertions ==========

    /// Expect this line next in the step's output.
    ///
    /// Chain it to expect several lines in order. Any unexpected line fails.
    pub fn output(mut self, line: impl Into<String>) -> Self {
        self.assertion
            .output
            .get_or_insert_with(Vec::new)
            .push(line.into());
        self
    }

    /// Expect the step to report nothing.
    pub fn silent(mut self) -> Self {
        self.assertion.output = Some(Vec::new());
        self
    }

    /// Expect at least one output line, and every line to match the regex.
    pub fn output_matches(mut self, pattern: impl Into<String>) -> Self {
        self.assertion.output_pattern = Some(pattern.into());
        self
    }

    // ========== Graph assertions ==========

    /// Expect the two labelled entities to be each other's partner.
    pub fn partners(mut self, a: impl Into<String>, b: impl Into<String>) -> Self {
        self.assertion.partners.push((a.into(), b.into()));
        self
    }

    /// Expect the labelled entity to have no partner.
    pub fn unpaired(mut self, label: impl Into<String>) -> Self {
        self.assertion.unpaired.push(label.into());
        self
    }

    /// Expect the labelled entity to carry this name.
    pub fn name(mut self, label: impl Into<String>, name: impl Into<String>) -> Self {
        self.assertion.names.push((label.into(), name.into()));
        self
    }

    /// Expect the partner relation to be symmetric across the graph.
    pub fn consistent(mut self) -> Self {
        self.assertion.consistent = true;
        self
    }

    // ========== Advanced ==========

    /// Custom assertion function.
    pub fn assert_fn<F>(mut self, f: F) -> Self
    where
        F: Fn(&StepContext<'_>) -> bool + Send + Sync + 'static,
    {
        self.assertion.custom = Some(Box::new(f));
        self
    }
}

impl Default for AssertionBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn context<'a>(
        graph: &'a Graph,
        labels: &'a HashMap<String, EntityId>,
        output: &'a [String],
    ) -> StepContext<'a> {
        StepContext {
            graph,
            labels,
            output,
        }
    }

    #[test]
    fn test_output_must_match_exactly() {
        let graph = Graph::new();
        let labels = HashMap::new();
        let output = vec!["boom".to_string()];
        let ctx = context(&graph, &labels, &output);

        assert!(AssertionBuilder::new()
            .output("boom")
            .build()
            .verify("s", &ctx)
            .is_ok());
        assert!(AssertionBuilder::new()
            .silent()
            .build()
            .verify("s", &ctx)
            .is_err());
        assert!(AssertionBuilder::new()
            .output("boom")
            .output("again")
            .build()
            .verify("s", &ctx)
            .is_err());
    }

    #[test]
    fn test_output_matches_needs_a_line() {
        let graph = Graph::new();
        let labels = HashMap::new();
        let ctx = context(&graph, &labels, &[]);

        let result = AssertionBuilder::new()
            .output_matches("^you must")
            .build()
            .verify("s", &ctx);
        assert!(matches!(
            result,
            Err(ScenarioError::AssertionFailed { .. })
        ));
    }

    #[test]
    fn test_unknown_label_is_reported() {
        let graph = Graph::new();
        let labels = HashMap::new();
        let ctx = context(&graph, &labels, &[]);

        let result = AssertionBuilder::new()
            .unpaired("ghost")
            .build()
            .verify("s", &ctx);
        assert!(matches!(result, Err(ScenarioError::UnknownLabel { .. })));
    }

    #[test]
    fn test_partner_assertions() {
        let mut graph = Graph::new();
        let a = graph.spawn_entity("A");
        let b = graph.spawn_entity("B");
        let labels: HashMap<String, EntityId> =
            [("a".to_string(), a), ("b".to_string(), b)].into_iter().collect();

        {
            let ctx = context(&graph, &labels, &[]);
            assert!(AssertionBuilder::new()
                .partners("a", "b")
                .build()
                .verify("s", &ctx)
                .is_err());
        }

        graph.link_partners(a, b).unwrap();
        let ctx = context(&graph, &labels, &[]);
        assert!(AssertionBuilder::new()
            .partners("a", "b")
            .partners("b", "a")
            .consistent()
            .name("a", "A")
            .build()
            .verify("s", &ctx)
            .is_ok());
        assert!(AssertionBuilder::new()
            .unpaired("a")
            .build()
            .verify("s", &ctx)
            .is_err());
    }

    #[test]
    fn test_custom_assertion() {
        let graph = Graph::new();
        let labels = HashMap::new();
        let ctx = context(&graph, &labels, &[]);

        assert!(AssertionBuilder::new()
            .assert_fn(|ctx| ctx.graph.entity_count() == 0)
            .build()
            .verify("s", &ctx)
            .is_ok());
        assert!(AssertionBuilder::new()
            .assert_fn(|ctx| ctx.graph.entity_count() == 1)
            .build()
            .verify("s", &ctx)
            .is_err());
    }
}
