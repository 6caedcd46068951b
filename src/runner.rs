//! Scenario runner for batch projections
//!
//! Holds one engine and runs many scenarios against it: single runs, parallel
//! batches and ticket-price sweeps.

use crate::assumptions::Assumptions;
use crate::error::ProjectionError;
use crate::projection::{ProjectionEngine, ProjectionResult};
use crate::scenario::{NamedScenario, ScenarioParameters};
use log::info;
use rayon::prelude::*;

/// Outcome of one scenario in a batch
#[derive(Debug, Clone)]
pub struct BatchOutcome {
    pub name: String,
    pub params: ScenarioParameters,
    pub result: Result<ProjectionResult, ProjectionError>,
}

/// One point of a ticket-price sweep
#[derive(Debug, Clone, PartialEq)]
pub struct SweepPoint {
    pub ticket_price_millions: f64,
    pub result: ProjectionResult,
}

/// Scenario runner for batch projections
///
/// # Example
/// ```ignore
/// let runner = ScenarioRunner::new();
/// let scenarios = load_scenarios("data/scenarios.csv")?;
/// for outcome in runner.run_batch(&scenarios) {
///     println!("{}: {:?}", outcome.name, outcome.result.map(|r| r.summary()));
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ScenarioRunner {
    engine: ProjectionEngine,
}

impl ScenarioRunner {
    /// Create runner with the standard station pricing
    pub fn new() -> Self {
        Self {
            engine: ProjectionEngine::default(),
        }
    }

    /// Create runner with pre-built assumptions
    pub fn with_assumptions(assumptions: Assumptions) -> Self {
        Self {
            engine: ProjectionEngine::new(assumptions),
        }
    }

    /// Run a single projection
    pub fn run(&self, params: &ScenarioParameters) -> Result<ProjectionResult, ProjectionError> {
        self.engine.compute(params)
    }

    /// Run many named scenarios in parallel; output order matches input order
    pub fn run_batch(&self, scenarios: &[NamedScenario]) -> Vec<BatchOutcome> {
        info!("Running {} scenarios", scenarios.len());
        scenarios
            .par_iter()
            .map(|s| BatchOutcome {
                name: s.name.clone(),
                params: s.params,
                result: self.engine.compute(&s.params),
            })
            .collect()
    }

    /// Recompute `base` at each ticket price
    ///
    /// Spectators are switched on for the sweep, since ticket price has no
    /// effect otherwise.
    pub fn ticket_price_sweep(
        &self,
        base: &ScenarioParameters,
        prices_millions: &[f64],
    ) -> Result<Vec<SweepPoint>, ProjectionError> {
        prices_millions
            .iter()
            .map(|&price| {
                let params = ScenarioParameters {
                    include_spectators: true,
                    ticket_price_millions: price,
                    ..*base
                };
                Ok(SweepPoint {
                    ticket_price_millions: price,
                    result: self.engine.compute(&params)?,
                })
            })
            .collect()
    }

    pub fn engine(&self) -> &ProjectionEngine {
        &self.engine
    }
}

impl Default for ScenarioRunner {
    fn default() -> Self {
        Self::new()
    }
}
