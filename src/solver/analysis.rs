//! Main analysis interface.

use crate::circuit::{validate_circuit, Circuit};
use crate::error::Result;

use super::lu::LuFactors;
use super::mna::assemble;
use super::solution::Solution;
use super::{DEFAULT_ABSOLUTE_PIVOT_TOLERANCE, DEFAULT_RELATIVE_PIVOT_TOLERANCE};

/// Configuration for the linear solver.
#[derive(Debug, Clone)]
pub struct SolverConfig {
    /// Smallest accepted pivot relative to the largest matrix entry.
    pub relative_pivot_tolerance: f64,
    /// Smallest accepted pivot magnitude regardless of scale.
    pub absolute_pivot_tolerance: f64,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            relative_pivot_tolerance: DEFAULT_RELATIVE_PIVOT_TOLERANCE,
            absolute_pivot_tolerance: DEFAULT_ABSOLUTE_PIVOT_TOLERANCE,
        }
    }
}

impl SolverConfig {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the relative pivot tolerance.
    ///
    /// Larger values reject ill-conditioned systems sooner.
    pub fn with_relative_pivot_tolerance(mut self, tolerance: f64) -> Self {
        self.relative_pivot_tolerance = tolerance;
        self
    }

    /// Set the absolute pivot tolerance.
    pub fn with_absolute_pivot_tolerance(mut self, tolerance: f64) -> Self {
        self.absolute_pivot_tolerance = tolerance;
        self
    }
}

/// Runs the assemble, solve and extract pipeline on circuits.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    config: SolverConfig,
}

impl Analyzer {
    /// Create an analyzer with default configuration.
    pub fn new() -> Self {
        Self::with_config(SolverConfig::default())
    }

    /// Create an analyzer with custom configuration.
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solve a circuit for its node voltages and voltage source currents.
    pub fn run(&self, circuit: &Circuit) -> Result<Solution> {
        validate_circuit(circuit)?;

        let system = assemble(circuit);
        let factors = LuFactors::factor(&system.a, system.size, &self.config)?;
        let x = factors.solve(&system.b);
        log::debug!("solved {}x{} system", system.size, system.size);

        Ok(Solution::extract(circuit, &x))
    }
}
