//! MNA (Modified Nodal Analysis) solver.
//!
//! This module provides the numerical engine for steady-state analysis.
//!
//! ## Modified Nodal Analysis
//!
//! MNA assembles a system of equations Ax = b where:
//! - x contains node voltages and voltage source branch currents
//! - A is the admittance/coefficient matrix
//! - b is the source vector
//!
//! The matrix structure is:
//! ```text
//! [ G   B ] [ v ]   [ i ]
//! [ C   D ] [ j ] = [ e ]
//! ```
//!
//! where:
//! - G is the admittance matrix (node equations)
//! - B, C = Bᵀ connect voltage sources to nodes
//! - D is 0 (independent sources only)
//! - v is the vector of node voltages
//! - j is the vector of voltage source currents
//! - i is the sum of current sources into each node
//! - e is the vector of voltage source values
//!
//! All quantities are complex: DC values have zero imaginary part and AC
//! values are phasors at the circuit's angular frequency.

mod analysis;
mod lu;
mod mna;
mod solution;

pub use analysis::{Analyzer, SolverConfig};
pub use lu::{solve, LuFactors};
pub use mna::{assemble, MnaSystem};
pub use solution::{NodeVoltage, Solution, SourceCurrent};

/// Default relative pivot tolerance.
///
/// Off by default: in DC mode inductor admittances are ~1e50 and would
/// swamp every other pivot.
pub const DEFAULT_RELATIVE_PIVOT_TOLERANCE: f64 = 0.0;

/// Default absolute pivot tolerance.
pub const DEFAULT_ABSOLUTE_PIVOT_TOLERANCE: f64 = 1e-30;
