//! # Phasor Spice
//!
//! A steady-state linear circuit solver.
//!
//! This library provides:
//! - A line-oriented netlist format with `.circuit`/`.end` blocks and an
//!   optional `.ac` directive
//! - Resistors, capacitors, inductors and independent voltage/current sources
//! - DC operating point and single-frequency AC (phasor) analysis
//! - Modified Nodal Analysis (MNA) with a dense complex LU solve
//!
//! ## Architecture
//!
//! The library is organized into several modules:
//!
//! - [`netlist`] - Netlist scanning (comments, directives, element lines)
//! - [`components`] - Element models and their complex values
//! - [`circuit`] - Node registry and the element set of a circuit
//! - [`solver`] - MNA assembly, LU solve and result extraction
//! - [`report`] - Text rendering of results
//!
//! ## Usage
//!
//! ### Native CLI
//!
//! ```bash
//! phasor circuit.netlist
//! ```
//!
//! ### Library
//!
//! ```
//! use phasor_spice::{solve_netlist, SolverConfig};
//!
//! let text = ".circuit\nR1 n1 GND 1\nI1 GND n1 1\n.end\n";
//! let solution = solve_netlist(text, SolverConfig::default()).unwrap();
//! assert!((solution.voltage("n1").unwrap().re - 1.0).abs() < 1e-12);
//! ```
//!
//! ## Analysis Method
//!
//! 1. Convert each element to a complex value at the analysis frequency ω
//!    (DC uses a vanishing ω, so capacitors open and inductors short)
//! 2. Number the nodes, ground first
//! 3. Assemble the system matrix A and source vector b
//! 4. Solve Ax = b for node voltages and voltage source currents

pub mod circuit;
pub mod components;
pub mod error;
pub mod netlist;
pub mod report;
pub mod solver;

// Re-export main types for convenience
pub use circuit::{AnalysisMode, Circuit};
pub use error::{Result, SpiceError};
pub use solver::{Analyzer, Solution, SolverConfig};

/// Parse netlist text and solve it.
pub fn solve_netlist(input: &str, config: SolverConfig) -> Result<Solution> {
    let circuit = netlist::parse(input)?.circuit()?;
    Analyzer::with_config(config).run(&circuit)
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_solve_netlist_dc() {
        let text = "\
.circuit
V1 n1 GND 5 # supply
R1 n1 n2 1k
R2 n2 GND 4k
.end
";
        let solution = solve_netlist(text, SolverConfig::default()).unwrap();
        assert_abs_diff_eq!(solution.voltage("n2").unwrap().re, 4.0, epsilon = 1e-9);
        assert_abs_diff_eq!(solution.current("V1").unwrap().re, -1e-3, epsilon = 1e-12);
        assert_eq!(solution.omega, None);
    }

    #[test]
    fn test_solve_netlist_ac() {
        let text = ".circuit\nV1 n1 GND ac 2 0\nR1 n1 GND 1k\n.end\n.ac V1 314\n";
        let solution = solve_netlist(text, SolverConfig::default()).unwrap();
        assert_abs_diff_eq!(solution.voltage("n1").unwrap().norm(), 1.0, epsilon = 1e-12);
        assert_eq!(solution.omega, Some(314.0));
    }

    #[test]
    fn test_solve_netlist_propagates_errors() {
        let text = ".circuit\nD1 a GND 1\n.end\n";
        assert!(matches!(
            solve_netlist(text, SolverConfig::default()),
            Err(SpiceError::InvalidElementType { .. })
        ));
    }
}
