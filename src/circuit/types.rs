//! Core types for circuit representation.

use std::fmt;

use crate::error::{Result, SpiceError};

/// Angular frequency used for DC analysis.
///
/// Capacitors become near-open and inductors near-short, which keeps every
/// passive element stampable as an admittance.
pub const DC_OMEGA: f64 = 1e-50;

/// A unique identifier for a node in the circuit.
/// Node 0 is always ground.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub usize);

impl NodeId {
    /// The ground node (always index 0).
    pub const GROUND: NodeId = NodeId(0);

    /// Check if this is the ground node.
    pub fn is_ground(&self) -> bool {
        self.0 == 0
    }

    /// Row/column of this node's voltage in the MNA matrix.
    /// Returns None for ground, which is eliminated from the system.
    pub fn matrix_index(&self) -> Option<usize> {
        if self.is_ground() {
            None
        } else {
            Some(self.0 - 1)
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_ground() {
            write!(f, "GND")
        } else {
            write!(f, "N{}", self.0)
        }
    }
}

/// Index of a voltage source's branch-current unknown, in declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BranchId(pub usize);

impl fmt::Display for BranchId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "I{}", self.0)
    }
}

/// Variable index in the MNA solution vector.
/// Can be either a node voltage or a branch current.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum VarIndex {
    /// Node voltage variable
    Voltage(NodeId),
    /// Voltage source branch current variable
    Current(BranchId),
}

impl VarIndex {
    /// Get the raw index into the solution vector.
    /// Node voltages come first (excluding ground), then branch currents.
    pub fn to_index(&self, num_nodes: usize) -> usize {
        match self {
            VarIndex::Voltage(NodeId(n)) => {
                debug_assert!(*n > 0, "Ground node should not be in solution vector");
                n - 1
            }
            VarIndex::Current(BranchId(b)) => num_nodes + b,
        }
    }
}

/// Steady-state regime the circuit is solved in.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum AnalysisMode {
    /// DC operating point.
    #[default]
    Dc,
    /// Sinusoidal steady state at a single angular frequency (rad/s).
    Ac { omega: f64 },
}

impl AnalysisMode {
    /// Create an AC mode, rejecting non-finite or non-positive frequencies.
    pub fn ac(omega: f64) -> Result<Self> {
        if omega.is_finite() && omega > 0.0 {
            Ok(AnalysisMode::Ac { omega })
        } else {
            Err(SpiceError::InvalidFrequency { value: omega })
        }
    }

    /// Angular frequency used for reactance.
    pub fn omega(&self) -> f64 {
        match self {
            AnalysisMode::Dc => DC_OMEGA,
            AnalysisMode::Ac { omega } => *omega,
        }
    }

    pub fn is_ac(&self) -> bool {
        matches!(self, AnalysisMode::Ac { .. })
    }

    /// The frequency to display alongside results, if any.
    pub fn display_omega(&self) -> Option<f64> {
        match self {
            AnalysisMode::Dc => None,
            AnalysisMode::Ac { omega } => Some(*omega),
        }
    }
}
