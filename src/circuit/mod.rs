//! Circuit representation and validation.
//!
//! This module provides the internal representation of a circuit after its
//! element lines are parsed. The [`Circuit`] struct holds the elements,
//! partitioned by kind, and the [`NodeRegistry`] that numbers their terminals.

mod graph;
mod registry;
mod types;
mod validate;

pub use graph::{Circuit, CircuitElement, ElementSet, NodePair};
pub use registry::{NodeRegistry, GROUND_NAME};
pub use types::*;
pub use validate::validate_circuit;
