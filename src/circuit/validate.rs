//! Circuit validation.

use std::collections::HashSet;

use crate::error::{Result, SpiceError};

use super::Circuit;

/// Validate a circuit before assembly.
///
/// Checks:
/// - No duplicate element names
///
/// Elements with both terminals on ground and circuits that never reference
/// ground are legal but logged, since the latter always yields a singular
/// system once it has any node.
pub fn validate_circuit(circuit: &Circuit) -> Result<()> {
    let mut seen = HashSet::new();
    for item in circuit.elements.iter() {
        if !seen.insert(item.element.name.as_str()) {
            return Err(SpiceError::DuplicateElement {
                name: item.element.name.clone(),
            });
        }
        if item.nodes.iter().all(|n| n.is_ground()) {
            log::warn!(
                "{} '{}' at line {} has both terminals on ground",
                item.element.kind,
                item.element.name,
                item.element.line
            );
        }
    }

    let touches_ground = circuit
        .elements
        .iter()
        .any(|item| item.nodes.iter().any(|n| n.is_ground()));
    if circuit.num_nodes() > 0 && !touches_ground {
        log::warn!("no element is connected to GND");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::AnalysisMode;

    #[test]
    fn test_duplicate_names_rejected() {
        let circuit =
            Circuit::from_lines(["R1 a GND 1", "R1 a b 2"], AnalysisMode::Dc).unwrap();
        match validate_circuit(&circuit) {
            Err(SpiceError::DuplicateElement { name }) => assert_eq!(name, "R1"),
            other => panic!("expected DuplicateElement, got {:?}", other),
        }
    }

    #[test]
    fn test_degenerate_elements_allowed() {
        let circuit =
            Circuit::from_lines(["R1 GND GND 1", "V1 a GND 1"], AnalysisMode::Dc).unwrap();
        assert!(validate_circuit(&circuit).is_ok());
    }
}
