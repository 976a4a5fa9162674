//! Mapping of the solution vector back to named quantities.

use num_complex::Complex64;

use crate::circuit::{BranchId, Circuit, VarIndex, GROUND_NAME};

/// Voltage phasor at a non-ground node.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeVoltage {
    pub node: String,
    pub voltage: Complex64,
}

/// Branch current through a voltage source, positive from its first
/// terminal through the source to its second.
#[derive(Debug, Clone, PartialEq)]
pub struct SourceCurrent {
    pub source: String,
    pub terminals: [String; 2],
    pub current: Complex64,
}

/// Named results of one analysis run.
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    /// Non-ground node voltages, in node registration order
    pub node_voltages: Vec<NodeVoltage>,
    /// Voltage source currents, in declaration order
    pub source_currents: Vec<SourceCurrent>,
    /// Angular frequency in rad/s when solved in AC mode
    pub omega: Option<f64>,
}

impl Solution {
    /// Extract named results from solution vector `x` of `circuit`'s system.
    pub fn extract(circuit: &Circuit, x: &[Complex64]) -> Self {
        let n = circuit.num_nodes();
        debug_assert_eq!(x.len(), circuit.matrix_size());

        let node_voltages = circuit
            .nodes
            .non_ground()
            .map(|(id, name)| NodeVoltage {
                node: name.to_string(),
                voltage: x[VarIndex::Voltage(id).to_index(n)],
            })
            .collect();

        let source_currents = circuit
            .elements
            .voltage_sources()
            .iter()
            .enumerate()
            .map(|(i, item)| SourceCurrent {
                source: item.element.name.clone(),
                terminals: item.element.terminals.clone(),
                current: x[circuit.branch_index(BranchId(i))],
            })
            .collect();

        Self {
            node_voltages,
            source_currents,
            omega: circuit.mode.display_omega(),
        }
    }

    /// Voltage at a node by name. Ground is always zero.
    pub fn voltage(&self, node: &str) -> Option<Complex64> {
        if node == GROUND_NAME {
            return Some(Complex64::new(0.0, 0.0));
        }
        self.node_voltages
            .iter()
            .find(|v| v.node == node)
            .map(|v| v.voltage)
    }

    /// Current through a voltage source by element name.
    pub fn current(&self, source: &str) -> Option<Complex64> {
        self.source_currents
            .iter()
            .find(|c| c.source == source)
            .map(|c| c.current)
    }

    /// Current through the voltage source connected between two terminals.
    pub fn current_between(&self, a: &str, b: &str) -> Option<Complex64> {
        self.source_currents
            .iter()
            .find(|c| c.terminals[0] == a && c.terminals[1] == b)
            .map(|c| c.current)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::circuit::AnalysisMode;

    #[test]
    fn test_extract_layout() {
        let circuit = Circuit::from_lines(
            ["V1 top GND 1", "R1 top mid 1", "R2 mid GND 1", "V2 mid GND 1"],
            AnalysisMode::ac(50.0).unwrap(),
        )
        .unwrap();
        let x: Vec<Complex64> = (0..4).map(|i| Complex64::new(i as f64, 0.0)).collect();
        let solution = Solution::extract(&circuit, &x);

        assert_eq!(solution.node_voltages.len(), 2);
        assert_eq!(solution.node_voltages[0].node, "top");
        assert_eq!(solution.voltage("top"), Some(Complex64::new(0.0, 0.0)));
        assert_eq!(solution.voltage("mid"), Some(Complex64::new(1.0, 0.0)));
        assert_eq!(solution.voltage("GND"), Some(Complex64::new(0.0, 0.0)));
        assert_eq!(solution.voltage("nope"), None);

        assert_eq!(solution.current("V1"), Some(Complex64::new(2.0, 0.0)));
        assert_eq!(solution.current("V2"), Some(Complex64::new(3.0, 0.0)));
        assert_eq!(
            solution.current_between("mid", "GND"),
            Some(Complex64::new(3.0, 0.0))
        );
        assert_eq!(solution.source_currents[0].terminals, ["top".to_string(), "GND".to_string()]);
        assert_eq!(solution.omega, Some(50.0));
    }

    #[test]
    fn test_dc_has_no_frequency() {
        let circuit = Circuit::from_lines(["R1 a GND 1"], AnalysisMode::Dc).unwrap();
        let solution = Solution::extract(&circuit, &[Complex64::new(0.0, 0.0)]);
        assert_eq!(solution.omega, None);
    }
}
