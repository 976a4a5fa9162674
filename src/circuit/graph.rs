//! Circuit graph structure.

use super::registry::NodeRegistry;
use super::types::{AnalysisMode, BranchId, NodeId};
use crate::components::{Element, ElementKind};
use crate::error::Result;

/// An element together with the node IDs of its terminals.
#[derive(Debug, Clone, PartialEq)]
pub struct CircuitElement {
    pub element: Element,
    /// `[a, b]`, matching `element.terminals`
    pub nodes: [NodeId; 2],
}

/// Elements partitioned by kind, each partition in declaration order.
#[derive(Debug, Clone, Default)]
pub struct ElementSet {
    resistors: Vec<CircuitElement>,
    capacitors: Vec<CircuitElement>,
    inductors: Vec<CircuitElement>,
    voltage_sources: Vec<CircuitElement>,
    current_sources: Vec<CircuitElement>,
}

impl ElementSet {
    fn partition_mut(&mut self, kind: ElementKind) -> &mut Vec<CircuitElement> {
        match kind {
            ElementKind::Resistor => &mut self.resistors,
            ElementKind::Capacitor => &mut self.capacitors,
            ElementKind::Inductor => &mut self.inductors,
            ElementKind::VoltageSource => &mut self.voltage_sources,
            ElementKind::CurrentSource => &mut self.current_sources,
        }
    }

    fn push(&mut self, element: CircuitElement) {
        self.partition_mut(element.element.kind).push(element);
    }

    /// All elements of one kind, in declaration order.
    pub fn of_kind(&self, kind: ElementKind) -> &[CircuitElement] {
        match kind {
            ElementKind::Resistor => &self.resistors,
            ElementKind::Capacitor => &self.capacitors,
            ElementKind::Inductor => &self.inductors,
            ElementKind::VoltageSource => &self.voltage_sources,
            ElementKind::CurrentSource => &self.current_sources,
        }
    }

    /// Resistors, capacitors and inductors.
    pub fn passives(&self) -> impl Iterator<Item = &CircuitElement> {
        self.resistors
            .iter()
            .chain(&self.capacitors)
            .chain(&self.inductors)
    }

    pub fn voltage_sources(&self) -> &[CircuitElement] {
        &self.voltage_sources
    }

    pub fn current_sources(&self) -> &[CircuitElement] {
        &self.current_sources
    }

    /// Every element, grouped by kind.
    pub fn iter(&self) -> impl Iterator<Item = &CircuitElement> {
        ElementKind::ALL
            .into_iter()
            .flat_map(move |kind| self.of_kind(kind).iter())
    }

    pub fn len(&self) -> usize {
        ElementKind::ALL.iter().map(|&k| self.of_kind(k).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A complete circuit ready for analysis.
#[derive(Debug, Clone)]
pub struct Circuit {
    /// All elements, partitioned by kind
    pub elements: ElementSet,
    /// Terminal name to node ID mapping
    pub nodes: NodeRegistry,
    /// Regime the element values were converted for
    pub mode: AnalysisMode,
}

impl Circuit {
    /// Create an empty circuit for the given analysis mode.
    pub fn new(mode: AnalysisMode) -> Self {
        Self {
            elements: ElementSet::default(),
            nodes: NodeRegistry::new(),
            mode,
        }
    }

    /// Build a circuit from element lines, numbering them from 1.
    pub fn from_lines<'a, I>(lines: I, mode: AnalysisMode) -> Result<Self>
    where
        I: IntoIterator<Item = &'a str>,
    {
        Self::from_numbered_lines(
            lines.into_iter().enumerate().map(|(i, text)| (i + 1, text)),
            mode,
        )
    }

    /// Build a circuit from `(line number, text)` pairs.
    pub fn from_numbered_lines<'a, I>(lines: I, mode: AnalysisMode) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, &'a str)>,
    {
        let mut circuit = Self::new(mode);
        for (line, text) in lines {
            circuit.add(Element::parse(text, line, mode)?);
        }
        log::debug!(
            "built circuit: {} elements, {} nodes, {} voltage sources",
            circuit.elements.len(),
            circuit.nodes.len(),
            circuit.num_branches()
        );
        Ok(circuit)
    }

    /// Register an element's terminals and store it.
    pub fn add(&mut self, element: Element) -> NodePair {
        let a = self.nodes.register(&element.terminals[0]);
        let b = self.nodes.register(&element.terminals[1]);
        self.elements.push(CircuitElement {
            element,
            nodes: [a, b],
        });
        [a, b]
    }

    /// Number of non-ground nodes.
    pub fn num_nodes(&self) -> usize {
        self.nodes.num_unknowns()
    }

    /// Number of voltage-source branch currents.
    pub fn num_branches(&self) -> usize {
        self.elements.voltage_sources().len()
    }

    /// Get the total size of the MNA solution vector.
    pub fn matrix_size(&self) -> usize {
        self.num_nodes() + self.num_branches()
    }

    /// Get the matrix index for a branch current.
    pub fn branch_index(&self, branch: BranchId) -> usize {
        self.num_nodes() + branch.0
    }

    /// Find a node ID by name.
    pub fn find_node(&self, name: &str) -> Option<NodeId> {
        self.nodes.find(name)
    }
}

/// Node IDs of an element's two terminals.
pub type NodePair = [NodeId; 2];
