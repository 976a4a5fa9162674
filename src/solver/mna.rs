//! MNA matrix assembly.

use num_complex::Complex64;

use crate::circuit::{BranchId, Circuit, VarIndex};

const ZERO: Complex64 = Complex64::new(0.0, 0.0);
const ONE: Complex64 = Complex64::new(1.0, 0.0);

/// MNA system Ax = b over complex values.
///
/// Rows/columns `0..n` are non-ground node voltages in registry order,
/// `n..n+m` are voltage source branch currents in declaration order.
#[derive(Debug, Clone)]
pub struct MnaSystem {
    /// System matrix A (row-major)
    pub a: Vec<Complex64>,
    /// Source vector b
    pub b: Vec<Complex64>,
    /// Matrix dimension (n + m)
    pub size: usize,
    /// Number of non-ground nodes (n)
    pub num_nodes: usize,
    /// Number of voltage source branches (m)
    pub num_branches: usize,
}

impl MnaSystem {
    /// Create a zeroed system for `num_nodes` node voltages and
    /// `num_branches` branch currents.
    pub fn new(num_nodes: usize, num_branches: usize) -> Self {
        let size = num_nodes + num_branches;
        Self {
            a: vec![ZERO; size * size],
            b: vec![ZERO; size],
            size,
            num_nodes,
            num_branches,
        }
    }

    /// Get matrix element at (row, col).
    pub fn get(&self, row: usize, col: usize) -> Complex64 {
        self.a[row * self.size + col]
    }

    /// Add to matrix element at (row, col).
    pub fn add(&mut self, row: usize, col: usize, value: Complex64) {
        self.a[row * self.size + col] += value;
    }

    /// Add to source vector element.
    pub fn add_source(&mut self, row: usize, value: Complex64) {
        self.b[row] += value;
    }

    /// Entry of the conductance block G (node, node).
    pub fn conductance(&self, i: usize, j: usize) -> Complex64 {
        debug_assert!(i < self.num_nodes && j < self.num_nodes);
        self.get(i, j)
    }

    /// Entry of the incidence block B (node, branch).
    pub fn incidence(&self, node: usize, branch: usize) -> Complex64 {
        debug_assert!(node < self.num_nodes && branch < self.num_branches);
        self.get(node, self.num_nodes + branch)
    }

    /// Entry of the block C = Bᵀ (branch, node).
    pub fn incidence_transpose(&self, branch: usize, node: usize) -> Complex64 {
        debug_assert!(node < self.num_nodes && branch < self.num_branches);
        self.get(self.num_nodes + branch, node)
    }

    /// Entry of the D block (branch, branch); always zero for independent sources.
    pub fn coupling(&self, i: usize, j: usize) -> Complex64 {
        debug_assert!(i < self.num_branches && j < self.num_branches);
        self.get(self.num_nodes + i, self.num_nodes + j)
    }

    /// Stamp an admittance between two nodes.
    /// For an admittance Y between nodes n1 and n2:
    ///   A[n1,n1] += Y
    ///   A[n2,n2] += Y
    ///   A[n1,n2] -= Y
    ///   A[n2,n1] -= Y
    /// Ground terminals (None) drop their rows and columns.
    pub fn stamp_admittance(&mut self, n1: Option<usize>, n2: Option<usize>, y: Complex64) {
        if let Some(i) = n1 {
            self.add(i, i, y);
        }
        if let Some(j) = n2 {
            self.add(j, j, y);
        }
        if let (Some(i), Some(j)) = (n1, n2) {
            self.add(i, j, -y);
            self.add(j, i, -y);
        }
    }

    /// Stamp a voltage source between two nodes with branch current at row `br`.
    /// V[a] - V[b] = E
    pub fn stamp_voltage_source(
        &mut self,
        n_a: Option<usize>,
        n_b: Option<usize>,
        br: usize,
        voltage: Complex64,
    ) {
        if let Some(i) = n_a {
            self.add(i, br, ONE);
            self.add(br, i, ONE);
        }
        if let Some(j) = n_b {
            self.add(j, br, -ONE);
            self.add(br, j, -ONE);
        }
        self.b[br] = voltage;
    }

    /// Stamp a current source between two nodes.
    /// Current flows through the source from a to b: it leaves node a and
    /// enters node b.
    pub fn stamp_current_source(&mut self, n_a: Option<usize>, n_b: Option<usize>, current: Complex64) {
        if let Some(i) = n_a {
            self.add_source(i, -current);
        }
        if let Some(j) = n_b {
            self.add_source(j, current);
        }
    }
}

/// Assemble the MNA system for a circuit.
pub fn assemble(circuit: &Circuit) -> MnaSystem {
    let n = circuit.num_nodes();
    let m = circuit.num_branches();
    let mut system = MnaSystem::new(n, m);
    log::debug!("assembling {}x{} MNA system (n={}, m={})", n + m, n + m, n, m);

    for item in circuit.elements.passives() {
        let [a, b] = item.nodes;
        let y = item.element.admittance();
        log::trace!("stamp {} admittance {} between {} and {}", item.element.name, y, a, b);
        system.stamp_admittance(a.matrix_index(), b.matrix_index(), y);
    }

    for (branch, item) in circuit.elements.voltage_sources().iter().enumerate() {
        let [a, b] = item.nodes;
        let br = VarIndex::Current(BranchId(branch)).to_index(n);
        log::trace!("stamp {} = {} on branch row {}", item.element.name, item.element.value, br);
        system.stamp_voltage_source(a.matrix_index(), b.matrix_index(), br, item.element.value);
    }

    for item in circuit.elements.current_sources() {
        let [a, b] = item.nodes;
        log::trace!("stamp {} = {} from {} to {}", item.element.name, item.element.value, a, b);
        system.stamp_current_source(a.matrix_index(), b.matrix_index(), item.element.value);
    }

    system
}
