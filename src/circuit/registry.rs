//! Terminal name to node index registry.

use std::collections::HashMap;

use super::types::NodeId;

/// Name of the distinguished ground terminal.
pub const GROUND_NAME: &str = "GND";

/// Bidirectional mapping between terminal names and node IDs.
///
/// Ground is registered at construction with index 0; every other name gets
/// the next index in first-seen order. Entries are never removed or renumbered.
#[derive(Debug, Clone)]
pub struct NodeRegistry {
    /// Mapping from node names to node IDs
    node_map: HashMap<String, NodeId>,
    /// Node names indexed by node ID
    node_names: Vec<String>,
}

impl NodeRegistry {
    /// Create a registry holding only the ground node.
    pub fn new() -> Self {
        let mut node_map = HashMap::new();
        node_map.insert(GROUND_NAME.to_string(), NodeId::GROUND);
        Self {
            node_map,
            node_names: vec![GROUND_NAME.to_string()],
        }
    }

    /// Return the ID for `name`, assigning the next free index if it is new.
    pub fn register(&mut self, name: &str) -> NodeId {
        if let Some(&id) = self.node_map.get(name) {
            return id;
        }
        let id = NodeId(self.node_names.len());
        self.node_map.insert(name.to_string(), id);
        self.node_names.push(name.to_string());
        log::trace!("registered node '{}' as {}", name, id);
        id
    }

    /// Find a node ID by name.
    pub fn find(&self, name: &str) -> Option<NodeId> {
        self.node_map.get(name).copied()
    }

    /// Get the name of a node.
    pub fn name(&self, node: NodeId) -> Option<&str> {
        self.node_names.get(node.0).map(String::as_str)
    }

    /// Number of registered nodes, ground included.
    pub fn len(&self) -> usize {
        self.node_names.len()
    }

    /// True when only ground is registered.
    pub fn is_empty(&self) -> bool {
        self.node_names.len() == 1
    }

    /// Number of non-ground nodes (`n` in the MNA system).
    pub fn num_unknowns(&self) -> usize {
        self.node_names.len() - 1
    }

    /// Non-ground nodes in index order.
    pub fn non_ground(&self) -> impl Iterator<Item = (NodeId, &str)> {
        self.node_names
            .iter()
            .enumerate()
            .skip(1)
            .map(|(i, name)| (NodeId(i), name.as_str()))
    }
}

impl Default for NodeRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ground_is_preregistered() {
        let registry = NodeRegistry::new();
        assert_eq!(registry.find("GND"), Some(NodeId::GROUND));
        assert_eq!(registry.len(), 1);
        assert!(registry.is_empty());
        assert_eq!(registry.num_unknowns(), 0);
    }

    #[test]
    fn test_first_seen_order() {
        let mut registry = NodeRegistry::new();
        assert_eq!(registry.register("out"), NodeId(1));
        assert_eq!(registry.register("in"), NodeId(2));
        assert_eq!(registry.register("out"), NodeId(1));
        assert_eq!(registry.register("GND"), NodeId::GROUND);
        assert_eq!(registry.num_unknowns(), 2);
    }

    #[test]
    fn test_reverse_lookup_round_trip() {
        let names = ["n1", "vdd", "mid", "n1", "GND", "x_2"];
        let mut registry = NodeRegistry::new();
        let ids: Vec<NodeId> = names.iter().map(|n| registry.register(n)).collect();

        for (name, id) in names.iter().zip(&ids) {
            assert_eq!(registry.name(*id), Some(*name));
        }
        let listed: Vec<&str> = registry.non_ground().map(|(_, n)| n).collect();
        assert_eq!(listed, vec!["n1", "vdd", "mid", "x_2"]);
    }

    #[test]
    fn test_unknown_index_has_no_name() {
        let registry = NodeRegistry::new();
        assert_eq!(registry.name(NodeId(5)), None);
    }
}
