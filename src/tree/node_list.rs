use slotmap::SlotMap;

use super::{Node, NodeId};
use crate::Point;

/// Owns every [`Node`] created during one search.
///
/// Nodes are never removed; the whole list is dropped once the search returns.
#[derive(Clone, Debug, Default)]
pub struct NodeList {
    nodes: SlotMap<NodeId, Node>,
}

impl NodeList {
    /// Creates an empty list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty list with room for `capacity` nodes.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            nodes: SlotMap::with_capacity_and_key(capacity),
        }
    }

    /// The number of nodes in the list.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Whether the list is empty.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Takes ownership of `node`, returning its handle.
    pub fn add_node(&mut self, node: Node) -> NodeId {
        debug_assert!(
            node.parent().map_or(true, |parent| self.nodes.contains_key(parent)),
            "parents are added before their children"
        );
        self.nodes.insert(node)
    }

    /// Marks the node as [`Discarded`](super::Tag::Discarded).
    #[track_caller]
    pub fn discard(&mut self, id: NodeId) {
        self.nodes[id].discard();
    }

    /// The locations from the start to `id`, both inclusive.
    #[track_caller]
    pub fn path_to(&self, id: NodeId) -> Vec<Point> {
        let mut steps = vec![];
        let mut current = Some(id);
        while let Some(id) = current {
            let node = &self.nodes[id];
            steps.push(node.location());
            current = node.parent();
        }
        steps.reverse();
        steps
    }

    /// Iterates over all nodes and their handles.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &Node)> + '_ {
        self.nodes.iter()
    }
}

use std::ops::Index;
impl Index<NodeId> for NodeList {
    type Output = Node;
    #[track_caller]
    fn index(&self, index: NodeId) -> &Node {
        &self.nodes[index]
    }
}
