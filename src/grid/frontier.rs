use super::dominance::{Criteria, Dominance};
use crate::{
    tree::{Node, NodeId, NodeList},
    PointMap,
};

use std::cmp::Ordering;
use std::collections::BinaryHeap;
use std::marker::PhantomData;

/// A heap entry: the priority key and the node it belongs to.
///
/// Ordered in reverse, so that the `BinaryHeap` pops the smallest key first.
#[derive(Debug)]
struct Element<K>(K, NodeId);

impl<K: Ord> PartialEq for Element<K> {
    fn eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}
impl<K: Ord> Eq for Element<K> {}
impl<K: Ord> PartialOrd for Element<K> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<K: Ord> Ord for Element<K> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.0.cmp(&self.0)
    }
}

/// The open set of a search, plus the explored set it checks new candidates against.
///
/// Admission of a candidate `C` happens in two steps:
/// 1. [`dominator`](Frontier::dominator) looks for an open or explored node at the same
///    location that dominates or equals `C`. If there is one, `C` should be dropped.
/// 2. [`push`](Frontier::push) marks every open node `C` dominates as discarded and enqueues `C`.
///
/// Discarded nodes stay in the heap and are skipped when popped. Explored nodes are never
/// reopened: they only ever reject candidates.
#[derive(Debug)]
pub struct Frontier<C: Criteria> {
    heap: BinaryHeap<Element<C::Key>>,
    open: PointMap<Vec<NodeId>>,
    explored: PointMap<Vec<NodeId>>,
    sequence: u64,
    criteria: PhantomData<C>,
}

impl<C: Criteria> Frontier<C> {
    pub fn with_capacity(size_hint: usize) -> Self {
        Frontier {
            heap: BinaryHeap::with_capacity(size_hint / 2),
            open: PointMap::with_capacity(size_hint / 2),
            explored: PointMap::with_capacity(size_hint),
            sequence: 0,
            criteria: PhantomData,
        }
    }

    /// The first open or explored node at the candidate's location that makes it redundant.
    pub fn dominator(&self, nodes: &NodeList, candidate: &Node) -> Option<NodeId> {
        let location = candidate.location();
        self.open
            .get(&location)
            .into_iter()
            .chain(self.explored.get(&location))
            .flatten()
            .copied()
            .find(|&id| C::compare(&nodes[id], candidate).rejects_newcomer())
    }

    /// Adds `candidate` to `nodes` and enqueues it, discarding every open node it dominates.
    ///
    /// Returns the new node's id and the number of discarded nodes.
    pub fn push(&mut self, nodes: &mut NodeList, candidate: Node) -> (NodeId, usize) {
        let open = self.open.entry(candidate.location()).or_default();

        let before = open.len();
        open.retain(|&id| {
            if C::compare(&candidate, &nodes[id]) == Dominance::Dominates {
                nodes.discard(id);
                false
            } else {
                true
            }
        });
        let evicted = before - open.len();

        let key = C::key(&candidate, self.sequence);
        self.sequence += 1;

        let id = nodes.add_node(candidate);
        open.push(id);
        self.heap.push(Element(key, id));

        (id, evicted)
    }

    /// Removes and returns the open node with the smallest key, skipping discarded ones.
    pub fn pop(&mut self, nodes: &NodeList) -> Option<NodeId> {
        while let Some(Element(_, id)) = self.heap.pop() {
            let node = &nodes[id];
            if node.is_discarded() {
                #[cfg(feature = "log")]
                log::trace!("skip discarded {:?} g={}", node.location(), node.g());
                continue;
            }
            if let Some(open) = self.open.get_mut(&node.location()) {
                open.retain(|&other| other != id);
            }
            return Some(id);
        }
        None
    }

    /// Records that `id` was expanded.
    pub fn close(&mut self, nodes: &NodeList, id: NodeId) {
        self.explored
            .entry(nodes[id].location())
            .or_default()
            .push(id);
    }

    /// The number of heap entries, discarded ones included.
    #[allow(unused)]
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Whether there is nothing left to pop.
    #[allow(unused)]
    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    /// The number of nodes that were expanded.
    #[allow(unused)]
    pub fn explored_count(&self) -> usize {
        self.explored.values().map(Vec::len).sum()
    }
}
