use super::NodeId;
use crate::{Cost, Point};

/// Whether a [`Node`] is still worth expanding.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Tag {
    /// the default
    Keep,
    /// a better candidate for the same location was admitted; skip this node when popped
    Discarded,
}

/// A location reached by one specific path.
///
/// Nodes are immutable apart from their [`Tag`]. The parent is a handle into the
/// [`NodeList`](super::NodeList) that owns both nodes.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    location: Point,
    move_cost: Cost,
    g: Cost,
    h: Cost,
    f: Cost,
    survival_probability: f64,
    parent: Option<NodeId>,
    tag: Tag,
}

impl Node {
    /// The root of a search. `survival_probability` is the chance of surviving the start cell.
    pub fn start(location: Point, h: Cost, survival_probability: f64) -> Node {
        Node {
            location,
            move_cost: 0,
            g: 0,
            h,
            f: h,
            survival_probability,
            parent: None,
            tag: Tag::Keep,
        }
    }

    /// A node reached from `parent` by a single move costing `move_cost`, into a cell with
    /// survival factor `risk_factor`.
    ///
    /// `parent.g() + move_cost + h` must fit in a [`Cost`]; the search checks this before
    /// creating a child.
    pub fn child(
        parent: &Node,
        parent_id: NodeId,
        location: Point,
        move_cost: Cost,
        h: Cost,
        risk_factor: f64,
    ) -> Node {
        let g = parent.g + move_cost;
        Node {
            location,
            move_cost,
            g,
            h,
            f: g + h,
            survival_probability: parent.survival_probability * risk_factor,
            parent: Some(parent_id),
            tag: Tag::Keep,
        }
    }

    /// Where this node is.
    pub fn location(&self) -> Point {
        self.location
    }

    /// The cost of the last move, from the parent to this node. 0 for the start.
    pub fn move_cost(&self) -> Cost {
        self.move_cost
    }

    /// The cost of the path from the start to this node.
    pub fn g(&self) -> Cost {
        self.g
    }

    /// The heuristic estimate of the remaining cost to the goal.
    pub fn h(&self) -> Cost {
        self.h
    }

    /// `g + h`
    pub fn f(&self) -> Cost {
        self.f
    }

    /// The chance of surviving every cell from the start to this node.
    pub fn survival_probability(&self) -> f64 {
        self.survival_probability
    }

    /// The node this one was expanded from. `None` for the start.
    pub fn parent(&self) -> Option<NodeId> {
        self.parent
    }

    /// see [`Tag`]
    pub fn tag(&self) -> Tag {
        self.tag
    }

    /// Whether the node was replaced by a better candidate.
    pub fn is_discarded(&self) -> bool {
        self.tag == Tag::Discarded
    }

    pub(crate) fn discard(&mut self) {
        debug_assert_eq!(self.tag, Tag::Keep, "a node is discarded at most once");
        self.tag = Tag::Discarded;
    }
}
