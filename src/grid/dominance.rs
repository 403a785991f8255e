use crate::{tree::Node, Cost, Point};

use std::cmp::Ordering;
use std::fmt::Debug;

/// How two candidates for the same location relate.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Dominance {
    /// at least as good in every objective, and better in one
    Dominates,
    /// the reverse of `Dominates`
    Dominated,
    /// equal in every objective
    Equivalent,
    /// each is better in some objective
    Incomparable,
}

impl Dominance {
    /// Combines per-objective comparisons, where `Less` means "better".
    fn from_orderings(orderings: &[Ordering]) -> Dominance {
        let better = orderings.contains(&Ordering::Less);
        let worse = orderings.contains(&Ordering::Greater);
        match (better, worse) {
            (false, false) => Dominance::Equivalent,
            (true, false) => Dominance::Dominates,
            (false, true) => Dominance::Dominated,
            (true, true) => Dominance::Incomparable,
        }
    }

    /// Whether an entry related to a newcomer by `self` blocks the newcomer.
    ///
    /// Exact ties block: the incumbent stays and the newcomer is dropped.
    pub fn rejects_newcomer(self) -> bool {
        matches!(self, Dominance::Dominates | Dominance::Equivalent)
    }
}

/// What a search optimizes: how the frontier orders nodes, and when one node makes another
/// for the same location redundant.
pub trait Criteria {
    /// The priority of a node in the frontier. Smaller keys are popped first.
    type Key: Ord + Copy + Debug;

    /// The key of `node`, which was the `sequence`-th node pushed.
    fn key(node: &Node, sequence: u64) -> Self::Key;

    /// How `a` relates to `b`. Only meaningful for nodes at the same location.
    fn compare(a: &Node, b: &Node) -> Dominance;
}

/// Minimize cost. Ties are broken first-in-first-out.
#[derive(Clone, Copy, Debug)]
pub struct MinCost;

impl Criteria for MinCost {
    type Key = (Cost, u64);

    fn key(node: &Node, sequence: u64) -> Self::Key {
        (node.f(), sequence)
    }

    fn compare(a: &Node, b: &Node) -> Dominance {
        Dominance::from_orderings(&[a.f().cmp(&b.f())])
    }
}

/// Minimize cost, and maximize the survival probability among equally cheap nodes.
#[derive(Clone, Copy, Debug)]
pub struct MinCostMaxSurvival;

/// A survival probability that sorts the most likely survival first.
#[derive(Clone, Copy, Debug)]
pub struct Survival(pub f64);

impl PartialEq for Survival {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for Survival {}

impl Ord for Survival {
    fn cmp(&self, other: &Self) -> Ordering {
        // reversed: higher probability first
        other.0.total_cmp(&self.0)
    }
}
impl PartialOrd for Survival {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Criteria for MinCostMaxSurvival {
    type Key = (Cost, Survival, Point, u64);

    fn key(node: &Node, sequence: u64) -> Self::Key {
        (
            node.f(),
            Survival(node.survival_probability()),
            node.location(),
            sequence,
        )
    }

    fn compare(a: &Node, b: &Node) -> Dominance {
        Dominance::from_orderings(&[
            a.f().cmp(&b.f()),
            Survival(a.survival_probability()).cmp(&Survival(b.survival_probability())),
        ])
    }
}
