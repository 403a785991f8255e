use crate::{
    map::CostModel,
    neighbors::Neighborhood,
    tree::{Node, NodeId},
    Cost, GridError, Point,
};

/// Turns a node into its children: one per neighbor that may be entered.
///
/// Holds a scratch buffer so repeated expansions don't allocate.
#[derive(Debug)]
pub struct Expander<'a, N: Neighborhood> {
    neighborhood: &'a N,
    model: CostModel<'a>,
    goal: Point,
    threshold: Cost,
    neighbors: Vec<Point>,
}

impl<'a, N: Neighborhood> Expander<'a, N> {
    pub fn new(neighborhood: &'a N, model: CostModel<'a>, goal: Point, threshold: Cost) -> Self {
        Expander {
            neighborhood,
            model,
            goal,
            threshold,
            neighbors: Vec::with_capacity(4),
        }
    }

    /// Replaces the contents of `children` with the children of `node`, in neighbor order.
    ///
    /// A neighbor becomes a child if both it and `node` cost no more than the threshold.
    ///
    /// Fails with [`GridError::CostOverflow`] if the child's `f` doesn't fit in a [`Cost`].
    pub fn expand(
        &mut self,
        node: &Node,
        id: NodeId,
        children: &mut Vec<Node>,
    ) -> Result<(), GridError> {
        children.clear();

        let location = node.location();
        if !self.model.is_passable(location, self.threshold)? {
            return Ok(());
        }

        self.neighbors.clear();
        self.neighborhood
            .get_all_neighbors(location, &mut self.neighbors);

        for &neighbor in self.neighbors.iter() {
            if !self.model.is_passable(neighbor, self.threshold)? {
                continue;
            }
            let move_cost = self.model.edge_cost(location, neighbor)?;
            let h = self.neighborhood.heuristic(neighbor, self.goal);
            node.g()
                .checked_add(move_cost)
                .and_then(|g| g.checked_add(h))
                .ok_or(GridError::CostOverflow { location: neighbor })?;

            children.push(Node::child(
                node,
                id,
                neighbor,
                move_cost,
                h,
                self.model.risk_factor(neighbor)?,
            ));
        }
        Ok(())
    }
}
