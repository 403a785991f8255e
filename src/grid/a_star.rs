use super::{
    dominance::{Criteria, MinCost, MinCostMaxSurvival},
    expansion::Expander,
    frontier::Frontier,
};
use crate::{
    map::{CostModel, Grid},
    neighbors::{ManhattanNeighborhood, Neighborhood},
    observer::{SearchEvent, SearchObserver},
    tree::{Node, NodeList},
    Cost, GridError, Path, Point, SafePath,
};

/// Finds the cheapest Path from `start` to `goal`.
///
/// Moving between two adjacent cells costs the sum of both cells' terrain values. Cells
/// whose value exceeds `terrain_threshold` can't be entered.
///
/// Returns `Ok(None)` if no Path exists.
///
/// The result is only guaranteed to be the cheapest if every move costs at least 1, that is if
/// no two adjacent cells both cost 0 (see [`CostModel::admits_consistent_heuristic`]). Past a
/// free stretch, the Manhattan estimate overestimates and a more expensive Path may be
/// returned.
///
/// ## Errors
/// [`GridError::OutOfBounds`] if `start` or `goal` lie outside `terrain`,
/// [`GridError::CostOverflow`] if a Path cost doesn't fit in a [`Cost`].
///
/// ## Examples
/// ```
/// use safe_pathfinding::prelude::*;
///
/// let terrain = Grid::filled(1, 4, 1);
/// let path = find_shortest_path((0, 0), (0, 3), &terrain, 1).unwrap().unwrap();
///
/// assert_eq!(path.cost(), 6);
/// assert_eq!(path.as_slice(), &[(0, 0), (0, 1), (0, 2), (0, 3)]);
/// ```
pub fn find_shortest_path(
    start: Point,
    goal: Point,
    terrain: &Grid,
    terrain_threshold: Cost,
) -> Result<Option<Path>, GridError> {
    find_shortest_path_with(start, goal, terrain, terrain_threshold, ())
}

/// Same as [`find_shortest_path`], reporting every step of the search to `observer`.
pub fn find_shortest_path_with<O: SearchObserver>(
    start: Point,
    goal: Point,
    terrain: &Grid,
    terrain_threshold: Cost,
    mut observer: O,
) -> Result<Option<Path>, GridError> {
    let model = CostModel::new(terrain);
    let found = best_first::<MinCost, _>(
        model,
        start,
        goal,
        terrain_threshold,
        None,
        &mut observer,
    )?;
    Ok(found.map(|(node, steps)| Path::new(steps, node.g())))
}

/// Finds the cheapest Path from `start` to `goal` that is survived with a probability of at
/// least `success_threshold`.
///
/// `risk` holds the percent chance of an encounter on every cell. The survival probability of
/// a Path is the product of `1 - risk / 100` over every cell on it, start included.
///
/// Returns `Ok(None)` if no such Path exists.
///
/// As with [`find_shortest_path`], the cost is only guaranteed to be minimal if no two adjacent
/// cells of `terrain` both cost 0.
///
/// ## Errors
/// [`GridError::OutOfBounds`] if `start` or `goal` lie outside `terrain`,
/// [`GridError::DimensionMismatch`] or [`GridError::RiskOutOfRange`] if `risk` doesn't fit
/// `terrain`, [`GridError::CostOverflow`] if a Path cost doesn't fit in a [`Cost`].
///
/// ## Examples
/// ```
/// use safe_pathfinding::prelude::*;
///
/// let terrain = Grid::filled(3, 3, 1);
/// let risk: Grid = "0 50 0
///                   0 50 0
///                   0  0 0".parse().unwrap();
///
/// let risky = find_shortest_safe_path((0, 0), (0, 2), &terrain, 1, &risk, 0.5).unwrap().unwrap();
/// assert_eq!(risky.cost(), 4);
/// assert_eq!(risky.survival_probability(), 0.5);
///
/// let safe = find_shortest_safe_path((0, 0), (0, 2), &terrain, 1, &risk, 0.9).unwrap().unwrap();
/// assert_eq!(safe.cost(), 12);
/// assert_eq!(safe.survival_probability(), 1.0);
/// ```
pub fn find_shortest_safe_path(
    start: Point,
    goal: Point,
    terrain: &Grid,
    terrain_threshold: Cost,
    risk: &Grid,
    success_threshold: f64,
) -> Result<Option<SafePath>, GridError> {
    find_shortest_safe_path_with(
        start,
        goal,
        terrain,
        terrain_threshold,
        risk,
        success_threshold,
        (),
    )
}

/// Same as [`find_shortest_safe_path`], reporting every step of the search to `observer`.
pub fn find_shortest_safe_path_with<O: SearchObserver>(
    start: Point,
    goal: Point,
    terrain: &Grid,
    terrain_threshold: Cost,
    risk: &Grid,
    success_threshold: f64,
    mut observer: O,
) -> Result<Option<SafePath>, GridError> {
    let model = CostModel::with_risk(terrain, risk)?;
    let found = best_first::<MinCostMaxSurvival, _>(
        model,
        start,
        goal,
        terrain_threshold,
        Some(success_threshold),
        &mut observer,
    )?;
    Ok(found.map(|(node, steps)| {
        SafePath::new(Path::new(steps, node.g()), node.survival_probability())
    }))
}

/// The best-first loop both searches share.
///
/// Pops the open node with the smallest key until it is at the goal. Every child of an
/// expanded node goes through the frontier's dominance check first, and then through the
/// `min_survival` gate, if there is one.
fn best_first<C: Criteria, O: SearchObserver>(
    model: CostModel<'_>,
    start: Point,
    goal: Point,
    threshold: Cost,
    min_survival: Option<f64>,
    observer: &mut O,
) -> Result<Option<(Node, Vec<Point>)>, GridError> {
    #[cfg(feature = "log")]
    let (outer_timer, timer) = (std::time::Instant::now(), std::time::Instant::now());

    let terrain = model.terrain();
    terrain.value(start)?;
    terrain.value(goal)?;

    #[cfg(feature = "log")]
    if !model.admits_consistent_heuristic() {
        log::warn!("grid has adjacent zero-cost cells; the heuristic may overestimate");
    }

    let survives = |node: &Node| {
        min_survival.map_or(true, |min| node.survival_probability() >= min)
    };

    let neighborhood = ManhattanNeighborhood::new(terrain.rows(), terrain.cols());
    let size_hint = terrain.len();

    let mut nodes = NodeList::with_capacity(size_hint);
    let mut frontier = Frontier::<C>::with_capacity(size_hint);
    let mut expander = Expander::new(&neighborhood, model, goal, threshold);
    let mut children = Vec::with_capacity(4);

    let start_node = Node::start(
        start,
        neighborhood.heuristic(start, goal),
        model.risk_factor(start)?,
    );
    if !survives(&start_node) {
        observer.notify(SearchEvent::Ignore, &start_node);
        return Ok(None);
    }
    let (start_id, _) = frontier.push(&mut nodes, start_node);
    observer.notify(SearchEvent::Enqueue, &nodes[start_id]);

    re_trace!("search setup", timer);

    while let Some(id) = frontier.pop(&nodes) {
        observer.notify(SearchEvent::Visit, &nodes[id]);

        if nodes[id].location() == goal {
            re_trace!("search loop", timer);
            #[cfg(feature = "log")]
            log::debug!(
                "found {:?} -> {:?} with cost {} after expanding {} of {} nodes",
                start,
                goal,
                nodes[id].g(),
                frontier.explored_count(),
                nodes.len()
            );
            re_trace!("search total", outer_timer);
            return Ok(Some((nodes[id].clone(), nodes.path_to(id))));
        }

        frontier.close(&nodes, id);
        expander.expand(&nodes[id], id, &mut children)?;

        for child in children.drain(..) {
            if frontier.dominator(&nodes, &child).is_some() || !survives(&child) {
                observer.notify(SearchEvent::Ignore, &child);
                continue;
            }
            let (child_id, _) = frontier.push(&mut nodes, child);
            observer.notify(SearchEvent::Enqueue, &nodes[child_id]);
        }
    }

    re_trace!("search loop", timer);
    #[cfg(feature = "log")]
    log::debug!(
        "no path {:?} -> {:?} after expanding {} of {} nodes",
        start,
        goal,
        frontier.explored_count(),
        nodes.len()
    );
    re_trace!("search total", outer_timer);

    Ok(None)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        neighbors::manhattan_distance,
        observer::{EventLog, SearchEvent},
    };

    fn grid(text: &str) -> Grid {
        text.parse().unwrap()
    }

    /// Sum of edge costs along `steps`.
    fn path_cost(terrain: &Grid, steps: &[Point]) -> Cost {
        let model = CostModel::new(terrain);
        steps
            .windows(2)
            .map(|pair| model.edge_cost(pair[0], pair[1]).unwrap())
            .sum()
    }

    #[test]
    fn basic() {
        // 1 = plains, 4 = forest, 100 = cliffs
        let terrain = grid(
            "1 1 4 1
             1 100 100 1
             1 1 1 1",
        );

        let path = find_shortest_path((0, 0), (0, 3), &terrain, 50)
            .unwrap()
            .unwrap();

        // across the forest: 1+1, 1+4, 4+1
        assert_eq!(path.cost(), 12);
        assert_eq!(path.as_slice(), &[(0, 0), (0, 1), (0, 2), (0, 3)]);
        assert_eq!(path_cost(&terrain, path.as_slice()), path.cost());

        // without the forest, the long way around
        let path = find_shortest_path((0, 0), (0, 3), &terrain, 3)
            .unwrap()
            .unwrap();
        assert_eq!(path.cost(), 14);
        assert_eq!(path.len(), 8);
        assert_eq!(path_cost(&terrain, path.as_slice()), path.cost());
    }

    #[test]
    fn uniform_corridor() {
        let terrain = Grid::filled(1, 4, 1);
        let path = find_shortest_path((0, 0), (0, 3), &terrain, 1)
            .unwrap()
            .unwrap();
        assert_eq!(path.cost(), 3 * (1 + 1));
        assert_eq!(path.as_slice(), &[(0, 0), (0, 1), (0, 2), (0, 3)]);
    }

    #[test]
    fn threshold_blocks_every_route() {
        let walled = grid(
            "1 9 1
             1 9 1
             1 9 1",
        );
        assert_eq!(find_shortest_path((0, 0), (2, 2), &walled, 8), Ok(None));
        assert!(find_shortest_path((0, 0), (2, 2), &walled, 9)
            .unwrap()
            .is_some());

        // the start itself is too expensive
        let expensive = Grid::filled(2, 2, 5);
        assert_eq!(find_shortest_path((0, 0), (1, 1), &expensive, 4), Ok(None));

        let risk = Grid::filled(3, 3, 0);
        assert_eq!(
            find_shortest_safe_path((0, 0), (2, 2), &walled, 8, &risk, 0.0),
            Ok(None)
        );
    }

    #[test]
    fn start_is_goal() {
        let terrain = Grid::filled(2, 2, 7);
        let path = find_shortest_path((1, 1), (1, 1), &terrain, 0)
            .unwrap()
            .unwrap();
        assert_eq!(path.cost(), 0);
        assert_eq!(path.as_slice(), &[(1, 1)]);

        let risk = grid("0 0\n0 25");
        let safe = find_shortest_safe_path((1, 1), (1, 1), &terrain, 0, &risk, 0.5)
            .unwrap()
            .unwrap();
        assert_eq!(safe.cost(), 0);
        assert_eq!(safe.survival_probability(), 0.75);
        assert_eq!(safe.as_slice(), &[(1, 1)]);

        // the start cell alone is already too dangerous
        assert_eq!(
            find_shortest_safe_path((1, 1), (1, 1), &terrain, 0, &risk, 0.8),
            Ok(None)
        );
    }

    #[test]
    fn out_of_bounds() {
        let terrain = Grid::filled(2, 3, 1);
        assert_eq!(
            find_shortest_path((2, 0), (0, 0), &terrain, 1),
            Err(GridError::OutOfBounds {
                location: (2, 0),
                rows: 2,
                cols: 3
            })
        );
        assert_eq!(
            find_shortest_path((0, 0), (0, 3), &terrain, 1),
            Err(GridError::OutOfBounds {
                location: (0, 3),
                rows: 2,
                cols: 3
            })
        );

        let risk = Grid::filled(3, 2, 0);
        assert!(matches!(
            find_shortest_safe_path((0, 0), (1, 1), &terrain, 1, &risk, 0.5),
            Err(GridError::DimensionMismatch { .. })
        ));
    }

    #[test]
    fn safe_path_detours_around_danger() {
        let terrain = Grid::filled(3, 3, 1);
        let risk = grid(
            "0 50 0
             0 50 0
             0  0 0",
        );

        let shortest = find_shortest_path((0, 0), (0, 2), &terrain, 1)
            .unwrap()
            .unwrap();
        assert_eq!(shortest.cost(), 4);

        let risky = find_shortest_safe_path((0, 0), (0, 2), &terrain, 1, &risk, 0.5)
            .unwrap()
            .unwrap();
        assert_eq!(risky.cost(), 4);
        assert_eq!(risky.survival_probability(), 0.5);
        assert_eq!(risky.as_slice(), shortest.as_slice());

        let safe = find_shortest_safe_path((0, 0), (0, 2), &terrain, 1, &risk, 0.9)
            .unwrap()
            .unwrap();
        assert_eq!(safe.cost(), 12);
        assert_eq!(safe.survival_probability(), 1.0);
        assert_eq!(
            safe.as_slice(),
            &[(0, 0), (1, 0), (2, 0), (2, 1), (2, 2), (1, 2), (0, 2)]
        );

        // nothing survives a certain encounter
        let deadly = grid(
            "0 100 0
             0 100 0
             0 100 0",
        );
        assert_eq!(
            find_shortest_safe_path((0, 0), (0, 2), &terrain, 1, &deadly, 0.01),
            Ok(None)
        );
        let doomed = find_shortest_safe_path((0, 0), (0, 2), &terrain, 1, &deadly, 0.0)
            .unwrap()
            .unwrap();
        assert_eq!(doomed.survival_probability(), 0.0);
    }

    #[test]
    fn riskless_safe_path_matches_shortest_path() {
        let terrain = grid(
            "1 1 9 1
             9 1 9 1
             9 1 1 1",
        );
        let risk = Grid::filled(3, 4, 0);

        let shortest = find_shortest_path((0, 0), (0, 3), &terrain, 10)
            .unwrap()
            .unwrap();
        let safe = find_shortest_safe_path((0, 0), (0, 3), &terrain, 10, &risk, 1.0)
            .unwrap()
            .unwrap();

        assert_eq!(shortest.cost(), 14);
        assert_eq!(safe.cost(), shortest.cost());
        assert_eq!(safe.survival_probability(), 1.0);
        assert_eq!(safe.path(), &shortest);
    }

    #[test]
    fn exact_ties_keep_the_first_candidate() {
        let terrain = Grid::filled(2, 2, 1);
        let mut log = EventLog::new();

        // (1, 1) is reached from the south first; the equal route from the east is dropped
        let path = find_shortest_path_with((0, 0), (1, 1), &terrain, 1, &mut log)
            .unwrap()
            .unwrap();
        assert_eq!(path.cost(), 4);
        assert_eq!(path.as_slice(), &[(0, 0), (1, 0), (1, 1)]);

        let ignored: Vec<_> = log.of(SearchEvent::Ignore).map(|r| r.location).collect();
        assert_eq!(ignored, vec![(0, 0), (1, 1), (0, 0)]);

        // the safe search breaks the same tie by location instead
        let risk = Grid::filled(2, 2, 0);
        let safe = find_shortest_safe_path((0, 0), (1, 1), &terrain, 1, &risk, 1.0)
            .unwrap()
            .unwrap();
        assert_eq!(safe.cost(), 4);
        assert_eq!(safe.as_slice(), &[(0, 0), (0, 1), (1, 1)]);
    }

    #[test]
    fn zero_cost_cells() {
        // stepping through the bottom row is free, but the heuristic can't know that
        let terrain = grid(
            "1 5 1
             0 0 0",
        );
        assert!(!CostModel::new(&terrain).admits_consistent_heuristic());

        let path = find_shortest_path((0, 0), (0, 2), &terrain, 10)
            .unwrap()
            .unwrap();
        assert_eq!(path.cost(), 2);
        assert_eq!(
            path.as_slice(),
            &[(0, 0), (1, 0), (1, 1), (1, 2), (0, 2)]
        );
        assert_eq!(path_cost(&terrain, path.as_slice()), path.cost());
    }

    #[test]
    fn zero_cost_detour_far_from_the_goal_is_missed() {
        // a free corridor around the block, and a cheap but not free shortcut along the top
        let terrain = grid(
            "0 1 1 1 0
             0 9 9 9 0
             0 9 9 9 0
             0 9 9 9 0
             0 9 9 9 0
             0 9 9 9 0
             0 9 9 9 0
             0 0 0 0 0",
        );
        assert!(!CostModel::new(&terrain).admits_consistent_heuristic());

        // the corridor costs 0, but its estimate grows with every step away from the goal
        let path = find_shortest_path((0, 0), (0, 4), &terrain, 5)
            .unwrap()
            .unwrap();
        assert_eq!(path.cost(), 6);
        assert_eq!(path.as_slice(), &[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]);

        let risk = Grid::filled(8, 5, 0);
        let safe = find_shortest_safe_path((0, 0), (0, 4), &terrain, 5, &risk, 1.0)
            .unwrap()
            .unwrap();
        assert_eq!(safe.cost(), 6);
    }

    #[test]
    fn cost_overflow() {
        // a single move already overflows
        let huge = Grid::filled(1, 2, Cost::MAX / 2 + 1);
        assert_eq!(
            find_shortest_path((0, 0), (0, 1), &huge, Cost::MAX),
            Err(GridError::CostOverflow { location: (0, 1) })
        );

        // each move fits, two don't
        let large = Grid::filled(1, 3, Cost::MAX / 4 + 1);
        assert_eq!(
            find_shortest_path((0, 0), (0, 2), &large, Cost::MAX),
            Err(GridError::CostOverflow { location: (0, 2) })
        );
        let risk = Grid::filled(1, 3, 0);
        assert_eq!(
            find_shortest_safe_path((0, 0), (0, 2), &large, Cost::MAX, &risk, 0.5),
            Err(GridError::CostOverflow { location: (0, 2) })
        );
    }

    #[test]
    fn observed_nodes_are_consistent() {
        let terrain = grid(
            "1 3 1 2
             2 8 1 4
             1 1 1 9
             5 2 1 1",
        );
        let risk = grid(
            "0 10 0 20
             30 0 0 0
             0 40 0 50
             0 0 10 0",
        );
        let (start, goal) = ((0, 0), (3, 3));
        let mut log = EventLog::new();
        let found = find_shortest_safe_path_with(start, goal, &terrain, 8, &risk, 0.5, &mut log)
            .unwrap()
            .unwrap();

        let first = log.records()[0];
        assert_eq!(first.event, SearchEvent::Enqueue);
        assert_eq!(first.location, start);
        assert_eq!(first.g, 0);
        assert_eq!(first.h, manhattan_distance(start, goal));

        for record in log.records() {
            assert_eq!(record.f, record.g + record.h);
            assert_eq!(record.h, manhattan_distance(record.location, goal));
            assert!((0.0..=1.0).contains(&record.survival_probability));
        }
        for record in log.of(SearchEvent::Enqueue) {
            assert!(record.survival_probability >= 0.5);
        }

        let last = log.records().last().unwrap();
        assert_eq!(last.event, SearchEvent::Visit);
        assert_eq!(last.location, goal);
        assert_eq!(last.g, found.cost());
        assert!(found.survival_probability() >= 0.5);
        assert_eq!(path_cost(&terrain, found.as_slice()), found.cost());
    }

    #[test]
    fn deterministic() {
        let terrain = grid(
            "1 2 1 1 3
             1 1 2 1 1
             3 1 1 1 2
             1 1 2 1 1",
        );
        let risk = grid(
            "0 10 0 0 20
             0 0 10 0 0
             20 0 0 10 0
             0 0 10 0 0",
        );

        let first = find_shortest_path((0, 0), (3, 4), &terrain, 3).unwrap();
        let second = find_shortest_path((0, 0), (3, 4), &terrain, 3).unwrap();
        assert_eq!(first, second);

        let first = find_shortest_safe_path((0, 0), (3, 4), &terrain, 3, &risk, 0.7).unwrap();
        let second = find_shortest_safe_path((0, 0), (3, 4), &terrain, 3, &risk, 0.7).unwrap();
        assert_eq!(first, second);
    }
}
