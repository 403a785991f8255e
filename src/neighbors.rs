//! The shape of movement on the Grid, and the matching heuristic.

use crate::Point;

/// Defines how a location connects to its neighbors, and how far apart two locations are.
pub trait Neighborhood: Clone + std::fmt::Debug {
    /// Appends all neighbors of `point` that lie on the Grid to `target`, in a fixed order.
    fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>);

    /// A lower bound on the number of steps from `point` to `goal`.
    fn heuristic(&self, point: Point, goal: Point) -> usize;
}

/// The four directions of a [`ManhattanNeighborhood`], in expansion order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Direction {
    /// towards row 0
    North,
    /// away from row 0
    South,
    /// away from column 0
    East,
    /// towards column 0
    West,
}

impl Direction {
    /// All directions, in the order neighbors are produced.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::East,
        Direction::West,
    ];

    /// The location one step from `(row, col)` in this direction, if it stays within
    /// `rows` x `cols`.
    pub fn step(self, (row, col): Point, rows: usize, cols: usize) -> Option<Point> {
        match self {
            Direction::North => row.checked_sub(1).map(|row| (row, col)),
            Direction::South => (row + 1 < rows).then(|| (row + 1, col)),
            Direction::East => (col + 1 < cols).then(|| (row, col + 1)),
            Direction::West => col.checked_sub(1).map(|col| (row, col)),
        }
    }
}

/// `|a.row - b.row| + |a.col - b.col|`
pub fn manhattan_distance(a: Point, b: Point) -> usize {
    a.0.abs_diff(b.0) + a.1.abs_diff(b.1)
}

/// A 4-connected neighborhood: north, south, east and west.
///
/// ```
/// # use safe_pathfinding::neighbors::{ManhattanNeighborhood, Neighborhood};
/// let neighborhood = ManhattanNeighborhood::new(3, 3);
///
/// let mut neighbors = vec![];
/// neighborhood.get_all_neighbors((1, 1), &mut neighbors);
/// assert_eq!(neighbors, vec![(0, 1), (2, 1), (1, 2), (1, 0)]);
///
/// assert_eq!(neighborhood.heuristic((0, 0), (2, 1)), 3);
/// ```
///
/// The heuristic is admissible and consistent as long as every step costs at least 1:
/// each step changes the distance by exactly 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ManhattanNeighborhood {
    rows: usize,
    cols: usize,
}

impl ManhattanNeighborhood {
    /// Creates a neighborhood for a `rows` x `cols` Grid.
    pub fn new(rows: usize, cols: usize) -> ManhattanNeighborhood {
        ManhattanNeighborhood { rows, cols }
    }
}

impl Neighborhood for ManhattanNeighborhood {
    fn get_all_neighbors(&self, point: Point, target: &mut Vec<Point>) {
        target.extend(
            Direction::ALL
                .iter()
                .filter_map(|dir| dir.step(point, self.rows, self.cols)),
        );
    }

    fn heuristic(&self, point: Point, goal: Point) -> usize {
        manhattan_distance(point, goal)
    }
}
