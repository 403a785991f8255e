use super::Cost;
use crate::Point;

/// A Path on the Grid, from the start to the goal (both inclusive).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Path {
    steps: Vec<Point>,
    cost: Cost,
}

impl Path {
    pub(crate) fn new(steps: Vec<Point>, cost: Cost) -> Path {
        debug_assert!(!steps.is_empty(), "a Path always contains its start");
        Path { steps, cost }
    }

    /// The sum of all edge costs along the Path.
    pub fn cost(&self) -> Cost {
        self.cost
    }

    /// The number of locations on the Path, including start and goal.
    pub fn len(&self) -> usize {
        self.steps.len()
    }

    /// Always `false`: a Path contains at least its start.
    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// The location the Path starts at.
    pub fn start(&self) -> Point {
        self.steps[0]
    }

    /// The location the Path ends at.
    pub fn end(&self) -> Point {
        self.steps[self.steps.len() - 1]
    }

    /// The locations of the Path as a slice.
    pub fn as_slice(&self) -> &[Point] {
        &self.steps
    }

    /// Iterates over the locations from start to goal.
    pub fn iter(&self) -> std::slice::Iter<'_, Point> {
        self.steps.iter()
    }

    /// Consumes the Path, returning its locations.
    pub fn into_steps(self) -> Vec<Point> {
        self.steps
    }
}

use std::ops::Index;
impl Index<usize> for Path {
    type Output = Point;
    #[track_caller]
    fn index(&self, index: usize) -> &Point {
        &self.steps[index]
    }
}

impl<'a> IntoIterator for &'a Path {
    type Item = &'a Point;
    type IntoIter = std::slice::Iter<'a, Point>;
    fn into_iter(self) -> Self::IntoIter {
        self.steps.iter()
    }
}
