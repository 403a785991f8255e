//! The Grids a search runs on, and the cost lookups the search makes on them.

mod cost_model;
pub use cost_model::CostModel;

mod loader;

use crate::{Cost, GridError, LoadError, Point};

/// A rectangular matrix of non-negative integers, stored row by row.
///
/// Used both for terrain costs and for percent encounter risks.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    cells: Vec<Cost>,
}

impl Grid {
    /// Creates a Grid from a list of rows.
    ///
    /// ## Errors
    /// [`LoadError::Empty`] if there are no rows or the rows have no cells,
    /// [`LoadError::Irregular`] if the rows differ in length.
    pub fn from_rows(rows: Vec<Vec<Cost>>) -> Result<Grid, LoadError> {
        let cols = rows.first().map(Vec::len).ok_or(LoadError::Empty)?;
        if cols == 0 {
            return Err(LoadError::Empty);
        }
        let mut cells = Vec::with_capacity(rows.len() * cols);
        for (row, values) in rows.iter().enumerate() {
            if values.len() != cols {
                return Err(LoadError::Irregular {
                    row,
                    expected: cols,
                    found: values.len(),
                });
            }
            cells.extend_from_slice(values);
        }
        Ok(Grid {
            rows: rows.len(),
            cols,
            cells,
        })
    }

    /// Creates a `rows` x `cols` Grid with every cell set to `value`.
    ///
    /// ## Panics
    /// if either dimension is 0
    #[track_caller]
    pub fn filled(rows: usize, cols: usize, value: Cost) -> Grid {
        assert!(rows > 0 && cols > 0, "a Grid needs at least one cell");
        Grid {
            rows,
            cols,
            cells: vec![value; rows * cols],
        }
    }

    /// The number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// The number of columns.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// `(rows, cols)`
    pub fn shape(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// The total number of cells.
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// Always `false`: a Grid has at least one cell.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Whether `(row, col)` lies on the Grid.
    pub fn contains(&self, (row, col): Point) -> bool {
        row < self.rows && col < self.cols
    }

    /// The value at `pos`, or `None` outside the Grid.
    pub fn get(&self, pos: Point) -> Option<Cost> {
        if self.contains(pos) {
            Some(self.cells[pos.0 * self.cols + pos.1])
        } else {
            None
        }
    }

    /// The value at `pos`.
    ///
    /// ## Errors
    /// [`GridError::OutOfBounds`] if `pos` lies outside the Grid.
    pub fn value(&self, pos: Point) -> Result<Cost, GridError> {
        self.get(pos).ok_or(GridError::OutOfBounds {
            location: pos,
            rows: self.rows,
            cols: self.cols,
        })
    }

    /// Sets the value at `pos`.
    ///
    /// ## Errors
    /// [`GridError::OutOfBounds`] if `pos` lies outside the Grid.
    pub fn set(&mut self, pos: Point, value: Cost) -> Result<(), GridError> {
        if !self.contains(pos) {
            return Err(GridError::OutOfBounds {
                location: pos,
                rows: self.rows,
                cols: self.cols,
            });
        }
        self.cells[pos.0 * self.cols + pos.1] = value;
        Ok(())
    }

    /// Iterates over all `(location, value)` pairs, row by row.
    pub fn iter(&self) -> impl Iterator<Item = (Point, Cost)> + '_ {
        let cols = self.cols;
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &value)| ((i / cols, i % cols), value))
    }
}
