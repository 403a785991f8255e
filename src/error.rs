use crate::{Cost, Point};

use thiserror::Error;

/// Errors raised by lookups on a [`Grid`](crate::map::Grid) or [`CostModel`](crate::map::CostModel).
///
/// Once a search has validated its start and goal, none of these are expected. One showing up
/// from inside a search means the caller broke a contract.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// The location lies outside the Grid.
    #[error("location {location:?} lies outside the {rows}x{cols} grid")]
    OutOfBounds {
        /// the offending location
        location: Point,
        /// number of rows of the Grid
        rows: usize,
        /// number of columns of the Grid
        cols: usize,
    },

    /// The risk Grid does not have the same shape as the terrain Grid.
    #[error("risk grid is {found:?} but terrain grid is {expected:?}")]
    DimensionMismatch {
        /// `(rows, cols)` of the terrain Grid
        expected: (usize, usize),
        /// `(rows, cols)` of the risk Grid
        found: (usize, usize),
    },

    /// The cost of a Path to the location doesn't fit in a [`Cost`].
    #[error("path cost to {location:?} overflows")]
    CostOverflow {
        /// the location the Path was extended to
        location: Point,
    },

    /// A risk value is not a percentage.
    #[error("risk {value} at {location:?} is outside 0..=100")]
    RiskOutOfRange {
        /// the offending location
        location: Point,
        /// the value found there
        value: Cost,
    },
}

/// Errors raised while loading a Grid from a text resource.
#[derive(Error, Debug)]
pub enum LoadError {
    /// The resource could not be read.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// The resource contains no rows.
    #[error("map contains no rows")]
    Empty,

    /// A cell is not a non-negative integer.
    #[error("invalid cell {token:?} at row {row}, column {col}")]
    Parse {
        /// 0-based row of the cell
        row: usize,
        /// 0-based column of the cell
        col: usize,
        /// the text that failed to parse
        token: String,
    },

    /// A row has a different length than the first row.
    #[error("row {row} has {found} cells, expected {expected}")]
    Irregular {
        /// 0-based index of the offending row
        row: usize,
        /// length of the first row
        expected: usize,
        /// length of the offending row
        found: usize,
    },
}

/// Errors raised while validating command line tokens.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    /// The token is not of the form `row,col`.
    #[error("invalid location {0:?}, expected `row,col`")]
    Location(String),

    /// The location does not fit on the Grid.
    #[error("location {location:?} is outside the {rows}x{cols} map")]
    LocationOutOfBounds {
        /// the offending location
        location: Point,
        /// number of rows of the map
        rows: usize,
        /// number of columns of the map
        cols: usize,
    },

    /// The token is not a number.
    #[error("invalid threshold {0:?}")]
    Threshold(String),

    /// The number is outside of the accepted range.
    #[error("threshold {value} is outside {min}..={max}")]
    ThresholdOutOfRange {
        /// the parsed value
        value: f64,
        /// the lowest accepted value
        min: f64,
        /// the highest accepted value
        max: f64,
    },
}

/// Any error this crate can produce.
#[derive(Error, Debug)]
pub enum Error {
    /// see [`GridError`]
    #[error(transparent)]
    Grid(#[from] GridError),

    /// see [`LoadError`]
    #[error(transparent)]
    Load(#[from] LoadError),

    /// see [`ValidationError`]
    #[error(transparent)]
    Validation(#[from] ValidationError),
}

/// Shorthand for results carrying the crate-wide [`Error`].
pub type Result<T> = std::result::Result<T, Error>;
