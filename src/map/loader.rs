use super::Grid;
use crate::{Cost, LoadError};

use std::str::FromStr;

/// Parses a Grid from text: one row per non-blank line, cells separated by whitespace and/or
/// commas.
///
/// ```
/// # use safe_pathfinding::map::Grid;
/// let grid: Grid = "1, 2, 3\n4 5 6\n".parse().unwrap();
/// assert_eq!(grid.shape(), (2, 3));
/// ```
impl FromStr for Grid {
    type Err = LoadError;

    fn from_str(s: &str) -> Result<Grid, LoadError> {
        let rows = s
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .enumerate()
            .map(|(row, line)| parse_row(row, line))
            .collect::<Result<Vec<_>, _>>()?;

        Grid::from_rows(rows)
    }
}

fn parse_row(row: usize, line: &str) -> Result<Vec<Cost>, LoadError> {
    line.split(|c: char| c == ',' || c.is_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(col, token)| {
            token.parse::<Cost>().map_err(|_| LoadError::Parse {
                row,
                col,
                token: token.to_owned(),
            })
        })
        .collect()
}

impl Grid {
    /// Reads a Grid from a text file. See [`FromStr`] for the format.
    ///
    /// ## Errors
    /// [`LoadError::Io`] if the file can't be read, or any error of the text format.
    pub fn load(path: impl AsRef<std::path::Path>) -> Result<Grid, LoadError> {
        let text = std::fs::read_to_string(path)?;
        text.parse()
    }
}
