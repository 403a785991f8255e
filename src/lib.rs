#![forbid(unsafe_code)]
#![warn(missing_docs)]

//! A crate to find the cheapest Path on a weighted Grid, optionally under a minimum
//! chance of surviving the trip.
//!
//! Two searches are provided:
//!
//! - [`find_shortest_path`] looks for the Path with the lowest total cost.
//! - [`find_shortest_safe_path`] looks for the Path with the lowest total cost whose
//!   survival probability stays above a threshold, using a second Grid of per-cell
//!   encounter risks.
//!
//! Both are the same best-first (A*) loop. The safe variant orders its frontier by cost and
//! probability and prunes candidates that are _dominated_ by another candidate for the same
//! cell, so it never needs to track a full Pareto front.
//!
//! ## Example
//! ```
//! use safe_pathfinding::prelude::*;
//!
//! // 1 = plains, 5 = forest, 100 = cliffs
//! let terrain: Grid = "1 1 1 1
//!                      1 5 100 1
//!                      1 1 1 1".parse().unwrap();
//!
//! let path = find_shortest_path((0, 0), (2, 3), &terrain, 50)
//!     .unwrap()
//!     .expect("a path exists");
//!
//! assert_eq!(path.cost(), 10);
//! assert_eq!(path[0], (0, 0));
//! assert_eq!(path[path.len() - 1], (2, 3));
//!
//! // percent chance of running into trouble on each cell
//! let risk: Grid = "0 50 50 0
//!                   0 0  0  0
//!                   0 0  0  0".parse().unwrap();
//!
//! let safe = find_shortest_safe_path((0, 0), (2, 3), &terrain, 50, &risk, 0.9)
//!     .unwrap()
//!     .expect("a safe path exists");
//!
//! assert_eq!(safe.cost(), 10);
//! assert_eq!(safe.survival_probability(), 1.0);
//! ```
//!
//! ## Cargo Features
//!
//! #### log (default)
//!
//! Enables internal logging through the [`log`](https://docs.rs/log) facade and the
//! `LogObserver`, which reports every enqueued, visited and ignored node.
//!
//! #### cli
//!
//! Builds the `safe-pathfinding` binary, pulling in `clap` and `env_logger`. Implies `log`.
//! Off by default so library users don't compile either.

/// A location on the Grid, as `(row, column)`.
pub type Point = (usize, usize);

type PointMap<V> = hashbrown::HashMap<Point, V>;

mod error;
pub use error::{Error, GridError, LoadError, Result, ValidationError};

mod grid;
pub use grid::{
    find_shortest_path, find_shortest_path_with, find_shortest_safe_path,
    find_shortest_safe_path_with,
};

pub mod map;

pub mod neighbors;

pub mod observer;

pub mod parse;

mod path;
pub use path::{Cost, Path, SafePath};

pub mod tree;

/// The prelude for this crate.
pub mod prelude {
    pub use crate::{
        find_shortest_path, find_shortest_path_with, find_shortest_safe_path,
        find_shortest_safe_path_with,
        map::{CostModel, Grid},
        neighbors::{ManhattanNeighborhood, Neighborhood},
        observer::{EventLog, SearchEvent, SearchObserver},
        Cost, Path, Point, SafePath,
    };
}
