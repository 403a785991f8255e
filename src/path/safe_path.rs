use super::{Cost, Path};

use std::ops::Deref;

/// A [`Path`] together with the probability of surviving it.
///
/// Derefs to the underlying [`Path`], so `cost()`, `len()` and indexing work directly.
#[derive(Clone, Debug, PartialEq)]
pub struct SafePath {
    path: Path,
    survival_probability: f64,
}

impl SafePath {
    pub(crate) fn new(path: Path, survival_probability: f64) -> SafePath {
        SafePath {
            path,
            survival_probability,
        }
    }

    /// The sum of all edge costs along the Path.
    pub fn cost(&self) -> Cost {
        self.path.cost()
    }

    /// The product of the survival factors of every location on the Path, start included.
    pub fn survival_probability(&self) -> f64 {
        self.survival_probability
    }

    /// The underlying Path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Consumes `self`, returning the underlying Path.
    pub fn into_path(self) -> Path {
        self.path
    }
}

impl Deref for SafePath {
    type Target = Path;
    fn deref(&self) -> &Path {
        &self.path
    }
}
