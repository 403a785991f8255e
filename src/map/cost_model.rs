use super::Grid;
use crate::{Cost, GridError, Point};

/// Bounds-checked cost lookups on a terrain Grid and an optional risk Grid.
///
/// Risk values are percentages: a cell with risk `r` lets a traveller through with
/// probability `1 - r / 100`.
#[derive(Clone, Copy, Debug)]
pub struct CostModel<'g> {
    terrain: &'g Grid,
    risk: Option<&'g Grid>,
}

impl<'g> CostModel<'g> {
    /// A model without risk: every [`risk_factor`](CostModel::risk_factor) is `1.0`.
    pub fn new(terrain: &'g Grid) -> CostModel<'g> {
        CostModel {
            terrain,
            risk: None,
        }
    }

    /// A model reading encounter risks from `risk`.
    ///
    /// ## Errors
    /// [`GridError::DimensionMismatch`] if the Grids differ in shape,
    /// [`GridError::RiskOutOfRange`] if any risk exceeds 100.
    pub fn with_risk(terrain: &'g Grid, risk: &'g Grid) -> Result<CostModel<'g>, GridError> {
        if terrain.shape() != risk.shape() {
            return Err(GridError::DimensionMismatch {
                expected: terrain.shape(),
                found: risk.shape(),
            });
        }
        if let Some((location, value)) = risk.iter().find(|&(_, value)| value > 100) {
            return Err(GridError::RiskOutOfRange { location, value });
        }
        Ok(CostModel {
            terrain,
            risk: Some(risk),
        })
    }

    /// The terrain Grid.
    pub fn terrain(&self) -> &'g Grid {
        self.terrain
    }

    /// Whether a risk Grid is attached.
    pub fn has_risk(&self) -> bool {
        self.risk.is_some()
    }

    /// The terrain cost of the cell at `pos`.
    pub fn cell_cost(&self, pos: Point) -> Result<Cost, GridError> {
        self.terrain.value(pos)
    }

    /// The cost of moving between two adjacent cells: the sum of both cell costs.
    ///
    /// ## Errors
    /// [`GridError::OutOfBounds`] for locations outside the Grid,
    /// [`GridError::CostOverflow`] if the sum doesn't fit in a [`Cost`].
    pub fn edge_cost(&self, a: Point, b: Point) -> Result<Cost, GridError> {
        self.cell_cost(a)?
            .checked_add(self.cell_cost(b)?)
            .ok_or(GridError::CostOverflow { location: b })
    }

    /// Whether the cell at `pos` may be entered under `threshold`.
    pub fn is_passable(&self, pos: Point, threshold: Cost) -> Result<bool, GridError> {
        Ok(self.cell_cost(pos)? <= threshold)
    }

    /// The probability of making it through the cell at `pos`.
    pub fn risk_factor(&self, pos: Point) -> Result<f64, GridError> {
        match self.risk {
            Some(risk) => Ok(1.0 - risk.value(pos)? as f64 / 100.0),
            None => {
                // keep the bounds check identical with or without a risk Grid
                self.terrain.value(pos)?;
                Ok(1.0)
            }
        }
    }

    /// Whether every edge on the Grid costs at least 1.
    ///
    /// The Manhattan heuristic is only admissible and consistent when it holds. Since an
    /// edge costs the sum of both cells, it fails exactly when two adjacent cells both cost 0.
    pub fn admits_consistent_heuristic(&self) -> bool {
        let grid = self.terrain;
        !grid.iter().any(|((row, col), cost)| {
            cost == 0
                && (grid.get((row + 1, col)) == Some(0) || grid.get((row, col + 1)) == Some(0))
        })
    }
}
