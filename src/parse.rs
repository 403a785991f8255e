//! Validation of the command line arguments a search is started with.
//!
//! All functions fit clap's `value_parser`.

use crate::{map::Grid, Cost, Point, ValidationError};

/// The highest accepted terrain threshold.
pub const MAX_TERRAIN_THRESHOLD: Cost = 1000;

/// Parses a location written as `row,col`, optionally in parentheses.
///
/// ```
/// # use safe_pathfinding::parse::parse_location;
/// assert_eq!(parse_location("3,2"), Ok((3, 2)));
/// assert_eq!(parse_location("(0, 3)"), Ok((0, 3)));
/// assert!(parse_location("3;2").is_err());
/// ```
pub fn parse_location(token: &str) -> Result<Point, ValidationError> {
    let invalid = || ValidationError::Location(token.to_owned());

    let trimmed = token.trim();
    let inner = trimmed
        .strip_prefix('(')
        .and_then(|rest| rest.strip_suffix(')'))
        .unwrap_or(trimmed);

    let (row, col) = inner.split_once(',').ok_or_else(invalid)?;
    let row = row.trim().parse().map_err(|_| invalid())?;
    let col = col.trim().parse().map_err(|_| invalid())?;
    Ok((row, col))
}

/// Checks that `location` lies on `grid`.
pub fn check_location(location: Point, grid: &Grid) -> Result<Point, ValidationError> {
    if grid.contains(location) {
        Ok(location)
    } else {
        Err(ValidationError::LocationOutOfBounds {
            location,
            rows: grid.rows(),
            cols: grid.cols(),
        })
    }
}

/// Parses a terrain threshold: an integer in `0..=1000`.
pub fn parse_terrain_threshold(token: &str) -> Result<Cost, ValidationError> {
    let trimmed = token.trim();
    let max = MAX_TERRAIN_THRESHOLD as f64;
    let value: Cost = trimmed.parse().map_err(|_| match trimmed.parse::<f64>() {
        // negative numbers parse as floats only
        Ok(value) if value.is_finite() && !(0.0..=max).contains(&value) => {
            out_of_range(value, 0.0, max)
        }
        _ => ValidationError::Threshold(token.to_owned()),
    })?;
    if value > MAX_TERRAIN_THRESHOLD {
        return Err(out_of_range(value as f64, 0.0, max));
    }
    Ok(value)
}

/// Parses a success threshold: a probability in `0.0..=1.0`.
pub fn parse_success_threshold(token: &str) -> Result<f64, ValidationError> {
    let value: f64 = token
        .trim()
        .parse()
        .map_err(|_| ValidationError::Threshold(token.to_owned()))?;
    if value.is_nan() {
        return Err(ValidationError::Threshold(token.to_owned()));
    }
    if !(0.0..=1.0).contains(&value) {
        return Err(out_of_range(value, 0.0, 1.0));
    }
    Ok(value)
}

fn out_of_range(value: f64, min: f64, max: f64) -> ValidationError {
    ValidationError::ThresholdOutOfRange { value, min, max }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn locations() {
        assert_eq!(parse_location("3,2"), Ok((3, 2)));
        assert_eq!(parse_location(" 3 , 2 "), Ok((3, 2)));
        assert_eq!(parse_location("(10,0)"), Ok((10, 0)));

        for bad in ["", "3", "3,", ",2", "3,2,1", "-1,2", "a,b", "(3,2", "3.5,2"] {
            assert_eq!(
                parse_location(bad),
                Err(ValidationError::Location(bad.to_owned())),
                "{:?}",
                bad
            );
        }
    }

    #[test]
    fn location_bounds() {
        let grid = Grid::filled(2, 3, 1);
        assert_eq!(check_location((1, 2), &grid), Ok((1, 2)));
        assert_eq!(
            check_location((2, 0), &grid),
            Err(ValidationError::LocationOutOfBounds {
                location: (2, 0),
                rows: 2,
                cols: 3
            })
        );
    }

    #[test]
    fn terrain_thresholds() {
        assert_eq!(parse_terrain_threshold("0"), Ok(0));
        assert_eq!(parse_terrain_threshold("50"), Ok(50));
        assert_eq!(parse_terrain_threshold("1000"), Ok(1000));
        assert!(matches!(
            parse_terrain_threshold("1001"),
            Err(ValidationError::ThresholdOutOfRange { .. })
        ));
        assert!(matches!(
            parse_terrain_threshold("-1"),
            Err(ValidationError::ThresholdOutOfRange { .. })
        ));
        assert!(matches!(
            parse_terrain_threshold("fifty"),
            Err(ValidationError::Threshold(_))
        ));
        assert!(matches!(
            parse_terrain_threshold("2.5"),
            Err(ValidationError::Threshold(_))
        ));
    }

    #[test]
    fn success_thresholds() {
        assert_eq!(parse_success_threshold("0"), Ok(0.0));
        assert_eq!(parse_success_threshold("0.75"), Ok(0.75));
        assert_eq!(parse_success_threshold("1.0"), Ok(1.0));
        assert!(matches!(
            parse_success_threshold("1.01"),
            Err(ValidationError::ThresholdOutOfRange { .. })
        ));
        assert!(matches!(
            parse_success_threshold("-0.5"),
            Err(ValidationError::ThresholdOutOfRange { .. })
        ));
        assert!(matches!(
            parse_success_threshold("NaN"),
            Err(ValidationError::Threshold(_))
        ));
        assert!(matches!(
            parse_success_threshold("likely"),
            Err(ValidationError::Threshold(_))
        ));
    }
}
