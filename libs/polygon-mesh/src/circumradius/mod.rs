//! # Circumradius Solver
//!
//! Converts a desired side length or apothem into the circumscribing
//! radius that the classifier and rasterizer work with.


use std::f64::consts::PI;

use crate::error::{ensure_positive, ensure_sides, MeshError, MeshResult};

/// The measure a regular polygon is specified by.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PolygonMeasure {
    /// Length of one edge.
    SideLength(f64),
    /// Distance from the centre to the midpoint of an edge.
    Apothem(f64),
}

impl PolygonMeasure {
    /// Interprets a `(side_length, apothem)` pair where zero means "not given".
    ///
    /// # Errors
    ///
    /// `Configuration` when both or neither are given.
    pub fn from_pair(side_length: f64, apothem: f64) -> MeshResult<Self> {
        match (side_length != 0.0, apothem != 0.0) {
            (true, false) => Ok(Self::SideLength(side_length)),
            (false, true) => Ok(Self::Apothem(apothem)),
            (false, false) => Err(MeshError::configuration(
                "specify a side length or an apothem",
            )),
            (true, true) => Err(MeshError::configuration(format!(
                "specify a side length OR an apothem, not both (side_length={side_length}, apothem={apothem})"
            ))),
        }
    }
}

/// Circumradius of a regular `sides`-gon given by `measure`.
///
/// # Errors
///
/// `Precondition` when `sides < 3` or the measure is not positive.
pub fn circumradius_of(sides: u32, measure: PolygonMeasure) -> MeshResult<f64> {
    ensure_sides(sides)?;
    let half_angle = PI / f64::from(sides);
    match measure {
        PolygonMeasure::SideLength(side) => {
            ensure_positive("side length", side)?;
            Ok(side / (2.0 * half_angle.sin()))
        }
        PolygonMeasure::Apothem(apothem) => {
            ensure_positive("apothem", apothem)?;
            Ok(apothem / half_angle.cos())
        }
    }
}

/// Circumradius from a side length or an apothem; pass zero for the one
/// not given.
///
/// # Errors
///
/// `Configuration` when both or neither measure is given, `Precondition`
/// for fewer than three sides or a negative measure.
///
/// # Example
///
/// ```rust
/// use polygon_mesh::circumradius;
///
/// let from_side = circumradius(4, 10.0, 0.0).unwrap();
/// let from_apothem = circumradius(4, 0.0, 5.0).unwrap();
/// assert!((from_side - 5.0 * 2f64.sqrt()).abs() < 1e-12);
/// assert!((from_side - from_apothem).abs() < 1e-12);
/// assert!(circumradius(4, 0.0, 0.0).is_err());
/// ```
pub fn circumradius(sides: u32, side_length: f64, apothem: f64) -> MeshResult<f64> {
    let measure = PolygonMeasure::from_pair(side_length, apothem)?;
    circumradius_of(sides, measure)
}

/// Rounds `value` to `decimals` decimal places.
///
/// Kept separate from the solver: callers who want a rounded radius ask
/// for it explicitly. Precision beyond what an `f64` can scale returns
/// `value` unchanged.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let exponent = i32::try_from(decimals)
        .unwrap_or(i32::MAX)
        .min(f64::MAX_10_EXP);
    let scale = 10f64.powi(exponent);
    let scaled = value * scale;
    if !scaled.is_finite() {
        return value;
    }
    scaled.round() / scale
}
