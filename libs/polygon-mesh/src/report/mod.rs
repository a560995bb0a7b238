//! # Mesh Report
//!
//! Summary data and outline geometry handed to renderers. Nothing here
//! draws; it only packages what a figure needs.

#[cfg(test)]
mod tests;

use std::f64::consts::TAU;
use std::fmt;

use config::constants::DEFAULT_OUTLINE_SEGMENTS;
use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::coords::polar_point;
use crate::error::MeshResult;
use crate::grid::{Centering, GridSpec};
use crate::raster::{Boundary, Mesh};

/// Summary of a rasterized mesh.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeshReport {
    /// Diameter of the bounding circle
    pub diameter: f64,
    /// Number of accepted elements
    pub element_count: usize,
    /// Element width
    pub x_spacing: f64,
    /// Element height
    pub y_spacing: f64,
    /// Covered area
    pub area: f64,
    /// Centering used for the scan
    pub centering: Centering,
}

impl MeshReport {
    /// Summarizes `mesh`, rasterized over `spec`.
    pub fn new(mesh: &Mesh, spec: &GridSpec) -> Self {
        Self {
            diameter: spec.diameter,
            element_count: mesh.count(),
            x_spacing: mesh.x_spacing(),
            y_spacing: mesh.y_spacing(),
            area: mesh.area(),
            centering: mesh.centering(),
        }
    }
}

impl fmt::Display for MeshReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Diameter = {:.2} nm, {} elements of size {}x{} nm",
            self.diameter, self.element_count, self.x_spacing, self.y_spacing
        )
    }
}

/// Outline of `boundary` for display: the polygon's vertices, or a circle
/// sampled at [`DEFAULT_OUTLINE_SEGMENTS`] points.
///
/// # Example
///
/// ```rust
/// use polygon_mesh::{outline, Boundary, GridSpec};
///
/// let spec = GridSpec::new(20.0);
/// let square = outline(&Boundary::Polygon { sides: 4, rotation: 0.0 }, &spec).unwrap();
/// assert_eq!(square.len(), 4);
/// assert!((square[0].x - 10.0).abs() < 1e-12);
/// ```
pub fn outline(boundary: &Boundary, spec: &GridSpec) -> MeshResult<Vec<DVec2>> {
    spec.validate()?;
    if let Some(polygon) = boundary.polygon(spec)? {
        return Ok(polygon.vertices());
    }
    let segments = DEFAULT_OUTLINE_SEGMENTS;
    Ok((0..segments)
        .map(|i| {
            let angle = TAU * f64::from(i) / f64::from(segments);
            spec.translate + polar_point(spec.radius(), angle)
        })
        .collect())
}
