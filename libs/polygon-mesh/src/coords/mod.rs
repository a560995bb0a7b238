//! # Coordinate Conversion
//!
//! The single conversion law between Cartesian and cylindrical coordinates
//! used by every other module.
//!
//! ## Convention
//!
//! - `radius = sqrt(x² + y²)`: planar distance, the height never contributes
//! - `angle = atan2(y, x)` in (−π, π], with the origin at angle 0
//! - `height = z`, carried through unchanged


use std::f64::consts::PI;

use glam::{DVec2, DVec3};

/// A point in cylindrical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Polar {
    /// Planar distance from the axis
    pub radius: f64,
    /// Azimuth in radians
    pub angle: f64,
    /// Height along the axis
    pub height: f64,
}

impl Polar {
    /// Creates a cylindrical coordinate.
    pub fn new(radius: f64, angle: f64, height: f64) -> Self {
        Self {
            radius,
            angle,
            height,
        }
    }

    /// Converts a planar point, with zero height.
    ///
    /// # Example
    ///
    /// ```rust
    /// use polygon_mesh::coords::Polar;
    /// use glam::DVec2;
    ///
    /// let p = Polar::from_point(DVec2::new(0.0, 2.0));
    /// assert_eq!(p.radius, 2.0);
    /// assert_eq!(p.angle, std::f64::consts::FRAC_PI_2);
    /// ```
    pub fn from_point(point: DVec2) -> Self {
        to_polar(point.x, point.y, 0.0)
    }

    /// Planar Cartesian position, dropping the height.
    pub fn to_point(self) -> DVec2 {
        polar_point(self.radius, self.angle)
    }

    /// Full Cartesian position.
    pub fn to_cartesian(self) -> DVec3 {
        to_cartesian(self.radius, self.angle, self.height)
    }
}

/// Converts cylindrical `(radius, angle, height)` to Cartesian `(x, y, z)`.
pub fn to_cartesian(radius: f64, angle: f64, height: f64) -> DVec3 {
    let planar = polar_point(radius, angle);
    DVec3::new(planar.x, planar.y, height)
}

/// Converts Cartesian `(x, y, z)` to cylindrical coordinates.
///
/// # Example
///
/// ```rust
/// use polygon_mesh::coords::{to_cartesian, to_polar};
///
/// let polar = to_polar(-3.0, 4.0, 1.5);
/// assert_eq!(polar.radius, 5.0);
/// let back = to_cartesian(polar.radius, polar.angle, polar.height);
/// assert!((back.x + 3.0).abs() < 1e-12 && (back.y - 4.0).abs() < 1e-12);
/// assert_eq!(back.z, 1.5);
/// ```
pub fn to_polar(x: f64, y: f64, z: f64) -> Polar {
    let angle = y.atan2(x);
    Polar {
        radius: (x * x + y * y).sqrt(),
        // atan2(-0.0, x < 0) is -π
        angle: if angle == -PI { PI } else { angle },
        height: z,
    }
}

/// Planar point at `radius` along the direction `angle`.
#[inline]
pub fn polar_point(radius: f64, angle: f64) -> DVec2 {
    let (sin, cos) = angle.sin_cos();
    DVec2::new(radius * cos, radius * sin)
}
