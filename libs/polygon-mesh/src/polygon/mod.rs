//! # Regular Polygon Classifier
//!
//! Decides whether a point lies inside (or on the boundary of) a regular
//! n-gon using the angle-sum test.
//!
//! ## Algorithm Overview
//!
//! 1. Derive the n vertices from the descriptor
//! 2. For each edge (Vi, Vi+1), take the angle it subtends at the query
//!    point from the cosine rule
//! 3. The point is enclosed iff the angles sum to 2π
//!
//! ## Boundary Policy
//!
//! Each edge first yields a [`Wedge`]. A point on a vertex or on an edge
//! short-circuits to inside; a point collinear with an edge but beyond it
//! short-circuits to outside. The inverse cosine is only evaluated on
//! arguments strictly inside (−1, 1).


use std::f64::consts::TAU;

use config::constants::Tolerances;
use glam::DVec2;

use crate::coords::polar_point;
use crate::error::{ensure_positive, ensure_sides, MeshResult};

/// A regular polygon described by its circumscribing circle.
///
/// Vertices are derived on demand, never stored.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RegularPolygon {
    sides: u32,
    circumradius: f64,
    rotation: f64,
    center: DVec2,
}

/// Contribution of a single edge to the angle-sum test.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Wedge {
    /// Angle subtended by the edge at the query point.
    Angle(f64),
    /// The point lies on this edge or one of its vertices.
    Inside,
    /// The point is collinear with this edge and beyond it.
    Outside,
}

impl RegularPolygon {
    /// Creates a polygon descriptor.
    ///
    /// Vertex `i` sits at `center + circumradius·(cos, sin)(2π·i/sides + rotation)`,
    /// so with zero rotation the first vertex lies on the +x axis.
    ///
    /// # Errors
    ///
    /// `Precondition` when `sides < 3` or the circumradius is not positive.
    ///
    /// # Example
    ///
    /// ```rust
    /// use polygon_mesh::RegularPolygon;
    /// use glam::DVec2;
    ///
    /// let square = RegularPolygon::new(4, 10.0, 0.0, DVec2::ZERO).unwrap();
    /// assert_eq!(square.vertices().len(), 4);
    /// assert!(square.contains(DVec2::new(3.0, 3.0)));
    /// assert!(!square.contains(DVec2::new(6.0, 6.0)));
    /// ```
    pub fn new(sides: u32, circumradius: f64, rotation: f64, center: DVec2) -> MeshResult<Self> {
        ensure_sides(sides)?;
        ensure_positive("circumradius", circumradius)?;
        Ok(Self {
            sides,
            circumradius,
            rotation,
            center,
        })
    }

    /// Number of sides (and vertices).
    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Distance from the centre to every vertex.
    pub fn circumradius(&self) -> f64 {
        self.circumradius
    }

    /// Rotation of the first vertex away from the +x axis, in radians.
    pub fn rotation(&self) -> f64 {
        self.rotation
    }

    /// Centre of the circumscribing circle.
    pub fn center(&self) -> DVec2 {
        self.center
    }

    /// Position of vertex `index` (taken modulo the side count).
    pub fn vertex(&self, index: u32) -> DVec2 {
        let index = index % self.sides;
        let angle = TAU * f64::from(index) / f64::from(self.sides) + self.rotation;
        self.center + polar_point(self.circumradius, angle)
    }

    /// All vertices, counter-clockwise from vertex 0.
    pub fn vertices(&self) -> Vec<DVec2> {
        (0..self.sides).map(|i| self.vertex(i)).collect()
    }

    /// Classifies `point` with the default tolerances.
    pub fn contains(&self, point: DVec2) -> bool {
        self.contains_with(point, &Tolerances::default())
    }

    /// Classifies `point`; boundary points count as inside.
    pub fn contains_with(&self, point: DVec2, tolerances: &Tolerances) -> bool {
        let vertices = self.vertices();
        let n = vertices.len();
        let mut total = 0.0;

        for i in 0..n {
            match wedge(point, vertices[i], vertices[(i + 1) % n], tolerances.coincidence) {
                Wedge::Angle(angle) => total += angle,
                Wedge::Inside => return true,
                Wedge::Outside => return false,
            }
        }

        (total - TAU).abs() <= tolerances.angle_sum
    }
}

/// Angle subtended at `point` by the edge from `a` to `b`.
///
/// The cosine-rule argument is range-checked before `acos`, so floating
/// point drift past ±1 on collinear configurations resolves to a
/// [`Wedge::Inside`] or [`Wedge::Outside`] instead of NaN.
pub fn wedge(point: DVec2, a: DVec2, b: DVec2, coincidence: f64) -> Wedge {
    let to_a = point.distance(a);
    let to_b = point.distance(b);
    if to_a <= coincidence || to_b <= coincidence {
        return Wedge::Inside;
    }

    let edge = a.distance(b);
    let cosine = (to_a * to_a + to_b * to_b - edge * edge) / (2.0 * to_a * to_b);

    if cosine <= -1.0 {
        // Straight angle: the point sits between a and b
        Wedge::Inside
    } else if cosine >= 1.0 {
        Wedge::Outside
    } else {
        Wedge::Angle(cosine.acos())
    }
}

/// Tests whether `(x, y)` lies inside a regular polygon whose circumscribing
/// circle has radius `radius` and is centred on `translate`.
///
/// # Errors
///
/// `Precondition` when `sides < 3` or `radius` is not positive.
///
/// # Example
///
/// ```rust
/// use polygon_mesh::is_inside;
/// use glam::DVec2;
///
/// for sides in 3..=10 {
///     assert!(is_inside(0.0, 0.0, sides, 10.0, 0.0, DVec2::ZERO).unwrap());
///     assert!(is_inside(10.0, 0.0, sides, 10.0, 0.0, DVec2::ZERO).unwrap());
///     assert!(!is_inside(11.0, 0.0, sides, 10.0, 0.0, DVec2::ZERO).unwrap());
/// }
/// ```
pub fn is_inside(
    x: f64,
    y: f64,
    sides: u32,
    radius: f64,
    rotation: f64,
    translate: DVec2,
) -> MeshResult<bool> {
    let polygon = RegularPolygon::new(sides, radius, rotation, translate)?;
    Ok(polygon.contains(DVec2::new(x, y)))
}
