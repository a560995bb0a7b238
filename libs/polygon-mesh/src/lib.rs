//! # Polygon Mesh
//!
//! Rectangular-element meshes approximating circular and regular-polygon
//! geometries, for finite-difference simulations.
//!
//! ## Architecture
//!
//! ```text
//! coords (Cartesian ↔ cylindrical)
//!    ↓
//! polygon (angle-sum classifier)     circumradius (side / apothem → R)
//!    ↓
//! grid (centering, candidates) → raster (Mesh) → report (summary, outline)
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use polygon_mesh::{circumradius, rasterize_polygon, Centering};
//! use glam::DVec2;
//!
//! // A square with 20 nm edges
//! let radius = circumradius(4, 20.0, 0.0).unwrap();
//! let mesh = rasterize_polygon(
//!     2.0 * radius,
//!     4,
//!     1.0,
//!     1.0,
//!     std::f64::consts::FRAC_PI_4,
//!     DVec2::ZERO,
//!     Centering::OnElement,
//! )
//! .unwrap();
//! assert!(mesh.count() > 0);
//! ```

pub mod circumradius;
pub mod coords;
pub mod error;
pub mod grid;
pub mod polygon;
pub mod raster;
pub mod report;

pub use circumradius::{circumradius, circumradius_of, round_to, PolygonMeasure};
pub use config::constants::Tolerances;
pub use coords::{to_cartesian, to_polar, Polar};
pub use error::{MeshError, MeshResult};
pub use grid::{candidate_axes, Centering, GridSpec};
pub use polygon::{is_inside, RegularPolygon};
pub use raster::{
    rasterize, rasterize_circle, rasterize_par, rasterize_polygon, rasterize_with, Boundary, Mesh,
};
pub use report::{outline, MeshReport};
