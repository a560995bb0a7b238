//! # Mesh Rasterizer
//!
//! Selects the grid cells whose representative point falls inside a
//! circular or regular-polygon boundary and accumulates the covered area.
//!
//! ## Scan Order
//!
//! Rows run over y and columns over x, both in the order produced by the
//! candidate grid. Accepted cells keep that order.
//!
//! ## Row Short-Circuit
//!
//! For a circle scanned with element centering, offsets grow in magnitude
//! along a row, so the first rejected cell ends the row. Polygons are
//! evaluated cell by cell: a rotated or translated polygon is not
//! monotonic along a raw axis scan.


use config::constants::Tolerances;
use glam::DVec2;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{ensure_sides, MeshResult};
use crate::grid::{Candidate, CandidateGrid, Centering, GridSpec};
use crate::polygon::RegularPolygon;

/// The shape a mesh approximates.
///
/// Both shapes are inscribed in the grid's bounding circle: the circle has
/// the grid diameter, the polygon has it as its circumscribed diameter.
/// Both are centred on the grid translation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Boundary {
    /// The bounding circle itself.
    Circle,
    /// A regular polygon inscribed in the bounding circle.
    Polygon {
        /// Number of sides
        sides: u32,
        /// Rotation of the first vertex from the +x axis, in radians
        rotation: f64,
    },
}

impl Boundary {
    /// Polygon descriptor for `spec`, or `None` for a circle.
    pub fn polygon(&self, spec: &GridSpec) -> MeshResult<Option<RegularPolygon>> {
        match *self {
            Boundary::Circle => Ok(None),
            Boundary::Polygon { sides, rotation } => {
                RegularPolygon::new(sides, spec.radius(), rotation, spec.translate).map(Some)
            }
        }
    }
}

/// Inclusion test for one boundary, built once per rasterization.
enum Classifier {
    Circle { radius: f64 },
    Polygon { polygon: RegularPolygon, tolerances: Tolerances },
}

impl Classifier {
    fn new(boundary: &Boundary, spec: &GridSpec, tolerances: Tolerances) -> MeshResult<Self> {
        Ok(match boundary.polygon(spec)? {
            None => Classifier::Circle {
                radius: spec.radius(),
            },
            Some(polygon) => Classifier::Polygon {
                polygon,
                tolerances,
            },
        })
    }

    /// The circle is tested on the untranslated offset so a translated
    /// mesh keeps the exact cell set of the centred one.
    #[inline]
    fn accepts(&self, candidate: &Candidate) -> bool {
        match self {
            Classifier::Circle { radius } => candidate.offset.length() <= *radius,
            Classifier::Polygon {
                polygon,
                tolerances,
            } => polygon.contains_with(candidate.center, tolerances),
        }
    }
}

/// Accepted cells of a rasterized boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mesh {
    cells: Vec<DVec2>,
    x_spacing: f64,
    y_spacing: f64,
    centering: Centering,
    candidates: usize,
}

impl Mesh {
    /// Lower-left corners of the accepted cells, in scan order.
    pub fn cells(&self) -> &[DVec2] {
        &self.cells
    }

    /// Consumes the mesh, returning the accepted cell corners.
    pub fn into_cells(self) -> Vec<DVec2> {
        self.cells
    }

    /// Number of accepted cells.
    pub fn count(&self) -> usize {
        self.cells.len()
    }

    /// True when no cell was accepted.
    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Covered area: accepted count times the element area.
    pub fn area(&self) -> f64 {
        self.count() as f64 * self.x_spacing * self.y_spacing
    }

    /// Element width.
    pub fn x_spacing(&self) -> f64 {
        self.x_spacing
    }

    /// Element height.
    pub fn y_spacing(&self) -> f64 {
        self.y_spacing
    }

    /// Centering used for the scan (never `Auto`).
    pub fn centering(&self) -> Centering {
        self.centering
    }

    /// Number of candidate cells in the grid that was scanned.
    pub fn candidates(&self) -> usize {
        self.candidates
    }

    /// Centres of the accepted cells.
    pub fn centers(&self) -> impl Iterator<Item = DVec2> + '_ {
        let half = DVec2::new(0.5 * self.x_spacing, 0.5 * self.y_spacing);
        self.cells.iter().map(move |&corner| corner + half)
    }

    /// Accepted cells as `(corner, size)` rectangles for drawing.
    pub fn rectangles(&self) -> impl Iterator<Item = (DVec2, DVec2)> + '_ {
        let size = DVec2::new(self.x_spacing, self.y_spacing);
        self.cells.iter().map(move |&corner| (corner, size))
    }
}

/// Rasterizes `boundary` over the grid described by `spec` with default
/// tolerances.
///
/// # Errors
///
/// `Precondition` for a non-positive diameter or spacing, fewer than three
/// sides, or an oversized grid.
///
/// # Example
///
/// ```rust
/// use polygon_mesh::{rasterize, Boundary, GridSpec};
///
/// let mesh = rasterize(&Boundary::Circle, &GridSpec::new(10.0)).unwrap();
/// assert_eq!(mesh.count(), 80);
/// assert_eq!(mesh.area(), 80.0);
/// ```
pub fn rasterize(boundary: &Boundary, spec: &GridSpec) -> MeshResult<Mesh> {
    rasterize_with(boundary, spec, Tolerances::default())
}

/// Rasterizes with explicit classifier tolerances.
pub fn rasterize_with(
    boundary: &Boundary,
    spec: &GridSpec,
    tolerances: Tolerances,
) -> MeshResult<Mesh> {
    let (grid, classifier) = prepare(boundary, spec, tolerances)?;
    let short_circuit =
        matches!(boundary, Boundary::Circle) && grid.centering == Centering::OnElement;

    let mut cells = Vec::new();
    for row in 0..grid.ys.len() {
        for candidate in grid.row(row) {
            if classifier.accepts(&candidate) {
                cells.push(candidate.anchor);
            } else if short_circuit {
                break;
            }
        }
    }

    Ok(finish(cells, spec, &grid))
}

/// Rasterizes with every candidate classified on the rayon thread pool.
///
/// Produces the same mesh as [`rasterize`], cells in scan order.
pub fn rasterize_par(boundary: &Boundary, spec: &GridSpec) -> MeshResult<Mesh> {
    let (grid, classifier) = prepare(boundary, spec, Tolerances::default())?;

    let cells: Vec<DVec2> = (0..grid.len())
        .into_par_iter()
        .filter_map(|index| {
            let candidate = grid.candidate(index);
            classifier
                .accepts(&candidate)
                .then_some(candidate.anchor)
        })
        .collect();

    Ok(finish(cells, spec, &grid))
}

/// Meshes a circle of `diameter` centred on `translate`.
///
/// # Example
///
/// ```rust
/// use polygon_mesh::{rasterize_circle, Centering};
/// use glam::DVec2;
///
/// let mesh = rasterize_circle(60.0, 1.0, 1.0, Centering::Auto, DVec2::ZERO).unwrap();
/// let ratio = mesh.area() / (std::f64::consts::PI * 30.0 * 30.0);
/// assert!(ratio > 0.9);
/// ```
pub fn rasterize_circle(
    diameter: f64,
    x_spacing: f64,
    y_spacing: f64,
    centering: Centering,
    translate: DVec2,
) -> MeshResult<Mesh> {
    let spec = GridSpec::new(diameter)
        .with_spacing(x_spacing, y_spacing)
        .with_centering(centering)
        .with_translate(translate);
    rasterize(&Boundary::Circle, &spec)
}

/// Meshes a regular polygon whose circumscribed circle has `diameter`.
pub fn rasterize_polygon(
    diameter: f64,
    sides: u32,
    x_spacing: f64,
    y_spacing: f64,
    rotation: f64,
    translate: DVec2,
    centering: Centering,
) -> MeshResult<Mesh> {
    let spec = GridSpec::new(diameter)
        .with_spacing(x_spacing, y_spacing)
        .with_centering(centering)
        .with_translate(translate);
    rasterize(&Boundary::Polygon { sides, rotation }, &spec)
}

fn prepare(
    boundary: &Boundary,
    spec: &GridSpec,
    tolerances: Tolerances,
) -> MeshResult<(CandidateGrid, Classifier)> {
    if let Boundary::Polygon { sides, .. } = boundary {
        ensure_sides(*sides)?;
    }
    let grid = CandidateGrid::new(spec)?;
    let classifier = Classifier::new(boundary, spec, tolerances)?;
    debug!(
        ?boundary,
        diameter = spec.diameter,
        centering = %grid.centering,
        columns = grid.xs.len(),
        rows = grid.ys.len(),
        "rasterizing"
    );
    Ok((grid, classifier))
}

fn finish(cells: Vec<DVec2>, spec: &GridSpec, grid: &CandidateGrid) -> Mesh {
    let mesh = Mesh {
        cells,
        x_spacing: spec.x_spacing,
        y_spacing: spec.y_spacing,
        centering: grid.centering,
        candidates: grid.len(),
    };
    debug!(accepted = mesh.count(), area = mesh.area(), "rasterized");
    mesh
}
