//! # Candidate Grid
//!
//! Grid specification, centering policy and candidate cell generation.
//!
//! ## Centering
//!
//! - **OnElement**: the mesh origin is the centre of a cell. Candidate
//!   offsets are `0, +s, −s, +2s, −2s, …`, nearest first.
//! - **OnCorner**: the mesh origin is a cell corner. Candidate corners run
//!   from `−b` up to (excluding) `b`, with `b = radius + radius mod s`.
//! - **Auto**: OnCorner when the diameter is a multiple of twice both
//!   spacings, OnElement otherwise.

#[cfg(test)]
mod tests;

use std::fmt;
use std::str::FromStr;

use config::constants::{is_multiple_of, DEFAULT_SPACING, EPSILON_TOLERANCE, MAX_CANDIDATE_CELLS};
use glam::DVec2;
use serde::{Deserialize, Serialize};

use crate::error::{ensure_positive, MeshError, MeshResult};

/// Whether the mesh origin sits on a cell centre or a cell corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Centering {
    /// Origin at the centre of a cell.
    OnElement,
    /// Origin at the corner of a cell.
    OnCorner,
    /// Decide from the diameter and spacings.
    #[default]
    Auto,
}

impl FromStr for Centering {
    type Err = MeshError;

    /// Accepts `auto`, `element`/`true` and `corner`/`false`, in any case.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "auto" => Ok(Self::Auto),
            "element" | "true" => Ok(Self::OnElement),
            "corner" | "false" => Ok(Self::OnCorner),
            _ => Err(MeshError::configuration(format!(
                "unrecognised centering \"{s}\"; choose 'element' (true), 'corner' (false) or 'auto'"
            ))),
        }
    }
}

impl fmt::Display for Centering {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::OnElement => "element",
            Self::OnCorner => "corner",
            Self::Auto => "auto",
        };
        f.write_str(name)
    }
}

/// Extent, element size, centering and offset of a mesh.
///
/// # Example
///
/// ```rust
/// use polygon_mesh::{Centering, GridSpec};
///
/// let spec = GridSpec::new(20.0).with_spacing(1.0, 2.0);
/// assert_eq!(spec.resolved_centering(), Centering::OnCorner);
/// assert_eq!(spec.unit_area(), 2.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridSpec {
    /// Diameter of the bounding circle
    pub diameter: f64,
    /// Element width
    pub x_spacing: f64,
    /// Element height
    pub y_spacing: f64,
    /// Centering policy
    pub centering: Centering,
    /// Offset applied to the whole mesh and its boundary
    pub translate: DVec2,
}

impl GridSpec {
    /// A grid of the given diameter with unit spacing, automatic centering
    /// and no offset.
    pub fn new(diameter: f64) -> Self {
        Self {
            diameter,
            x_spacing: DEFAULT_SPACING,
            y_spacing: DEFAULT_SPACING,
            centering: Centering::Auto,
            translate: DVec2::ZERO,
        }
    }

    /// Sets the element size.
    pub fn with_spacing(mut self, x_spacing: f64, y_spacing: f64) -> Self {
        self.x_spacing = x_spacing;
        self.y_spacing = y_spacing;
        self
    }

    /// Sets the centering policy.
    pub fn with_centering(mut self, centering: Centering) -> Self {
        self.centering = centering;
        self
    }

    /// Sets the mesh offset.
    pub fn with_translate(mut self, translate: DVec2) -> Self {
        self.translate = translate;
        self
    }

    /// Checks that diameter and spacings are positive and finite.
    pub fn validate(&self) -> MeshResult<()> {
        ensure_positive("diameter", self.diameter)?;
        ensure_positive("x_spacing", self.x_spacing)?;
        ensure_positive("y_spacing", self.y_spacing)?;
        if !(self.translate.x.is_finite() && self.translate.y.is_finite()) {
            return Err(MeshError::precondition(format!(
                "translate must be finite: {}",
                self.translate
            )));
        }
        Ok(())
    }

    /// Half the diameter.
    pub fn radius(&self) -> f64 {
        0.5 * self.diameter
    }

    /// Area of a single element.
    pub fn unit_area(&self) -> f64 {
        self.x_spacing * self.y_spacing
    }

    /// Half the element size, the offset between a cell corner and its centre.
    pub fn half_cell(&self) -> DVec2 {
        DVec2::new(0.5 * self.x_spacing, 0.5 * self.y_spacing)
    }

    /// The centering actually used; never [`Centering::Auto`].
    pub fn resolved_centering(&self) -> Centering {
        match self.centering {
            Centering::Auto => {
                if is_multiple_of(self.diameter, 2.0 * self.x_spacing)
                    && is_multiple_of(self.diameter, 2.0 * self.y_spacing)
                {
                    Centering::OnCorner
                } else {
                    Centering::OnElement
                }
            }
            fixed => fixed,
        }
    }
}

// =============================================================================
// CANDIDATE GENERATION
// =============================================================================

/// One candidate cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Lower-left corner of the cell
    pub anchor: DVec2,
    /// Representative point tested for inclusion
    pub center: DVec2,
    /// Representative point relative to the mesh origin, before translation
    pub offset: DVec2,
}

/// The translated candidate coordinates of a grid, in scan order.
///
/// Untranslated offsets are kept alongside, so origin-relative tests are
/// not perturbed by rounding in `offset + translate`.
#[derive(Debug, Clone, PartialEq)]
pub struct CandidateGrid {
    /// Cell-centre x coordinates, one per column
    pub xs: Vec<f64>,
    /// Cell-centre y coordinates, one per row
    pub ys: Vec<f64>,
    /// Resolved centering
    pub centering: Centering,
    offsets_x: Vec<f64>,
    offsets_y: Vec<f64>,
    half_cell: DVec2,
}

impl CandidateGrid {
    /// Builds the candidate grid for `spec`.
    ///
    /// # Errors
    ///
    /// `Precondition` for an invalid spec or a grid exceeding
    /// [`MAX_CANDIDATE_CELLS`].
    pub fn new(spec: &GridSpec) -> MeshResult<Self> {
        spec.validate()?;
        let centering = spec.resolved_centering();
        let radius = spec.radius();
        let half_cell = spec.half_cell();

        let (nx, ny) = match centering {
            Centering::OnCorner => (
                corner_count(radius, spec.x_spacing),
                corner_count(radius, spec.y_spacing),
            ),
            _ => (
                element_count(radius, spec.x_spacing),
                element_count(radius, spec.y_spacing),
            ),
        };
        if nx * ny > MAX_CANDIDATE_CELLS as f64 {
            return Err(MeshError::precondition(format!(
                "grid of {nx}x{ny} candidates exceeds the limit of {MAX_CANDIDATE_CELLS}"
            )));
        }

        let (offsets_x, offsets_y) = match centering {
            Centering::OnCorner => (
                shift(corner_offsets(radius, spec.x_spacing), half_cell.x),
                shift(corner_offsets(radius, spec.y_spacing), half_cell.y),
            ),
            _ => (
                element_offsets(radius, spec.x_spacing),
                element_offsets(radius, spec.y_spacing),
            ),
        };

        Ok(Self {
            xs: shift(offsets_x.clone(), spec.translate.x),
            ys: shift(offsets_y.clone(), spec.translate.y),
            centering,
            offsets_x,
            offsets_y,
            half_cell,
        })
    }

    /// Number of candidate cells.
    pub fn len(&self) -> usize {
        self.xs.len() * self.ys.len()
    }

    /// True when the grid has no candidates.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Candidate at row-major scan index `index`.
    pub fn candidate(&self, index: usize) -> Candidate {
        let nx = self.xs.len();
        self.at(index % nx, index / nx)
    }

    /// Candidates of row `row`, in column order.
    pub fn row(&self, row: usize) -> impl Iterator<Item = Candidate> + '_ {
        (0..self.xs.len()).map(move |column| self.at(column, row))
    }

    fn at(&self, column: usize, row: usize) -> Candidate {
        let center = DVec2::new(self.xs[column], self.ys[row]);
        Candidate {
            anchor: center - self.half_cell,
            center,
            offset: DVec2::new(self.offsets_x[column], self.offsets_y[row]),
        }
    }
}

/// Translated cell-centre coordinates along each axis, after centering is
/// resolved.
///
/// # Example
///
/// ```rust
/// use polygon_mesh::{candidate_axes, Centering, GridSpec};
///
/// let spec = GridSpec::new(20.0).with_spacing(1.0, 2.0).with_centering(Centering::OnElement);
/// let (xs, ys) = candidate_axes(&spec).unwrap();
/// assert_eq!(&xs[..5], &[0.0, 1.0, -1.0, 2.0, -2.0]);
/// assert_eq!(ys.len(), 11);
/// ```
pub fn candidate_axes(spec: &GridSpec) -> MeshResult<(Vec<f64>, Vec<f64>)> {
    let grid = CandidateGrid::new(spec)?;
    Ok((grid.xs, grid.ys))
}

/// Offsets `0, +s, −s, +2s, −2s, …` out to `radius`, nearest first with the
/// positive offset ahead of the negative one.
pub fn element_offsets(radius: f64, spacing: f64) -> Vec<f64> {
    let steps = ((radius + EPSILON_TOLERANCE) / spacing).floor() as usize;
    let mut offsets = Vec::with_capacity(2 * steps + 1);
    offsets.push(0.0);
    for k in 1..=steps {
        let offset = k as f64 * spacing;
        offsets.push(offset);
        offsets.push(-offset);
    }
    offsets
}

/// Cell corners from `−b` up to (excluding) `b`, with `b = radius + radius mod spacing`.
pub fn corner_offsets(radius: f64, spacing: f64) -> Vec<f64> {
    let bound = corner_bound(radius, spacing);
    let count = corner_count(radius, spacing) as usize;
    (0..count).map(|k| -bound + k as f64 * spacing).collect()
}

fn corner_bound(radius: f64, spacing: f64) -> f64 {
    radius + radius % spacing
}

fn corner_count(radius: f64, spacing: f64) -> f64 {
    let bound = corner_bound(radius, spacing);
    ((2.0 * bound - EPSILON_TOLERANCE) / spacing).ceil().max(0.0)
}

fn element_count(radius: f64, spacing: f64) -> f64 {
    2.0 * ((radius + EPSILON_TOLERANCE) / spacing).floor() + 1.0
}

fn shift(mut offsets: Vec<f64>, by: f64) -> Vec<f64> {
    for offset in &mut offsets {
        *offset += by;
    }
    offsets
}
