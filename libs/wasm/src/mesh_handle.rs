//! # Mesh Handle
//!
//! WASM-friendly wrapper for a rasterized mesh that can be transferred to
//! JavaScript.

use polygon_mesh::{outline, Boundary, GridSpec, Mesh, MeshReport, MeshResult};
use wasm_bindgen::prelude::*;

/// A handle to mesh data that can be accessed from JavaScript.
///
/// # Example (JavaScript)
///
/// ```javascript
/// const mesh = rasterize_polygon(20, 6, 1, 1, 0, 0, 0, "auto");
///
/// const cells = mesh.cells();      // Float64Array [x0, y0, x1, y1, ...]
/// const outline = mesh.outline();  // Float64Array of boundary vertices
/// for (let i = 0; i < mesh.count; i++) {
///     ctx.fillRect(cells[2 * i], cells[2 * i + 1], mesh.x_spacing, mesh.y_spacing);
/// }
/// title.textContent = mesh.title();
/// ```
#[wasm_bindgen]
#[derive(Debug, Clone)]
pub struct MeshHandle {
    /// Accepted cell corners as [x, y, x, y, ...]
    cells: Vec<f64>,
    /// Boundary outline as [x, y, x, y, ...]
    outline: Vec<f64>,
    report: MeshReport,
}

#[wasm_bindgen]
impl MeshHandle {
    /// Number of accepted cells.
    #[wasm_bindgen(getter)]
    pub fn count(&self) -> usize {
        self.report.element_count
    }

    /// Covered area.
    #[wasm_bindgen(getter)]
    pub fn area(&self) -> f64 {
        self.report.area
    }

    /// Element width.
    #[wasm_bindgen(getter)]
    pub fn x_spacing(&self) -> f64 {
        self.report.x_spacing
    }

    /// Element height.
    #[wasm_bindgen(getter)]
    pub fn y_spacing(&self) -> f64 {
        self.report.y_spacing
    }

    /// Cell corners as a Float64Array, two entries per cell.
    pub fn cells(&self) -> Vec<f64> {
        self.cells.clone()
    }

    /// Boundary outline as a Float64Array, two entries per point.
    pub fn outline(&self) -> Vec<f64> {
        self.outline.clone()
    }

    /// Figure title summarizing the mesh.
    pub fn title(&self) -> String {
        self.report.to_string()
    }

    /// The summary as a JSON string.
    pub fn report_json(&self) -> Result<String, JsValue> {
        self.report_json_internal()
            .map_err(|err| JsValue::from_str(&err.to_string()))
    }
}

impl MeshHandle {
    /// Packages `mesh` together with its outline and summary.
    pub fn new(mesh: Mesh, boundary: &Boundary, spec: &GridSpec) -> MeshResult<Self> {
        let report = MeshReport::new(&mesh, spec);
        let outline = flatten(outline(boundary, spec)?);
        Ok(Self {
            cells: flatten(mesh.into_cells()),
            outline,
            report,
        })
    }

    /// The summary behind this handle.
    pub fn report(&self) -> &MeshReport {
        &self.report
    }

    /// Host-side JSON encoding of the summary.
    pub fn report_json_internal(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.report)
    }
}

fn flatten(points: Vec<glam::DVec2>) -> Vec<f64> {
    points.into_iter().flat_map(|p| [p.x, p.y]).collect()
}
