//! WASM-facing entry points for the polygon mesh tools.
//!
//! This crate is compiled to a `cdylib` and consumed from JavaScript via
//! `wasm-bindgen`. Native tests use the `*_internal` helpers, which return
//! Rust error types instead of `JsValue`.
//!
//! ```
//! let mesh = polygon_mesh_wasm::rasterize_circle_internal(10.0, 1.0, 1.0, "auto", 0.0, 0.0).unwrap();
//! assert_eq!(mesh.count(), 80);
//! ```

use config::constants::{ANGLE_SUM_TOLERANCE, DEFAULT_SPACING};
use glam::DVec2;
use polygon_mesh::{Boundary, Centering, GridSpec, MeshResult};
use wasm_bindgen::prelude::*;

mod mesh_handle;

pub use mesh_handle::MeshHandle;

/// Installs a panic hook that forwards Rust panics to the browser console.
///
/// # Examples
/// ```no_run
/// // In JavaScript: import and call once at startup.
/// // import { init_panic_hook } from "polygon_mesh_wasm";
/// // init_panic_hook();
/// ```
#[wasm_bindgen]
pub fn init_panic_hook() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();
}

/// Returns the default element size.
///
/// # Examples
/// ```
/// assert_eq!(polygon_mesh_wasm::default_spacing(), 1.0);
/// ```
#[wasm_bindgen]
pub fn default_spacing() -> f64 {
    DEFAULT_SPACING
}

/// Returns the default angle-sum tolerance of the classifier.
#[wasm_bindgen]
pub fn default_tolerance() -> f64 {
    ANGLE_SUM_TOLERANCE
}

/// Tests whether `(x, y)` lies inside a regular polygon centred on `(tx, ty)`.
///
/// # Errors
/// Returns a JavaScript error for fewer than three sides or a non-positive
/// radius.
#[wasm_bindgen]
pub fn is_inside(
    x: f64,
    y: f64,
    sides: u32,
    radius: f64,
    rotation: f64,
    tx: f64,
    ty: f64,
) -> Result<bool, JsValue> {
    polygon_mesh::is_inside(x, y, sides, radius, rotation, DVec2::new(tx, ty)).map_err(to_js)
}

/// Circumradius from a side length or an apothem (pass 0 for the other).
///
/// # Errors
/// Returns a JavaScript error when both or neither measure is given.
#[wasm_bindgen]
pub fn circumradius(sides: u32, side_length: f64, apothem: f64) -> Result<f64, JsValue> {
    polygon_mesh::circumradius(sides, side_length, apothem).map_err(to_js)
}

/// Meshes a circle.
///
/// `centering` is one of `"auto"`, `"element"` (`"true"`) or `"corner"`
/// (`"false"`).
///
/// # Errors
/// Returns a JavaScript error for an unknown centering or invalid sizes.
///
/// # Examples
/// ```no_run
/// // In JavaScript:
/// // const mesh = rasterize_circle(60, 1, 1, "auto", 0, 0);
/// // console.log(mesh.title());
/// ```
#[wasm_bindgen]
pub fn rasterize_circle(
    diameter: f64,
    x_spacing: f64,
    y_spacing: f64,
    centering: &str,
    tx: f64,
    ty: f64,
) -> Result<MeshHandle, JsValue> {
    rasterize_circle_internal(diameter, x_spacing, y_spacing, centering, tx, ty).map_err(to_js)
}

/// Meshes a regular polygon whose circumscribed circle has `diameter`.
///
/// # Errors
/// Returns a JavaScript error for an unknown centering, fewer than three
/// sides or invalid sizes.
#[wasm_bindgen]
#[allow(clippy::too_many_arguments)]
pub fn rasterize_polygon(
    diameter: f64,
    sides: u32,
    x_spacing: f64,
    y_spacing: f64,
    rotation: f64,
    tx: f64,
    ty: f64,
    centering: &str,
) -> Result<MeshHandle, JsValue> {
    rasterize_polygon_internal(
        diameter, sides, x_spacing, y_spacing, rotation, tx, ty, centering,
    )
    .map_err(to_js)
}

/// Host-only twin of [`rasterize_circle`].
pub fn rasterize_circle_internal(
    diameter: f64,
    x_spacing: f64,
    y_spacing: f64,
    centering: &str,
    tx: f64,
    ty: f64,
) -> MeshResult<MeshHandle> {
    let spec = grid_spec(diameter, x_spacing, y_spacing, centering, tx, ty)?;
    render(&Boundary::Circle, &spec)
}

/// Host-only twin of [`rasterize_polygon`].
#[allow(clippy::too_many_arguments)]
pub fn rasterize_polygon_internal(
    diameter: f64,
    sides: u32,
    x_spacing: f64,
    y_spacing: f64,
    rotation: f64,
    tx: f64,
    ty: f64,
    centering: &str,
) -> MeshResult<MeshHandle> {
    let spec = grid_spec(diameter, x_spacing, y_spacing, centering, tx, ty)?;
    render(&Boundary::Polygon { sides, rotation }, &spec)
}

/// The centering string is parsed first, so a bad value fails before any
/// geometry is computed.
fn grid_spec(
    diameter: f64,
    x_spacing: f64,
    y_spacing: f64,
    centering: &str,
    tx: f64,
    ty: f64,
) -> MeshResult<GridSpec> {
    let centering: Centering = centering.parse()?;
    Ok(GridSpec::new(diameter)
        .with_spacing(x_spacing, y_spacing)
        .with_centering(centering)
        .with_translate(DVec2::new(tx, ty)))
}

fn render(boundary: &Boundary, spec: &GridSpec) -> MeshResult<MeshHandle> {
    let mesh = polygon_mesh::rasterize(boundary, spec)?;
    MeshHandle::new(mesh, boundary, spec)
}

fn to_js(err: impl std::fmt::Display) -> JsValue {
    JsValue::from_str(&err.to_string())
}
