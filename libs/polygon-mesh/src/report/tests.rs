use super::*;
use crate::raster::rasterize;
use approx::assert_abs_diff_eq;

#[test]
fn test_report_matches_mesh() {
    let spec = GridSpec::new(10.0);
    let mesh = rasterize(&Boundary::Circle, &spec).unwrap();
    let report = MeshReport::new(&mesh, &spec);

    assert_eq!(report.element_count, mesh.count());
    assert_eq!(report.area, mesh.area());
    assert_eq!(report.centering, Centering::OnCorner);
}

#[test]
fn test_report_title() {
    let spec = GridSpec::new(10.0);
    let mesh = rasterize(&Boundary::Circle, &spec).unwrap();
    let title = MeshReport::new(&mesh, &spec).to_string();
    assert_eq!(title, "Diameter = 10.00 nm, 80 elements of size 1x1 nm");
}

#[test]
fn test_report_serializes() {
    let spec = GridSpec::new(10.0).with_spacing(1.0, 2.0);
    let mesh = rasterize(&Boundary::Circle, &spec).unwrap();
    let report = MeshReport::new(&mesh, &spec);

    let json = serde_json::to_string(&report).unwrap();
    assert!(json.contains("\"centering\":\"on_element\""));
    let back: MeshReport = serde_json::from_str(&json).unwrap();
    assert_eq!(back, report);
}

#[test]
fn test_circle_outline_on_circumference() {
    let spec = GridSpec::new(30.0).with_translate(DVec2::new(2.0, -1.0));
    let points = outline(&Boundary::Circle, &spec).unwrap();
    assert_eq!(points.len(), DEFAULT_OUTLINE_SEGMENTS as usize);
    for p in points {
        assert_abs_diff_eq!(p.distance(spec.translate), 15.0, epsilon = 1e-9);
    }
}

#[test]
fn test_polygon_outline_rotated() {
    let spec = GridSpec::new(20.0);
    let boundary = Boundary::Polygon {
        sides: 6,
        rotation: std::f64::consts::FRAC_PI_2,
    };
    let points = outline(&boundary, &spec).unwrap();
    assert_eq!(points.len(), 6);
    assert_abs_diff_eq!(points[0].x, 0.0, epsilon = 1e-12);
    assert_abs_diff_eq!(points[0].y, 10.0, epsilon = 1e-12);
}

#[test]
fn test_outline_rejects_bad_input() {
    assert!(outline(&Boundary::Circle, &GridSpec::new(-1.0)).is_err());
    let boundary = Boundary::Polygon {
        sides: 1,
        rotation: 0.0,
    };
    assert!(outline(&boundary, &GridSpec::new(10.0)).is_err());
}
