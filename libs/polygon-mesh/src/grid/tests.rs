use super::*;

#[test]
fn test_parse_centering() {
    assert_eq!("auto".parse::<Centering>().unwrap(), Centering::Auto);
    assert_eq!("AUTO".parse::<Centering>().unwrap(), Centering::Auto);
    assert_eq!(" element ".parse::<Centering>().unwrap(), Centering::OnElement);
    assert_eq!("True".parse::<Centering>().unwrap(), Centering::OnElement);
    assert_eq!("corner".parse::<Centering>().unwrap(), Centering::OnCorner);
    assert_eq!("false".parse::<Centering>().unwrap(), Centering::OnCorner);
}

#[test]
fn test_parse_bogus_centering() {
    let err = "bogus".parse::<Centering>().unwrap_err();
    assert!(matches!(err, MeshError::Configuration { .. }));
    assert!(err.to_string().contains("\"bogus\""));
}

#[test]
fn test_centering_display_parses_back() {
    for centering in [Centering::OnElement, Centering::OnCorner, Centering::Auto] {
        assert_eq!(centering.to_string().parse::<Centering>().unwrap(), centering);
    }
}

#[test]
fn test_auto_centering_decision() {
    let resolve = |d: f64, x: f64, y: f64| GridSpec::new(d).with_spacing(x, y).resolved_centering();
    assert_eq!(resolve(20.0, 1.0, 2.0), Centering::OnCorner);
    assert_eq!(resolve(30.0, 3.0, 3.0), Centering::OnCorner);
    assert_eq!(resolve(30.0, 3.0, 4.0), Centering::OnElement);
    assert_eq!(resolve(11.0, 1.0, 1.0), Centering::OnElement);
    assert_eq!(resolve(3.0, 0.5, 0.5), Centering::OnCorner);
}

#[test]
fn test_fixed_centering_is_kept() {
    let spec = GridSpec::new(20.0).with_centering(Centering::OnElement);
    assert_eq!(spec.resolved_centering(), Centering::OnElement);
    let spec = GridSpec::new(11.0).with_centering(Centering::OnCorner);
    assert_eq!(spec.resolved_centering(), Centering::OnCorner);
}

#[test]
fn test_element_offsets_order() {
    assert_eq!(
        element_offsets(10.0, 2.0),
        vec![0.0, 2.0, -2.0, 4.0, -4.0, 6.0, -6.0, 8.0, -8.0, 10.0, -10.0]
    );
    assert_eq!(element_offsets(10.5, 2.0).len(), 11);
    assert_eq!(element_offsets(0.4, 1.0), vec![0.0]);
}

#[test]
fn test_corner_offsets() {
    let offsets = corner_offsets(10.0, 1.0);
    assert_eq!(offsets.len(), 20);
    assert_eq!(offsets[0], -10.0);
    assert_eq!(offsets[19], 9.0);

    // radius 10, spacing 3: bound = 10 + 1
    assert_eq!(
        corner_offsets(10.0, 3.0),
        vec![-11.0, -8.0, -5.0, -2.0, 1.0, 4.0, 7.0, 10.0]
    );
}

#[test]
fn test_candidate_axes_element() {
    let spec = GridSpec::new(20.0)
        .with_spacing(1.0, 2.0)
        .with_centering(Centering::OnElement);
    let (xs, ys) = candidate_axes(&spec).unwrap();
    for x in -10..=10 {
        assert!(xs.contains(&(x as f64)));
    }
    for y in (-10..=10).step_by(2) {
        assert!(ys.contains(&(y as f64)));
    }
    assert_eq!(xs.len(), 21);
    assert_eq!(ys.len(), 11);
}

#[test]
fn test_candidate_axes_translated() {
    let spec = GridSpec::new(20.0)
        .with_spacing(1.0, 2.0)
        .with_centering(Centering::OnElement)
        .with_translate(DVec2::new(10.0, -10.0));
    let (xs, ys) = candidate_axes(&spec).unwrap();
    for x in 0..=20 {
        assert!(xs.contains(&(x as f64)));
    }
    for y in (-20..=0).step_by(2) {
        assert!(ys.contains(&(y as f64)));
    }
}

#[test]
fn test_candidate_axes_corner_are_cell_centres() {
    let spec = GridSpec::new(20.0).with_spacing(1.0, 2.0);
    let (xs, ys) = candidate_axes(&spec).unwrap();
    assert_eq!(xs.len(), 20);
    assert_eq!(xs[0], -9.5);
    assert_eq!(xs[19], 9.5);
    assert_eq!(ys, vec![-9.0, -7.0, -5.0, -3.0, -1.0, 1.0, 3.0, 5.0, 7.0, 9.0]);
}

#[test]
fn test_candidate_grid_indexing() {
    let spec = GridSpec::new(4.0).with_centering(Centering::OnElement);
    let grid = CandidateGrid::new(&spec).unwrap();
    assert_eq!(grid.len(), 25);
    assert!(!grid.is_empty());

    // Row-major: index 7 is row 1, column 2
    let candidate = grid.candidate(7);
    assert_eq!(candidate.center, DVec2::new(grid.xs[2], grid.ys[1]));
    assert_eq!(candidate.anchor, candidate.center - DVec2::splat(0.5));

    let row: Vec<Candidate> = grid.row(1).collect();
    assert_eq!(row.len(), 5);
    assert_eq!(row[2], candidate);
}

#[test]
fn test_validate_rejects_bad_specs() {
    assert!(GridSpec::new(0.0).validate().is_err());
    assert!(GridSpec::new(f64::NAN).validate().is_err());
    assert!(GridSpec::new(10.0).with_spacing(0.0, 1.0).validate().is_err());
    assert!(GridSpec::new(10.0).with_spacing(1.0, -1.0).validate().is_err());
    assert!(GridSpec::new(10.0)
        .with_translate(DVec2::new(f64::INFINITY, 0.0))
        .validate()
        .is_err());
    assert!(GridSpec::new(10.0).validate().is_ok());
}

#[test]
fn test_oversized_grid_rejected() {
    let spec = GridSpec::new(1.0e6).with_spacing(1.0e-3, 1.0e-3);
    assert!(matches!(
        CandidateGrid::new(&spec),
        Err(MeshError::Precondition { .. })
    ));
}

#[test]
fn test_unit_area_and_half_cell() {
    let spec = GridSpec::new(10.0).with_spacing(2.0, 3.0);
    assert_eq!(spec.unit_area(), 6.0);
    assert_eq!(spec.half_cell(), DVec2::new(1.0, 1.5));
    assert_eq!(spec.radius(), 5.0);
}

#[test]
fn test_candidate_offsets_ignore_translation() {
    let spec = GridSpec::new(10.0).with_translate(DVec2::new(3.3, -2.31));
    let grid = CandidateGrid::new(&spec).unwrap();
    let centred = CandidateGrid::new(&GridSpec::new(10.0)).unwrap();
    for index in 0..grid.len() {
        let moved = grid.candidate(index);
        let origin = centred.candidate(index);
        assert_eq!(moved.offset, origin.offset);
        assert_eq!(moved.offset, origin.center);
        assert!((moved.center - spec.translate).distance(moved.offset) < 1e-12);
    }
}
