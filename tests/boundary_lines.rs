use float_eq::assert_float_eq;
use production_mix::boundary::DEFAULT_SAMPLES;
use production_mix::{
    boundary_lines, Analysis, LinearProgram, ProductionRequest, SolveError, XRange,
};

#[test]
fn default_extent_is_the_first_intercept() {
    let lp = LinearProgram::build(&ProductionRequest::default());
    let range = XRange::first_intercept(&lp, DEFAULT_SAMPLES).unwrap();
    assert_eq!(range, XRange::new(0., 50., 100));
}

#[test]
fn lines_follow_the_constraints() {
    let lp = LinearProgram::build(&ProductionRequest::default());
    let range = XRange::new(0., 50., 101);
    let lines = boundary_lines(&lp, &range).unwrap();
    assert_eq!(lines.len(), 2);
    assert_eq!(lines[0].name(), "Time");
    assert_eq!(lines[1].name(), "Material");

    let time: Vec<(f64, f64)> = lines[0].clone().collect();
    let material: Vec<(f64, f64)> = lines[1].clone().collect();
    assert_eq!(time.len(), 101);
    assert_eq!(time[0], (0., 100.));
    assert_eq!(material[0], (0., 80.));
    // both lines cross at the optimum (20, 60)
    assert_float_eq!(time[40].1, 60., abs <= 1e-9);
    assert_float_eq!(material[40].1, 60., abs <= 1e-9);
    assert_eq!(time[100], (50., 0.));
    assert_eq!(material[100], (50., 30.));
}

#[test]
fn lines_are_lazy() {
    let lp = LinearProgram::build(&ProductionRequest::default());
    let range = XRange::new(0., 50., 1_000_000_000);
    let mut lines = boundary_lines(&lp, &range).unwrap();
    let time = &mut lines[0];
    assert_eq!(time.len(), 1_000_000_000);
    assert_eq!(time.next(), Some((0., 100.)));
    assert_eq!(time.len(), 999_999_999);
}

#[test]
fn points_restart_from_the_beginning() {
    let lp = LinearProgram::build(&ProductionRequest::default());
    let range = XRange::new(0., 50., 11);
    let mut lines = boundary_lines(&lp, &range).unwrap();
    lines[0].nth(5);
    let points: Vec<(f64, f64)> = lines[0].points().collect();
    assert_eq!(points.len(), 11);
    assert_eq!(points[0], (0., 100.));
    assert_eq!(points[10], (50., 0.));
    assert_eq!(lines[0].len(), 5);
}

#[test]
fn zero_y_coefficient_is_degenerate() {
    let mut request = ProductionRequest::default();
    request.material.per_unit_second = 0.;
    let lp = LinearProgram::build(&request);
    let range = XRange::new(0., 50., 10);
    match boundary_lines(&lp, &range) {
        Err(SolveError::DegenerateConstraint { constraint, reason }) => {
            assert_eq!(constraint, "Material");
            assert!(reason.contains("Produk B"), "{}", reason);
        }
        other => panic!("expected a degenerate constraint, got {:?}", other),
    }
}

#[test]
fn zero_x_coefficient_has_no_extent() {
    let mut request = ProductionRequest::default();
    request.time.per_unit_first = 0.;
    let lp = LinearProgram::build(&request);
    assert!(matches!(
        XRange::first_intercept(&lp, DEFAULT_SAMPLES),
        Err(SolveError::DegenerateConstraint { constraint, .. }) if constraint == "Time"
    ));
}

#[test]
fn analysis_reports_degenerate_boundaries_after_solving() {
    // the problem itself is bounded by the material constraint
    let mut request = ProductionRequest::default();
    request.time.per_unit_second = 0.;
    assert!(LinearProgram::build(&request).solve().is_ok());
    assert!(matches!(
        Analysis::run(&request, DEFAULT_SAMPLES),
        Err(SolveError::DegenerateConstraint { .. })
    ));
}
