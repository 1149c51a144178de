use float_eq::assert_float_eq;
use production_mix::chart::{render_svg, to_svg_string, ChartSpec};
use production_mix::{Analysis, ProductionRequest};
use tempfile::TempDir;

#[test]
fn chart_of_default_request() {
    let request = ProductionRequest::default();
    let analysis = Analysis::run(&request, 101).unwrap();
    let spec = ChartSpec::new(&request, &analysis);

    assert_eq!(spec.x_label, "Produk A");
    assert_eq!(spec.y_label, "Produk B");
    assert_eq!(spec.x_range, 0.0..50.0);
    assert_eq!(spec.y_range, 0.0..100.0);
    assert_float_eq!(spec.optimum.0, 20., abs <= 1e-6);
    assert_float_eq!(spec.optimum.1, 60., abs <= 1e-6);

    let labels: Vec<&str> = spec.boundaries.iter().map(|s| s.label.as_str()).collect();
    assert_eq!(
        labels,
        vec!["Time constraint (hours)", "Material constraint (kg)"]
    );

    // lowest of the two lines: material on the left of the optimum, time on its right
    assert_eq!(spec.feasible_region.len(), 101);
    assert_eq!(spec.feasible_region[0], (0., 80.));
    assert_float_eq!(spec.feasible_region[40].1, 60., abs <= 1e-9);
    assert_eq!(spec.feasible_region[100], (50., 0.));
}

#[test]
fn resources_without_unit() {
    let mut request = ProductionRequest::default();
    request.time.unit = String::new();
    let analysis = Analysis::run(&request, 100).unwrap();
    let spec = ChartSpec::new(&request, &analysis);
    assert_eq!(spec.boundaries[0].label, "Time constraint");
    assert_eq!(spec.boundaries[1].label, "Material constraint (kg)");
}

#[test]
fn consumed_boundaries_are_drawn_in_full() {
    let request = ProductionRequest::default();
    let mut analysis = Analysis::run(&request, 100).unwrap();
    let fresh = ChartSpec::new(&request, &analysis);
    analysis.boundaries[0].next();
    analysis.boundaries[1].by_ref().for_each(drop);
    let spec = ChartSpec::new(&request, &analysis);
    assert_eq!(spec, fresh);
    assert_eq!(spec.boundaries[0].points.len(), 100);
    assert_eq!(spec.boundaries[1].points.len(), 100);
    assert_eq!(spec.feasible_region.len(), 100);
}

#[test]
fn feasible_region_never_goes_below_zero() {
    let mut request = ProductionRequest::default();
    // the material line crosses y = 0 at x = 20, before the time intercept at x = 50
    request.material.available = 20.;
    let analysis = Analysis::run(&request, 100).unwrap();
    let spec = ChartSpec::new(&request, &analysis);
    assert!(spec.feasible_region.iter().all(|&(_, y)| y >= 0.));
    assert_eq!(spec.feasible_region.last(), Some(&(50., 0.)));
    let material_min = spec.boundaries[1]
        .points
        .iter()
        .map(|&(_, y)| y)
        .fold(f64::INFINITY, f64::min);
    assert!(material_min < 0.);
}

#[test]
fn empty_extents_are_widened() {
    let mut request = ProductionRequest::default();
    request.time.available = 0.;
    request.material.available = 0.;
    let analysis = Analysis::run(&request, 100).unwrap();
    let spec = ChartSpec::new(&request, &analysis);
    assert_eq!(spec.x_range, 0.0..1.0);
    assert_eq!(spec.y_range, 0.0..1.0);
    assert!(to_svg_string(&spec).is_ok());
}

#[test]
fn svg_contains_the_labels() {
    let mut request = ProductionRequest::default();
    request.first.name = "Chairs".into();
    request.second.name = "Tables".into();
    let analysis = Analysis::run(&request, 100).unwrap();
    let svg = to_svg_string(&ChartSpec::new(&request, &analysis)).unwrap();
    assert!(svg.contains("<svg"));
    for text in [
        "Chairs",
        "Tables",
        "Time constraint (hours)",
        "Material constraint (kg)",
        "Feasible region",
    ] {
        assert!(svg.contains(text), "missing {}", text);
    }
}

#[test]
fn writes_svg_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("region.svg");
    let request = ProductionRequest::default();
    let analysis = Analysis::run(&request, 100).unwrap();
    render_svg(&ChartSpec::new(&request, &analysis), &path).unwrap();
    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("Produk A"));
}

#[test]
fn unwritable_path_is_an_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing-dir").join("region.svg");
    let request = ProductionRequest::default();
    let analysis = Analysis::run(&request, 100).unwrap();
    assert!(render_svg(&ChartSpec::new(&request, &analysis), &path).is_err());
}
