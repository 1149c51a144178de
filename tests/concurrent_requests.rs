//! Independent requests solved at the same time must not influence each other.
use std::thread;

use float_eq::assert_float_eq;
use production_mix::{Analysis, ProductionRequest};

#[test]
fn requests_on_several_threads() {
    let handles: Vec<_> = (1..=8)
        .map(|k| {
            thread::spawn(move || {
                let mut request = ProductionRequest::default();
                request.first.unit_profit *= k as f64;
                request.second.unit_profit *= k as f64;
                let analysis = Analysis::run(&request, 100).unwrap();
                (k, analysis.plan)
            })
        })
        .collect();
    for handle in handles {
        let (k, plan) = handle.join().unwrap();
        assert_float_eq!(plan.x, 20., abs <= 1e-6);
        assert_float_eq!(plan.y, 60., abs <= 1e-6);
        assert_float_eq!(plan.objective_value, 1800. * k as f64, abs <= 1e-6);
    }
}
