//! One "compute" action: build the model, solve it and trace the constraint boundaries.
use tracing::debug;

use crate::boundary::{boundary_lines, BoundaryLine, XRange};
use crate::problem::{LinearProgram, ProductionPlan, ProductionRequest};
use crate::solvers::SolveError;

/// The result of analysing a [ProductionRequest]
#[derive(Debug, Clone)]
pub struct Analysis {
    pub plan: ProductionPlan,
    pub x_range: XRange,
    /// One boundary per resource, in the order of [ProductionRequest::resources]
    pub boundaries: Vec<BoundaryLine>,
}

impl Analysis {
    /// Runs the whole computation for one request.
    ///
    /// This has no side effect other than logging, so requests can be analysed concurrently.
    ///
    /// ```
    /// # use production_mix::{Analysis, ProductionRequest};
    /// let analysis = Analysis::run(&ProductionRequest::default(), 100)?;
    /// assert!((analysis.plan.objective_value - 1800.).abs() < 1e-6);
    /// assert_eq!(analysis.boundaries.len(), 2);
    /// # Ok::<_, production_mix::SolveError>(())
    /// ```
    pub fn run(request: &ProductionRequest, samples: usize) -> Result<Self, SolveError> {
        let lp = LinearProgram::build(request);
        let plan = lp.solve()?;
        let x_range = XRange::first_intercept(&lp, samples)?;
        let boundaries = boundary_lines(&lp, &x_range)?;
        debug!(?x_range, lines = boundaries.len(), "traced constraint boundaries");
        Ok(Analysis {
            plan,
            x_range,
            boundaries,
        })
    }
}
