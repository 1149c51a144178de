//! Find the production mix of two products that maximizes profit,
//! given how much time and material each unit needs and how much of each is available.
//!
//! ```rust
//! use production_mix::{Analysis, ProductionRequest, Report};
//! use production_mix::chart::{to_svg_string, ChartSpec};
//!
//! let request = ProductionRequest::default();
//! let analysis = Analysis::run(&request, 100)?;
//! println!("{}", Report::new(&request, &analysis.plan, "Rp"));
//! let svg = to_svg_string(&ChartSpec::new(&request, &analysis))?;
//! assert!(svg.contains("Produk A"));
//! # Ok::<_, Box<dyn std::error::Error>>(())
//! ```
//!
//! The small modeling layer underneath can also be used directly:
//!
//! ```rust
//! use production_mix::variable::{variable, ProblemVariables};
//! use production_mix::{default_solver, Solution, SolverModel};
//!
//! let mut vars = ProblemVariables::new();
//! let a = vars.add(variable().min(0));
//! let b = vars.add(variable().min(0));
//! let solution = vars
//!     .maximise(30 * a + 20 * b)
//!     .using(default_solver)
//!     .with((2 * a + b) << 100)
//!     .with((a + b) << 80)
//!     .solve()?;
//! assert!((solution.value(a) - 20.).abs() < 1e-6);
//! # Ok::<_, production_mix::SolveError>(())
//! ```

pub use analysis::Analysis;
pub use boundary::{boundary_lines, BoundaryLine, XRange};
pub use constraint::Constraint;
pub use expression::Expression;
pub use problem::{
    solve, LinearProgram, ProductSpec, ProductionPlan, ProductionRequest, ResourceConstraint,
};
pub use report::Report;
pub use solvers::{default_solver, SolveError, Solution, SolverModel};
pub use variable::Variable;

mod analysis;
pub mod boundary;
pub mod chart;
#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod constraint;
mod expression;
#[cfg(feature = "cli")]
pub mod logger;
mod problem;
pub mod report;
pub mod solvers;
pub mod variable;
