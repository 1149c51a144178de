//! A solver that uses [microlp](https://docs.rs/microlp), a pure rust solver.

use tracing::debug;

use crate::constraint::ConstraintReference;
use crate::solvers::{SolveError, Solution, SolverModel};
use crate::variable::{UnsolvedProblem, VariableDefinition};
use crate::{Constraint, Variable};

/// The [microlp](https://docs.rs/microlp) solver,
/// to be used with [UnsolvedProblem::using].
pub fn microlp(to_solve: UnsolvedProblem) -> MicroLpProblem {
    let UnsolvedProblem {
        objective,
        variables,
    } = to_solve;
    let mut problem = microlp::Problem::new(microlp::OptimizationDirection::Maximize);
    let variables: Vec<microlp::Variable> = variables
        .iter_variables_with_def()
        .map(|(var, &VariableDefinition { min, max, .. })| {
            problem.add_var(objective.coefficient(var), (min, max))
        })
        .collect();
    MicroLpProblem {
        problem,
        variables,
        n_constraints: 0,
    }
}

/// A microlp model
pub struct MicroLpProblem {
    problem: microlp::Problem,
    variables: Vec<microlp::Variable>,
    n_constraints: usize,
}

impl SolverModel for MicroLpProblem {
    type Solution = MicroLpSolution;

    fn solve(self) -> Result<Self::Solution, SolveError> {
        debug!(
            variables = self.variables.len(),
            constraints = self.n_constraints,
            "solving with {}",
            Self::name()
        );
        let solution = self.problem.solve()?;
        Ok(MicroLpSolution {
            solution,
            variables: self.variables,
        })
    }

    fn add_constraint(&mut self, constraint: Constraint) -> ConstraintReference {
        let index = self.n_constraints;
        let mut linear_expr = microlp::LinearExpr::empty();
        for (var, coefficient) in constraint.expression.linear.iter() {
            linear_expr.add(self.variables[var.index()], coefficient);
        }
        self.problem
            .add_constraint(linear_expr, microlp::ComparisonOp::Le, constraint.bound());
        self.n_constraints += 1;
        ConstraintReference { index }
    }

    fn name() -> &'static str {
        "Microlp"
    }
}

impl From<microlp::Error> for SolveError {
    fn from(microlp_error: microlp::Error) -> Self {
        match microlp_error {
            microlp::Error::Unbounded => Self::Unbounded,
            microlp::Error::Infeasible => Self::Infeasible,
            microlp::Error::InternalError(s) => Self::Other(s),
        }
    }
}

/// The solution to a microlp problem
pub struct MicroLpSolution {
    solution: microlp::Solution,
    variables: Vec<microlp::Variable>,
}

impl Solution for MicroLpSolution {
    fn value(&self, variable: Variable) -> f64 {
        self.solution[self.variables[variable.index()]]
    }
}
