pub mod microlp;

use crate::Variable;
use crate::{Constraint, Expression};
use std::collections::HashMap;
use thiserror::Error;

pub use self::microlp::microlp as default_solver;

/// Represents an error that occurred when solving a problem
/// or when deriving the constraint boundaries used to plot it
#[derive(Error, Debug, PartialEq, Clone)]
pub enum SolveError {
    /// The problem is [unbounded](https://www.matem.unam.mx/~omar/math340/unbounded.html).
    /// It doesn't have a finite optimal values for its variables.
    /// The objective can be made infinitely large without violating any constraints.
    #[error("the objective is unbounded: profit can grow without limit")]
    Unbounded,
    ///  There exists no solution that satisfies all of the constraints
    #[error("no feasible solution satisfies all of the constraints")]
    Infeasible,
    /// A constraint coefficient used as a divisor when tracing the constraint boundary is zero
    #[error("constraint '{constraint}' is degenerate: {reason}")]
    DegenerateConstraint {
        /// Name of the offending constraint
        constraint: String,
        /// What made the boundary undefined
        reason: String,
    },
    /// Another error occurred inside the solver
    #[error("solver error: {0}")]
    Other(String),
}

/// A solver's own representation of a model, to which constraints can be added.
pub trait SolverModel {
    /// The type of the solution to the problem
    type Solution: Solution;

    /// Takes a model and adds a constraint to it
    fn with(mut self, constraint: Constraint) -> Self
    where
        Self: Sized,
    {
        self.add_constraint(constraint);
        self
    }

    /// Adds all the constraints of an iterator to the model
    fn with_all<I: IntoIterator<Item = Constraint>>(mut self, constraints: I) -> Self
    where
        Self: Sized,
    {
        for constraint in constraints {
            self.add_constraint(constraint);
        }
        self
    }

    /// Find the solution for the problem being modeled
    fn solve(self) -> Result<Self::Solution, SolveError>;

    /// Adds a constraint to the model and returns a reference to the index
    fn add_constraint(&mut self, c: Constraint) -> crate::constraint::ConstraintReference;

    /// Name of the solver, used in logs
    fn name() -> &'static str;
}

/// A problem solution
pub trait Solution {
    /// Get the optimal value of a variable of the problem
    fn value(&self, variable: Variable) -> f64;

    /// Evaluate an expression with the values of this solution
    fn eval(&self, expr: &Expression) -> f64
    where
        Self: Sized,
    {
        expr.eval_with(self)
    }
}

impl<N: Into<f64> + Clone> Solution for HashMap<Variable, N> {
    fn value(&self, variable: Variable) -> f64 {
        self[&variable].clone().into()
    }
}
