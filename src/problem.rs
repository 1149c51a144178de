//! The production planning model: two products sharing two limited resources.
//!
//! A [ProductionRequest] holds everything the user entered. [LinearProgram::build] turns it into
//! `maximise p1·x + p2·y` subject to one `a·x + b·y <= c` constraint per resource,
//! and [LinearProgram::solve] hands it to the solver.
use tracing::{debug, info};

use crate::solvers::{default_solver, SolveError, Solution, SolverModel};
use crate::variable::{variable, ProblemVariables, UnsolvedProblem};
use crate::{Constraint, Expression, Variable};

/// A product that can be manufactured, and the profit made on each unit sold
#[derive(Debug, Clone, PartialEq)]
pub struct ProductSpec {
    pub name: String,
    pub unit_profit: f64,
}

impl ProductSpec {
    pub fn new<S: Into<String>>(name: S, unit_profit: f64) -> Self {
        ProductSpec {
            name: name.into(),
            unit_profit,
        }
    }
}

/// A limited resource, such as machine time or raw material.
/// Represents `per_unit_first·x + per_unit_second·y <= available`.
#[derive(Debug, Clone, PartialEq)]
pub struct ResourceConstraint {
    /// Displayed in the constraint name and chart legend
    pub name: String,
    /// Displayed in the chart legend, e.g. "hours"
    pub unit: String,
    /// Amount of the resource consumed by one unit of the first product
    pub per_unit_first: f64,
    /// Amount of the resource consumed by one unit of the second product
    pub per_unit_second: f64,
    /// Total amount of the resource available
    pub available: f64,
}

impl ResourceConstraint {
    pub fn new<S: Into<String>>(
        name: S,
        per_unit_first: f64,
        per_unit_second: f64,
        available: f64,
    ) -> Self {
        ResourceConstraint {
            name: name.into(),
            unit: String::new(),
            per_unit_first,
            per_unit_second,
            available,
        }
    }

    /// Set the display unit of the resource
    pub fn unit<S: Into<String>>(mut self, unit: S) -> Self {
        self.unit = unit.into();
        self
    }

    /// Builds `per_unit_first·x + per_unit_second·y <= available`, named after the resource
    fn to_constraint(&self, x: Variable, y: Variable) -> Constraint {
        ((self.per_unit_first * x + self.per_unit_second * y) << self.available)
            .set_name(self.name.clone())
    }
}

/// Everything needed to compute an optimal production mix.
///
/// The default request is the classic textbook example:
/// ```
/// # use production_mix::ProductionRequest;
/// let request = ProductionRequest::default();
/// assert_eq!(request.first.name, "Produk A");
/// assert_eq!(request.time.available, 100.);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct ProductionRequest {
    pub first: ProductSpec,
    pub second: ProductSpec,
    pub time: ResourceConstraint,
    pub material: ResourceConstraint,
}

impl Default for ProductionRequest {
    fn default() -> Self {
        ProductionRequest {
            first: ProductSpec::new("Produk A", 30.),
            second: ProductSpec::new("Produk B", 20.),
            time: ResourceConstraint::new("Time", 2., 1., 100.).unit("hours"),
            material: ResourceConstraint::new("Material", 1., 1., 80.).unit("kg"),
        }
    }
}

impl ProductionRequest {
    /// The same problem with the roles of the two products exchanged
    pub fn swapped(&self) -> Self {
        let swap = |r: &ResourceConstraint| ResourceConstraint {
            per_unit_first: r.per_unit_second,
            per_unit_second: r.per_unit_first,
            ..r.clone()
        };
        ProductionRequest {
            first: self.second.clone(),
            second: self.first.clone(),
            time: swap(&self.time),
            material: swap(&self.material),
        }
    }

    /// The resources, in the order their constraints appear in the [LinearProgram]
    pub fn resources(&self) -> [&ResourceConstraint; 2] {
        [&self.time, &self.material]
    }
}

/// A two variable maximization problem, ready to be solved or plotted.
#[derive(Clone, Debug)]
pub struct LinearProgram {
    variables: ProblemVariables,
    x: Variable,
    y: Variable,
    objective: Expression,
    constraints: Vec<Constraint>,
}

impl LinearProgram {
    /// Create the model `maximise p1·x + p2·y` s.t. `a1·x + a2·y <= A`, `b1·x + b2·y <= B`,
    /// `x >= 0`, `y >= 0`.
    ///
    /// Coefficients are passed through unchanged: validating them is the job of the input layer.
    pub fn build(request: &ProductionRequest) -> Self {
        let mut variables = ProblemVariables::new();
        let x = variables.add(variable().min(0).name(request.first.name.as_str()));
        let y = variables.add(variable().min(0).name(request.second.name.as_str()));
        let objective = request.first.unit_profit * x + request.second.unit_profit * y;
        let constraints: Vec<Constraint> = request
            .resources()
            .iter()
            .map(|resource| resource.to_constraint(x, y))
            .collect();
        debug!(?objective, ?constraints, "built production model");
        LinearProgram {
            variables,
            x,
            y,
            objective,
            constraints,
        }
    }

    /// Quantity of the first product
    pub fn x(&self) -> Variable {
        self.x
    }

    /// Quantity of the second product
    pub fn y(&self) -> Variable {
        self.y
    }

    /// Name of a decision variable of this program
    pub fn variable_name(&self, variable: Variable) -> &str {
        self.variables.definition(variable).name_str()
    }

    pub fn objective(&self) -> &Expression {
        &self.objective
    }

    /// The resource constraints, in the order of the request
    pub fn constraints(&self) -> &[Constraint] {
        &self.constraints
    }

    /// Solve the problem with the default solver
    pub fn solve(&self) -> Result<ProductionPlan, SolveError> {
        self.solve_using(default_solver)
    }

    /// Solve the problem with the given solver
    pub fn solve_using<S, M>(&self, solver: S) -> Result<ProductionPlan, SolveError>
    where
        S: FnOnce(UnsolvedProblem) -> M,
        M: SolverModel,
    {
        let solution = self
            .variables
            .clone()
            .maximise(self.objective.clone())
            .using(solver)
            .with_all(self.constraints.iter().cloned())
            .solve()?;
        let plan = ProductionPlan {
            x: solution.value(self.x),
            y: solution.value(self.y),
            objective_value: solution.eval(&self.objective),
        };
        info!(
            x = plan.x,
            y = plan.y,
            objective = plan.objective_value,
            "found optimal production mix with {}",
            M::name()
        );
        Ok(plan)
    }
}

/// The optimal quantity of each product, and the resulting profit
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProductionPlan {
    /// Quantity of the first product
    pub x: f64,
    /// Quantity of the second product
    pub y: f64,
    /// Total profit
    pub objective_value: f64,
}

/// Build and solve the problem described by a request
pub fn solve(request: &ProductionRequest) -> Result<ProductionPlan, SolveError> {
    LinearProgram::build(request).solve()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_one_constraint_per_resource() {
        let lp = LinearProgram::build(&ProductionRequest::default());
        let names: Vec<_> = lp.constraints().iter().map(|c| c.name()).collect();
        assert_eq!(names, vec![Some("Time"), Some("Material")]);
        assert_eq!(format!("{:?}", lp.constraints()[0]), "2 v0 + v1 <= 100");
        assert_eq!(lp.objective().coefficient(lp.x()), 30.);
        assert_eq!(lp.objective().coefficient(lp.y()), 20.);
        assert_eq!(lp.variable_name(lp.y()), "Produk B");
    }

    #[test]
    fn swapping_twice_is_identity() {
        let request = ProductionRequest::default();
        assert_eq!(request.swapped().swapped(), request);
        assert_eq!(request.swapped().time.per_unit_first, 1.);
    }
}
