//! A [Variable] is the base element used to create an [Expression].
//! The goal of the solver is to find optimal values for all variables in a problem.
//!
//! In a production problem, each variable is the quantity of one product to manufacture.
//! Each variable has a [VariableDefinition] that sets its name and bounds.
use std::fmt::Formatter;
use std::ops::{Add, Mul, Neg, Sub};

use fnv::FnvHashMap as HashMap;

use crate::expression::{Expression, LinearExpression};

/// A variable in a problem. Use variables to create [expressions](Expression),
/// to express the [objective](ProblemVariables::maximise)
/// and the [Constraints](crate::Constraint) of your model.
///
/// Variables are created using [ProblemVariables::add]
///
/// ## Warning
/// `Eq` is implemented on this type, but
/// `v1 == v2` is true only if the two variables represent the same object,
/// not if they have the same definition.
///
/// ```
/// # use production_mix::variable::{variable, ProblemVariables};
/// let mut vars = ProblemVariables::new();
/// let v1 = vars.add(variable().min(0));
/// let v2 = vars.add(variable().min(0));
/// assert_ne!(v1, v2);
///
/// let v1_copy = v1;
/// assert_eq!(v1, v1_copy);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Variable {
    /// A variable is nothing more than an index into the `variables` field of a ProblemVariables
    /// That's why it can be `Copy`.
    index: usize,
}

impl Variable {
    fn at(index: usize) -> Self {
        Self { index }
    }

    pub(crate) fn index(&self) -> usize {
        self.index
    }
}

/// An element that can be displayed if you give a variable display function
pub trait FormatWithVars {
    /// Write the element to the formatter. See [std::fmt::Display]
    fn format_with<FUN>(&self, f: &mut Formatter<'_>, variable_format: FUN) -> std::fmt::Result
    where
        FUN: FnMut(&mut Formatter<'_>, Variable) -> std::fmt::Result;

    /// Write the elements, naming the variables v0, v1, ... vn
    fn format_debug(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.format_with(f, |f, var| write!(f, "v{}", var.index()))
    }
}

/// Defines the properties of a variable: its name and its lower and upper bounds.
#[derive(Clone, PartialEq, Debug)]
pub struct VariableDefinition {
    pub(crate) min: f64,
    pub(crate) max: f64,
    pub(crate) name: String,
}

impl VariableDefinition {
    /// Creates an unbounded continuous linear variable
    pub fn new() -> Self {
        VariableDefinition {
            min: f64::NEG_INFINITY,
            max: f64::INFINITY,
            name: String::new(),
        }
    }

    /// Set the lower bound of the variable
    pub fn min<N: Into<f64>>(mut self, min: N) -> Self {
        self.min = min.into();
        self
    }

    /// Set the higher bound of the variable
    pub fn max<N: Into<f64>>(mut self, max: N) -> Self {
        self.max = max.into();
        self
    }

    /// Name the variable. The name is used in logs and in formatted constraints.
    ///
    /// ```
    /// # use production_mix::variable::variable;
    /// assert_eq!(variable().name("Produk A").name_str(), "Produk A");
    /// ```
    pub fn name<S: Into<String>>(mut self, name: S) -> Self {
        self.name = name.into();
        self
    }

    /// The name given with [VariableDefinition::name], empty by default
    pub fn name_str(&self) -> &str {
        &self.name
    }
}

/// Creates an unbounded continuous linear variable
impl Default for VariableDefinition {
    fn default() -> Self {
        VariableDefinition::new()
    }
}

/// Returns an anonymous unbounded continuous variable definition
pub fn variable() -> VariableDefinition {
    VariableDefinition::default()
}

/// Represents the variables for a given problem.
#[derive(Default, Clone, Debug)]
pub struct ProblemVariables {
    variables: Vec<VariableDefinition>,
}

impl ProblemVariables {
    /// Create an empty list of variables
    pub fn new() -> Self {
        ProblemVariables { variables: vec![] }
    }

    /// Add a variable with the given definition
    pub fn add(&mut self, var_def: VariableDefinition) -> Variable {
        let index = self.variables.len();
        self.variables.push(var_def);
        Variable::at(index)
    }

    /// Creates a maximization problem with the given objective. Don't solve it immediately
    ///
    /// ```
    /// use production_mix::variable::{variable, ProblemVariables};
    /// use production_mix::{default_solver, Solution, SolverModel};
    /// let mut problem = ProblemVariables::new();
    /// let x = problem.add(variable().min(0).max(7));
    /// let solution = problem.maximise(x).using(default_solver).solve().unwrap();
    /// assert_eq!(solution.value(x), 7.);
    /// ```
    pub fn maximise<E: Into<Expression>>(self, objective: E) -> UnsolvedProblem {
        let objective = objective.into();
        assert!(
            objective.linear.coefficients.len() <= self.variables.len(),
            "There should not be more variables in the objective function than in the problem. \
            You probably used variables from a different problem in this one."
        );
        UnsolvedProblem {
            objective,
            variables: self,
        }
    }

    /// Iterates over the couples of variables with their properties
    pub fn iter_variables_with_def(&self) -> impl Iterator<Item = (Variable, &VariableDefinition)> {
        self.variables
            .iter()
            .enumerate()
            .map(|(i, def)| (Variable::at(i), def))
    }

    /// The definition of a variable of this problem
    pub fn definition(&self, variable: Variable) -> &VariableDefinition {
        &self.variables[variable.index()]
    }
}

/// A problem without constraints.
/// Created with [ProblemVariables::maximise].
pub struct UnsolvedProblem {
    pub(crate) objective: Expression,
    pub(crate) variables: ProblemVariables,
}

impl UnsolvedProblem {
    /// Create a solver instance and feed it with this problem
    pub fn using<S, G>(self, solver: S) -> G
    where
        S: FnOnce(UnsolvedProblem) -> G,
    {
        solver(self)
    }
}

impl<N: Into<f64>> Mul<N> for Variable {
    type Output = Expression;

    fn mul(self, rhs: N) -> Self::Output {
        let mut coefficients = HashMap::with_capacity_and_hasher(1, Default::default());
        coefficients.insert(self, rhs.into());
        Expression {
            linear: LinearExpression { coefficients },
            constant: 0.0,
        }
    }
}

impl Mul<Variable> for f64 {
    type Output = Expression;

    fn mul(self, rhs: Variable) -> Self::Output {
        rhs.mul(self)
    }
}

impl Mul<Variable> for i32 {
    type Output = Expression;

    fn mul(self, rhs: Variable) -> Self::Output {
        rhs.mul(f64::from(self))
    }
}

impl Neg for Variable {
    type Output = Expression;

    fn neg(self) -> Self::Output {
        -Expression::from(self)
    }
}

impl<RHS: Into<Expression>> Add<RHS> for Variable {
    type Output = Expression;

    fn add(self, rhs: RHS) -> Self::Output {
        Expression::from(self) + rhs.into()
    }
}

impl<RHS: Into<Expression>> Sub<RHS> for Variable {
    type Output = Expression;

    fn sub(self, rhs: RHS) -> Self::Output {
        Expression::from(self) - rhs.into()
    }
}
