//! Constraints define the inequalities that must hold in the solution.
use crate::expression::Expression;
use crate::variable::{FormatWithVars, Variable};
use core::fmt::{Debug, Formatter};
use std::ops::Shl;

/// A constraint represents a single inequality `expression <= 0` that must hold in the solution.
#[derive(Clone)]
pub struct Constraint {
    /// The expression that is constrained to be null or negative
    pub(crate) expression: Expression,
    /// Optional constraint name
    pub(crate) name: Option<String>,
}

impl Constraint {
    fn new(expression: Expression) -> Constraint {
        Constraint {
            expression,
            name: None,
        }
    }

    /// set the constraint name
    pub fn set_name(mut self, name: String) -> Self {
        self.name = Some(name);
        self
    }

    /// The constraint name, if one was set
    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// The coefficient of `variable` on the left hand side of `a·x + b·y <= c`
    pub fn coefficient(&self, variable: Variable) -> f64 {
        self.expression.coefficient(variable)
    }

    /// The right hand side `c` of `a·x + b·y <= c`
    ///
    /// ```
    /// # use production_mix::variable::{variable, ProblemVariables};
    /// let mut vars = ProblemVariables::new();
    /// let x = vars.add(variable().min(0));
    /// let y = vars.add(variable().min(0));
    /// let time = (2 * x + y) << 100;
    /// assert_eq!(time.bound(), 100.);
    /// assert_eq!(time.coefficient(x), 2.);
    /// ```
    pub fn bound(&self) -> f64 {
        // `+ 0.` turns -0 into 0
        -self.expression.constant + 0.
    }
}

impl FormatWithVars for Constraint {
    fn format_with<FUN>(&self, f: &mut Formatter<'_>, variable_format: FUN) -> std::fmt::Result
    where
        FUN: FnMut(&mut Formatter<'_>, Variable) -> std::fmt::Result,
    {
        self.expression.linear.format_with(f, variable_format)?;
        write!(f, " <= {}", self.bound())
    }
}

impl Debug for Constraint {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.format_debug(f)
    }
}

/// less than or equal
pub fn leq<A: Into<Expression>, B: Into<Expression>>(a: A, b: B) -> Constraint {
    Constraint::new(a.into() - b)
}

macro_rules! impl_shifts {
    ($($t:ty)*) => {$(
        impl<RHS: Into<Expression>> Shl<RHS> for $t {
            type Output = Constraint;

            fn shl(self, rhs: RHS) -> Self::Output {
                leq(self, rhs)
            }
        }
    )*}
}

impl_shifts!(Expression Variable);

#[derive(Clone, PartialEq, Debug)]
/// A constraint reference contains the sequence id of the constraint within the problem
pub struct ConstraintReference {
    pub(crate) index: usize,
}

#[cfg(test)]
mod tests {
    use crate::variable::{variable, ProblemVariables};

    #[test]
    fn test_leq() {
        let mut vars = ProblemVariables::new();
        let v0 = vars.add(variable());
        let v1 = vars.add(variable());
        let f = format!("{:?}", (2 * v0 + v1) << 100);
        assert_eq!(f, "2 v0 + v1 <= 100");
    }

    #[test]
    fn moves_constants_to_the_right() {
        let mut vars = ProblemVariables::new();
        let v0 = vars.add(variable());
        let constraint = (v0 + 20) << 80;
        assert_eq!(constraint.bound(), 60.);
        assert_eq!(constraint.coefficient(v0), 1.);
    }

    #[test]
    fn zero_bound_is_positive() {
        let mut vars = ProblemVariables::new();
        let v0 = vars.add(variable());
        let v1 = vars.add(variable());
        let constraint = (2 * v0 + v1) << 0;
        assert!(constraint.bound().is_sign_positive());
        assert_eq!(format!("{:?}", constraint), "2 v0 + v1 <= 0");
    }
}
