//! Affine expressions: a linear combination of variables plus a constant.
use std::fmt::{Debug, Formatter};
use std::ops::{Add, AddAssign, Mul, MulAssign, Neg, Sub, SubAssign};

use fnv::FnvHashMap as HashMap;

use crate::constraint;
use crate::variable::{FormatWithVars, Variable};
use crate::{Constraint, Solution};

/// An linear expression without a constant component
#[derive(Clone, PartialEq)]
pub struct LinearExpression {
    pub(crate) coefficients: HashMap<Variable, f64>,
}

impl LinearExpression {
    /// Iterates over the variables and their coefficients, in no particular order
    pub fn iter(&self) -> impl Iterator<Item = (Variable, f64)> + '_ {
        self.coefficients.iter().map(|(&var, &c)| (var, c))
    }
}

impl FormatWithVars for LinearExpression {
    fn format_with<FUN>(&self, f: &mut Formatter<'_>, mut variable_format: FUN) -> std::fmt::Result
    where
        FUN: FnMut(&mut Formatter<'_>, Variable) -> std::fmt::Result,
    {
        let mut first = true;
        // sorted so that the output does not depend on the hash map order
        let mut terms: Vec<_> = self.iter().filter(|&(_, c)| c != 0f64).collect();
        terms.sort_by_key(|(var, _)| var.index());
        for (var, coeff) in terms {
            if first {
                first = false;
            } else {
                write!(f, " + ")?;
            }
            if (coeff - 1.).abs() > f64::EPSILON {
                write!(f, "{} ", coeff)?;
            }
            variable_format(f, var)?;
        }
        if first {
            write!(f, "0")?;
        }
        Ok(())
    }
}

impl Debug for LinearExpression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.format_debug(f)
    }
}

/// Represents an affine expression, such as `2x + 3` or `30 x + 20 y`
#[derive(Clone, PartialEq)]
pub struct Expression {
    pub(crate) linear: LinearExpression,
    pub(crate) constant: f64,
}

impl Debug for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        self.format_debug(f)
    }
}

impl Default for Expression {
    fn default() -> Self {
        Expression::from(0.)
    }
}

impl Expression {
    /// Creates a constraint indicating that this expression
    /// is lesser than or equal to the right hand side
    pub fn leq<RHS: Into<Expression>>(self, rhs: RHS) -> Constraint {
        constraint::leq(self, rhs)
    }

    /// Performs self = self + (a * b)
    #[inline]
    pub fn add_mul<N: Into<f64>, E: Into<Expression>>(&mut self, a: N, b: E) {
        let factor = a.into();
        let b = b.into();
        for (var, value) in b.linear.coefficients {
            *self.linear.coefficients.entry(var).or_default() += factor * value
        }
        self.constant += factor * b.constant;
    }

    /// The coefficient of a variable in this expression, 0 if the variable does not appear in it
    ///
    /// ```
    /// # use production_mix::variable::{variable, ProblemVariables};
    /// let mut vars = ProblemVariables::new();
    /// let x = vars.add(variable());
    /// let y = vars.add(variable());
    /// let expr = 2 * x + 3.;
    /// assert_eq!(expr.coefficient(x), 2.);
    /// assert_eq!(expr.coefficient(y), 0.);
    /// ```
    pub fn coefficient(&self, variable: Variable) -> f64 {
        self.linear
            .coefficients
            .get(&variable)
            .copied()
            .unwrap_or(0.)
    }

    /// The constant term of the expression
    pub fn constant(&self) -> f64 {
        self.constant
    }

    /// Evaluate the concrete value of the expression, given the values of the variables
    ///
    /// ```
    /// use std::collections::HashMap;
    /// use production_mix::variable::{variable, ProblemVariables};
    /// let mut vars = ProblemVariables::new();
    /// let a = vars.add(variable());
    /// let b = vars.add(variable());
    /// let expr = a + b * 0.5;
    /// let var_mapping: HashMap<_, _> = vec![(a, 3), (b, 10)].into_iter().collect();
    /// assert_eq!(expr.eval_with(&var_mapping), 8.);
    /// ```
    pub fn eval_with<S: Solution>(&self, values: &S) -> f64 {
        self.constant
            + self
                .linear
                .iter()
                .map(|(var, coefficient)| coefficient * values.value(var))
                .sum::<f64>()
    }
}

impl From<Variable> for Expression {
    fn from(var: Variable) -> Self {
        var * 1.
    }
}

macro_rules! impl_from_num {
    ($($num:ty),*) => {$(
        impl From<$num> for Expression {
            fn from(constant: $num) -> Self {
                Expression {
                    linear: LinearExpression { coefficients: HashMap::default() },
                    constant: f64::from(constant),
                }
            }
        }

        impl Add<Expression> for $num {
            type Output = Expression;
            fn add(self, rhs: Expression) -> Self::Output {
                rhs + self
            }
        }

        impl Sub<Expression> for $num {
            type Output = Expression;
            fn sub(self, rhs: Expression) -> Self::Output {
                Expression::from(self) - rhs
            }
        }

        impl Mul<Expression> for $num {
            type Output = Expression;
            fn mul(self, mut rhs: Expression) -> Self::Output {
                rhs *= self;
                rhs
            }
        }
    )*};
}

impl_from_num!(f64, f32, i32);

impl FormatWithVars for Expression {
    fn format_with<FUN>(&self, f: &mut Formatter<'_>, variable_format: FUN) -> std::fmt::Result
    where
        FUN: FnMut(&mut Formatter<'_>, Variable) -> std::fmt::Result,
    {
        self.linear.format_with(f, variable_format)?;
        if self.constant.abs() >= f64::EPSILON {
            write!(f, " + {}", self.constant)?;
        }
        Ok(())
    }
}

impl<RHS: Into<Expression>> AddAssign<RHS> for Expression {
    #[inline]
    fn add_assign(&mut self, rhs: RHS) {
        self.add_mul(1, rhs);
    }
}

impl<RHS: Into<Expression>> SubAssign<RHS> for Expression {
    #[inline]
    fn sub_assign(&mut self, rhs: RHS) {
        self.add_mul(-1, rhs)
    }
}

impl<RHS: Into<Expression>> Add<RHS> for Expression {
    type Output = Expression;

    fn add(mut self, rhs: RHS) -> Self::Output {
        self += rhs;
        self
    }
}

impl<RHS: Into<Expression>> Sub<RHS> for Expression {
    type Output = Expression;

    fn sub(mut self, rhs: RHS) -> Self::Output {
        self -= rhs;
        self
    }
}

impl Neg for Expression {
    type Output = Self;

    #[inline]
    fn neg(mut self) -> Self::Output {
        self *= -1;
        self
    }
}

impl<N: Into<f64>> Mul<N> for Expression {
    type Output = Expression;

    fn mul(mut self, rhs: N) -> Self::Output {
        self *= rhs;
        self
    }
}

impl<N: Into<f64>> MulAssign<N> for Expression {
    #[inline]
    fn mul_assign(&mut self, rhs: N) {
        let factor = rhs.into();
        for value in self.linear.coefficients.values_mut() {
            *value *= factor
        }
        self.constant *= factor
    }
}

#[cfg(test)]
mod tests {
    use crate::variable::{variable, ProblemVariables};

    #[test]
    fn combines_terms() {
        let mut vars = ProblemVariables::new();
        let x = vars.add(variable());
        let y = vars.add(variable());
        let expr = 30 * x + 20. * y - x * 10 + 5;
        assert_eq!(expr.coefficient(x), 20.);
        assert_eq!(expr.coefficient(y), 20.);
        assert_eq!(expr.constant(), 5.);
    }

    #[test]
    fn debug_format() {
        let mut vars = ProblemVariables::new();
        let x = vars.add(variable());
        let y = vars.add(variable());
        assert_eq!(format!("{:?}", 2 * x + y), "2 v0 + v1");
        assert_eq!(format!("{:?}", -(x * 0.)), "0");
    }
}
