//! Boundary lines of the resource constraints, used to draw the feasible region.
//!
//! For a constraint `a·x + b·y <= c`, the boundary is the line `y = (c - a·x) / b`.
//! Lines are sampled lazily over an [XRange].
use crate::problem::LinearProgram;
use crate::solvers::SolveError;
use crate::Constraint;

/// Number of points sampled along each boundary line by default
pub const DEFAULT_SAMPLES: usize = 100;

/// `samples` evenly spaced x values from `start` to `end`.
/// Both ends are included when there are at least two samples, a single sample is `start`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct XRange {
    pub start: f64,
    pub end: f64,
    pub samples: usize,
}

impl XRange {
    pub fn new(start: f64, end: f64, samples: usize) -> Self {
        XRange {
            start,
            end,
            samples,
        }
    }

    /// `[0, A/a1]`: from the origin to the x-intercept of the first constraint of the program.
    ///
    /// Fails with [SolveError::DegenerateConstraint] when the intercept is undefined.
    pub fn first_intercept(lp: &LinearProgram, samples: usize) -> Result<Self, SolveError> {
        let first = lp.constraints().first().ok_or_else(|| {
            SolveError::Other("the program has no constraint to take the plot extent from".into())
        })?;
        let a = first.coefficient(lp.x());
        if a == 0. {
            return Err(degenerate(
                first,
                format!("the coefficient of '{}' is zero", lp.variable_name(lp.x())),
            ));
        }
        let end = first.bound() / a;
        if !end.is_finite() {
            return Err(degenerate(first, format!("the x-intercept {} is not finite", end)));
        }
        Ok(XRange::new(0., end, samples))
    }

    /// The x value of the sample at `index`
    pub fn at(&self, index: usize) -> f64 {
        if index == 0 {
            return self.start;
        }
        if index + 1 >= self.samples {
            // exact end point, without accumulated rounding
            return self.end;
        }
        let step = (self.end - self.start) / (self.samples - 1) as f64;
        self.start + step * index as f64
    }

    /// Iterates over the sampled x values
    pub fn values(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.samples).map(move |i| self.at(i))
    }

    /// The largest sampled x value
    pub fn max(&self) -> f64 {
        self.start.max(self.end)
    }
}

/// A lazy sequence of `(x, y)` points on the boundary of one constraint
#[derive(Debug, Clone)]
pub struct BoundaryLine {
    name: String,
    a: f64,
    b: f64,
    c: f64,
    range: XRange,
    next: usize,
}

impl BoundaryLine {
    /// Name of the constraint this line bounds
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The y value of the line at `x`
    pub fn y_at(&self, x: f64) -> f64 {
        (self.c - self.a * x) / self.b
    }

    /// Every point of the line, from the start of its range, even if the iterator was advanced
    pub fn points(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        self.range.values().map(move |x| (x, self.y_at(x)))
    }
}

impl Iterator for BoundaryLine {
    type Item = (f64, f64);

    fn next(&mut self) -> Option<Self::Item> {
        if self.next >= self.range.samples {
            return None;
        }
        let x = self.range.at(self.next);
        self.next += 1;
        Some((x, self.y_at(x)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.range.samples.saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for BoundaryLine {}

/// One boundary line per constraint of the program, in the same order.
///
/// Fails with [SolveError::DegenerateConstraint] if a constraint does not depend on `y`,
/// since its boundary cannot be written as `y = f(x)`.
pub fn boundary_lines(lp: &LinearProgram, range: &XRange) -> Result<Vec<BoundaryLine>, SolveError> {
    lp.constraints()
        .iter()
        .map(|constraint| {
            let b = constraint.coefficient(lp.y());
            if b == 0. {
                return Err(degenerate(
                    constraint,
                    format!("the coefficient of '{}' is zero", lp.variable_name(lp.y())),
                ));
            }
            Ok(BoundaryLine {
                name: constraint.name().unwrap_or_default().to_string(),
                a: constraint.coefficient(lp.x()),
                b,
                c: constraint.bound(),
                range: *range,
                next: 0,
            })
        })
        .collect()
}

fn degenerate(constraint: &Constraint, reason: String) -> SolveError {
    SolveError::DegenerateConstraint {
        constraint: constraint.name().unwrap_or("unnamed").to_string(),
        reason,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn range_includes_both_ends() {
        let range = XRange::new(0., 50., 101);
        let values: Vec<f64> = range.values().collect();
        assert_eq!(values.len(), 101);
        assert_eq!(values[0], 0.);
        assert_eq!(values[50], 25.);
        assert_eq!(values[100], 50.);
    }

    #[test]
    fn single_sample_is_the_start() {
        let range = XRange::new(0., 3., 1);
        assert_eq!(range.values().collect::<Vec<_>>(), vec![0.]);
        assert_eq!(XRange::new(1., 3., 2).values().collect::<Vec<_>>(), vec![1., 3.]);
    }
}
