//! Text rendering of the optimal production mix.
use std::fmt::{Display, Formatter};

use crate::problem::{ProductionPlan, ProductionRequest};
use crate::solvers::SolveError;

/// Currency symbol used when none is configured
pub const DEFAULT_CURRENCY: &str = "Rp";

/// Formats an amount of money with two decimals and `,` as thousands separator.
///
/// ```
/// # use production_mix::report::format_currency;
/// assert_eq!(format_currency(1800., "Rp"), "Rp 1,800.00");
/// assert_eq!(format_currency(-1234567.891, "$"), "-$ 1,234,567.89");
/// ```
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let fixed = format!("{:.2}", amount.abs());
    let (integer, decimals) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    let mut grouped = String::with_capacity(integer.len() + integer.len() / 3);
    for (i, digit) in integer.chars().enumerate() {
        if i > 0 && (integer.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }
    // -0.001 is displayed as 0.00, not -0.00
    let sign = if amount < 0. && fixed.chars().any(|c| c.is_ascii_digit() && c != '0') {
        "-"
    } else {
        ""
    };
    if symbol.is_empty() {
        format!("{}{}.{}", sign, grouped, decimals)
    } else {
        format!("{}{} {}.{}", sign, symbol, grouped, decimals)
    }
}

/// Formats a quantity with at most six decimals, dropping the solver's rounding noise.
///
/// ```
/// # use production_mix::report::format_quantity;
/// assert_eq!(format_quantity(20.000000000004), "20");
/// assert_eq!(format_quantity(12.5), "12.5");
/// ```
pub fn format_quantity(quantity: f64) -> String {
    let fixed = format!("{:.6}", quantity);
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    match trimmed {
        "-0" => "0".to_string(),
        _ => trimmed.to_string(),
    }
}

/// The solution of a request, as shown to the user
pub struct Report<'a> {
    request: &'a ProductionRequest,
    plan: &'a ProductionPlan,
    currency: &'a str,
}

impl<'a> Report<'a> {
    pub fn new(request: &'a ProductionRequest, plan: &'a ProductionPlan, currency: &'a str) -> Self {
        Report {
            request,
            plan,
            currency,
        }
    }
}

impl Display for Report<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Optimal solution")?;
        writeln!(
            f,
            "  Quantity of {}: {}",
            self.request.first.name,
            format_quantity(self.plan.x)
        )?;
        writeln!(
            f,
            "  Quantity of {}: {}",
            self.request.second.name,
            format_quantity(self.plan.y)
        )?;
        write!(
            f,
            "  Maximum total profit: {}",
            format_currency(self.plan.objective_value, self.currency)
        )
    }
}

/// What to tell the user when a request cannot be solved
pub fn describe_failure(error: &SolveError) -> String {
    match error {
        SolveError::Infeasible => {
            "No feasible solution: no production mix satisfies all of the resource limits.".into()
        }
        SolveError::Unbounded => "Unbounded problem: profit can grow without limit. \
             Check that every product consumes some of a limited resource."
            .into(),
        SolveError::DegenerateConstraint { constraint, reason } => format!(
            "Configuration error in the '{}' constraint: {}, so its boundary cannot be plotted.",
            constraint, reason
        ),
        SolveError::Other(message) => format!("The solver failed: {}", message),
    }
}
