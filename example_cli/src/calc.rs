//! Arithmetic dispatch from an operator symbol to an `arithm` primitive.

use crate::error::{CalcError, Result};
use std::{fmt, str::FromStr};
use tracing::debug;

/// Supported arithmetic operators.
///
/// Each variant owns its symbol and the primitive it maps to. Supporting a new
/// operation means adding a variant and extending [`Operator::symbol`] and
/// [`Operator::apply`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
}

impl Operator {
    pub const ALL: [Operator; 1] = [Operator::Add];

    pub fn symbol(self) -> &'static str {
        match self {
            Operator::Add => "+",
        }
    }

    /// Applies the operator. Overflow behaviour is that of the `arithm`
    /// primitive, which wraps.
    pub fn apply(self, a: i64, b: i64) -> i64 {
        match self {
            Operator::Add => arithm::add(a, b),
        }
    }
}

impl FromStr for Operator {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self> {
        Operator::ALL
            .into_iter()
            .find(|op| op.symbol() == s)
            .ok_or_else(|| CalcError::UnsupportedOperation(s.to_string()))
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Evaluates `a <op> b`.
///
/// # Errors
///
/// Returns [`CalcError::UnsupportedOperation`] carrying `op` when it is not the
/// symbol of any [`Operator`].
///
/// # Example
///
/// ```rust
/// use example_cli::{CalcError, calc};
///
/// assert_eq!(calc("+", 2, 3), Ok(5));
/// assert_eq!(
///     calc("-", 2, 3),
///     Err(CalcError::UnsupportedOperation("-".to_string()))
/// );
/// ```
pub fn calc(op: &str, a: i64, b: i64) -> Result<i64> {
    let operator: Operator = op.parse()?;
    let result = operator.apply(a, b);
    debug!(%operator, a, b, result, "calc");
    Ok(result)
}
