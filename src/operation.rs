use std::fmt;


use crate::error::{CombineError, Result};
use crate::numeric::{Arithmetic, Numeric};
use crate::promote::{Promote, Promoted};

/// The binary operation a combining cursor applies on read.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum Operation {
    #[default]
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operation {
    /// Combine `a` and `b` in their promoted type. Integer results wrap on
    /// overflow.
    ///
    /// Division checks the divisor before promotion, so a zero of any numeric
    /// type (including `-0.0`) fails with [`CombineError::DivisionByZero`]
    /// instead of producing an infinity or NaN.
    pub fn evaluate<T1, T2>(self, a: T1, b: T2) -> Result<Promoted<T1, T2>>
    where
        T1: Promote<T2>,
        T2: Numeric,
    {
        if self == Operation::Divide && b.is_zero() {
            return Err(CombineError::DivisionByZero);
        }
        let (a, b) = a.promote(b);
        Ok(match self {
            Operation::Add => a.sum(b),
            Operation::Subtract => a.difference(b),
            Operation::Multiply => a.product(b),
            Operation::Divide => a.quotient(b),
        })
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let symbol = match self {
            Operation::Add => "+",
            Operation::Subtract => "-",
            Operation::Multiply => "*",
            Operation::Divide => "/",
        };
        f.write_str(symbol)
    }
}
