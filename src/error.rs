use std::fmt;

use thiserror::Error;

/// One of the two sequences under a combining cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    First,
    Second,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::First => write!(f, "first"),
            Side::Second => write!(f, "second"),
        }
    }
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum CombineError {
    #[error("division by zero")]
    DivisionByZero,
    #[error("{0} sequence has no element to read")]
    EmptySequence(Side),
}

pub type Result<T> = std::result::Result<T, CombineError>;
