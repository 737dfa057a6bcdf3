//! Error types for the arithmetic dispatcher

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// The operator symbol is not one of the supported [`crate::Operator`]s.
    #[error("Unsupported operation: {0}")]
    UnsupportedOperation(String),
}

pub type Result<T> = std::result::Result<T, CalcError>;
