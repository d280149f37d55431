use std::result::Result as StdResult;

use thiserror::Error;

/// Error type that captures ledger, budget, and reporting failures.
#[derive(Debug, Error, PartialEq)]
pub enum FinanceError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Invalid state: {0}")]
    InvalidState(String),
    #[error("Empty input: {0}")]
    EmptyInput(String),
    #[error("Category not found: {0}")]
    CategoryNotFound(String),
}

pub type Result<T> = StdResult<T, FinanceError>;

impl FinanceError {
    /// True when the caller should re-prompt for input rather than treat the failure as a defect.
    pub fn is_recoverable(&self) -> bool {
        matches!(
            self,
            FinanceError::Validation(_) | FinanceError::CategoryNotFound(_)
        )
    }
}
