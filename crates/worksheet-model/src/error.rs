use thiserror::Error;

/// Rejected settings. Reported before any generation starts.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Select at least one operation")]
    NoOperation,
    #[error("Min and Max must be numbers")]
    NotANumber,
    #[error("Only whole numbers allowed: Min and Max must be integers")]
    NotAnInteger,
    #[error("Only whole numbers allowed: Min and Max must be ≥ 0")]
    Negative,
    #[error("Min must be less than or equal to Max")]
    MinAboveMax,
    #[error("Min and Max must not exceed {limit}")]
    TooLarge { limit: u64 },
}

/// Broken generator precondition; unreachable for validated settings.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GenerateError {
    #[error("No operation selected")]
    NoOperationSelected,
}

#[derive(Debug, Error)]
pub enum WorksheetError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Generate(#[from] GenerateError),
}

pub type Result<T> = std::result::Result<T, WorksheetError>;
