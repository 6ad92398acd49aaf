use thiserror::Error;

/// Application error types.
///
/// The planner itself never fails for in-domain numeric input; unsuitable
/// inputs come back inside the suggestion record. These variants cover the
/// wiring around it: argument validation, the price feed, and the terminal.
#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Price feed error: {0}")]
    Feed(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
