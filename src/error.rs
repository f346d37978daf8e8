use thiserror::Error;

/// Minimum duration that can be sampled for an action.
pub const MIN_TIME: f64 = 0.0001;

#[derive(Debug, Error)]
pub enum GenError {
    #[error("at least one action name is required")]
    NoActions,

    #[error("action names must not be empty")]
    EmptyActionName,

    #[error("number of adds per action must be at least 1, got {0}")]
    InvalidSampleCount(usize),

    #[error("maximum time must be a finite number greater than 0.0001, got {0}")]
    InvalidMaxTime(f64),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GenError>;
