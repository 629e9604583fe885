use thiserror::Error;

#[derive(Debug, Error)]
pub enum PlannerError {
    #[error("Invalid {range} row {row}: {message}")]
    InputShape {
        range: String,
        row: usize,
        message: String,
    },

    #[error("Acquisition failed: {0}")]
    Acquisition(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Telemetry error: {0}")]
    Telemetry(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

impl PlannerError {
    /// Shorthand for an input shape error on a given range and row.
    pub fn input_shape(range: &str, row: usize, message: impl Into<String>) -> Self {
        PlannerError::InputShape {
            range: range.to_string(),
            row,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, PlannerError>;
