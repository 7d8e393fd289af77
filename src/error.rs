use thiserror::Error;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Product not found: {0}")]
    ProductNotFound(String),

    #[error("Duplicate product id in catalog: {0}")]
    DuplicateProductId(String),

    #[error("Trip length must be between 1 and 7 days, got {0}")]
    InvalidTripLength(u8),

    #[error("Day {day} is outside the {trip_length}-day trip")]
    InvalidDay { day: u8, trip_length: u8 },

    #[error("Invalid calorie range: {min} - {max}")]
    InvalidCalorieRange { min: f64, max: f64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Prompt error: {0}")]
    Prompt(#[from] dialoguer::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, StoreError>;
