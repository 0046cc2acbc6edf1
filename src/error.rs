use thiserror::Error;

#[derive(Error, Debug)]
pub enum CheckoutError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),
    #[error("Unknown coupon: {0}")]
    UnknownCoupon(String),
    #[error("Duplicate coupon: {0}")]
    DuplicateCoupon(String),
    #[error("Animation task is no longer running")]
    AnimationStopped,
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, CheckoutError>;
