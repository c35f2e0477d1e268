pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid flow matrix: {message}")]
    InvalidMatrix { message: String },

    #[error("invalid layout configuration: {message}")]
    InvalidConfig { message: String },

    #[error(
        "padding budget exceeded: {required} rad of padding requested but only {available} rad available"
    )]
    PaddingBudgetExceeded { required: f64, available: f64 },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
