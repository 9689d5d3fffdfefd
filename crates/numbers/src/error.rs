use thiserror::Error;

/// Result type for number property operations
pub type Result<T> = std::result::Result<T, NumberError>;

/// Errors raised by number sampling
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NumberError {
    /// More values were requested than the range holds
    #[error("Range error: requested {requested} distinct values but only {available} are available")]
    Range { requested: usize, available: u64 },

    /// The upper bound lies below the lower bound
    #[error("Invalid range: low {low} is above high {high}")]
    InvalidRange { low: i64, high: i64 },

    #[error("{value} is outside [{low}, {high}]")]
    OutOfRange { value: i64, low: i64, high: i64 },
}

impl NumberError {
    /// Create a range exhaustion error
    pub fn range(requested: usize, available: u64) -> Self {
        Self::Range {
            requested,
            available,
        }
    }

    pub fn out_of_range(value: i64, low: i64, high: i64) -> Self {
        Self::OutOfRange { value, low, high }
    }
}
