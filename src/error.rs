use thiserror::Error;

#[derive(Error, Debug)]
pub enum LocalityError {
    #[error("invalid {name}: {value} (must be a positive integer)")]
    InvalidArgument { name: &'static str, value: i64 },
    #[error("invalid value range [{low}, {high}): low must be below high")]
    InvalidRange { low: i32, high: i32 },
    #[error("cannot allocate a {size}x{size} matrix")]
    AllocationFailure { size: usize },
    #[error("matrix of size {size}x{size} needs {expected} elements, got {len}")]
    DimensionMismatch {
        size: usize,
        expected: usize,
        len: usize,
    },
    #[error("failed to write report: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, LocalityError>;
