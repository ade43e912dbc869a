use thiserror::Error;

/// Errors raised by array construction and batch dispatch.
#[derive(Debug, Error)]
pub enum Error {
    /// A dedicated worker pool could not be created.
    #[error("failed to build worker pool: {0}")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),

    /// A flat coordinate slice does not hold a whole number of points.
    #[error("flat coordinate slice of length {len} is not a multiple of dimension {dim}")]
    ComponentCount { len: usize, dim: usize },

    /// An output buffer does not match the number of input points.
    #[error("output length {actual} does not match point count {expected}")]
    LengthMismatch { expected: usize, actual: usize },
}

pub type Result<T> = std::result::Result<T, Error>;
