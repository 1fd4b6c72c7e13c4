use thiserror::Error;

pub type Result<T> = core::result::Result<T, SortError>;

#[derive(Debug, Error)]
pub enum SortError {
    #[error("negative value at index {index}, only non-negative integers can be sorted")]
    InvalidInput { index: usize },
    #[error("value at index {index} does not fit in {bits} bits")]
    ValueOutOfRange { index: usize, bits: u32 },
    #[error("threshold must be at least 1")]
    InvalidThreshold,
    #[error("bit width {bits} is outside 1..={max}")]
    InvalidBitWidth { bits: u32, max: u32 },
    #[cfg(feature = "multi-threaded")]
    #[error("failed to build sort worker pool")]
    ThreadPool(#[from] rayon::ThreadPoolBuildError),
    #[error("a sort worker panicked")]
    WorkerPanicked,
}
