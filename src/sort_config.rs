use crate::error::{Result, SortError};
use crate::ScatterKey;

/// Buckets at or below this size fall back to a comparison sort.
pub const DEFAULT_THRESHOLD: usize = 32;

/// Inputs shorter than this are never split across workers.
pub const DEFAULT_MIN_PARALLEL_SIZE: usize = 1_000;

#[derive(Debug, Clone, Copy, Eq, PartialEq)]
pub struct SortConfig {
    pub threshold: usize,
    pub bits: u32,
    pub min_parallel_size: usize,
}

impl SortConfig {
    pub fn new<T: ScatterKey>() -> Self {
        Self {
            threshold: DEFAULT_THRESHOLD,
            bits: T::BITS,
            min_parallel_size: DEFAULT_MIN_PARALLEL_SIZE,
        }
    }

    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.threshold = threshold;

        self
    }

    pub fn with_bits(mut self, bits: u32) -> Self {
        self.bits = bits;

        self
    }

    pub fn with_min_parallel_size(mut self, min_parallel_size: usize) -> Self {
        self.min_parallel_size = min_parallel_size;

        self
    }

    /// Checks the configuration against the key width of `T`.
    pub fn validate<T: ScatterKey>(&self) -> Result<()> {
        if self.threshold == 0 {
            return Err(SortError::InvalidThreshold);
        }

        validate_bits::<T>(self.bits)
    }
}

/// Keys are `u64`, so no width above 64 bits is usable whatever `T::BITS` claims.
pub(crate) fn validate_bits<T: ScatterKey>(bits: u32) -> Result<()> {
    let max = T::BITS.min(u64::BITS);

    if bits == 0 || bits > max {
        return Err(SortError::InvalidBitWidth { bits, max });
    }

    Ok(())
}
