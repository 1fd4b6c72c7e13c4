use crate::error::Result;
use crate::sort_config::SortConfig;
#[cfg(feature = "multi-threaded")]
use crate::sorts::parallel_scatter_sort_adapter;
use crate::sorts::scatter_sort_adapter;
use crate::ScatterKey;
use log::debug;

pub struct ScatterSortBuilder<'a, T> {
    data: &'a mut [T],
    config: SortConfig,
    parallel: bool,
}

impl<'a, T> ScatterSortBuilder<'a, T>
where
    T: ScatterKey + Copy + Send + Sync,
{
    pub(crate) fn new(data: &'a mut [T]) -> Self {
        Self {
            data,
            config: SortConfig::new::<T>(),
            parallel: cfg!(feature = "multi-threaded"),
        }
    }

    /// Buckets of at most `threshold` elements are finished with a comparison sort.
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.config.threshold = threshold;

        self
    }

    /// Only the lowest `bits` bits are inspected. Values wider than this are rejected.
    pub fn with_bits(mut self, bits: u32) -> Self {
        self.config.bits = bits;

        self
    }

    pub fn with_min_parallel_size(mut self, min_parallel_size: usize) -> Self {
        self.config.min_parallel_size = min_parallel_size;

        self
    }

    /// Enables or disables the two-worker top-level split. Without the `multi-threaded`
    /// feature this is always off.
    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel && cfg!(feature = "multi-threaded");

        self
    }

    pub fn with_config(mut self, config: SortConfig) -> Self {
        self.config = config;

        self
    }

    pub fn sort(self) -> Result<()> {
        self.config.validate::<T>()?;

        debug!(
            "sorting {} elements, parallel: {}, {:?}",
            self.data.len(),
            self.parallel,
            self.config
        );

        #[cfg(feature = "multi-threaded")]
        if self.parallel {
            return parallel_scatter_sort_adapter(
                self.data,
                self.config.threshold,
                self.config.bits,
                self.config.min_parallel_size,
            );
        }

        scatter_sort_adapter(self.data, self.config.threshold, self.config.bits)
    }
}
