mod comparative_sort;
mod msb_scatter_sort;
#[cfg(feature = "multi-threaded")]
mod parallel_scatter_sort;
mod vectorized_sort;

pub use comparative_sort::*;
pub use msb_scatter_sort::*;
#[cfg(feature = "multi-threaded")]
pub use parallel_scatter_sort::*;
pub use vectorized_sort::*;
