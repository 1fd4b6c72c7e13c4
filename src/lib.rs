//! # scatter_sort
//!
//! scatter_sort is a binary most-significant-bit-first radix sort ("bitwise scatter sort")
//! for fixed-width non-negative integers.
//!
//! ## Usage
//!
//! In the simplest case, call `my_vec.scatter_sort()`, or use one of the copying entry
//! points:
//!
//!  * `sort(&values, threshold)` recursively partitions on one bit at a time, from the most
//!    significant bit down, and finishes small buckets with a stable comparison sort.
//!  * `parallel_sort(&values, threshold, min_parallel_size)` splits once on the top bit and
//!    sorts both halves on two workers owned by the call.
//!  * `vectorized_sort(&values, max_bits)` packs the lowest `max_bits` bits of each value
//!    into a key and sorts by that key.
//!
//! ```
//! use scatter_sort::{parallel_sort, sort, ScatterSort};
//!
//! let values: Vec<u32> = (1..=1000).rev().collect();
//!
//! assert_eq!(sort(&values, 32).unwrap(), (1..=1000).collect::<Vec<u32>>());
//! assert_eq!(parallel_sort(&values, 32, 1000).unwrap(), sort(&values, 32).unwrap());
//!
//! let mut in_place = values.clone();
//! in_place
//!     .scatter_sort_builder()
//!     .with_threshold(8)
//!     .with_bits(10)
//!     .sort()
//!     .unwrap();
//!
//! assert_eq!(in_place, (1..=1000).collect::<Vec<u32>>());
//! ```
//!
//! ## Stability
//!
//! `sort` and `parallel_sort` are stable: values with equal keys keep their input order.
//! Custom types can be sorted by implementing `ScatterKey`.
//!
//! ## Errors
//!
//! All input is validated before any work starts. Negative values fail with
//! `SortError::InvalidInput`, values wider than the configured bit width with
//! `SortError::ValueOutOfRange`.
//!
//! ## Features
//!
//!  * `multi-threaded` (default) enables `parallel_sort` and the parallel builder route.
//!  * `work_profiles` emits a `trace!` record for every partition step.
//!
//! ## License
//!
//! Licensed under either of
//!
//! * Apache License, Version 2.0, ([LICENSE-APACHE](LICENSE-APACHE) or <http://www.apache.org/licenses/LICENSE-2.0>)
//! * MIT license ([LICENSE-MIT](LICENSE-MIT) or <http://opensource.org/licenses/MIT>)
//!
//! at your option.

mod error;
mod scatter_key;
mod scatter_key_impl;
mod scatter_sort;
mod scatter_sort_builder;
mod sort_config;
mod sorts;
mod utils;


#[cfg(test)]
pub(crate) use utils::test_utils;

pub use error::{Result, SortError};
pub use scatter_key::ScatterKey;
#[cfg(feature = "multi-threaded")]
pub use scatter_sort::parallel_sort;
pub use scatter_sort::{sort, ScatterSort};
pub use scatter_sort_builder::ScatterSortBuilder;
pub use sort_config::{SortConfig, DEFAULT_MIN_PARALLEL_SIZE, DEFAULT_THRESHOLD};
pub use sorts::vectorized_sort;
