use crate::error::{Result, SortError};
use crate::sorts::msb_scatter_sort::{scatter_sort, scatter_sort_adapter};
use crate::utils::*;
use crate::ScatterKey;
use log::debug;
use rayon::{ThreadPool, ThreadPoolBuilder};
use std::panic::{catch_unwind, AssertUnwindSafe};

// One worker per top-level bucket.
const WORKERS: usize = 2;

fn build_pool() -> Result<ThreadPool> {
    let pool = ThreadPoolBuilder::new()
        .num_threads(WORKERS)
        .thread_name(|i| format!("scatter-sort-{}", i))
        .build()?;

    Ok(pool)
}

/// Splits `bucket` once on its top bit and sorts both halves on their own worker.
///
/// The pool lives only for this call. If a worker panics the slice is left as some
/// permutation of the input and `SortError::WorkerPanicked` is returned.
pub fn parallel_scatter_sort_adapter<T>(
    bucket: &mut [T],
    threshold: usize,
    bits: u32,
    min_parallel_size: usize,
) -> Result<()>
where
    T: ScatterKey + Copy + Send,
{
    if bucket.len() < min_parallel_size {
        debug!(
            "len {} below parallel minimum {}, sorting sequentially",
            bucket.len(),
            min_parallel_size
        );
        return scatter_sort_adapter(bucket, threshold, bits);
    }

    validate_input(bucket, bits)?;

    if bucket.is_empty() {
        return Ok(());
    }

    let top = bits - 1;
    let mut tmp_bucket = bucket.to_vec();
    let counts = get_bit_counts(bucket, top);

    debug!("top bit {} split into buckets of {:?}", top, counts);

    // A one-sided split leaves one worker idle, so sort it on the calling thread.
    if is_homogenous_bucket(&counts) {
        return catch_worker_panic(|| scatter_sort(bucket, &mut tmp_bucket, top, threshold));
    }

    scatter_by_bit(bucket, &mut tmp_bucket, &counts, top);
    bucket.copy_from_slice(&tmp_bucket);

    let pool = build_pool()?;
    let (b0, b1) = bucket.split_at_mut(counts[0]);
    let (t0, t1) = tmp_bucket.split_at_mut(counts[0]);

    catch_worker_panic(|| {
        pool.join(
            || scatter_sort(b0, t0, top, threshold),
            || scatter_sort(b1, t1, top, threshold),
        );
    })
}

fn catch_worker_panic<F: FnOnce()>(f: F) -> Result<()> {
    catch_unwind(AssertUnwindSafe(f)).map_err(|_| SortError::WorkerPanicked)
}
