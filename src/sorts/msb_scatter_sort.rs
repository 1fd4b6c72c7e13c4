use crate::sorts::comparative_sort::comparative_sort;
use crate::utils::*;
use crate::ScatterKey;
use arbitrary_chunks::ArbitraryChunks;
#[cfg(feature = "work_profiles")]
use log::trace;

/// Recursive binary MSB radix sort of `bucket` on its lowest `bits_left` bits.
///
/// `tmp_bucket` must be the same length as `bucket`; its contents are scratch. Equal keys
/// always share every bit, so they travel through the same buckets and the stable scatter
/// plus the stable comparison sort keep their input order.
pub fn scatter_sort<T>(bucket: &mut [T], tmp_bucket: &mut [T], bits_left: u32, threshold: usize)
where
    T: ScatterKey + Copy,
{
    debug_assert_eq!(bucket.len(), tmp_bucket.len());

    if bucket.len() <= threshold || bits_left == 0 {
        comparative_sort(bucket);
        return;
    }

    let bit = bits_left - 1;
    let counts = get_bit_counts(bucket, bit);

    #[cfg(feature = "work_profiles")]
    trace!("({}) SCATTER: {:?}", bit, counts);

    // Everything lands in one bucket, which is just the input on the next bit.
    if is_homogenous_bucket(&counts) {
        scatter_sort(bucket, tmp_bucket, bit, threshold);
        return;
    }

    scatter_by_bit(bucket, tmp_bucket, &counts, bit);
    bucket.copy_from_slice(tmp_bucket);

    bucket
        .arbitrary_chunks_mut(&counts)
        .zip(tmp_bucket.arbitrary_chunks_mut(&counts))
        .for_each(|(c, t)| scatter_sort(c, t, bit, threshold));
}

/// In-place entry point: validates, then sorts on the lowest `bits` bits.
pub fn scatter_sort_adapter<T>(bucket: &mut [T], threshold: usize, bits: u32) -> crate::Result<()>
where
    T: ScatterKey + Copy,
{
    validate_input(bucket, bits)?;

    if bucket.len() <= 1 {
        return Ok(());
    }

    let mut tmp_bucket = bucket.to_vec();
    scatter_sort(bucket, &mut tmp_bucket, bits, threshold);

    Ok(())
}
