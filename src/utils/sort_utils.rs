use crate::error::{Result, SortError};
use crate::ScatterKey;

/// Checks every element before any work is done.
///
/// Negative values are reported first; `bits` is only enforced when it is narrower than
/// the 64-bit key space.
#[inline]
pub fn validate_input<T>(bucket: &[T], bits: u32) -> Result<()>
where
    T: ScatterKey,
{
    validate_non_negative(bucket)?;

    if bits < u64::BITS {
        for (index, v) in bucket.iter().enumerate() {
            if v.to_key() >> bits != 0 {
                return Err(SortError::ValueOutOfRange { index, bits });
            }
        }
    }

    Ok(())
}

#[inline]
pub fn validate_non_negative<T>(bucket: &[T]) -> Result<()>
where
    T: ScatterKey,
{
    match bucket.iter().position(|v| v.is_negative()) {
        Some(index) => Err(SortError::InvalidInput { index }),
        None => Ok(()),
    }
}

/// Number of elements with `bit` clear and set, in that order.
#[inline]
pub fn get_bit_counts<T>(bucket: &[T], bit: u32) -> [usize; 2]
where
    T: ScatterKey,
{
    let chunks = bucket.chunks_exact(8);
    let rem = chunks.remainder();
    let mut ones = 0;

    chunks.for_each(|chunk| {
        ones += chunk[0].get_bit(bit)
            + chunk[1].get_bit(bit)
            + chunk[2].get_bit(bit)
            + chunk[3].get_bit(bit)
            + chunk[4].get_bit(bit)
            + chunk[5].get_bit(bit)
            + chunk[6].get_bit(bit)
            + chunk[7].get_bit(bit);
    });

    rem.iter().for_each(|v| ones += v.get_bit(bit));

    [bucket.len() - ones, ones]
}

#[inline]
pub fn is_homogenous_bucket(counts: &[usize; 2]) -> bool {
    counts[0] == 0 || counts[1] == 0
}

/// Stable scatter of `src` into `dst` by `bit`: all clear-bit elements first, then all
/// set-bit elements, each group in its original relative order.
#[inline]
pub fn scatter_by_bit<T>(src: &[T], dst: &mut [T], counts: &[usize; 2], bit: u32)
where
    T: ScatterKey + Copy,
{
    debug_assert_eq!(src.len(), dst.len());
    debug_assert_eq!(counts[0] + counts[1], src.len());

    let mut offsets = [0, counts[0]];

    src.iter().for_each(|v| {
        let b = v.get_bit(bit);
        dst[offsets[b]] = *v;
        offsets[b] += 1;
    });
}
