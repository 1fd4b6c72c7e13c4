use crate::error::Result;
use crate::sort_config::validate_bits;
use crate::utils::validate_non_negative;
use crate::ScatterKey;

const LANES: usize = 8;

/// Packs bits `max_bits - 1 ..= 0` of `v` MSB-first. Anything above `max_bits` is dropped.
#[inline]
fn pack_key(v: u64, max_bits: u32) -> u64 {
    let mut key = 0u64;

    for i in 0..max_bits {
        key = (key << 1) | ((v >> (max_bits - 1 - i)) & 1);
    }

    key
}

/// Derives the packed key of every element, a lane of eight at a time.
pub fn derive_keys<T>(bucket: &[T], max_bits: u32) -> Vec<u64>
where
    T: ScatterKey,
{
    let mut keys = vec![0u64; bucket.len()];
    let chunks = bucket.chunks_exact(LANES);
    let rem = chunks.remainder();
    let mut key_chunks = keys.chunks_exact_mut(LANES);

    chunks
        .zip(key_chunks.by_ref())
        .for_each(|(chunk, out)| {
            let lane: [u64; LANES] = [
                chunk[0].to_key(),
                chunk[1].to_key(),
                chunk[2].to_key(),
                chunk[3].to_key(),
                chunk[4].to_key(),
                chunk[5].to_key(),
                chunk[6].to_key(),
                chunk[7].to_key(),
            ];

            for (k, v) in out.iter_mut().zip(lane) {
                *k = pack_key(v, max_bits);
            }
        });

    key_chunks
        .into_remainder()
        .iter_mut()
        .zip(rem)
        .for_each(|(k, v)| *k = pack_key(v.to_key(), max_bits));

    keys
}

/// Sorts by the packed `max_bits` key of each element.
///
/// With `max_bits == T::BITS` this is a plain ascending sort. With fewer bits the high
/// bits are ignored, so values that differ only above `max_bits` compare equal and keep
/// their input order.
pub fn vectorized_sort<T>(bucket: &[T], max_bits: u32) -> Result<Vec<T>>
where
    T: ScatterKey + Copy,
{
    validate_bits::<T>(max_bits)?;
    validate_non_negative(bucket)?;

    if bucket.is_empty() {
        return Ok(Vec::new());
    }

    let keys = derive_keys(bucket, max_bits);
    let mut indices: Vec<usize> = (0..bucket.len()).collect();
    indices.sort_by_key(|&i| keys[i]);

    Ok(indices.into_iter().map(|i| bucket[i]).collect())
}
