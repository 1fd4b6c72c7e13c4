use crate::ScatterKey;

/// Stable ascending sort by key. This is the only place element comparisons happen.
#[inline]
pub fn comparative_sort<T>(bucket: &mut [T])
where
    T: ScatterKey,
{
    if bucket.len() <= 1 {
        return;
    }

    bucket.sort_by_key(|v| v.to_key());
}
