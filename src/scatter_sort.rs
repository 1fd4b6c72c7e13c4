use crate::error::Result;
use crate::scatter_sort_builder::ScatterSortBuilder;
use crate::ScatterKey;

pub trait ScatterSort<T> {
    /// scatter_sort sorts in place with the default configuration, based upon the
    /// `scatter_sort::ScatterKey` implementation of `T` in your `Vec<T>` or `[T]`.
    ///
    /// ```
    /// use scatter_sort::ScatterSort;
    ///
    /// let mut values = [3u32, 1, 2];
    /// values.scatter_sort().unwrap();
    ///
    /// assert_eq!(values, [1, 2, 3]);
    /// ```
    fn scatter_sort(&mut self) -> Result<()>;

    fn scatter_sort_builder(&'_ mut self) -> ScatterSortBuilder<'_, T>;
}

impl<T> ScatterSort<T> for Vec<T>
where
    T: ScatterKey + Copy + Send + Sync,
{
    fn scatter_sort(&mut self) -> Result<()> {
        self.scatter_sort_builder().sort()
    }

    fn scatter_sort_builder(&'_ mut self) -> ScatterSortBuilder<'_, T> {
        ScatterSortBuilder::new(self)
    }
}

impl<T> ScatterSort<T> for [T]
where
    T: ScatterKey + Copy + Send + Sync,
{
    fn scatter_sort(&mut self) -> Result<()> {
        self.scatter_sort_builder().sort()
    }

    fn scatter_sort_builder(&'_ mut self) -> ScatterSortBuilder<'_, T> {
        ScatterSortBuilder::new(self)
    }
}

/// Returns a sorted copy of `values` using the sequential binary MSB radix sort.
///
/// ```
/// let sorted = scatter_sort::sort(&[4u32, 2, 4, 1, 3, 2, 4], 32).unwrap();
///
/// assert_eq!(sorted, vec![1, 2, 2, 3, 4, 4, 4]);
/// ```
pub fn sort<T>(values: &[T], threshold: usize) -> Result<Vec<T>>
where
    T: ScatterKey + Copy + Send + Sync,
{
    let mut out = values.to_vec();
    out.scatter_sort_builder()
        .with_threshold(threshold)
        .with_parallel(false)
        .sort()?;

    Ok(out)
}

/// Returns a sorted copy of `values`, splitting on the top bit across two workers once the
/// input reaches `min_parallel_size` elements.
#[cfg(feature = "multi-threaded")]
pub fn parallel_sort<T>(values: &[T], threshold: usize, min_parallel_size: usize) -> Result<Vec<T>>
where
    T: ScatterKey + Copy + Send + Sync,
{
    let mut out = values.to_vec();
    out.scatter_sort_builder()
        .with_threshold(threshold)
        .with_min_parallel_size(min_parallel_size)
        .with_parallel(true)
        .sort()?;

    Ok(out)
}
