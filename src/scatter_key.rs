/// A fixed-width integer key that can be partitioned one bit at a time.
///
/// `BITS` is the full width of the key and must be at most 64, since keys are `u64`; wider
/// declarations are rejected with `SortError::InvalidBitWidth`. `to_key` must return the
/// bit pattern the sort inspects, with bit `BITS - 1` as the most significant bit. Only the
/// low `BITS` bits of the returned value may be set for any value that passes validation.
///
/// Signed implementations exist so that negative values can be rejected up front; only
/// their non-negative range is sortable.
///
/// ```
/// use scatter_sort::ScatterKey;
///
/// #[derive(Debug, Clone, Copy)]
/// struct Tagged {
///     value: u16,
///     index: usize,
/// }
///
/// impl ScatterKey for Tagged {
///     const BITS: u32 = 16;
///
///     #[inline]
///     fn to_key(&self) -> u64 {
///         self.value as u64
///     }
/// }
/// ```
pub trait ScatterKey {
    const BITS: u32;

    fn to_key(&self) -> u64;

    #[inline]
    fn is_negative(&self) -> bool {
        false
    }

    /// Bit `pos` of the key, counting from the least significant bit.
    #[inline]
    fn get_bit(&self, pos: u32) -> usize {
        ((self.to_key() >> pos) & 1) as usize
    }
}
