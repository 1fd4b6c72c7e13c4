use crate::ScatterKey;

macro_rules! impl_unsigned {
    ($($t:ty),*) => {
        $(
            impl ScatterKey for $t {
                const BITS: u32 = <$t>::BITS;

                #[inline]
                fn to_key(&self) -> u64 {
                    *self as u64
                }
            }
        )*
    };
}

// Negative values never reach `to_key` once validated, so the cast only ever sees the
// non-negative range and keeps the value's bit pattern.
macro_rules! impl_signed {
    ($($t:ty),*) => {
        $(
            impl ScatterKey for $t {
                const BITS: u32 = <$t>::BITS;

                #[inline]
                fn to_key(&self) -> u64 {
                    *self as u64
                }

                #[inline]
                fn is_negative(&self) -> bool {
                    *self < 0
                }
            }
        )*
    };
}

impl_unsigned!(u8, u16, u32, u64, usize);
impl_signed!(i8, i16, i32, i64, isize);
