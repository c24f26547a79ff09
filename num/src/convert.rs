use dashu_int::IBig;

use crate::float::Float;
use crate::precision::Precision;

impl Float {
    /// Builds an exact `Float` from an already-reduced `(mantissa, scale)` pair in the
    /// given radix, i.e. `value == mantissa * radix^scale`.
    #[inline]
    pub fn from_mantissa_scale(mantissa: IBig, scale: isize, radix: u32) -> Self {
        Float::from_parts(radix, mantissa, scale, Precision::Unlimited)
    }
}

/// Builds an exact `Float` of the given radix from a primitive integer. The radix
/// itself is not implied by any type here, so these are inherent constructors on
/// [`Float`] rather than a blanket `From<i64>` impl (which would have no radix to use).
macro_rules! impl_from_primitive {
    ($($t:ty => $method:ident),* $(,)?) => {$(
        impl Float {
            #[inline]
            pub fn $method(value: $t, radix: u32) -> Self {
                Float::from_parts(radix, IBig::from(value), 0, Precision::Unlimited)
            }
        }
    )*};
}

impl_from_primitive! {
    i8 => from_i8,
    i16 => from_i16,
    i32 => from_i32,
    u8 => from_u8,
    u16 => from_u16,
    u32 => from_u32,
    u64 => from_u64,
}
