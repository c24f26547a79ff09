//! Converts a native `f64` into a [`Float`] of a given radix and precision.
//!
//! This is the inverse of [`Float::to_f64`][florix_num::Float::to_f64]: Newton
//! iterations throughout the kernel bootstrap their first guess as a native double
//! (cheap, no arbitrary-precision arithmetic involved) and then need to bring that
//! guess back into the working radix to start iterating. The conversion is exact —
//! an `f64` is `mantissa * 2^exp` for a 53-bit integer mantissa, which is represented
//! losslessly and then divided out to the requested number of radix digits.

use dashu_int::IBig;
use florix_num::Float;

/// Builds a `Float` approximating `value`, carrying `digits` digits of `radix`.
///
/// Returns `Float::zero(radix)` for `value == 0.0`. Panics if `value` is NaN or
/// infinite; those never arise from the kernel's own seeding arithmetic.
pub(crate) fn from_f64(value: f64, radix: u32, digits: usize) -> Float {
    assert!(value.is_finite(), "seed value must be finite");
    if value == 0.0 {
        return Float::zero(radix);
    }

    let negative = value.is_sign_negative();
    let bits = value.abs().to_bits();
    let exp_field = ((bits >> 52) & 0x7ff) as i64;
    let mant_field = bits & 0xf_ffff_ffff_ffff;

    let (mantissa, exp2): (u64, i64) = if exp_field == 0 {
        (mant_field, -1074)
    } else {
        (mant_field | (1u64 << 52), exp_field - 1075)
    };

    let mantissa = IBig::from(mantissa);
    let (numer, denom) = if exp2 >= 0 {
        (mantissa << exp2 as usize, IBig::ONE)
    } else {
        (mantissa, IBig::ONE << (-exp2) as usize)
    };

    let numer = Float::from_mantissa_scale(numer, 0, radix);
    let denom = Float::from_mantissa_scale(denom, 0, radix);
    let magnitude = numer.div_to(&denom, digits.max(1));

    if negative {
        -&magnitude
    } else {
        magnitude
    }
}
