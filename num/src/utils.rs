use dashu_base::{DivRem, Sign, UnsignedAbs};
use dashu_int::{IBig, UBig};

/// `radix^exp` as an unsigned big integer.
#[inline]
pub(crate) fn radix_pow(radix: u32, exp: usize) -> UBig {
    UBig::from(radix).pow(exp)
}

/// Get the integer `k` such that `radix^(k-1) <= |value| < radix^k`.
/// Returns 0 if `value` is zero, mirroring the teacher's `get_precision`.
pub(crate) fn digit_len(value: &IBig, radix: u32) -> usize {
    let mag: UBig = value.unsigned_abs();
    if mag.is_zero() {
        return 0;
    }

    // estimate using bit length, then correct by direct comparison: bit_len() is
    // always an over-estimate of log_radix for radix >= 2, so we only need to walk down.
    let bits = mag.bit_len();
    let radix_log2 = (radix as f64).log2();
    let mut guess = ((bits as f64) / radix_log2).ceil() as usize;
    if guess == 0 {
        guess = 1;
    }

    while guess > 1 && radix_pow(radix, guess - 1) > mag {
        guess -= 1;
    }
    while radix_pow(radix, guess) <= mag {
        guess += 1;
    }
    guess
}

/// Split `value`'s radix-digit representation into `(high, low)` such that
/// `value == high * radix^exp + low` and `0 <= low < radix^exp`.
pub(crate) fn split_digits(value: &IBig, radix: u32, exp: usize) -> (IBig, IBig) {
    if exp == 0 {
        return (value.clone(), IBig::ZERO);
    }
    let divisor = IBig::from(radix_pow(radix, exp));
    let (hi, lo) = value.div_rem(divisor.clone());
    // Euclidean-style: make sure the remainder is non-negative (it represents digits)
    if lo.sign() == Sign::Negative {
        (hi - IBig::ONE, lo + divisor)
    } else {
        (hi, lo)
    }
}

/// Multiply `value` by `radix^exp`.
pub(crate) fn shl_digits(value: &IBig, radix: u32, exp: usize) -> IBig {
    if exp == 0 {
        value.clone()
    } else {
        value * IBig::from(radix_pow(radix, exp))
    }
}
