//! Integer power and radix-scaling helpers (spec components 4.1 and 4.4).

use alloc::format;

use florix_num::{Float, Precision};

use crate::error::{DomainError, KernelError, Result};
use crate::invroot::inverse_root;

/// `x^n` for an integer exponent, by binary exponentiation.
///
/// `n` may be negative (computed as the inverse of `x^-n`) or zero (`x^0 == 1`,
/// except `0^0` which is a domain error). Trailing zero bits of `n` are squared
/// away before the accumulation loop starts, the conventional optimization for
/// binary exponentiation.
pub fn pow_int(x: &Float, n: i64) -> Result<Float> {
    if n == 0 {
        if x.is_zero() {
            return Err(KernelError::from(DomainError::ZeroToZeroPower));
        }
        return Ok(Float::one(x.radix()));
    }

    if n == i64::MIN {
        // can't negate i64::MIN directly; split into two halving steps instead,
        // the same pre-splitting pattern used by `root`/`inverse_root`.
        let half = pow_int(x, n / 2)?;
        return Ok(&half * &half);
    }
    if n < 0 {
        let recip = inverse_root(x, 1, target_precision_for(x), None, None)?;
        return pow_int(&recip, n.unsigned_abs() as i64);
    }

    let mut exp = n as u64;
    let mut base = x.clone();

    // square away trailing zero bits first
    while exp & 1 == 0 && exp != 0 {
        base = &base * &base;
        exp >>= 1;
    }

    let mut result = base.clone();
    exp >>= 1;
    while exp != 0 {
        base = &base * &base;
        if exp & 1 == 1 {
            result = &result * &base;
        }
        exp >>= 1;
    }

    if x.precision().is_unlimited() {
        Ok(result.with_precision(Precision::Unlimited))
    } else {
        Ok(result)
    }
}

fn target_precision_for(x: &Float) -> usize {
    x.precision().digits().unwrap_or(crate::precision::double_precision(x.radix()))
}

/// `x * radix^k`, the scale-by-integer-power-of-radix primitive used throughout
/// the kernel. Building the literal `"1e<k>"` avoids a `pow` call whenever the
/// radix is small enough for that literal format to be unambiguous (`radix <=
/// 14`); otherwise `radix^|k|` is computed directly by binary exponentiation.
pub fn scale(x: &Float, k: i64) -> Float {
    if k == 0 || x.is_zero() {
        return x.clone();
    }

    let radix = x.radix();
    if radix <= 14 {
        if let Ok(factor) = Float::parse_exp(&format!("1e{k}"), radix) {
            return x * &factor;
        }
    }

    let (high, parity) = if k == i64::MIN {
        (k / 2, k - (k / 2) * 2)
    } else {
        (k, 0)
    };

    let magnitude = Float::from_i64(radix as i64, radix);
    let factor_half = pow_int(&magnitude, high.unsigned_abs() as i64).expect("radix is never zero");
    let mut result = if high >= 0 { x * &factor_half } else { x.div_to(&factor_half, target_precision_for(x)) };

    if parity != 0 {
        result = scale(&result, parity);
    }
    result
}
