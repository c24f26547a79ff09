//! `root`, `sqrt`, `cbrt` (spec component 4.2), all reducing to the inverse-root engine.

use florix_num::{Float, Precision};

use crate::error::{DomainError, KernelError, Result};
use crate::invroot::inverse_root;
use crate::precision::extend;

/// `x^(1/n)` to `target_precision` digits.
pub fn root(x: &Float, n: i64, target_precision: usize) -> Result<Float> {
    if n == 0 && x.is_zero() {
        return Err(KernelError::from(DomainError::ZerothRootOfZero));
    }
    if n == 0 {
        return Ok(Float::one(x.radix()));
    }
    if x.is_zero() {
        return Ok(Float::zero(x.radix()).with_precision(Precision::Finite(target_precision)));
    }
    if n == 1 {
        return Ok(x.with_precision(Precision::Finite(target_precision)));
    }
    if n == i64::MIN {
        let half = root(x, n / -2, extend(target_precision))?;
        return sqrt(&half, target_precision);
    }
    if n < 0 {
        return inverse_root(x, -n, target_precision, None, None);
    }
    if n == 2 {
        let inv = inverse_root(x, 2, extend(target_precision), None, None)?;
        return Ok((x * &inv).with_precision(Precision::Finite(target_precision)));
    }
    if n == 3 {
        let squared = x * x;
        let inv = inverse_root(&squared, 3, extend(target_precision), None, None)?;
        return Ok((x * &inv).with_precision(Precision::Finite(target_precision)));
    }

    // general n: invert twice through the reciprocal-root primitive.
    let inv = inverse_root(x, n, extend(target_precision), None, None)?;
    inverse_root(&inv, 1, target_precision, None, None)
}

/// `sqrt(x)`, to `target_precision` digits.
#[inline]
pub fn sqrt(x: &Float, target_precision: usize) -> Result<Float> {
    root(x, 2, target_precision)
}

/// `cbrt(x)`, to `target_precision` digits.
#[inline]
pub fn cbrt(x: &Float, target_precision: usize) -> Result<Float> {
    root(x, 3, target_precision)
}
