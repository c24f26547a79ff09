//! General `pow`, fused multiply-add/subtract, hyperbolics, and inverse trig
//! (spec components 4.6 and 4.11). Forward `cos`/`sin`/`tan`/`atan2` live in
//! [`crate::trig`]; this module is everything built on top of them plus `exp`/`log`.

use dashu_base::Sign;
use florix_num::{Float, Precision};

use crate::complex::Complex;
use crate::error::{DomainError, KernelError, OperationError, Result};
use crate::exp::exp;
use crate::log::log;
use crate::precision::{extend, extend_by, fma_precisions};
use crate::root::sqrt;
use crate::trig::atan2;

fn target_precision(p: florix_num::Precision) -> Result<usize> {
    p.digits().ok_or_else(|| KernelError::from(OperationError::UnlimitedPrecisionUnsupported))
}

fn abs(v: &Float) -> Float {
    if v.sign() == Sign::Negative {
        -v
    } else {
        v.clone()
    }
}

/// `x^y` for real `x, y`, via `exp(y * log(x))`.
pub fn pow(x: &Float, y: &Float) -> Result<Float> {
    let radix = x.radix();
    if y.is_zero() && x.is_zero() {
        return Err(KernelError::from(DomainError::ZeroToZeroPower));
    }
    let one = Float::one(radix);
    if x.is_zero() || *x == one || *y == one {
        return Ok(x.clone());
    }
    if x.sign() == Sign::Negative {
        return Err(KernelError::from(DomainError::PowNegativeBase));
    }

    let base_precision = target_precision(x.precision().min(y.precision()))?;
    let extra = if x.equal_digits(&one, base_precision) >= base_precision {
        base_precision
    } else {
        0
    };
    let working_precision = extend_by(base_precision, extra);

    let x_at = x.with_precision(Precision::Finite(working_precision));
    let y_at = y.with_precision(Precision::Finite(working_precision));

    let log_x = log(&x_at)?;
    let product = (&y_at * &log_x).with_precision(Precision::Finite(working_precision));
    let result = exp(&product)?;
    Ok(result.with_precision(Precision::Finite(base_precision)))
}

/// `a*b + c*d`, each product computed only to the precision that survives the
/// final sum.
pub fn multiply_add(a: &Float, b: &Float, c: &Float, d: &Float, out_precision: usize) -> Float {
    let (p_ab, p_cd, p_out) = fma_precisions(out_precision, a, b, c, d);
    let ab = (&a.with_precision(Precision::Finite(p_ab)) * &b.with_precision(Precision::Finite(p_ab)))
        .with_precision(Precision::Finite(p_ab));
    let cd = (&c.with_precision(Precision::Finite(p_cd)) * &d.with_precision(Precision::Finite(p_cd)))
        .with_precision(Precision::Finite(p_cd));
    let sum = &ab + &cd;
    if sum.is_zero() {
        sum
    } else {
        sum.with_precision(Precision::Finite(p_out))
    }
}

/// `a*b - c*d`, each product computed only to the precision that survives the
/// final difference.
pub fn multiply_subtract(a: &Float, b: &Float, c: &Float, d: &Float, out_precision: usize) -> Float {
    multiply_add(a, b, c, &-d, out_precision)
}

/// `cosh(x) = (e^x + e^-x) / 2`.
pub fn cosh(x: &Float) -> Result<Float> {
    let radix = x.radix();
    let p = target_precision(x.precision())?;
    let x_at = x.with_precision(Precision::Finite(extend(p)));
    let e_pos = exp(&x_at)?;
    let e_neg = exp(&-&x_at)?;
    Ok((&e_pos + &e_neg).with_precision(Precision::Finite(p)) / Float::from_i64(2, radix))
}

/// `sinh(x) = (e^x - e^-x) / 2`.
pub fn sinh(x: &Float) -> Result<Float> {
    let radix = x.radix();
    let p = target_precision(x.precision())?;
    let x_at = x.with_precision(Precision::Finite(extend(p)));
    let e_pos = exp(&x_at)?;
    let e_neg = exp(&-&x_at)?;
    Ok((&e_pos - &e_neg).with_precision(Precision::Finite(p)) / Float::from_i64(2, radix))
}

/// `tanh(x) = (e^{2|x|} - 1) / (e^{2|x|} + 1)`, sign restored afterward.
pub fn tanh(x: &Float) -> Result<Float> {
    let radix = x.radix();
    let p = target_precision(x.precision())?;
    if x.is_zero() {
        return Ok(Float::zero(radix).with_precision(Precision::Finite(p)));
    }
    let negative = x.sign() == Sign::Negative;
    let two_ax = &abs(x).with_precision(Precision::Finite(extend(p))) * &Float::from_i64(2, radix);
    let e2x = exp(&two_ax)?;
    let one = Float::one(radix);
    let magnitude = (&e2x - &one).div_to(&(&e2x + &one), p);
    Ok(if negative { -&magnitude } else { magnitude })
}

/// `asinh(x) = log(x + sqrt(x^2 + 1))`.
pub fn asinh(x: &Float) -> Result<Float> {
    let radix = x.radix();
    let p = target_precision(x.precision())?;
    let working = extend(p);
    let x_at = x.with_precision(Precision::Finite(working));
    let inner = (&(&x_at * &x_at) + &Float::one(radix)).with_precision(Precision::Finite(working));
    let root = sqrt(&inner, working)?;
    let arg = (&x_at + &root).with_precision(Precision::Finite(working));
    Ok(log(&arg)?.with_precision(Precision::Finite(p)))
}

/// `acosh(x) = log(x + sqrt(x^2 - 1))`, requires `x >= 1`.
pub fn acosh(x: &Float) -> Result<Float> {
    let radix = x.radix();
    let p = target_precision(x.precision())?;
    let working = extend(p);
    let x_at = x.with_precision(Precision::Finite(working));
    let inner = (&(&x_at * &x_at) - &Float::one(radix)).with_precision(Precision::Finite(working));
    let root = sqrt(&inner, working)?;
    let arg = (&x_at + &root).with_precision(Precision::Finite(working));
    Ok(log(&arg)?.with_precision(Precision::Finite(p)))
}

/// `atanh(x) = 0.5 * log((1+x)/(1-x))`, computed on `|x|` (where the argument
/// of `log` stays `>= 1`) and the sign restored afterward, since `atanh` is odd.
pub fn atanh(x: &Float) -> Result<Float> {
    let radix = x.radix();
    let p = target_precision(x.precision())?;
    let working = extend(p);
    let negative = x.sign() == Sign::Negative;
    let ax = abs(x).with_precision(Precision::Finite(working));
    let one = Float::one(radix);
    let numerator = (&one + &ax).with_precision(Precision::Finite(working));
    let denominator = (&one - &ax).with_precision(Precision::Finite(working));
    let ratio = numerator.div_to(&denominator, working);
    let l = log(&ratio)?;
    let half = l.div_to(&Float::from_i64(2, radix), p);
    Ok(if negative { -&half } else { half })
}

/// `asin(x) = Im(log(sqrt(1-x^2) + i*x))`.
pub fn asin(x: &Float) -> Result<Float> {
    let radix = x.radix();
    let p = target_precision(x.precision())?;
    let working = extend(p);
    let x_at = x.with_precision(Precision::Finite(working));
    let one = Float::one(radix);
    let inner = (&one - &(&x_at * &x_at)).with_precision(Precision::Finite(working));
    let cos_part = sqrt(&inner, working)?;
    let result = Complex::new(cos_part, x_at).ln(working)?;
    Ok(result.im.with_precision(Precision::Finite(p)))
}

/// `acos(x) = Im(log(x + i*sqrt(1-x^2)))`.
pub fn acos(x: &Float) -> Result<Float> {
    let radix = x.radix();
    let p = target_precision(x.precision())?;
    let working = extend(p);
    let x_at = x.with_precision(Precision::Finite(working));
    let one = Float::one(radix);
    let inner = (&one - &(&x_at * &x_at)).with_precision(Precision::Finite(working));
    let sin_part = sqrt(&inner, working)?;
    let result = Complex::new(x_at, sin_part).ln(working)?;
    Ok(result.im.with_precision(Precision::Finite(p)))
}

/// `atan(x) = Im(log(1 + i*x))`.
pub fn atan(x: &Float) -> Result<Float> {
    let radix = x.radix();
    let p = target_precision(x.precision())?;
    let working = extend(p);
    let x_at = x.with_precision(Precision::Finite(working));
    let result = Complex::new(Float::one(radix), x_at).ln(working)?;
    Ok(result.im.with_precision(Precision::Finite(p)))
}

/// `atan2(x, y)`: the angle of `y + i*x`, rescaled by each operand's scale
/// first so the native-double seed inside [`trig::atan2`] never overflows.
pub fn atan2_op(x: &Float, y: &Float) -> Result<Float> {
    if x.is_zero() && y.is_zero() {
        return Err(KernelError::from(DomainError::AtanTwoAtOrigin));
    }
    let p = target_precision(x.precision().min(y.precision()))?;
    let max_scale = x.scale().max(y.scale());
    let xr = crate::scale::scale(x, -(max_scale as i64));
    let yr = crate::scale::scale(y, -(max_scale as i64));
    atan2(&xr, &yr, p)
}
