//! `cos`/`sin` via argument reduction (halving + Taylor series + angle doubling)
//! and `atan2` via Newton's method inverting them, both self-contained and
//! built only on ring arithmetic — the base case everything else in
//! `elementary` (and the `complex` helper) bottoms out on (spec component 4.11).

use dashu_int::IBig;
use florix_num::{Float, Precision};

use crate::error::{DomainError, KernelError, OperationError, Result};
use crate::pi::pi;
use crate::precision::{ensure_min, extend, extend_by, double_precision, EXTRA};

fn order_of_magnitude(v: &Float) -> isize {
    if v.is_zero() {
        isize::MIN
    } else {
        v.scale() + v.digits() as isize
    }
}

fn half(radix: u32, precision: usize) -> Float {
    Float::one(radix).div_to(&Float::from_i64(2, radix), precision)
}

/// Rounds `v` to the nearest integer (ties away from zero); used only for the
/// coarse `2*pi` range reduction, where exact tie-breaking doesn't matter.
fn round_nearest(v: &Float) -> IBig {
    let radix = v.radix();
    let h = half(radix, v.precision().digits().unwrap_or(double_precision(radix)) + 2);
    if v.sign() == dashu_base::Sign::Negative {
        (v - &h).ceil()
    } else {
        (v + &h).floor()
    }
}

/// Taylor series for `(cos(t), sin(t))` around a small `t`, summed until the
/// running term no longer moves the `precision`-digit result.
fn taylor_cos_sin(t: &Float, precision: usize) -> (Float, Float) {
    let radix = t.radix();
    let t2 = (t * t).with_precision(Precision::Finite(precision));

    let mut cos_sum = Float::one(radix);
    let mut sin_sum = t.clone();
    let mut term_cos = Float::one(radix);
    let mut term_sin = t.clone();

    let mut k: u64 = 0;
    loop {
        k += 1;
        let denom_cos = Float::from_mantissa_scale(IBig::from((2 * k - 1) * (2 * k)), 0, radix);
        term_cos = -(&term_cos * &t2).div_to(&denom_cos, precision);
        cos_sum = (&cos_sum + &term_cos).with_precision(Precision::Finite(precision));

        let denom_sin = Float::from_mantissa_scale(IBig::from((2 * k) * (2 * k + 1)), 0, radix);
        term_sin = -(&term_sin * &t2).div_to(&denom_sin, precision);
        sin_sum = (&sin_sum + &term_sin).with_precision(Precision::Finite(precision));

        let negligible = order_of_magnitude(&term_cos) <= -(precision as isize)
            && order_of_magnitude(&term_sin) <= -(precision as isize);
        if negligible || k as usize > precision + 50 {
            break;
        }
    }

    (cos_sum, sin_sum)
}

/// `(cos(x), sin(x))` to `target_precision` digits.
///
/// `x` is reduced modulo `2*pi`, then halved `m` times so the Taylor series
/// only has to converge for a tiny argument, and the double-angle formulas
/// `cos(2t) = 2cos(t)^2 - 1`, `sin(2t) = 2 sin(t) cos(t)` rebuild the answer.
/// This is the forward primitive everything else in this module (and the
/// `complex` helper) is built from; it does not itself depend on `exp`/`log`.
pub(crate) fn cos_sin(x: &Float, target_precision: usize) -> Result<(Float, Float)> {
    let radix = x.radix();
    if x.is_zero() {
        return Ok((
            Float::one(radix).with_precision(Precision::Finite(target_precision)),
            Float::zero(radix).with_precision(Precision::Finite(target_precision)),
        ));
    }

    let m = ((target_precision as f64).log2().ceil() as usize).max(4) + 4;
    let working_precision = extend_by(target_precision, m + EXTRA);

    let pi_value = pi(working_precision, radix)?;
    let two_pi = &pi_value * &Float::from_i64(2, radix);

    let quotient = x.div_to(&two_pi, working_precision);
    let k = round_nearest(&quotient);
    let k_float = Float::from_mantissa_scale(k, 0, radix);
    let x_reduced = (x - &(&k_float * &two_pi)).with_precision(Precision::Finite(working_precision));

    let two_pow_m = Float::from_mantissa_scale(IBig::from(2u32).pow(m), 0, radix);
    let t = x_reduced.div_to(&two_pow_m, working_precision);

    let (mut cos_t, mut sin_t) = taylor_cos_sin(&t, working_precision);
    for _ in 0..m {
        let two = Float::from_i64(2, radix);
        let next_cos = (&(&two * &(&cos_t * &cos_t)) - &Float::one(radix)).with_precision(Precision::Finite(working_precision));
        let next_sin = (&two * &(&sin_t * &cos_t)).with_precision(Precision::Finite(working_precision));
        cos_t = next_cos;
        sin_t = next_sin;
    }

    Ok((
        cos_t.with_precision(Precision::Finite(target_precision)),
        sin_t.with_precision(Precision::Finite(target_precision)),
    ))
}

/// Solves `tan(theta) = num/den` for `theta`, i.e. the angle of `den + i*num`,
/// by Newton's method on `f(theta) = den*sin(theta) - num*cos(theta)`, seeded
/// from a native-double `atan2`.
pub(crate) fn atan2(num: &Float, den: &Float, target_precision: usize) -> Result<Float> {
    let radix = num.radix();
    if num.is_zero() && den.is_zero() {
        return Err(KernelError::from(DomainError::AtanTwoAtOrigin));
    }

    let seed_precision = double_precision(radix);
    let theta0 = num.to_f64().atan2(den.to_f64());
    let mut theta = crate::seed::from_f64(theta0, radix, seed_precision);

    let mut precision = seed_precision;
    loop {
        if precision >= target_precision {
            return Ok(theta.with_precision(Precision::Finite(target_precision)));
        }
        let next_precision = ensure_min((precision * 2).min(target_precision), precision + 1);
        let reached = next_precision >= target_precision;

        theta = atan2_newton_step(&theta, num, den, next_precision)?;
        precision = next_precision;

        if reached {
            theta = atan2_newton_step(&theta, num, den, target_precision)?;
            return Ok(theta.with_precision(Precision::Finite(target_precision)));
        }
    }
}

fn atan2_newton_step(theta: &Float, num: &Float, den: &Float, precision: usize) -> Result<Float> {
    let theta_at = theta.with_precision(Precision::Finite(precision));
    let (cos_t, sin_t) = cos_sin(&theta_at, precision)?;
    let num_at = num.with_precision(Precision::Finite(precision));
    let den_at = den.with_precision(Precision::Finite(precision));

    let f = (&(&den_at * &sin_t) - &(&num_at * &cos_t)).with_precision(Precision::Finite(precision));
    let fp = (&(&den_at * &cos_t) + &(&num_at * &sin_t)).with_precision(Precision::Finite(precision));
    if fp.is_zero() {
        return Err(KernelError::from(OperationError::InvalidPrecision));
    }
    let correction = f.div_to(&fp, precision);
    Ok((&theta_at - &correction).with_precision(Precision::Finite(precision)))
}

fn target_precision_of(x: &Float) -> Result<usize> {
    x.precision()
        .digits()
        .ok_or_else(|| KernelError::from(OperationError::UnlimitedPrecisionUnsupported))
}

/// `cos(x)`.
pub fn cos(x: &Float) -> Result<Float> {
    let p = target_precision_of(x)?;
    Ok(cos_sin(x, p)?.0)
}

/// `sin(x)`.
pub fn sin(x: &Float) -> Result<Float> {
    let p = target_precision_of(x)?;
    Ok(cos_sin(x, p)?.1)
}

/// `tan(x)`.
pub fn tan(x: &Float) -> Result<Float> {
    let p = target_precision_of(x)?;
    let (c, s) = cos_sin(x, extend(p))?;
    if c.is_zero() {
        return Err(KernelError::from(DomainError::DivisionByZero));
    }
    Ok(s.div_to(&c, p))
}
