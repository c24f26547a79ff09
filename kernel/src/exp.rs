//! Exponential via Newton iteration on [`log`] (spec component 4.10).

use florix_num::{Float, Precision};

use crate::error::{KernelError, OperationError};
use crate::log::{log, log_radix};
use crate::precision::{double_precision, ensure_min, extend, EXTRA};
use crate::scale::scale;
use crate::seed;
use crate::Result;

fn digit_count(value: i64, radix: u32) -> usize {
    if value == 0 {
        return 1;
    }
    ((value.unsigned_abs() as f64).log(radix as f64).floor() as usize) + 1
}

/// `exp(x)`.
pub fn exp(x: &Float) -> Result<Float> {
    let radix = x.radix();
    if x.is_zero() {
        return Ok(Float::one(radix));
    }

    let target_precision = x
        .precision()
        .digits()
        .ok_or_else(|| KernelError::from(OperationError::UnlimitedPrecisionUnsupported))?;

    let ln_radix = (radix as f64).ln();
    if x.to_f64() >= (i64::MAX as f64) * ln_radix {
        return Err(KernelError::from(OperationError::ExpOverflow));
    }

    // underflow: x's scale is so deeply negative that 1+x already carries all
    // the precision there is to have.
    if x.scale() <= isize::MIN / 2 + EXTRA as isize {
        let one = Float::one(radix);
        return Ok((&one + x).with_precision(Precision::Finite(target_precision)));
    }

    let double_prec = double_precision(radix) as isize;
    if x.scale() < -(double_prec / 2) {
        let one = Float::one(radix);
        let taylor_precision = ((-2 * x.scale()) as usize).max(1).min(target_precision.max(1));
        return Ok((&one + x).with_precision(Precision::Finite(taylor_precision)));
    }

    // Newton seed: split x/ln(radix) into integer and fractional parts so the
    // native-double exponentiation never overflows.
    let ratio = x.to_f64() / ln_radix;
    let int_part = ratio.floor();
    let frac_part = ratio - int_part;

    let seed_precision = ensure_min(
        double_precision(radix).saturating_sub(digit_count(int_part as i64, radix)),
        1,
    );
    let seed_value = (radix as f64).powf(frac_part);
    let seed_float = seed::from_f64(seed_value, radix, seed_precision);
    let mut y = scale(&seed_float, int_part as i64);

    // pre-warm logRadix so the repeated `log` calls inside the loop don't
    // each recompute it from scratch.
    let _ = log_radix(extend(target_precision), radix)?;

    let mut precision = seed_precision;
    loop {
        if precision >= target_precision {
            return Ok(y.with_precision(Precision::Finite(target_precision)));
        }

        let next_precision = ensure_min((precision * 2).min(target_precision), precision + 1);
        let reached_target = next_precision >= target_precision;

        y = newton_step(&y, x, next_precision)?;
        precision = next_precision;

        if reached_target {
            y = newton_step(&y, x, target_precision)?;
            return Ok(y.with_precision(Precision::Finite(target_precision)));
        }
    }
}

/// `exp(x) - 1`, computed so the leading digits of `exp(x)` near `1` don't
/// cancel away precision the caller asked for.
///
/// For `x` small enough that `exp`'s own underflow/tiny guards would kick in,
/// `exp(x) - 1` is just `x` (that's the whole point of those guards: `1 + x`
/// is already the cancellation-free answer). Otherwise `exp(x)` is computed
/// at extra working precision — enough to cover the digits the subtraction
/// throws away — and `1` is subtracted off at the end.
pub fn exp_m1(x: &Float) -> Result<Float> {
    let radix = x.radix();
    if x.is_zero() {
        return Ok(Float::zero(radix));
    }

    let target_precision = x
        .precision()
        .digits()
        .ok_or_else(|| KernelError::from(OperationError::UnlimitedPrecisionUnsupported))?;

    if x.scale() <= isize::MIN / 2 + EXTRA as isize {
        return Ok(x.with_precision(Precision::Finite(target_precision)));
    }
    let double_prec = double_precision(radix) as isize;
    if x.scale() < -(double_prec / 2) {
        return Ok(x.with_precision(Precision::Finite(target_precision)));
    }

    let cancellation = if x.scale() < 0 { (-x.scale()) as usize } else { 0 };
    let working_precision = extend(target_precision) + cancellation;
    let x_at = x.with_precision(Precision::Finite(working_precision));
    let e = exp(&x_at)?;
    Ok((&e - &Float::one(radix)).with_precision(Precision::Finite(target_precision)))
}

/// One Newton step `y <- y + y*(x - log(y))` for inverting the logarithm.
fn newton_step(y: &Float, x: &Float, precision: usize) -> Result<Float> {
    let y_at = y.with_precision(Precision::Finite(precision));
    let log_y = log(&y_at)?;
    let t = (&x.with_precision(Precision::Finite(precision)) - &log_y).with_precision(Precision::Finite(precision));
    let correction = &y_at * &t;
    Ok((&y_at + &correction).with_precision(Precision::Finite(precision)))
}
