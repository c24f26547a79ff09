//! The inverse n-th root engine: the central Newton iteration every algebraic
//! routine in the kernel (root, sqrt, cbrt, division refinement) reduces to.

use florix_num::{Float, Precision};

use crate::error::{DomainError, KernelError, OperationError, Result};
use crate::precision::{double_precision, ensure_min, extend};
use crate::scale::{pow_int, scale};
use crate::seed;

/// Computes `x^(-1/n)` to `target_precision` digits of `x`'s radix.
///
/// `initial_guess`/`initial_guess_precision` let a caller that already has a
/// nearby approximation (e.g. the previous iteration's answer, when
/// extending precision) skip the native-double bootstrap entirely.
pub fn inverse_root(
    x: &Float,
    n: i64,
    target_precision: usize,
    initial_guess: Option<&Float>,
    initial_guess_precision: Option<usize>,
) -> Result<Float> {
    if x.is_zero() {
        return Err(KernelError::from(DomainError::InverseRootOfZero));
    }
    if n == 0 {
        return Ok(Float::one(x.radix()));
    }
    if target_precision == 0 {
        return Err(KernelError::from(OperationError::InvalidPrecision));
    }
    if n % 2 == 0 && x.sign() == dashu_base::Sign::Negative {
        return Err(KernelError::from(DomainError::EvenRootOfNegative));
    }
    if *x == Float::one(x.radix()) {
        return Ok(x.with_precision(Precision::Finite(target_precision)));
    }
    if n == i64::MIN {
        // can't negate i64::MIN directly; split into two halving steps instead.
        let half = n / 2;
        let inner = inverse_root(x, half, extend(target_precision), None, None)?;
        let sqrt_factor = inverse_root(&inner, 2, target_precision, None, None)?;
        return Ok((&inner * &sqrt_factor).with_precision(Precision::Finite(target_precision)));
    }
    if n < 0 {
        let reciprocal_root = inverse_root(x, -n, extend(target_precision), None, None)?;
        return inverse_root(&reciprocal_root, 1, target_precision, None, None);
    }

    let radix = x.radix();

    let (mut y, mut precision) = match initial_guess {
        Some(guess) => {
            let p = initial_guess_precision.unwrap_or_else(|| double_precision(radix));
            (guess.with_precision(Precision::Finite(p)), p)
        }
        None => {
            let seed_precision = double_precision(radix);
            let n_isize = n as isize;
            let scale_quot = x.scale().div_euclid(n_isize);
            let scale_rem = x.scale() - n_isize * scale_quot;
            let rescaled = scale(x, -(scale_rem as i64));
            let val = rescaled.to_f64();
            let y0 = val.signum() * val.abs().powf(-1.0 / (n as f64));
            let y = seed::from_f64(y0, radix, seed_precision);
            (scale(&y, -(scale_quot as i64)), seed_precision)
        }
    };

    let n_float = Float::from_i64(n, radix);

    loop {
        if precision >= target_precision {
            return Ok(y.with_precision(Precision::Finite(target_precision)));
        }

        let next_precision = ensure_min((precision * 2).min(target_precision), precision + 1);
        let reached_target = next_precision >= target_precision;
        let compute_precision = if reached_target { next_precision } else { next_precision / 2 };

        y = newton_step(&y, x, n, &n_float, next_precision, compute_precision)?;
        precision = next_precision;

        if reached_target {
            // precising iteration: one more full-precision pass to flush Newton's
            // own trailing-digit noise before handing the answer back.
            y = newton_step(&y, x, n, &n_float, target_precision, target_precision)?;
            return Ok(y.with_precision(Precision::Finite(target_precision)));
        }
    }
}

/// One Newton step `y <- y + y*(1 - x*y^n)/n`, computing the correction term
/// `t = 1 - x*y^n` at `t_precision` (narrower than `y_precision` except on the
/// final/precising step, since `t` is small and doesn't need full precision).
fn newton_step(y: &Float, x: &Float, n: i64, n_float: &Float, y_precision: usize, t_precision: usize) -> Result<Float> {
    let radix = y.radix();
    let y_at_precision = y.with_precision(Precision::Finite(y_precision));

    let y_pow_n = pow_int(&y_at_precision, n)?;
    let xy_n = (x.with_precision(Precision::Finite(y_precision)) * y_pow_n).with_precision(Precision::Finite(t_precision));
    let t = (&Float::one(radix) - &xy_n).with_precision(Precision::Finite(t_precision));

    let correction = (&y_at_precision * &t).div_to(n_float, y_precision);
    Ok((&y_at_precision + &correction).with_precision(Precision::Finite(y_precision)))
}
