//! `fmod(x, y)`: the IEEE-remainder-style `x - n*y` with `n = truncate(x/y)`
//! (spec component 4.5, design note in §9).

use dashu_base::Sign;
use florix_num::{Float, Precision};

use crate::error::Result;
use crate::precision::EXTRA;

fn abs(v: &Float) -> Float {
    if v.sign() == Sign::Negative {
        -v
    } else {
        v.clone()
    }
}

/// `x - n*y` where `n = truncate(x/y)`, i.e. the remainder with the sign of `x`.
///
/// Rather than trusting the single correction step to land exactly (it can
/// overshoot by one unit of `y` to rounding noise in the quotient), the
/// post-correction is iterated until `|remainder| < |y|`, per the design note
/// in spec §9.
pub fn fmod(x: &Float, y: &Float) -> Result<Float> {
    let radix = x.radix();
    if y.is_zero() {
        return Ok(y.clone());
    }
    if x.is_zero() {
        return Ok(x.clone());
    }

    let ax = abs(x);
    let ay = abs(y);
    if ax.compare_to(&ay) == core::cmp::Ordering::Less {
        return Ok(x.clone());
    }

    let delta = (x.scale() - y.scale()).max(0) as usize;
    if let Some(xp) = x.precision().digits() {
        if xp as isize <= x.scale() - y.scale() {
            return Ok(Float::zero(radix));
        }
    }

    let working_precision = delta + EXTRA;
    let quotient = x.div_to(y, working_precision).truncate();
    let quotient_float = Float::from_mantissa_scale(quotient, 0, radix);

    let result_precision = match (y.precision().digits(), x.precision().digits()) {
        (Some(yp), Some(xp)) => (yp + delta).min(xp),
        (None, Some(xp)) => xp,
        (Some(yp), None) => yp + delta,
        (None, None) => working_precision,
    };

    let mut remainder = x - &(&quotient_float * y);

    // post-correction: iterate rather than trust a single step, since the
    // truncated quotient can be off by one when x/y lands right at an integer.
    while abs(&remainder).compare_to(&ay) != core::cmp::Ordering::Less {
        remainder = if remainder.sign() == Sign::Negative {
            &remainder + &ay
        } else {
            &remainder - &ay
        };
    }

    Ok(remainder.with_precision(Precision::Finite(result_precision)))
}
