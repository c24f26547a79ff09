//! Natural logarithm via the arithmetic-geometric mean (spec component 4.9).

use dashu_base::Sign;
use dashu_int::IBig;
use florix_num::{Float, Precision};

use crate::agm::agm;
use crate::cache::with_cache;
use crate::error::{DomainError, KernelError, OperationError};
use crate::pi::pi;
use crate::precision::extend_by;
use crate::scale::scale;
use crate::Result;

/// `log(x)` for `1/radix <= x < 1` (but correct for any positive `x`); used
/// directly by [`log_radix`] with `x = 1/radix`.
///
/// Brings `x` (and the auxiliary value `1/radix^n`) down to a small argument
/// via `scale`, runs two AGMs, and combines them through the AGM/pi identity
/// `log(x) = pi*(agm(1,x') - agm(1,e)) / (2*agm(1,x')*agm(1,e))`.
fn raw_log(x: &Float, precision: usize) -> Result<Float> {
    let radix = x.radix();
    let n = (precision / 2 + 25) as i64;

    let one = Float::one(radix);
    let e = scale(&one, -n).with_precision(Precision::Finite(precision));
    let x_prime = scale(x, -n).with_precision(Precision::Finite(precision));

    let agm1 = agm(&one, &e)?;
    let agm2 = agm(&one, &x_prime)?;
    let pi_value = pi(precision, radix)?;

    let numerator = &agm2 - &agm1;
    let two = Float::from_i64(2, radix);
    let denominator = &(&agm1 * &agm2) * &two;

    Ok((&pi_value * &numerator).div_to(&denominator, precision))
}

/// `-log(1/radix)`, cached per radix and refreshed whenever a caller asks for
/// more digits than are currently cached.
pub fn log_radix(precision: usize, radix: u32) -> Result<Float> {
    with_cache(radix, |cache| -> Result<Float> {
        if let Some(cached) = &cache.log_radix {
            if let Some(have) = cached.precision().digits() {
                if have >= precision {
                    return Ok(cached.with_precision(Precision::Finite(precision)));
                }
            }
        }

        let one_over_radix = Float::from_mantissa_scale(IBig::ONE, -1, radix);
        let raw = raw_log(&one_over_radix, precision)?;
        let value = -&raw;
        cache.log_radix = Some(value.clone());
        Ok(value)
    })
}

/// `log(x)`.
///
/// Arguments near `1` lose significance proportional to how many leading
/// digits `x` shares with `1`; that much extra working precision is requested
/// so the caller still gets a full-precision answer back.
pub fn log(x: &Float) -> Result<Float> {
    if x.is_zero() || x.sign() == Sign::Negative {
        return Err(KernelError::from(DomainError::LogOfNonPositive));
    }

    let radix = x.radix();
    let one = Float::one(radix);
    if *x == one {
        return Ok(Float::zero(radix).with_precision(x.precision()));
    }

    let base_precision = x
        .precision()
        .digits()
        .ok_or_else(|| KernelError::from(OperationError::UnlimitedPrecisionUnsupported))?;

    let extra = if x.equal_digits(&one, base_precision) >= base_precision { base_precision } else { 0 };
    let working_precision = extend_by(base_precision, extra);

    let s = x.scale();
    let mantissa_view = scale(x, -(s as i64));

    let raw = raw_log(&mantissa_view, working_precision)?;
    let log_r = log_radix(working_precision, radix)?;
    let s_float = Float::from_i64(s as i64, radix);

    let result = &raw + &(&s_float * &log_r);
    Ok(result.with_precision(Precision::Finite(base_precision)))
}
