//! Arithmetic-geometric mean (spec component 4.7), the building block for `log`.

use florix_num::{Float, Precision};

use crate::error::{KernelError, OperationError, Result};
use crate::precision::extend;
use crate::root::sqrt;

/// Arithmetic-geometric mean of two positive values.
///
/// Converges quadratically once the two iterates agree to about half the
/// working precision; before that point convergence is only linear, so the
/// loop tracks actual digit agreement rather than assuming doubling from the
/// start.
pub fn agm(a: &Float, b: &Float) -> Result<Float> {
    if a.is_zero() || b.is_zero() {
        return Ok(Float::zero(a.radix()));
    }
    if a.precision().is_unlimited() && b.precision().is_unlimited() {
        return Err(KernelError::from(OperationError::UnlimitedPrecisionUnsupported));
    }

    let radix = a.radix();
    let min_precision = a.precision().min(b.precision()).digits().expect("not both unlimited");
    let working_precision = extend(min_precision);
    let target_precision = a.precision().max(b.precision()).digits().unwrap_or(working_precision);

    let mut av = a.with_precision(Precision::Finite(working_precision));
    let mut bv = b.with_precision(Precision::Finite(working_precision));

    const CONVERGING: usize = 1000;
    let converging = CONVERGING.min(working_precision / 2).max(1);

    // pre-convergence: only linear, so re-measure agreement every step.
    loop {
        let agreement = av.equal_digits(&bv, working_precision);
        if agreement >= converging {
            break;
        }
        let (na, nb) = agm_step(&av, &bv, working_precision)?;
        av = na;
        bv = nb;
    }

    // quadratic phase: agreement doubles each step, so just count it down.
    let mut agreement = av.equal_digits(&bv, working_precision);
    while agreement <= working_precision / 2 {
        let (na, nb) = agm_step(&av, &bv, working_precision)?;
        av = na;
        bv = nb;
        agreement = agreement.saturating_mul(2);
    }

    let two = Float::from_i64(2, radix);
    Ok((&av + &bv).div_to(&two, target_precision))
}

fn agm_step(a: &Float, b: &Float, working_precision: usize) -> Result<(Float, Float)> {
    let radix = a.radix();
    let two = Float::from_i64(2, radix);

    let next_a = (a + b).div_to(&two, working_precision).with_precision(Precision::Finite(working_precision));
    let product = a * b;
    let next_b = sqrt(&product, working_precision)?.with_precision(Precision::Finite(working_precision));

    Ok((next_a, next_b))
}
