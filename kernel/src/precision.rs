//! Precision bookkeeping shared by every iterative routine in the kernel.
//!
//! Newton-style iterations need a few extra guard digits beyond the digits they
//! actually report, to absorb round-off accumulated across doublings. `EXTRA` is
//! the guard-digit count used throughout; the exact value is an implementation
//! choice the underlying `Number` ADT leaves opaque (see spec notes on
//! `equalDigits` and `EXTRA_PRECISION`), picked here as a small constant that
//! comfortably covers a handful of Newton steps without being wasteful.

use florix_num::Float;

/// Guard digits carried above the caller's requested precision during an
/// iterative computation, to keep the final rounding trustworthy.
pub const EXTRA: usize = 10;

/// Returns `precision` widened by `EXTRA` guard digits.
#[inline]
pub fn extend(precision: usize) -> usize {
    precision + EXTRA
}

/// Returns `precision` widened by an arbitrary number of guard digits.
#[inline]
pub fn extend_by(precision: usize, extra: usize) -> usize {
    precision + extra
}

/// Clamps `precision` to be at least `min`.
#[inline]
pub fn ensure_min(precision: usize, min: usize) -> usize {
    precision.max(min)
}

/// The number of `radix`-digits representable without loss by a native `f64`
/// (its 53-bit mantissa), used to size Newton iteration seeds.
#[inline]
pub fn double_precision(radix: u32) -> usize {
    let bits = f64::MANTISSA_DIGITS as f64;
    let digits = bits * core::f64::consts::LN_2 / (radix as f64).ln();
    digits.floor().max(1.0) as usize
}

/// Matches the input precisions for a fused `a*b +/- c*d`, returning
/// `(p_ab, p_cd, p_out)`: each product is computed only to the precision that
/// survives the final addition, and the output is restored to `p_out` unless
/// the computation cancels exactly.
pub fn fma_precisions(out_precision: usize, a: &Float, b: &Float, c: &Float, d: &Float) -> (usize, usize, usize) {
    let scale_ab = a.scale() + b.scale();
    let scale_cd = c.scale() + d.scale();
    let delta = scale_ab.abs_diff(scale_cd) as usize;

    let p_ab = out_precision + delta + EXTRA;
    let p_cd = out_precision + delta + EXTRA;
    (p_ab, p_cd, out_precision)
}
