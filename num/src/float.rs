use dashu_base::{DivRem, Sign};
use dashu_int::IBig;

use crate::precision::Precision;
use crate::utils::{digit_len, shl_digits, split_digits};

/// An arbitrary-precision floating point number: `mantissa * radix^scale`.
///
/// The radix is carried on the value itself rather than fixed by the type, so two
/// `Float`s with different radices are distinct values and most operations between
/// them are refused (see the `ops` module). `precision` records how many digits of
/// `radix` the mantissa is trusted to, or [`Precision::Unlimited`] if the value is
/// exact (e.g. the result of integer arithmetic, or a value parsed from an exact
/// literal).
#[derive(Clone, Debug)]
pub struct Float {
    pub(crate) radix: u32,
    pub(crate) mantissa: IBig,
    pub(crate) scale: isize,
    pub(crate) precision: Precision,
}

impl Float {
    /// Constructs a `Float` directly from its parts, without any normalization.
    pub(crate) fn from_parts(radix: u32, mantissa: IBig, scale: isize, precision: Precision) -> Self {
        debug_assert!((2..=36).contains(&radix), "radix out of range");
        Float {
            radix,
            mantissa,
            scale,
            precision,
        }
    }

    /// The zero value of the given radix, with unlimited precision.
    #[inline]
    pub fn zero(radix: u32) -> Self {
        Float::from_parts(radix, IBig::ZERO, 0, Precision::Unlimited)
    }

    /// The value one of the given radix, with unlimited precision.
    #[inline]
    pub fn one(radix: u32) -> Self {
        Float::from_parts(radix, IBig::ONE, 0, Precision::Unlimited)
    }

    /// Builds an exact `Float` from a signed integer.
    #[inline]
    pub fn from_i64(value: i64, radix: u32) -> Self {
        Float::from_parts(radix, IBig::from(value), 0, Precision::Unlimited)
    }

    /// The radix this value is represented in.
    #[inline]
    pub fn radix(&self) -> u32 {
        self.radix
    }

    /// The precision this value is trusted to, in digits of [`radix`][Float::radix].
    #[inline]
    pub fn precision(&self) -> Precision {
        self.precision
    }

    /// The base-`radix` exponent: `self == mantissa() * radix^scale()`.
    #[inline]
    pub fn scale(&self) -> isize {
        self.scale
    }

    /// The raw mantissa, an integer in the value's radix.
    #[inline]
    pub fn mantissa(&self) -> &IBig {
        &self.mantissa
    }

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.mantissa.is_zero()
    }

    #[inline]
    pub fn sign(&self) -> Sign {
        self.mantissa.sign()
    }

    /// Returns a copy of `self` re-tagged with a (typically tighter) precision.
    ///
    /// This does not round the mantissa; it only changes the digit count the value
    /// claims to be accurate to.
    #[inline]
    pub fn with_precision(&self, precision: Precision) -> Self {
        Float {
            precision,
            ..self.clone()
        }
    }

    /// Truncates the mantissa so it has at most `digits` digits of `radix`, rounding
    /// half-to-even, and tags the result with that finite precision.
    ///
    /// If `self` already has `digit_len(self) <= digits`, the value is returned
    /// unchanged except for the (possibly tightened) precision tag.
    pub fn round_to(&self, digits: usize) -> Self {
        if digits == 0 {
            return Float::zero(self.radix).with_precision(Precision::Finite(0));
        }
        let len = digit_len(&self.mantissa, self.radix);
        if len <= digits {
            return self.with_precision(Precision::Finite(digits.min(self.precision.digits().unwrap_or(digits))));
        }
        let drop = len - digits;
        let (mut hi, lo) = split_digits(&self.mantissa, self.radix, drop);

        // round half-to-even on the dropped digits
        let lo_abs = if lo.sign() == Sign::Negative { -lo.clone() } else { lo.clone() };
        let tie = shl_digits(&IBig::ONE, self.radix, drop) / IBig::from(2u32);
        let round_up = match lo_abs.cmp(&tie) {
            core::cmp::Ordering::Greater => true,
            core::cmp::Ordering::Less => false,
            core::cmp::Ordering::Equal => &hi % IBig::from(2u32) != IBig::ZERO,
        };
        if round_up {
            if hi.sign() == Sign::Negative {
                hi -= IBig::ONE;
            } else {
                hi += IBig::ONE;
            }
        }

        Float::from_parts(
            self.radix,
            hi,
            self.scale + drop as isize,
            Precision::Finite(digits),
        )
    }

    /// The number of significant digits currently present in the mantissa.
    pub fn digits(&self) -> usize {
        digit_len(&self.mantissa, self.radix)
    }

    /// Returns the count (capped at `digits`) of leading radix-digits that `self`
    /// and `other` agree on, the operational definition of "digits of agreement"
    /// used throughout the transcendental kernel to decide when a Newton iteration
    /// has converged (spec components 4.7/4.9/4.10 track this as an integer, not
    /// a single converged/not-converged flag).
    ///
    /// Computed from the order of magnitude of `self - other` relative to the
    /// order of magnitude of the larger operand: if the difference first shows up
    /// `k` digit positions below the leading digit, the leading `k` digits agree.
    ///
    /// Both values must share a radix. Two zeros agree to `digits`; a zero and a
    /// nonzero value agree to `0`.
    pub fn equal_digits(&self, other: &Self, digits: usize) -> usize {
        assert_eq!(self.radix, other.radix, "radix mismatch");
        if self.is_zero() && other.is_zero() {
            return digits;
        }
        if self.is_zero() || other.is_zero() {
            return 0;
        }

        let diff = self - other;
        if diff.is_zero() {
            return digits;
        }

        let order = |v: &Float| digit_len(&v.mantissa, v.radix) as isize + v.scale;
        let order_max = order(self).max(order(other));
        let order_diff = order(&diff);

        let agreement = order_max - order_diff;
        if agreement <= 0 {
            0
        } else {
            (agreement as usize).min(digits)
        }
    }

    /// Lossy conversion to `f64`, primarily useful for diagnostics and seeding
    /// initial guesses (e.g. for Newton iterations).
    pub fn to_f64(&self) -> f64 {
        let mantissa = self.mantissa.to_f64().value();
        mantissa * (self.radix as f64).powi(self.scale as i32)
    }

    /// Divides `self` by `rhs` to `digits` digits of precision, rounding half-to-even.
    ///
    /// Panics if `rhs` is zero.
    pub fn div_to(&self, rhs: &Float, digits: usize) -> Float {
        assert_eq!(self.radix, rhs.radix, "radix mismatch");
        assert!(!rhs.is_zero(), "division by zero");
        if self.is_zero() {
            return Float::zero(self.radix).with_precision(Precision::Finite(digits));
        }

        let guard = 4;
        let a_len = digit_len(&self.mantissa, self.radix) as isize;
        let b_len = digit_len(&rhs.mantissa, self.radix) as isize;
        let shift = (digits as isize + b_len - a_len + guard).max(0) as usize;

        let shifted = shl_digits(&self.mantissa, self.radix, shift);
        let (q, _) = shifted.div_rem(rhs.mantissa.clone());
        let result_scale = self.scale - rhs.scale - shift as isize;

        Float::from_parts(self.radix, q, result_scale, Precision::Unlimited).round_to(digits)
    }

    /// The greatest integer not exceeding `self`.
    pub fn floor(&self) -> IBig {
        if self.scale >= 0 {
            return shl_digits(&self.mantissa, self.radix, self.scale as usize);
        }
        let drop = (-self.scale) as usize;
        split_digits(&self.mantissa, self.radix, drop).0
    }

    /// The least integer not less than `self`.
    pub fn ceil(&self) -> IBig {
        if self.scale >= 0 {
            return shl_digits(&self.mantissa, self.radix, self.scale as usize);
        }
        let drop = (-self.scale) as usize;
        let (hi, lo) = split_digits(&self.mantissa, self.radix, drop);
        if lo.is_zero() {
            hi
        } else {
            hi + IBig::ONE
        }
    }

    /// `self` rounded toward zero.
    pub fn truncate(&self) -> IBig {
        if self.scale >= 0 {
            return shl_digits(&self.mantissa, self.radix, self.scale as usize);
        }
        let drop = (-self.scale) as usize;
        let (hi, lo) = split_digits(&self.mantissa, self.radix, drop);
        if self.sign() == Sign::Negative && !lo.is_zero() {
            hi + IBig::ONE
        } else {
            hi
        }
    }

    /// Splits `self` into `(integer part, fractional part)`, with the
    /// fractional part in `[0, 1)` (i.e. based on [`floor`][Float::floor],
    /// not [`truncate`][Float::truncate]).
    pub fn modf(&self) -> (Float, Float) {
        let int_part = Float::from_parts(self.radix, self.floor(), 0, Precision::Unlimited);
        let frac_part = self - &int_part;
        (int_part, frac_part)
    }
}
