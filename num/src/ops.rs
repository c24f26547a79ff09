use core::ops::{Add, Div, Mul, Neg, Sub};

use dashu_int::IBig;

use crate::float::Float;
use crate::precision::Precision;
use crate::utils::shl_digits;

/// Pads the shorter-scaled of the two mantissas up so both share `min(a.scale, b.scale)`,
/// returning `(a_mantissa, b_mantissa, common_scale)`.
fn align(a: &Float, b: &Float) -> (IBig, IBig, isize) {
    assert_eq!(a.radix, b.radix, "radix mismatch");
    let scale = a.scale.min(b.scale);
    let a_mant = shl_digits(&a.mantissa, a.radix, (a.scale - scale) as usize);
    let b_mant = shl_digits(&b.mantissa, b.radix, (b.scale - scale) as usize);
    (a_mant, b_mant, scale)
}

fn combine_precision(a: Precision, b: Precision) -> Precision {
    a.min(b)
}

impl Add<&Float> for &Float {
    type Output = Float;

    fn add(self, rhs: &Float) -> Float {
        let (am, bm, scale) = align(self, rhs);
        Float::from_parts(
            self.radix,
            am + bm,
            scale,
            combine_precision(self.precision, rhs.precision),
        )
    }
}

impl Add for Float {
    type Output = Float;

    fn add(self, rhs: Float) -> Float {
        &self + &rhs
    }
}

impl Sub<&Float> for &Float {
    type Output = Float;

    fn sub(self, rhs: &Float) -> Float {
        let (am, bm, scale) = align(self, rhs);
        Float::from_parts(
            self.radix,
            am - bm,
            scale,
            combine_precision(self.precision, rhs.precision),
        )
    }
}

impl Sub for Float {
    type Output = Float;

    fn sub(self, rhs: Float) -> Float {
        &self - &rhs
    }
}

impl Mul<&Float> for &Float {
    type Output = Float;

    fn mul(self, rhs: &Float) -> Float {
        assert_eq!(self.radix, rhs.radix, "radix mismatch");
        Float::from_parts(
            self.radix,
            &self.mantissa * &rhs.mantissa,
            self.scale + rhs.scale,
            combine_precision(self.precision, rhs.precision),
        )
    }
}

impl Mul for Float {
    type Output = Float;

    fn mul(self, rhs: Float) -> Float {
        &self * &rhs
    }
}

impl Neg for &Float {
    type Output = Float;

    fn neg(self) -> Float {
        Float::from_parts(self.radix, -self.mantissa.clone(), self.scale, self.precision)
    }
}

impl Neg for Float {
    type Output = Float;

    fn neg(self) -> Float {
        -&self
    }
}

/// Division is the only ring operation that generally has no exact finite-digit
/// representation, so it requires a target precision rather than implementing
/// [`core::ops::Div`] blindly. This impl is a thin convenience wrapper that divides
/// to the tighter of the two operands' precisions (or panics if both are unlimited,
/// since there is then no way to pick a stopping point).
impl Div<&Float> for &Float {
    type Output = Float;

    fn div(self, rhs: &Float) -> Float {
        let digits = combine_precision(self.precision, rhs.precision)
            .digits()
            .expect("division between two unlimited-precision values requires an explicit target precision");
        self.div_to(rhs, digits)
    }
}

impl Div for Float {
    type Output = Float;

    fn div(self, rhs: Float) -> Float {
        &self / &rhs
    }
}
