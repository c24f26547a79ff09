//! `root`/`sqrt`/`cbrt`/`inverseRoot` boundary values and round-trip properties.

use dashu_int::IBig;
use florix_kernel::{cbrt, inverse_root, pow_int, root, sqrt};
use florix_num::{Float, Precision};

fn exact(mantissa: &str, scale: isize, radix: u32) -> Float {
    Float::from_mantissa_scale(IBig::from_str_radix(mantissa, radix).unwrap(), scale, radix)
}

#[test]
fn test_sqrt_two_digits() {
    let two = Float::from_i64(2, 10).with_precision(Precision::Finite(30));
    let result = sqrt(&two, 18).unwrap();
    let expected = exact("141421356237309504", -17, 10);
    assert!(result.equal_digits(&expected, 15) >= 15);
}

#[test]
fn test_cbrt_of_perfect_cube() {
    let x = Float::from_i64(27, 10).with_precision(Precision::Finite(30));
    let result = cbrt(&x, 20).unwrap();
    let expected = Float::from_i64(3, 10);
    assert!(result.equal_digits(&expected, 15) >= 15);
}

#[test]
fn test_root_inverse_round_trip() {
    let x = Float::from_i64(5, 10).with_precision(Precision::Finite(30));
    let fifth_root = root(&x, 5, 20).unwrap();
    let rebuilt = pow_int(&fifth_root, 5).unwrap();
    assert!(rebuilt.equal_digits(&x, 15) >= 15);
}

#[test]
fn test_inverse_root_times_root_is_one() {
    let x = Float::from_i64(7, 10).with_precision(Precision::Finite(30));
    let inv = inverse_root(&x, 2, 20, None, None).unwrap();
    let r = sqrt(&x, 20).unwrap();
    let product = (&inv * &r).with_precision(Precision::Finite(20));
    assert!(product.equal_digits(&Float::one(10), 15) >= 15);
}

#[test]
fn test_sqrt_negative_is_domain_error() {
    let x = Float::from_i64(-4, 10).with_precision(Precision::Finite(20));
    assert!(sqrt(&x, 20).is_err());
}

#[test]
fn test_zeroth_root_of_zero_is_domain_error() {
    let zero = Float::zero(10);
    assert!(root(&zero, 0, 20).is_err());
}

#[test]
fn test_root_in_non_decimal_radix() {
    // sqrt(4) in base 16 is exactly 2, regardless of radix.
    let four = Float::from_i64(4, 16).with_precision(Precision::Finite(20));
    let result = sqrt(&four, 10).unwrap();
    let two = Float::from_i64(2, 16).with_precision(Precision::Finite(10));
    assert!(result.equal_digits(&two, 8) >= 8);
}
