//! Trigonometric and hyperbolic identities (spec's Testable Properties:
//! `sin^2 + cos^2 = 1`, `atan2` round-trip, hyperbolic/inverse-hyperbolic round-trips).

use florix_kernel::{acos, acosh, asin, asinh, atan, atan2, atanh, cos, cosh, pi, sin, sinh, tan, tanh};
use florix_num::{Float, Precision};

#[test]
fn test_sin_squared_plus_cos_squared_is_one() {
    let x = Float::from_i64(3, 10).with_precision(Precision::Finite(25));
    let c = cos(&x).unwrap();
    let s = sin(&x).unwrap();
    let sum = (&(&c * &c) + &(&s * &s)).with_precision(Precision::Finite(20));
    assert!(sum.equal_digits(&Float::one(10), 15) >= 15);
}

#[test]
fn test_tan_is_sin_over_cos() {
    let x = Float::from_i64(1, 10).with_precision(Precision::Finite(25));
    let t = tan(&x).unwrap();
    let s = sin(&x).unwrap();
    let c = cos(&x).unwrap();
    let ratio = s.div_to(&c, 18);
    assert!(t.equal_digits(&ratio, 15) >= 15);
}

#[test]
fn test_cos_of_zero_is_one() {
    let zero = Float::zero(10).with_precision(Precision::Finite(20));
    let result = cos(&zero).unwrap();
    assert!(result.equal_digits(&Float::one(10), 15) >= 15);
}

#[test]
fn test_sin_of_pi_over_two_is_one() {
    let pi_value = pi(25, 10).unwrap();
    let half_pi = pi_value.div_to(&Float::from_i64(2, 10), 20);
    let result = sin(&half_pi).unwrap();
    assert!(result.equal_digits(&Float::one(10), 10) >= 10);
}

#[test]
fn test_atan_round_trips_through_tan() {
    let x = Float::from_i64(1, 10).div_to(&Float::from_i64(3, 10), 20);
    let theta = atan(&x).unwrap();
    let back = tan(&theta).unwrap();
    assert!(back.equal_digits(&x, 12) >= 12);
}

#[test]
fn test_atan2_quadrants() {
    let one = Float::from_i64(1, 10).with_precision(Precision::Finite(20));
    let neg_one = Float::from_i64(-1, 10).with_precision(Precision::Finite(20));
    let pi_value = pi(20, 10).unwrap();

    // atan2(1, 1) = pi/4
    let q1 = atan2(&one, &one).unwrap();
    let quarter_pi = pi_value.div_to(&Float::from_i64(4, 10), 15);
    assert!(q1.equal_digits(&quarter_pi, 12) >= 12);

    // atan2(1, -1) = 3*pi/4
    let q2 = atan2(&one, &neg_one).unwrap();
    let three_quarter_pi = (&pi_value * &Float::from_i64(3, 10)).div_to(&Float::from_i64(4, 10), 15);
    assert!(q2.equal_digits(&three_quarter_pi, 12) >= 12);
}

#[test]
fn test_atan2_at_origin_is_domain_error() {
    let zero = Float::zero(10).with_precision(Precision::Finite(20));
    assert!(atan2(&zero, &zero).is_err());
}

#[test]
fn test_cosh_squared_minus_sinh_squared_is_one() {
    let x = Float::from_i64(2, 10).with_precision(Precision::Finite(25));
    let c = cosh(&x).unwrap();
    let s = sinh(&x).unwrap();
    let diff = (&(&c * &c) - &(&s * &s)).with_precision(Precision::Finite(20));
    assert!(diff.equal_digits(&Float::one(10), 15) >= 15);
}

#[test]
fn test_tanh_of_zero_is_zero() {
    let zero = Float::zero(10).with_precision(Precision::Finite(20));
    let result = tanh(&zero).unwrap();
    assert!(result.is_zero());
}

#[test]
fn test_asinh_round_trips_through_sinh() {
    let x = Float::from_i64(2, 10).with_precision(Precision::Finite(25));
    let a = asinh(&x).unwrap();
    let back = sinh(&a).unwrap();
    assert!(back.equal_digits(&x, 15) >= 15);
}

#[test]
fn test_acosh_round_trips_through_cosh() {
    let x = Float::from_i64(3, 10).with_precision(Precision::Finite(25));
    let a = acosh(&x).unwrap();
    let back = cosh(&a).unwrap();
    assert!(back.equal_digits(&x, 15) >= 15);
}

#[test]
fn test_atanh_round_trips_through_tanh() {
    let x = Float::from_i64(1, 10).div_to(&Float::from_i64(4, 10), 25);
    let a = atanh(&x).unwrap();
    let back = tanh(&a).unwrap();
    assert!(back.equal_digits(&x, 15) >= 15);
}

#[test]
fn test_asin_acos_complementary() {
    let x = Float::from_i64(1, 10).div_to(&Float::from_i64(2, 10), 25);
    let s = asin(&x).unwrap();
    let c = acos(&x).unwrap();
    let pi_value = pi(25, 10).unwrap();
    let half_pi = pi_value.div_to(&Float::from_i64(2, 10), 20);
    let sum = (&s + &c).with_precision(Precision::Finite(18));
    assert!(sum.equal_digits(&half_pi, 14) >= 14);
}
