//! `fmod` sign/magnitude invariants and fused multiply-add/subtract.

use florix_kernel::{fmod, multiply_add, multiply_subtract};
use florix_num::{Float, Precision};

#[test]
fn test_fmod_basic() {
    let ten = Float::from_i64(10, 10).with_precision(Precision::Finite(20));
    let three = Float::from_i64(3, 10).with_precision(Precision::Finite(20));
    let result = fmod(&ten, &three).unwrap();
    assert_eq!(result.with_precision(Precision::Finite(0)), Float::from_i64(1, 10));
}

#[test]
fn test_fmod_negative_dividend_keeps_sign_of_dividend() {
    let neg_ten = Float::from_i64(-10, 10).with_precision(Precision::Finite(20));
    let three = Float::from_i64(3, 10).with_precision(Precision::Finite(20));
    let result = fmod(&neg_ten, &three).unwrap();
    assert_eq!(result.with_precision(Precision::Finite(0)), Float::from_i64(-1, 10));
}

#[test]
fn test_fmod_by_zero_is_zero_by_convention() {
    let five = Float::from_i64(5, 10).with_precision(Precision::Finite(20));
    let zero = Float::zero(10);
    let result = fmod(&five, &zero).unwrap();
    assert!(result.is_zero());
}

#[test]
fn test_fmod_zero_dividend_is_zero() {
    let zero = Float::zero(10).with_precision(Precision::Finite(20));
    let three = Float::from_i64(3, 10).with_precision(Precision::Finite(20));
    let result = fmod(&zero, &three).unwrap();
    assert!(result.is_zero());
}

#[test]
fn test_fmod_dividend_smaller_than_divisor_is_identity() {
    let two = Float::from_i64(2, 10).with_precision(Precision::Finite(20));
    let five = Float::from_i64(5, 10).with_precision(Precision::Finite(20));
    let result = fmod(&two, &five).unwrap();
    assert_eq!(result, two);
}

#[test]
fn test_fmod_remainder_is_always_smaller_in_magnitude_than_divisor() {
    let x = Float::from_i64(1, 10).div_to(&Float::from_i64(7, 10), 20);
    let y = Float::from_i64(3, 10).div_to(&Float::from_i64(11, 10), 20);
    let result = fmod(&x, &y).unwrap();
    let ay = if y.sign() == dashu_base::Sign::Negative { -&y } else { y.clone() };
    let ar = if result.sign() == dashu_base::Sign::Negative { -&result } else { result.clone() };
    assert!(ar.compare_to(&ay) != core::cmp::Ordering::Greater);
}

#[test]
fn test_multiply_add_matches_direct_computation() {
    let a = Float::from_i64(2, 10).with_precision(Precision::Finite(20));
    let b = Float::from_i64(3, 10).with_precision(Precision::Finite(20));
    let c = Float::from_i64(4, 10).with_precision(Precision::Finite(20));
    let d = Float::from_i64(5, 10).with_precision(Precision::Finite(20));

    let result = multiply_add(&a, &b, &c, &d, 15);
    let direct = (&(&a * &b) + &(&c * &d)).with_precision(Precision::Finite(15));
    assert_eq!(result, direct);
}

#[test]
fn test_multiply_subtract_matches_direct_computation() {
    let a = Float::from_i64(7, 10).with_precision(Precision::Finite(20));
    let b = Float::from_i64(6, 10).with_precision(Precision::Finite(20));
    let c = Float::from_i64(5, 10).with_precision(Precision::Finite(20));
    let d = Float::from_i64(4, 10).with_precision(Precision::Finite(20));

    let result = multiply_subtract(&a, &b, &c, &d, 15);
    let direct = (&(&a * &b) - &(&c * &d)).with_precision(Precision::Finite(15));
    assert_eq!(result, direct);
}
