use dashu_int::IBig;
use florix_num::{Float, Precision};

#[test]
fn test_construction() {
    let zero = Float::zero(10);
    assert!(zero.is_zero());
    assert_eq!(zero.radix(), 10);
    assert_eq!(zero.precision(), Precision::Unlimited);

    let one = Float::one(10);
    assert!(!one.is_zero());
    assert_eq!(one.mantissa(), &IBig::ONE);

    let five = Float::from_i64(5, 10);
    assert_eq!(five.mantissa(), &IBig::from(5));
    assert_eq!(five.scale(), 0);
}

#[test]
fn test_add_sub_same_radix() {
    let test_cases = [
        // (a, b, expected sum)
        (Float::from_i64(2, 10), Float::from_i64(3, 10), Float::from_i64(5, 10)),
        (Float::from_i64(-7, 10), Float::from_i64(7, 10), Float::from_i64(0, 10)),
        (Float::from_i64(100, 10), Float::from_i64(-1, 10), Float::from_i64(99, 10)),
    ];

    for (a, b, expected) in &test_cases {
        assert_eq!(a + b, *expected);
    }
}

#[test]
fn test_scale_alignment() {
    // 1e2 (=100) + 3 = 103
    let hundred = Float::from_mantissa_scale(IBig::ONE, 2, 10);
    let three = Float::from_i64(3, 10);
    let sum = &hundred + &three;
    assert_eq!(sum, Float::from_i64(103, 10));
}

#[test]
fn test_mul() {
    let a = Float::from_i64(12, 10);
    let b = Float::from_i64(11, 10);
    assert_eq!(a * b, Float::from_i64(132, 10));
}

#[test]
fn test_neg() {
    let a = Float::from_i64(42, 10);
    assert_eq!(-&a, Float::from_i64(-42, 10));
}

#[test]
fn test_div_to_exact() {
    let ten = Float::from_i64(10, 10);
    let four = Float::from_i64(4, 10);
    let q = ten.div_to(&four, 5);
    // 10 / 4 = 2.5 exactly
    let expected = Float::from_mantissa_scale(IBig::from(25), -1, 10);
    assert!(q.equal_digits(&expected, 5) >= 5);
}

#[test]
fn test_div_to_repeating() {
    let one = Float::from_i64(1, 10);
    let three = Float::from_i64(3, 10);
    let q = one.div_to(&three, 6);
    // 1/3 ~ 0.333333
    let expected = Float::from_mantissa_scale(IBig::from(333333), -6, 10);
    assert!(q.equal_digits(&expected, 6) >= 6);
}

#[test]
fn test_round_to() {
    let value = Float::from_mantissa_scale(IBig::from(123456), -5, 10); // 1.23456
    let rounded = value.round_to(4);
    let expected = Float::from_mantissa_scale(IBig::from(1235), -3, 10); // 1.235
    assert!(rounded.equal_digits(&expected, 4) >= 4);
}

#[test]
fn test_round_to_half_to_even() {
    // 1.25 rounded to 2 digits: tie, hi=12 is even, stays 12 -> 1.2
    let value = Float::from_mantissa_scale(IBig::from(125), -2, 10);
    let rounded = value.round_to(2);
    let expected = Float::from_mantissa_scale(IBig::from(12), -1, 10);
    assert!(rounded.equal_digits(&expected, 2) >= 2);
}

#[test]
fn test_compare_to() {
    use core::cmp::Ordering;
    let a = Float::from_i64(5, 10);
    let b = Float::from_mantissa_scale(IBig::from(500), -2, 10); // 5.00
    assert_eq!(a.compare_to(&b), Ordering::Equal);

    let c = Float::from_i64(6, 10);
    assert_eq!(a.compare_to(&c), Ordering::Less);
}

#[test]
fn test_equal_digits_zero() {
    let a = Float::zero(10);
    let b = Float::zero(10);
    assert!(a.equal_digits(&b, 5) >= 5);

    let c = Float::from_i64(1, 10);
    assert!(a.equal_digits(&c, 5) < 5);
}

#[test]
fn test_parse_exp() {
    let test_cases: [(&str, u32, IBig, isize); 4] = [
        ("1e0", 10, IBig::ONE, 0),
        ("1e5", 10, IBig::ONE, 5),
        ("1e-3", 10, IBig::ONE, -3),
        ("1e2", 8, IBig::ONE, 2),
    ];

    for (s, radix, mantissa, scale) in test_cases {
        let parsed = Float::parse_exp(s, radix).unwrap();
        assert_eq!(parsed.mantissa(), &mantissa);
        assert_eq!(parsed.scale(), scale);
        assert_eq!(parsed.radix(), radix);
    }
}

#[test]
fn test_parse_exp_rejects_large_radix() {
    assert!(Float::parse_exp("1e2", 16).is_err());
}

#[test]
fn test_parse_exp_rejects_malformed() {
    assert!(Float::parse_exp("2e2", 10).is_err());
    assert!(Float::parse_exp("1x2", 10).is_err());
    assert!(Float::parse_exp("", 10).is_err());
}

#[test]
fn test_digits() {
    let value = Float::from_mantissa_scale(IBig::from(123), 0, 10);
    assert_eq!(value.digits(), 3);

    let zero = Float::zero(10);
    assert_eq!(zero.digits(), 0);
}
