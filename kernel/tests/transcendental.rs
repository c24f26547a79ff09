//! `pi`, `log`, `exp`, `agm`: boundary digit sequences plus the identities
//! from spec's Testable Properties (`exp(log(x)) == x`, `log(xy) = log(x)+log(y)`).

use dashu_int::IBig;
use florix_kernel::{agm, exp, exp_m1, log, log_radix, pi, pi_default};
use florix_num::{Float, Precision};

fn exact(mantissa: &str, scale: isize, radix: u32) -> Float {
    Float::from_mantissa_scale(IBig::from_str_radix(mantissa, radix).unwrap(), scale, radix)
}

#[test]
fn test_pi_digits_base_ten() {
    let result = pi(18, 10).unwrap();
    let expected = exact("314159265358979323", -17, 10);
    assert!(result.equal_digits(&expected, 15) >= 15);
}

#[test]
fn test_pi_cache_extends_to_higher_precision() {
    let low = pi(10, 10).unwrap();
    let high = pi(25, 10).unwrap();
    assert!(high.equal_digits(&low, 10) >= 10);
}

#[test]
fn test_pi_default_uses_default_radix() {
    let explicit = pi(12, florix_kernel::default_radix()).unwrap();
    let default = pi_default(12).unwrap();
    assert_eq!(explicit, default);
}

#[test]
fn test_log_of_one_is_zero() {
    let one = Float::one(10).with_precision(Precision::Finite(20));
    let result = log(&one).unwrap();
    assert!(result.is_zero());
}

#[test]
fn test_log_radix_matches_log_of_one_over_radix() {
    let lr = log_radix(20, 10).unwrap();
    let expected = exact("230258509299404568", -17, 10);
    assert!(lr.equal_digits(&expected, 15) >= 15);
}

#[test]
fn test_exp_of_log_round_trip() {
    let x = Float::from_i64(5, 10).with_precision(Precision::Finite(25));
    let l = log(&x).unwrap();
    let rebuilt = exp(&l).unwrap();
    assert!(rebuilt.equal_digits(&x, 15) >= 15);
}

#[test]
fn test_log_of_product_is_sum_of_logs() {
    let a = Float::from_i64(3, 10).with_precision(Precision::Finite(25));
    let b = Float::from_i64(11, 10).with_precision(Precision::Finite(25));
    let product = (&a * &b).with_precision(Precision::Finite(25));

    let log_ab = log(&product).unwrap();
    let log_a = log(&a).unwrap();
    let log_b = log(&b).unwrap();
    let sum = (&log_a + &log_b).with_precision(Precision::Finite(20));

    assert!(log_ab.equal_digits(&sum, 15) >= 15);
}

#[test]
fn test_exp_of_zero_is_one() {
    let zero = Float::zero(10).with_precision(Precision::Finite(20));
    let result = exp(&zero).unwrap();
    assert_eq!(result, Float::one(10));
}

#[test]
fn test_log_of_non_positive_is_domain_error() {
    let zero = Float::zero(10).with_precision(Precision::Finite(10));
    assert!(log(&zero).is_err());
    let neg = Float::from_i64(-1, 10).with_precision(Precision::Finite(10));
    assert!(log(&neg).is_err());
}

#[test]
fn test_agm_of_equal_values_is_identity() {
    let x = Float::from_i64(7, 10).with_precision(Precision::Finite(20));
    let result = agm(&x, &x).unwrap();
    assert!(result.equal_digits(&x, 15) >= 15);
}

#[test]
fn test_agm_symmetric() {
    let a = Float::from_i64(1, 10).with_precision(Precision::Finite(20));
    let b = Float::from_i64(2, 10).with_precision(Precision::Finite(20));
    let ab = agm(&a, &b).unwrap();
    let ba = agm(&b, &a).unwrap();
    assert!(ab.equal_digits(&ba, 15) >= 15);
}

#[test]
fn test_exp_m1_matches_exp_minus_one() {
    let x = Float::from_i64(1, 10).div_to(&Float::from_i64(1000, 10), 25);
    let direct = (&exp(&x).unwrap() - &Float::one(10)).with_precision(Precision::Finite(15));
    let via_m1 = exp_m1(&x).unwrap();
    assert!(via_m1.equal_digits(&direct, 14) >= 14);
}

#[test]
fn test_exp_m1_of_zero_is_zero() {
    let zero = Float::zero(10).with_precision(Precision::Finite(20));
    assert!(exp_m1(&zero).unwrap().is_zero());
}

#[test]
fn test_agm_one_two_value() {
    let a = Float::one(10).with_precision(Precision::Finite(20));
    let b = Float::from_i64(2, 10).with_precision(Precision::Finite(20));
    let result = agm(&a, &b).unwrap();
    // agm(1,2) = 1.4567910310469068691...
    let expected = exact("145679103104690686", -17, 10);
    assert!(result.equal_digits(&expected, 14) >= 14);
}
