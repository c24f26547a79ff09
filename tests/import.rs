//! Smoke test for importing items from `florix` and chaining a few kernel calls.

use florix::kernel::pi;
use florix::Float;

#[test]
fn test_basic_pipeline() {
    let pi_10 = pi(20, 10).unwrap();
    assert_eq!(pi_10.radix(), 10);
    assert!(pi_10.precision().is_finite());

    let two = Float::from_i64(2, 10);
    let four = florix::kernel::pow_int(&two, 2).unwrap();
    assert_eq!(four, Float::from_i64(4, 10));
}
