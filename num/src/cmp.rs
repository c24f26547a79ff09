use core::cmp::Ordering;

use crate::float::Float;
use crate::utils::shl_digits;

impl Float {
    /// Compares `self` and `other` as exact rational values, ignoring precision.
    ///
    /// Panics if the two values have different radices.
    pub fn compare_to(&self, other: &Float) -> Ordering {
        assert_eq!(self.radix, other.radix, "radix mismatch");
        let scale = self.scale.min(other.scale);
        let a = shl_digits(&self.mantissa, self.radix, (self.scale - scale) as usize);
        let b = shl_digits(&other.mantissa, other.radix, (other.scale - scale) as usize);
        a.cmp(&b)
    }
}

impl PartialEq for Float {
    fn eq(&self, other: &Self) -> bool {
        self.radix == other.radix && self.compare_to(other) == Ordering::Equal
    }
}

impl Eq for Float {}

impl PartialOrd for Float {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        if self.radix != other.radix {
            return None;
        }
        Some(self.compare_to(other))
    }
}
