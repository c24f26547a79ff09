use core::cmp::Ordering;

/// The precision of a [`Float`][crate::Float], in digits of its radix.
///
/// [`Precision::Unlimited`] is the sentinel described in spec for "exact" values:
/// arithmetic between two unlimited operands stays unlimited, but most transcendental
/// operations cannot produce an exact result and must be invoked with a finite target.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Precision {
    Finite(usize),
    Unlimited,
}

impl Precision {
    #[inline]
    pub fn is_finite(self) -> bool {
        matches!(self, Precision::Finite(_))
    }

    #[inline]
    pub fn is_unlimited(self) -> bool {
        matches!(self, Precision::Unlimited)
    }

    /// Returns the finite digit count, or `None` for [`Precision::Unlimited`].
    #[inline]
    pub fn digits(self) -> Option<usize> {
        match self {
            Precision::Finite(p) => Some(p),
            Precision::Unlimited => None,
        }
    }
}

impl PartialOrd for Precision {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Precision {
    /// Unlimited compares greater than every finite precision, matching the intuition
    /// that "exact" carries more information than any fixed digit count.
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Precision::Unlimited, Precision::Unlimited) => Ordering::Equal,
            (Precision::Unlimited, _) => Ordering::Greater,
            (_, Precision::Unlimited) => Ordering::Less,
            (Precision::Finite(a), Precision::Finite(b)) => a.cmp(b),
        }
    }
}

impl From<usize> for Precision {
    #[inline]
    fn from(p: usize) -> Self {
        Precision::Finite(p)
    }
}
