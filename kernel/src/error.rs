//! Typed errors for the kernel, split along the two categories the operations
//! distinguish: domain errors (the mathematical operation has no real-valued
//! answer for these operands) and operation errors (the operation was asked
//! to do something it structurally can't, independent of the operands' values).

use core::fmt::{self, Display, Formatter};

/// The operation has no real-valued answer for the given operands.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DomainError {
    /// `pow(0, 0)`.
    ZeroToZeroPower,
    /// The zeroth root of zero.
    ZerothRootOfZero,
    /// `inverseRoot(0, _)`.
    InverseRootOfZero,
    /// `log(x)` for `x <= 0`.
    LogOfNonPositive,
    /// An even-order root of a negative number.
    EvenRootOfNegative,
    /// `pow(x, y)` for `x < 0` (the caller should use the integer `pow` instead).
    PowNegativeBase,
    /// `atan2(0, 0)`.
    AtanTwoAtOrigin,
    /// Division by zero.
    DivisionByZero,
}

impl Display for DomainError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let msg = match self {
            DomainError::ZeroToZeroPower => "zero to the power of zero",
            DomainError::ZerothRootOfZero => "zeroth root of zero",
            DomainError::InverseRootOfZero => "inverse root of zero",
            DomainError::LogOfNonPositive => "logarithm of a non-positive number",
            DomainError::EvenRootOfNegative => "even-order root of a negative number",
            DomainError::PowNegativeBase => "power of a negative base with non-integer exponent",
            DomainError::AtanTwoAtOrigin => "atan2 at the origin",
            DomainError::DivisionByZero => "division by zero",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DomainError {}

/// The operation was asked to do something it structurally cannot, regardless
/// of the operands' values (an unsupported precision, radix, or magnitude).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum OperationError {
    /// A transcendental routine was asked for an unlimited-precision result.
    UnlimitedPrecisionUnsupported,
    /// `exp(x)` overflowed the representable range.
    ExpOverflow,
    /// A target precision `<= 0` was requested.
    InvalidPrecision,
    /// A radix outside `2..=36` was requested.
    InvalidRadix,
}

impl Display for OperationError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let msg = match self {
            OperationError::UnlimitedPrecisionUnsupported => {
                "unlimited precision is not supported for this operation"
            }
            OperationError::ExpOverflow => "exp overflowed the representable range",
            OperationError::InvalidPrecision => "precision must be a positive number of digits",
            OperationError::InvalidRadix => "radix must be between 2 and 36",
        };
        f.write_str(msg)
    }
}

#[cfg(feature = "std")]
impl std::error::Error for OperationError {}

/// The union of every error the kernel can surface.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum KernelError {
    Domain(DomainError),
    Operation(OperationError),
}

impl From<DomainError> for KernelError {
    #[inline]
    fn from(e: DomainError) -> Self {
        KernelError::Domain(e)
    }
}

impl From<OperationError> for KernelError {
    #[inline]
    fn from(e: OperationError) -> Self {
        KernelError::Operation(e)
    }
}

impl Display for KernelError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            KernelError::Domain(e) => Display::fmt(e, f),
            KernelError::Operation(e) => Display::fmt(e, f),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for KernelError {}

pub type Result<T> = core::result::Result<T, KernelError>;
