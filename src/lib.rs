//! The meta crate that re-exports the `florix` number type and kernel.

#![cfg_attr(not(feature = "std"), no_std)]

/// Defintions of common traits
pub mod base {
    pub use dashu_base::*;
}

/// Arbitrary precision integer number
pub mod integer {
    pub use dashu_int::*;
}

/// The arbitrary-precision, arbitrary-radix `Number` ADT.
pub mod num {
    pub use florix_num::*;
}

/// The precision-aware transcendental kernel (roots, logs, exponentials,
/// trigonometric/hyperbolic functions, and pi) built on top of [`num`].
pub mod kernel {
    pub use florix_kernel::*;
}

/// A verbose alias for [`Float`][florix_num::Float]
pub type Float = florix_num::Float;
