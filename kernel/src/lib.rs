// Copyright (c) 2022 Jacob Zhong
//
// Licensed under either of
//
// * Apache License, Version 2.0
//   (LICENSE-APACHE or https://www.apache.org/licenses/LICENSE-2.0)
// * MIT license
//   (LICENSE-MIT or https://opensource.org/licenses/MIT)
//
// at your option.
//
// Unless you explicitly state otherwise, any contribution intentionally submitted
// for inclusion in the work by you, as defined in the Apache-2.0 license, shall be
// dual licensed as above, without any additional terms or conditions.

//! A precision-aware transcendental kernel over [`florix_num::Float`]: arbitrary
//! integer and inverse-integer roots, the arithmetic-geometric mean, `pi` via
//! Chudnovsky binary splitting, AGM-based `log`, Newton-iterated `exp`, and the
//! elementary functions (`pow`, hyperbolics, trig, `atan2`) built from those.
//!
//! Every routine that cannot produce an exact answer takes (or derives from its
//! argument) a finite target precision; [`Precision::Unlimited`][florix_num::Precision::Unlimited]
//! inputs are rejected with [`OperationError::UnlimitedPrecisionUnsupported`].
//! Per-radix caches for `pi` and `logRadix` let repeated calls at increasing
//! precision reuse the work already done (see [`cache`]).

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

use core::sync::atomic::{AtomicU32, Ordering};

use florix_num::Float;

mod agm;
mod cache;
mod complex;
mod elementary;
mod error;
mod exp;
mod fmod;
mod invroot;
mod log;
mod pi;
mod precision;
mod root;
mod scale;
mod seed;
mod trig;

pub use error::{DomainError, KernelError, OperationError, Result};

pub use agm::agm;
pub use elementary::{
    acos, acosh, asin, asinh, atan, atan2_op as atan2, atanh, cosh, multiply_add, multiply_subtract, pow, sinh, tanh,
};
pub use exp::{exp, exp_m1};
pub use fmod::fmod;
pub use invroot::inverse_root;
pub use log::{log, log_radix};
pub use pi::pi;
pub use root::{cbrt, root, sqrt};
pub use scale::{pow_int, scale};
pub use trig::{cos, sin, tan};

/// The process-wide default radix consulted by [`pi_default`] and any other
/// entry point that omits an explicit radix (spec §6, "ambient context").
static DEFAULT_RADIX: AtomicU32 = AtomicU32::new(10);

/// Returns the current default radix.
pub fn default_radix() -> u32 {
    DEFAULT_RADIX.load(Ordering::Relaxed)
}

/// Sets the process-wide default radix. Fails if `radix` is outside `2..=36`.
pub fn set_default_radix(radix: u32) -> Result<()> {
    if !(2..=36).contains(&radix) {
        return Err(KernelError::from(OperationError::InvalidRadix));
    }
    DEFAULT_RADIX.store(radix, Ordering::Relaxed);
    Ok(())
}

/// `pi(precision)` at the process-wide default radix.
pub fn pi_default(precision: usize) -> Result<Float> {
    pi(precision, default_radix())
}
