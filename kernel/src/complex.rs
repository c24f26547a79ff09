//! A minimal, crate-private complex pair built only on this kernel's own
//! `exp`/`log`, standing in for the `Complex` collaborator spec left out of
//! scope ("assumed to provide `log`, `exp`, `real`, `imag` using this same
//! kernel"). This is not a general-purpose complex number type: it exists
//! solely to express the trigonometric identities in `elementary.rs` the way
//! the kernel's own design notes phrase them (`cos(x) = Re(exp(i*x))`, inverse
//! trig via `Im(log(...))`).

use florix_num::{Float, Precision};

use crate::error::Result;
use crate::log::log;
use crate::trig::{atan2, cos_sin};

pub(crate) struct Complex {
    pub re: Float,
    pub im: Float,
}

impl Complex {
    pub(crate) fn new(re: Float, im: Float) -> Self {
        Complex { re, im }
    }

    pub(crate) fn add(&self, other: &Complex) -> Complex {
        Complex::new(&self.re + &other.re, &self.im + &other.im)
    }

    pub(crate) fn mul(&self, other: &Complex) -> Complex {
        let re = &(&self.re * &other.re) - &(&self.im * &other.im);
        let im = &(&self.re * &other.im) + &(&self.im * &other.re);
        Complex::new(re, im)
    }

    /// `exp(re + i*im) = exp(re) * (cos(im) + i*sin(im))`.
    pub(crate) fn exp(&self, precision: usize) -> Result<Complex> {
        let radix = self.re.radix();
        let magnitude = if self.re.is_zero() {
            Float::one(radix)
        } else {
            crate::exp::exp(&self.re.with_precision(Precision::Finite(precision)))?
        };
        let (cos_im, sin_im) = cos_sin(&self.im.with_precision(Precision::Finite(precision)), precision)?;
        Ok(Complex::new(&magnitude * &cos_im, &magnitude * &sin_im))
    }

    /// `log(re + i*im) = log(hypot(re, im)) + i*atan2(im, re)`.
    pub(crate) fn ln(&self, precision: usize) -> Result<Complex> {
        let radix = self.re.radix();
        let re = self.re.with_precision(Precision::Finite(precision));
        let im = self.im.with_precision(Precision::Finite(precision));

        let magnitude_sq = &(&re * &re) + &(&im * &im);
        let magnitude = crate::root::sqrt(&magnitude_sq, precision)?;
        let log_re = if magnitude == Float::one(radix) {
            Float::zero(radix)
        } else {
            log(&magnitude)?
        };
        let angle = atan2(&im, &re, precision)?;
        Ok(Complex::new(log_re, angle))
    }
}
