use dashu_base::ParseError;
use dashu_int::IBig;

use crate::float::Float;
use crate::precision::Precision;

impl Float {
    /// Parses the compact `"1e<k>"` literal used throughout the kernel to build exact
    /// powers of the radix (e.g. `"1e5"` in radix 10 is exactly `100000`, `"1e-3"` is
    /// exactly `1/1000`).
    ///
    /// This format is only unambiguous when `radix <= 14`: for larger radices `'e'` is
    /// itself a valid digit (14 in base 36), so [`ParseError::UnsupportedRadix`] is
    /// returned instead of guessing.
    pub fn parse_exp(s: &str, radix: u32) -> Result<Float, ParseError> {
        if radix > 14 {
            return Err(ParseError::UnsupportedRadix);
        }
        if s.is_empty() {
            return Err(ParseError::NoDigits);
        }

        let mut parts = s.splitn(2, 'e');
        let mantissa_str = parts.next().unwrap();
        let exp_str = parts.next().ok_or(ParseError::InvalidDigit)?;

        if mantissa_str != "1" {
            return Err(ParseError::InvalidDigit);
        }
        if exp_str.is_empty() {
            return Err(ParseError::NoDigits);
        }

        let exp: isize = exp_str.parse().map_err(|_| ParseError::InvalidDigit)?;
        Ok(Float::from_parts(radix, IBig::ONE, exp, Precision::Unlimited))
    }
}
