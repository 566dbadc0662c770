//! Weighted mod-11 control digit.
//!
//! `sum = Σ weight[i] * digit[i]` over the first 12 digits, `r = sum % 11`.
//! The control digit is `r`, except that a remainder of 10 maps to 1.

use crate::error::FormatError;
use crate::layout::{CHECKSUM_SPAN, CNP_LENGTH};
use crate::types::Cnp;

/// Compute the control digit for a 12-digit prefix.
pub fn control_digit(prefix: &[u8; CHECKSUM_SPAN], weights: &[u8; CHECKSUM_SPAN]) -> u8 {
    let sum: u32 = prefix
        .iter()
        .zip(weights.iter())
        .map(|(&d, &w)| u32::from(d) * u32::from(w))
        .sum();

    match (sum % 11) as u8 {
        10 => 1,
        r => r,
    }
}

/// Whether the control digit of `cnp` matches its first 12 digits.
pub fn checksum_matches(cnp: &Cnp, weights: &[u8; CHECKSUM_SPAN]) -> bool {
    control_digit(&cnp.prefix(), weights) == cnp.control()
}

/// Parse a string of exactly 12 ASCII digits into digit values.
pub fn parse_prefix(s: &str) -> Result<[u8; CHECKSUM_SPAN], FormatError> {
    let mut out = [0u8; CHECKSUM_SPAN];
    parse_digits_into(s, &mut out)?;
    Ok(out)
}

/// Append the control digit to a 12-digit prefix.
pub fn complete(prefix: &[u8; CHECKSUM_SPAN], weights: &[u8; CHECKSUM_SPAN]) -> Cnp {
    let mut digits = [0u8; CNP_LENGTH];
    digits[..CHECKSUM_SPAN].copy_from_slice(prefix);
    digits[CHECKSUM_SPAN] = control_digit(prefix, weights);
    Cnp::from_digit_array(digits)
}

pub(crate) fn parse_digits_into(s: &str, out: &mut [u8]) -> Result<(), FormatError> {
    if s.len() != out.len() {
        return Err(FormatError::InvalidLength {
            expected: out.len(),
            got: s.len(),
        });
    }

    for ((position, c), slot) in s.char_indices().zip(out.iter_mut()) {
        match c.to_digit(10) {
            Some(d) => *slot = d as u8,
            _ => return Err(FormatError::NonDigit { position, found: c }),
        }
    }

    Ok(())
}
