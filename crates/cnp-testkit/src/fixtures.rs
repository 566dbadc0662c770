//! Test fixtures and helpers.
//!
//! Rewriting single fields of a known CNP makes it easy to aim at exactly one
//! check.

use cnp_core::{checksum, Cnp, Field, CNP_LENGTH};

use crate::vectors::REFERENCE_CNP;

/// The reference valid CNP, parsed.
pub fn reference() -> Cnp {
    match Cnp::parse(REFERENCE_CNP) {
        Ok(cnp) => cnp,
        Err(e) => panic!("reference CNP is malformed: {e}"),
    }
}

/// Replace one field of `base`, keeping the original control digit.
///
/// Panics if `value` does not fit the field width.
pub fn with_field(base: &Cnp, field: Field, value: u16) -> Cnp {
    let spec = field.spec();
    assert!(
        value <= spec.max_value(),
        "{field} value {value} does not fit in {} digits",
        spec.len
    );

    let mut digits: [u8; CNP_LENGTH] = *base.digits();
    let mut rest = value;
    for slot in digits[spec.offset..spec.end()].iter_mut().rev() {
        *slot = (rest % 10) as u8;
        rest /= 10;
    }

    Cnp::from_digits(digits).expect("digits are in range")
}

/// Replace one field of `base` and recompute the control digit, so only the
/// rewritten field can make the result invalid.
pub fn with_field_resealed(base: &Cnp, field: Field, value: u16) -> Cnp {
    let cnp = with_field(base, field, value);
    if field == Field::Control {
        return cnp;
    }
    checksum::complete(&cnp.prefix(), &cnp_core::CHECKSUM_WEIGHTS)
}

/// The reference CNP with one field rewritten and the control digit
/// recomputed, rendered as a string.
pub fn reference_with(field: Field, value: u16) -> String {
    with_field_resealed(&reference(), field, value).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use cnp_core::{is_valid, validate, Check};

    #[test]
    fn test_reference_is_valid() {
        assert!(is_valid(&reference().to_string()));
    }

    #[test]
    fn test_with_field_keeps_control_digit() {
        let cnp = with_field(&reference(), Field::Month, 12);
        assert_eq!(cnp.to_string(), "1621226400074");
        assert_eq!(cnp.control(), reference().control());
    }

    #[test]
    fn test_resealed_isolates_one_check() {
        let county = reference_with(Field::County, 53);
        assert_eq!(validate(&county).unwrap_err().check(), Check::County);

        let sequence = reference_with(Field::Sequence, 0);
        assert_eq!(validate(&sequence).unwrap_err().check(), Check::Sequence);

        let month = reference_with(Field::Month, 4);
        assert!(is_valid(&month));
    }

    #[test]
    fn test_rewriting_control_digit() {
        let cnp = with_field_resealed(&reference(), Field::Control, 5);
        assert_eq!(cnp.to_string(), "1621126400075");
    }

    #[test]
    #[should_panic(expected = "does not fit")]
    fn test_with_field_overflow_panics() {
        with_field(&reference(), Field::Day, 100);
    }
}
