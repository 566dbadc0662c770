//! Proptest generators for property-based testing.

use proptest::prelude::*;

use cnp_core::validation::max_day;
use cnp_core::{Cnp, CnpBuilder, CNP_LENGTH};

/// Generate a string of exactly `len` ASCII digits.
pub fn digit_string(len: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(0u8..=9, len)
        .prop_map(|digits| digits.into_iter().map(|d| char::from(b'0' + d)).collect::<String>())
}

/// Generate a 12-digit checksum prefix as digit values.
pub fn prefix() -> impl Strategy<Value = [u8; 12]> {
    prop::array::uniform12(0u8..=9)
}

/// Generate any 13-digit string. Most of these fail some check.
pub fn any_thirteen_digits() -> impl Strategy<Value = String> {
    digit_string(CNP_LENGTH)
}

/// Generate a string that does not match `^[0-9]{13}$`.
pub fn malformed_candidate() -> impl Strategy<Value = String> {
    prop_oneof![
        // Wrong length, digits only.
        (0usize..=30)
            .prop_filter("length must differ from 13", |len| *len != CNP_LENGTH)
            .prop_flat_map(digit_string),
        // Right length, one non-digit character spliced in.
        (digit_string(CNP_LENGTH - 1), 0usize..CNP_LENGTH, non_digit_char()).prop_map(
            |(digits, pos, c)| {
                let mut s: String = digits.chars().take(pos).collect();
                s.push(c);
                s.extend(digits.chars().skip(pos));
                s
            }
        ),
        // Arbitrary unicode.
        any::<String>().prop_filter("must not be 13 ASCII digits", |s| !is_thirteen_digits(s)),
    ]
}

fn non_digit_char() -> impl Strategy<Value = char> {
    any::<char>().prop_filter("must not be an ASCII digit", |c| !c.is_ascii_digit())
}

fn is_thirteen_digits(s: &str) -> bool {
    s.len() == CNP_LENGTH && s.bytes().all(|b| b.is_ascii_digit())
}

/// Field values for a CNP that passes every check.
#[derive(Debug, Clone, Copy)]
pub struct CnpParams {
    pub gender: u16,
    pub year: u16,
    pub month: u16,
    pub day: u16,
    pub county: u16,
    pub sequence: u16,
}

impl Arbitrary for CnpParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (1u16..=9, 0u16..=99, 1u8..=12)
            .prop_flat_map(|(gender, year, month)| {
                (
                    Just(gender),
                    Just(year),
                    Just(month),
                    1u16..=u16::from(max_day(month)),
                    1u16..=52,
                    1u16..=999,
                )
            })
            .prop_map(|(gender, year, month, day, county, sequence)| CnpParams {
                gender,
                year,
                month: u16::from(month),
                day,
                county,
                sequence,
            })
            .boxed()
    }
}

/// Build a CNP from parameters with the standard checksum.
pub fn cnp_from_params(params: &CnpParams) -> Cnp {
    CnpBuilder::new()
        .gender(params.gender)
        .year(params.year)
        .month(params.month)
        .day(params.day)
        .county(params.county)
        .sequence(params.sequence)
        .build()
        .expect("generated field values fit their widths")
}

/// Generate a CNP that passes every check.
pub fn valid_cnp() -> impl Strategy<Value = Cnp> {
    any::<CnpParams>().prop_map(|params| cnp_from_params(&params))
}

#[cfg(test)]
mod tests {
    use super::*;
    use cnp_core::{checksum, is_valid, validate, Check, CnpValidator, Field, CHECKSUM_WEIGHTS};

    proptest! {
        #[test]
        fn test_generated_cnps_are_valid(params: CnpParams) {
            let cnp = cnp_from_params(&params);
            prop_assert!(is_valid(&cnp.to_string()));
            prop_assert_eq!(cnp.field(Field::Month), params.month);
            prop_assert_eq!(cnp.field(Field::Sequence), params.sequence);
        }

        #[test]
        fn test_malformed_is_rejected(candidate in malformed_candidate()) {
            prop_assert!(!is_valid(&candidate));
            prop_assert_eq!(validate(&candidate).unwrap_err().check(), Check::Format);
        }

        #[test]
        fn test_verdict_is_idempotent(candidate in any_thirteen_digits()) {
            let validator = CnpValidator::standard();
            let first = validator.is_valid(&candidate);
            for _ in 0..3 {
                prop_assert_eq!(validator.is_valid(&candidate), first);
            }
        }

        #[test]
        fn test_paths_agree(candidate in any_thirteen_digits()) {
            let validator = CnpValidator::standard();
            let verdict = validator.is_valid(&candidate);
            let short = validator.validate(&candidate);
            let report = validator.report(&candidate);

            prop_assert_eq!(verdict, short.is_ok());
            prop_assert_eq!(verdict, report.is_valid());
            prop_assert_eq!(short.err(), report.first_failure().cloned());
        }

        #[test]
        fn test_altered_control_digit_fails(cnp in valid_cnp(), delta in 1u8..=9) {
            let s = cnp.to_string();
            let control = (cnp.control() + delta) % 10;
            let altered = format!("{}{}", &s[..12], control);
            prop_assert_eq!(validate(&altered).unwrap_err().check(), Check::Checksum);
        }

        #[test]
        fn test_completed_prefix_passes_checksum(p in prefix()) {
            let cnp = checksum::complete(&p, &CHECKSUM_WEIGHTS);
            prop_assert!(checksum::checksum_matches(&cnp, &CHECKSUM_WEIGHTS));
            prop_assert_eq!(cnp.prefix(), p);
        }

        #[test]
        fn test_digit_string_shape(s in digit_string(7)) {
            prop_assert_eq!(s.len(), 7);
            prop_assert!(s.bytes().all(|b| b.is_ascii_digit()));
        }
    }
}
