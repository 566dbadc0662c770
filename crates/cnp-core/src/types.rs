//! The `Cnp` newtype and its builder.
//!
//! A [`Cnp`] is structurally well-formed (13 ASCII digits) but not
//! necessarily valid; use [`crate::CnpValidator`] for the full rule set.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::checksum::{self, parse_digits_into};
use crate::error::FormatError;
use crate::layout::{CnpRules, Field, CHECKSUM_SPAN, CNP_LENGTH};

/// Thirteen decimal digits, stored as digit values (0..=9).
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cnp([u8; CNP_LENGTH]);

impl Cnp {
    /// Parse a candidate string.
    ///
    /// Only the format is checked here: exactly 13 ASCII digits.
    pub fn parse(s: &str) -> Result<Self, FormatError> {
        let mut digits = [0u8; CNP_LENGTH];
        parse_digits_into(s, &mut digits)?;
        Ok(Self(digits))
    }

    /// Create from digit values. Fails if any value is above 9.
    pub fn from_digits(digits: [u8; CNP_LENGTH]) -> Result<Self, FormatError> {
        if let Some((position, &d)) = digits.iter().enumerate().find(|&(_, &d)| d > 9) {
            return Err(FormatError::NonDigit {
                position,
                found: char::from(b'0'.saturating_add(d)),
            });
        }
        Ok(Self(digits))
    }

    pub(crate) const fn from_digit_array(digits: [u8; CNP_LENGTH]) -> Self {
        Self(digits)
    }

    /// The digit values.
    pub const fn digits(&self) -> &[u8; CNP_LENGTH] {
        &self.0
    }

    /// The digits of a single field.
    pub fn field_digits(&self, field: Field) -> &[u8] {
        let spec = field.spec();
        &self.0[spec.offset..spec.end()]
    }

    /// A field read as a base-10 integer.
    pub fn field(&self, field: Field) -> u16 {
        self.field_digits(field)
            .iter()
            .fold(0u16, |acc, &d| acc * 10 + u16::from(d))
    }

    /// The 12 digits covered by the checksum.
    pub fn prefix(&self) -> [u8; CHECKSUM_SPAN] {
        let mut out = [0u8; CHECKSUM_SPAN];
        out.copy_from_slice(&self.0[..CHECKSUM_SPAN]);
        out
    }

    /// The control digit.
    pub const fn control(&self) -> u8 {
        self.0[CNP_LENGTH - 1]
    }
}

impl fmt::Debug for Cnp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Cnp({})", self)
    }
}

impl fmt::Display for Cnp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for &d in &self.0 {
            write!(f, "{}", d)?;
        }
        Ok(())
    }
}

impl FromStr for Cnp {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Cnp {
    type Error = FormatError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl Serialize for Cnp {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Cnp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        Self::parse(&raw).map_err(serde::de::Error::custom)
    }
}

/// Builder for composing a CNP from field values.
///
/// The control digit is computed on [`build`](Self::build).
#[derive(Clone, Copy, Debug)]
pub struct CnpBuilder {
    gender: u16,
    year: u16,
    month: u16,
    day: u16,
    county: u16,
    sequence: u16,
}

impl CnpBuilder {
    pub fn new() -> Self {
        Self {
            gender: 1,
            year: 0,
            month: 1,
            day: 1,
            county: 1,
            sequence: 1,
        }
    }

    pub fn gender(mut self, gender: u16) -> Self {
        self.gender = gender;
        self
    }

    pub fn year(mut self, year: u16) -> Self {
        self.year = year;
        self
    }

    pub fn month(mut self, month: u16) -> Self {
        self.month = month;
        self
    }

    pub fn day(mut self, day: u16) -> Self {
        self.day = day;
        self
    }

    pub fn county(mut self, county: u16) -> Self {
        self.county = county;
        self
    }

    pub fn sequence(mut self, sequence: u16) -> Self {
        self.sequence = sequence;
        self
    }

    /// Build with the standard checksum weights.
    pub fn build(self) -> Result<Cnp, FormatError> {
        self.build_with(&CnpRules::STANDARD)
    }

    /// Build with the given rules' checksum weights.
    ///
    /// Field values are not range-checked beyond fitting their width.
    pub fn build_with(self, rules: &CnpRules) -> Result<Cnp, FormatError> {
        let mut prefix = [0u8; CHECKSUM_SPAN];
        for (field, value) in [
            (Field::Gender, self.gender),
            (Field::Year, self.year),
            (Field::Month, self.month),
            (Field::Day, self.day),
            (Field::County, self.county),
            (Field::Sequence, self.sequence),
        ] {
            write_field(&mut prefix, field, value)?;
        }
        Ok(checksum::complete(&prefix, &rules.weights))
    }
}

impl Default for CnpBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn write_field(buf: &mut [u8], field: Field, value: u16) -> Result<(), FormatError> {
    let spec = field.spec();
    if value > spec.max_value() {
        return Err(FormatError::FieldOverflow {
            field,
            value,
            width: spec.len,
        });
    }

    let mut rest = value;
    for slot in buf[spec.offset..spec.end()].iter_mut().rev() {
        *slot = (rest % 10) as u8;
        rest /= 10;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    const REFERENCE: &str = "1621126400074";

    #[test]
    fn test_parse_and_display() {
        let cnp = Cnp::parse(REFERENCE).unwrap();
        assert_eq!(cnp.to_string(), REFERENCE);
        assert_eq!(format!("{:?}", cnp), "Cnp(1621126400074)");
    }

    #[test]
    fn test_field_values() {
        let cnp = Cnp::parse(REFERENCE).unwrap();
        assert_eq!(cnp.field(Field::Gender), 1);
        assert_eq!(cnp.field(Field::Year), 62);
        assert_eq!(cnp.field(Field::Month), 11);
        assert_eq!(cnp.field(Field::Day), 26);
        assert_eq!(cnp.field(Field::County), 40);
        assert_eq!(cnp.field(Field::Sequence), 7);
        assert_eq!(cnp.field(Field::Control), 4);
        assert_eq!(cnp.control(), 4);
        assert_eq!(cnp.field_digits(Field::Sequence), &[0, 0, 7]);
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(matches!(
            Cnp::parse(""),
            Err(FormatError::InvalidLength { expected: 13, got: 0 })
        ));
        assert!(Cnp::parse("162112640007").is_err());
        assert!(Cnp::parse("16211264000745").is_err());
        assert!(Cnp::parse(" 621126400074").is_err());
        assert!(Cnp::parse("-621126400074").is_err());
        assert!(matches!(
            Cnp::parse("16211264000x4"),
            Err(FormatError::NonDigit { position: 11, found: 'x' })
        ));
    }

    #[test]
    fn test_parse_rejects_unicode() {
        // 11 ASCII digits plus one 2-byte char: 13 bytes, 12 chars.
        assert!(matches!(
            Cnp::parse("16211264000é"),
            Err(FormatError::NonDigit { position: 11, found: 'é' })
        ));
        // Arabic-Indic digits are not ASCII digits.
        assert!(Cnp::parse("١٦٢١١٢٦٤٠٠٠٧٤").is_err());
    }

    #[test]
    fn test_from_digits() {
        let cnp = Cnp::from_digits([1, 6, 2, 1, 1, 2, 6, 4, 0, 0, 0, 7, 4]).unwrap();
        assert_eq!(cnp.to_string(), REFERENCE);
        assert!(Cnp::from_digits([1, 6, 2, 1, 1, 2, 6, 4, 0, 0, 0, 7, 10]).is_err());
    }

    #[test]
    fn test_builder_reproduces_reference() {
        let cnp = CnpBuilder::new()
            .gender(1)
            .year(62)
            .month(11)
            .day(26)
            .county(40)
            .sequence(7)
            .build()
            .unwrap();
        assert_eq!(cnp.to_string(), REFERENCE);
    }

    #[test]
    fn test_builder_rejects_overflow() {
        let err = CnpBuilder::new().sequence(1000).build().unwrap_err();
        assert_eq!(
            err,
            FormatError::FieldOverflow {
                field: Field::Sequence,
                value: 1000,
                width: 3
            }
        );
    }

    #[test]
    fn test_serde_roundtrip() {
        let cnp = Cnp::parse(REFERENCE).unwrap();
        let json = serde_json::to_string(&cnp).unwrap();
        assert_eq!(json, "\"1621126400074\"");
        let back: Cnp = serde_json::from_str(&json).unwrap();
        assert_eq!(back, cnp);
    }

    #[test]
    fn test_deserialize_rejects_malformed() {
        assert!(serde_json::from_str::<Cnp>("\"12345\"").is_err());
        assert!(serde_json::from_str::<Cnp>("1621126400074").is_err());
    }
}
