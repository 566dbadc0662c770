//! Fixed-width field layout of a CNP and the rules the validator closes over.
//!
//! A CNP is 13 ASCII digits read left to right:
//!
//! ```text
//!  S YY MM DD JJ NNN C
//!  0 1  3  5  7  9   12
//! ```
//!
//! `S` is the gender/century digit, `JJ` the county code, `NNN` the daily
//! sequence number and `C` the control digit.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Total number of digits in a CNP.
pub const CNP_LENGTH: usize = 13;

/// Number of digits covered by the checksum.
pub const CHECKSUM_SPAN: usize = CNP_LENGTH - 1;

/// Weights applied to the first 12 digits when computing the control digit.
pub const CHECKSUM_WEIGHTS: [u8; CHECKSUM_SPAN] = [2, 7, 9, 1, 4, 6, 3, 5, 8, 2, 7, 9];

/// Highest valid county code (41 counties, Bucharest sectors, diaspora).
pub const MAX_COUNTY_CODE: u8 = 52;

/// A named field of a CNP.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Field {
    /// Gender/century digit.
    Gender,
    /// Last two digits of the birth year.
    Year,
    /// Birth month.
    Month,
    /// Birth day.
    Day,
    /// Administrative county code.
    County,
    /// Daily registration sequence number.
    Sequence,
    /// Control digit.
    Control,
}

impl Field {
    /// All fields in layout order.
    pub const ALL: [Field; 7] = [
        Field::Gender,
        Field::Year,
        Field::Month,
        Field::Day,
        Field::County,
        Field::Sequence,
        Field::Control,
    ];

    /// The layout entry for this field.
    pub const fn spec(self) -> FieldSpec {
        FIELD_LAYOUT[self as usize]
    }

    /// Short lowercase name.
    pub const fn name(self) -> &'static str {
        match self {
            Field::Gender => "gender",
            Field::Year => "year",
            Field::Month => "month",
            Field::Day => "day",
            Field::County => "county",
            Field::Sequence => "sequence",
            Field::Control => "control",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Position of a field inside the 13-digit string.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FieldSpec {
    pub field: Field,
    pub offset: usize,
    pub len: usize,
}

impl FieldSpec {
    const fn new(field: Field, offset: usize, len: usize) -> Self {
        Self { field, offset, len }
    }

    /// Index one past the last digit of the field.
    pub const fn end(&self) -> usize {
        self.offset + self.len
    }

    /// Largest value the field can hold (`10^len - 1`).
    pub const fn max_value(&self) -> u16 {
        10u16.pow(self.len as u32) - 1
    }
}

/// The CNP field table, indexed by `Field as usize`.
pub const FIELD_LAYOUT: [FieldSpec; 7] = [
    FieldSpec::new(Field::Gender, 0, 1),
    FieldSpec::new(Field::Year, 1, 2),
    FieldSpec::new(Field::Month, 3, 2),
    FieldSpec::new(Field::Day, 5, 2),
    FieldSpec::new(Field::County, 7, 2),
    FieldSpec::new(Field::Sequence, 9, 3),
    FieldSpec::new(Field::Control, 12, 1),
];

/// Constants the validator closes over.
///
/// [`CnpRules::STANDARD`] is the Romanian rule set; other values exist mostly
/// so tests can exercise the checksum and county checks in isolation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CnpRules {
    /// Checksum weights for digits 0..12.
    pub weights: [u8; CHECKSUM_SPAN],
    /// Highest accepted county code.
    pub max_county: u8,
}

impl CnpRules {
    /// The standard rule set: weights `279146358279`, counties 1..=52.
    pub const STANDARD: Self = Self {
        weights: CHECKSUM_WEIGHTS,
        max_county: MAX_COUNTY_CODE,
    };
}

impl Default for CnpRules {
    fn default() -> Self {
        Self::STANDARD
    }
}
