//! CNP validation: format, field range checks and the control digit.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::checksum::control_digit;
use crate::error::ValidationError;
use crate::layout::{CnpRules, Field};
use crate::types::Cnp;

/// One step of the validation sequence, in evaluation order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Check {
    /// Exactly 13 ASCII digits.
    Format,
    /// Gender/century digit is non-zero.
    Gender,
    /// Year field. Never fails.
    Year,
    /// Month in 1..=12 and day within the month's bound.
    MonthDay,
    /// County code in 1..=max_county.
    County,
    /// Sequence number is non-zero.
    Sequence,
    /// Control digit matches the weighted sum.
    Checksum,
}

impl Check {
    /// All checks in evaluation order.
    pub const ALL: [Check; 7] = [
        Check::Format,
        Check::Gender,
        Check::Year,
        Check::MonthDay,
        Check::County,
        Check::Sequence,
        Check::Checksum,
    ];

    pub const fn name(self) -> &'static str {
        match self {
            Check::Format => "format",
            Check::Gender => "gender",
            Check::Year => "year",
            Check::MonthDay => "month_day",
            Check::County => "county",
            Check::Sequence => "sequence",
            Check::Checksum => "checksum",
        }
    }
}

impl fmt::Display for Check {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Highest valid day for a month. February always allows 29.
pub const fn max_day(month: u8) -> u8 {
    match month {
        2 => 29,
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        _ => 30,
    }
}

/// Validates CNP candidates against a fixed rule set.
///
/// Stateless; copies are cheap and calls never interfere.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CnpValidator {
    rules: CnpRules,
}

impl CnpValidator {
    pub const fn new(rules: CnpRules) -> Self {
        Self { rules }
    }

    /// A validator with [`CnpRules::STANDARD`].
    pub const fn standard() -> Self {
        Self::new(CnpRules::STANDARD)
    }

    pub const fn rules(&self) -> &CnpRules {
        &self.rules
    }

    /// Whether `candidate` passes every check. Never fails.
    pub fn is_valid(&self, candidate: &str) -> bool {
        self.validate(candidate).is_ok()
    }

    /// Run the checks in order and stop at the first failure.
    pub fn validate(&self, candidate: &str) -> Result<Cnp, ValidationError> {
        let cnp = Cnp::parse(candidate)?;
        self.validate_cnp(&cnp)?;
        Ok(cnp)
    }

    /// Run the field and checksum checks on an already parsed CNP.
    pub fn validate_cnp(&self, cnp: &Cnp) -> Result<(), ValidationError> {
        // Format already holds by construction.
        for check in &Check::ALL[1..] {
            self.run_check(*check, cnp)?;
        }
        Ok(())
    }

    /// Evaluate every check and collect all failures.
    ///
    /// A format failure ends evaluation: there are no fields to read.
    pub fn report(&self, candidate: &str) -> ValidationReport {
        let cnp = match Cnp::parse(candidate) {
            Ok(cnp) => cnp,
            Err(e) => {
                return ValidationReport {
                    cnp: None,
                    failures: vec![e.into()],
                }
            }
        };

        let failures = Check::ALL[1..]
            .iter()
            .filter_map(|check| self.run_check(*check, &cnp).err())
            .collect();

        ValidationReport {
            cnp: Some(cnp),
            failures,
        }
    }

    fn run_check(&self, check: Check, cnp: &Cnp) -> Result<(), ValidationError> {
        match check {
            Check::Format => Ok(()),
            Check::Gender => check_gender(cnp),
            Check::Year => check_year(cnp),
            Check::MonthDay => check_month_day(cnp),
            Check::County => check_county(cnp, self.rules.max_county),
            Check::Sequence => check_sequence(cnp),
            Check::Checksum => check_checksum(cnp, &self.rules),
        }
    }
}

// Field values fit in u8 for every single- and two-digit field.
fn field_u8(cnp: &Cnp, field: Field) -> u8 {
    cnp.field(field) as u8
}

fn check_gender(cnp: &Cnp) -> Result<(), ValidationError> {
    // Only zero is rejected; 9 passes.
    match field_u8(cnp, Field::Gender) {
        0 => Err(ValidationError::InvalidGender(0)),
        _ => Ok(()),
    }
}

fn check_year(cnp: &Cnp) -> Result<(), ValidationError> {
    // Any two-digit year is accepted.
    let _year = cnp.field(Field::Year);
    Ok(())
}

fn check_month_day(cnp: &Cnp) -> Result<(), ValidationError> {
    let month = field_u8(cnp, Field::Month);
    let day = field_u8(cnp, Field::Day);

    if !(1..=12).contains(&month) {
        return Err(ValidationError::InvalidMonth(month));
    }
    if day == 0 || day > max_day(month) {
        return Err(ValidationError::InvalidDay { month, day });
    }
    Ok(())
}

fn check_county(cnp: &Cnp, max_county: u8) -> Result<(), ValidationError> {
    let county = field_u8(cnp, Field::County);
    if county == 0 || county > max_county {
        return Err(ValidationError::InvalidCounty(county));
    }
    Ok(())
}

fn check_sequence(cnp: &Cnp) -> Result<(), ValidationError> {
    if cnp.field(Field::Sequence) == 0 {
        return Err(ValidationError::InvalidSequence);
    }
    Ok(())
}

fn check_checksum(cnp: &Cnp, rules: &CnpRules) -> Result<(), ValidationError> {
    let expected = control_digit(&cnp.prefix(), &rules.weights);
    let got = cnp.control();
    if expected != got {
        return Err(ValidationError::ChecksumMismatch { expected, got });
    }
    Ok(())
}

/// Every failure found for a candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    /// The parsed candidate, if it passed the format check.
    pub cnp: Option<Cnp>,
    /// Failures in check order. Empty when valid.
    pub failures: Vec<ValidationError>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }

    /// The failed checks, in evaluation order.
    pub fn failed_checks(&self) -> Vec<Check> {
        self.failures.iter().map(ValidationError::check).collect()
    }

    /// The failure the short-circuit path would have reported.
    pub fn first_failure(&self) -> Option<&ValidationError> {
        self.failures.first()
    }
}

/// Validate with the standard rules and return only the verdict.
pub fn is_valid(candidate: &str) -> bool {
    CnpValidator::standard().is_valid(candidate)
}

/// Validate with the standard rules, stopping at the first failure.
pub fn validate(candidate: &str) -> Result<Cnp, ValidationError> {
    CnpValidator::standard().validate(candidate)
}
