//! Golden test vectors.
//!
//! The reference CNP and single-field mutations of it, each tagged with the
//! check it must fail. Every implementation of the validator must agree on
//! all of them.

use cnp_core::{Check, CnpValidator};
use serde::Serialize;

/// A golden test vector.
#[derive(Debug, Clone, Serialize)]
pub struct GoldenVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// The candidate string.
    pub cnp: &'static str,
    /// Expected verdict.
    pub valid: bool,
    /// The first check expected to fail, `None` for valid vectors.
    pub fails: Option<Check>,
}

impl GoldenVector {
    const fn valid(name: &'static str, cnp: &'static str) -> Self {
        Self {
            name,
            cnp,
            valid: true,
            fails: None,
        }
    }

    const fn invalid(name: &'static str, cnp: &'static str, check: Check) -> Self {
        Self {
            name,
            cnp,
            valid: false,
            fails: Some(check),
        }
    }
}

/// The reference valid CNP every mutation starts from.
pub const REFERENCE_CNP: &str = "1621126400074";

/// Get all golden test vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector::valid("reference", REFERENCE_CNP),
        GoldenVector::invalid("gender digit zero", "0621126400074", Check::Gender),
        GoldenVector::invalid("month 13", "1621326400074", Check::MonthDay),
        GoldenVector::invalid("day 31 in November", "1621131400074", Check::MonthDay),
        GoldenVector::invalid("day 32 in December", "1621232400074", Check::MonthDay),
        GoldenVector::invalid("day 30 in February", "1620230400074", Check::MonthDay),
        GoldenVector::invalid("month 00", "1620026400074", Check::MonthDay),
        GoldenVector::invalid("county 53", "1621126530074", Check::County),
        GoldenVector::invalid("control digit altered", "1621126400075", Check::Checksum),
        GoldenVector::invalid("empty string", "", Check::Format),
        GoldenVector::invalid("twelve digits", "162112640007", Check::Format),
        GoldenVector::invalid("fourteen digits", "16211264000740", Check::Format),
        GoldenVector::invalid("letter inside", "16211264000a4", Check::Format),
        GoldenVector::invalid("surrounding whitespace", " 1621126400074 ", Check::Format),
    ]
}

/// Run every vector against `validator`.
///
/// Returns `(name, matches, observed)` where `observed` is the first failing
/// check reported by the validator.
pub fn verify_all_vectors(validator: &CnpValidator) -> Vec<(String, bool, Option<Check>)> {
    all_vectors()
        .iter()
        .map(|v| {
            let observed = validator.validate(v.cnp).err().map(|e| e.check());
            let matches = validator.is_valid(v.cnp) == v.valid && observed == v.fails;
            (v.name.to_string(), matches, observed)
        })
        .collect()
}

/// Serialize all vectors as JSON for cross-implementation checks.
pub fn vectors_json() -> serde_json::Result<String> {
    serde_json::to_string_pretty(&all_vectors())
}
