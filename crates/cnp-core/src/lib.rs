//! # CNP Core
//!
//! Pure validation primitives for the Romanian personal numeric code (CNP).
//!
//! This crate contains no I/O and no logging. It is pure computation over a
//! 13-digit string.
//!
//! ## Key Types
//!
//! - [`Cnp`] - A structurally well-formed 13-digit candidate
//! - [`CnpValidator`] - Runs the ordered checks against a [`CnpRules`] set
//! - [`Check`] - Names each validation step
//! - [`ValidationReport`] - Every failure for a candidate, not just the first
//!
//! ## Usage
//!
//! ```rust
//! use cnp_core::{is_valid, validate, Check};
//!
//! assert!(is_valid("1621126400074"));
//! assert!(!is_valid("1621126400075"));
//!
//! let err = validate("1621326400074").unwrap_err();
//! assert_eq!(err.check(), Check::MonthDay);
//! ```
//!
//! ## Field Layout
//!
//! Field offsets are a declarative table. See [`layout`].

pub mod checksum;
pub mod error;
pub mod layout;
pub mod types;
pub mod validation;

pub use checksum::{checksum_matches, control_digit};
pub use error::{FormatError, ValidationError};
pub use layout::{CnpRules, Field, FieldSpec, CHECKSUM_WEIGHTS, CNP_LENGTH, MAX_COUNTY_CODE};
pub use types::{Cnp, CnpBuilder};
pub use validation::{is_valid, validate, Check, CnpValidator, ValidationReport};
