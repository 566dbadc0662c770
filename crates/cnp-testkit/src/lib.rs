//! # CNP Testkit
//!
//! Testing utilities for CNP validation.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Golden vectors**: The reference CNP and known-bad mutations, each tagged
//!   with the check it fails
//! - **Generators**: Proptest strategies for valid and malformed candidates
//! - **Fixtures**: Helpers that rewrite a single field of a known CNP
//!
//! ## Golden Vectors
//!
//! ```rust
//! use cnp_core::CnpValidator;
//! use cnp_testkit::vectors::verify_all_vectors;
//!
//! for (name, matches, _) in verify_all_vectors(&CnpValidator::standard()) {
//!     assert!(matches, "{name}");
//! }
//! ```
//!
//! ## Property Testing
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use cnp_testkit::generators::{cnp_from_params, CnpParams};
//!
//! proptest! {
//!     #[test]
//!     fn generated_cnps_validate(params: CnpParams) {
//!         let cnp = cnp_from_params(&params);
//!         prop_assert!(cnp_core::is_valid(&cnp.to_string()));
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use cnp_core::Field;
//! use cnp_testkit::fixtures::reference_with;
//!
//! let bad_county = reference_with(Field::County, 53);
//! assert!(!cnp_core::is_valid(&bad_county));
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{reference, reference_with, with_field, with_field_resealed};
pub use generators::{cnp_from_params, malformed_candidate, valid_cnp, CnpParams};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector, REFERENCE_CNP};
