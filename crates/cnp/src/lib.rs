//! # CNP
//!
//! The unified API for validating Romanian personal numeric codes (CNP).
//!
//! ## Overview
//!
//! - **Validation**: The ordered format, field and checksum checks from
//!   [`cnp_core`]
//! - **Submissions**: The form fields a client posts ([`CnpForm`]) and the
//!   JSON payload it gets back ([`ValidationResponse`])
//! - **Service**: [`CnpService`] ties both together and logs each verdict
//!   through `tracing`
//!
//! ## Usage
//!
//! ```rust
//! use cnp::{CnpForm, CnpService, ServiceConfig};
//!
//! let service = CnpService::new(ServiceConfig::default());
//!
//! let response = service.handle(&CnpForm::new("1621126400074")).unwrap();
//! assert_eq!(
//!     response.to_json().unwrap(),
//!     r#"{"success":1,"isCnpValid":true}"#
//! );
//!
//! assert!(!service.check("1621126400075"));
//! ```
//!
//! ## Re-exports
//!
//! - `cnp::core` - Core primitives (Cnp, CnpValidator, Check, etc.)

pub mod error;
pub mod service;
pub mod submission;

// Re-export component crates
pub use cnp_core as core;

pub use error::{Result, ServiceError};
pub use service::{CnpService, ServiceConfig};
pub use submission::{CnpForm, ValidationResponse};

// Re-export commonly used core types
pub use cnp_core::{
    is_valid, validate, Check, Cnp, CnpBuilder, CnpRules, CnpValidator, Field, ValidationError,
    ValidationReport,
};
