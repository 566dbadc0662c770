//! The service: validator plus submission handling.
//!
//! The service sits where the form endpoint calls into validation. It decides
//! "nothing submitted" versus "submitted but invalid" and shapes the response.

use cnp_core::{Cnp, CnpRules, CnpValidator};
use tracing::debug;

use crate::error::{Result, ServiceError};
use crate::submission::{CnpForm, ValidationResponse};

/// Configuration for the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ServiceConfig {
    /// Rules the validator closes over.
    pub rules: CnpRules,
    /// Whether responses list the failed checks.
    pub include_diagnostics: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            rules: CnpRules::STANDARD,
            include_diagnostics: false,
        }
    }
}

/// Handles CNP submissions.
///
/// Stateless: clone it freely or share it across threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct CnpService {
    validator: CnpValidator,
    config: ServiceConfig,
}

impl CnpService {
    /// Create a new service.
    pub fn new(config: ServiceConfig) -> Self {
        Self {
            validator: CnpValidator::new(config.rules),
            config,
        }
    }

    /// Get the validator.
    pub fn validator(&self) -> &CnpValidator {
        &self.validator
    }

    pub fn config(&self) -> &ServiceConfig {
        &self.config
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Direct Checks
    // ─────────────────────────────────────────────────────────────────────────

    /// Whether `candidate` is a valid CNP.
    pub fn check(&self, candidate: &str) -> bool {
        self.validator.is_valid(candidate)
    }

    /// Validate and return the parsed CNP.
    pub fn parse(&self, candidate: &str) -> Result<Cnp> {
        Ok(self.validator.validate(candidate)?)
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Submissions
    // ─────────────────────────────────────────────────────────────────────────

    /// Handle a decoded form submission.
    ///
    /// A missing `cnp` field is an error; an empty one is an invalid CNP.
    pub fn handle(&self, form: &CnpForm) -> Result<ValidationResponse> {
        let candidate = form.cnp.as_deref().ok_or(ServiceError::MissingCnp)?;
        Ok(self.respond(candidate))
    }

    /// Decode a JSON body and handle it.
    pub fn handle_json(&self, body: &str) -> Result<ValidationResponse> {
        let form: CnpForm = serde_json::from_str(body)?;
        self.handle(&form)
    }

    /// Build the response for a candidate.
    pub fn respond(&self, candidate: &str) -> ValidationResponse {
        let report = self.validator.report(candidate);

        if report.is_valid() {
            debug!(len = candidate.len(), "cnp accepted");
        } else {
            debug!(
                len = candidate.len(),
                failed = ?report.failed_checks(),
                "cnp rejected"
            );
        }

        if self.config.include_diagnostics {
            ValidationResponse::from_report(&report)
        } else {
            ValidationResponse::verdict(report.is_valid())
        }
    }
}
