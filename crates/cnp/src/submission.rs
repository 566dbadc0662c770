//! Form submission and JSON response payloads.
//!
//! The browser form posts `form_submit=1` and `cnp=<value>`; the endpoint
//! answers with `{"success": 1, "isCnpValid": <bool>}`.

use cnp_core::{Check, ValidationReport};
use serde::{Deserialize, Serialize};

/// Value of `success` on every handled submission.
pub const SUCCESS: u8 = 1;

/// Fields posted by the validation form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CnpForm {
    /// Marker the form sets to `"1"`. Carried, not enforced.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub form_submit: Option<String>,
    /// The candidate CNP as typed by the user.
    #[serde(default)]
    pub cnp: Option<String>,
}

impl CnpForm {
    /// A form as the browser would submit it.
    pub fn new(cnp: impl Into<String>) -> Self {
        Self {
            form_submit: Some("1".to_string()),
            cnp: Some(cnp.into()),
        }
    }
}

/// Response payload for a handled submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidationResponse {
    pub success: u8,
    pub is_cnp_valid: bool,
    /// Failed checks in evaluation order; only present when diagnostics are on.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub failed_checks: Option<Vec<Check>>,
}

impl ValidationResponse {
    /// A plain verdict with no diagnostics.
    pub fn verdict(is_cnp_valid: bool) -> Self {
        Self {
            success: SUCCESS,
            is_cnp_valid,
            failed_checks: None,
        }
    }

    /// A verdict carrying the report's failed checks.
    pub fn from_report(report: &ValidationReport) -> Self {
        Self {
            success: SUCCESS,
            is_cnp_valid: report.is_valid(),
            failed_checks: Some(report.failed_checks()),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cnp_core::CnpValidator;

    #[test]
    fn test_response_shape() {
        let json = ValidationResponse::verdict(true).to_json().unwrap();
        assert_eq!(json, r#"{"success":1,"isCnpValid":true}"#);

        let json = ValidationResponse::verdict(false).to_json().unwrap();
        assert_eq!(json, r#"{"success":1,"isCnpValid":false}"#);
    }

    #[test]
    fn test_response_with_diagnostics() {
        let report = CnpValidator::standard().report("1621126530074");
        let json = ValidationResponse::from_report(&report).to_json().unwrap();
        assert_eq!(
            json,
            r#"{"success":1,"isCnpValid":false,"failedChecks":["county","checksum"]}"#
        );
    }

    #[test]
    fn test_response_roundtrip() {
        let response: ValidationResponse =
            serde_json::from_str(r#"{"success":1,"isCnpValid":true}"#).unwrap();
        assert_eq!(response, ValidationResponse::verdict(true));
    }

    #[test]
    fn test_form_decoding() {
        let form: CnpForm =
            serde_json::from_str(r#"{"form_submit":"1","cnp":"1621126400074"}"#).unwrap();
        assert_eq!(form, CnpForm::new("1621126400074"));

        let form: CnpForm = serde_json::from_str("{}").unwrap();
        assert_eq!(form.cnp, None);
        assert_eq!(form.form_submit, None);
    }
}
