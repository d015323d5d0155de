use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Deserialize, ToSchema)]
pub struct EmailRequest {
    pub email: String,
}

/// # Email Validation Result
///
/// Verdict for a single email address, combining the independent signals
/// gathered during validation with a heuristic confidence score.
///
/// ## Fields
/// - `valid`: overall verdict (format ok, not disposable, deliverable domain)
/// - `disposable`: domain belongs to a throwaway-address provider
/// - `domain_exists`: domain resolves to an A or AAAA record
/// - `mx_found`: domain publishes MX records
/// - `provider`: recognized mailbox provider, if any
/// - `suggestion`: reserved for typo correction, currently always null
/// - `confidence_score`: heuristic score in [0, 1]
/// - `details`: normalized form, domain, and the checks that actually ran
///
/// ## Example JSON
/// ```json
/// {
///   "valid": true,
///   "disposable": false,
///   "domain_exists": true,
///   "mx_found": true,
///   "provider": "Gmail",
///   "suggestion": null,
///   "confidence_score": 1.0,
///   "details": {
///     "normalized_email": "test@gmail.com",
///     "domain": "gmail.com",
///     "checks_performed": ["format", "dns", "mx", "disposable", "provider"]
///   }
/// }
/// ```
#[derive(Serialize, Debug, ToSchema)]
pub struct EmailValidationResult {
    pub valid: bool,
    pub disposable: bool,
    pub domain_exists: bool,
    pub mx_found: bool,
    pub provider: Option<String>,
    pub suggestion: Option<String>,
    pub confidence_score: f64,
    pub details: EmailDetails,
}

/// Breakdown of an email validation run. `checks_performed` lists, in
/// execution order, exactly the checks that ran; network checks are absent
/// when the format check short-circuited.
#[derive(Serialize, Debug, Default, ToSchema)]
pub struct EmailDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub normalized_email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domain: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub validation_error: Option<String>,
    pub checks_performed: Vec<String>,
}
