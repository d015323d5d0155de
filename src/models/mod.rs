/// # Email Validation Models
///
/// Request and response records for the email validation endpoint:
/// the `EmailRequest` input, the `EmailValidationResult` verdict with its
/// confidence score, and the `EmailDetails` breakdown of the checks that ran.
pub mod email;

/// # Health Status Response
///
/// Represents the operational status of the service with a timestamp.
/// Used as the response format for health check endpoints.
pub mod health;

/// # Phone Validation Models
///
/// Request and response records for the phone validation endpoint, including
/// the `LineType` classification enum derived from number-plan type tables.
pub mod phone;
