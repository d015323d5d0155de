use crate::models::email::{EmailRequest, EmailValidationResult};
use crate::validation::email::EmailValidator;
use actix_web::{HttpResponse, Responder, post, web};
use serde_json::json;

/// # Email Validation Endpoint
///
/// Validates an email address and returns a structured verdict with a
/// confidence score. Checks performed:
/// 1. RFC-compliant syntax validation (with normalization)
/// 2. Domain DNS existence (A/AAAA records)
/// 3. MX record verification
/// 4. Disposable email domain detection
/// 5. Provider identification
///
/// ## Request
/// - Method: POST
/// - Body: JSON object with `email` field
///
/// ## Responses
/// - **200 OK**: Validation result; malformed addresses are reported in the
///   result body (`valid: false`), not as an error status
/// - **400 Bad Request**: Missing, non-string, or empty `email` field
/// - **500 Internal Server Error**: Validation worker failed
///
/// ## Example Request
/// ```json
/// { "email": "test@gmail.com" }
/// ```
#[utoipa::path(
    post,
    path = "/api/validate/email",
    request_body = EmailRequest,
    responses(
        (status = 200, description = "Validation result", body = EmailValidationResult),
        (status = 400, description = "Missing or empty email field"),
        (status = 500, description = "Server error")
    ),
    tag = "Validation"
)]
#[post("/validate/email")]
pub async fn validate_email(
    req: web::Json<EmailRequest>,
    validator: web::Data<EmailValidator>,
) -> Result<impl Responder, actix_web::Error> {
    let email = req.email.trim().to_owned();

    if email.is_empty() {
        return Ok(HttpResponse::BadRequest().json(json!({
            "error": "EMPTY_EMAIL",
            "message": "Field `email` must be a non-empty string"
        })));
    }

    // DNS lookups block, keep them off the async workers
    let validator = validator.into_inner();
    let result = web::block(move || validator.validate(&email))
        .await
        .map_err(|e| {
            actix_web::error::ErrorInternalServerError(format!("email validation failed: {}", e))
        })?;

    Ok(HttpResponse::Ok().json(result))
}

/// Configures email validation routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(validate_email);
}
