use crate::models::phone::{PhoneRequest, PhoneValidationResult};
use crate::validation::phone::PhoneValidator;
use actix_web::{HttpResponse, Responder, post, web};
use serde_json::json;

/// # Phone Validation Endpoint
///
/// Validates a phone number and returns detailed information:
/// - International format (E.164)
/// - Country and ISO region
/// - Line type (mobile / fixed line / toll free / ...)
/// - Carrier, where the number plan maps one
/// - Time zones overlapping the region
///
/// Numbers without an international prefix are retried under the
/// configured fallback regions, in order.
///
/// ## Request
/// - Method: POST
/// - Body: JSON object with `phone` field
///
/// ## Responses
/// - **200 OK**: Validation result; unparseable numbers are reported in the
///   result body (`valid: false`), not as an error status
/// - **400 Bad Request**: Missing, non-string, or empty `phone` field
///
/// ## Example Request
/// ```json
/// { "phone": "+393331234567" }
/// ```
#[utoipa::path(
    post,
    path = "/api/validate/phone",
    request_body = PhoneRequest,
    responses(
        (status = 200, description = "Validation result", body = PhoneValidationResult),
        (status = 400, description = "Missing or empty phone field")
    ),
    tag = "Validation"
)]
#[post("/validate/phone")]
pub async fn validate_phone(
    req: web::Json<PhoneRequest>,
    validator: web::Data<PhoneValidator>,
) -> impl Responder {
    let phone = req.phone.trim();

    if phone.is_empty() {
        return HttpResponse::BadRequest().json(json!({
            "error": "EMPTY_PHONE",
            "message": "Field `phone` must be a non-empty string"
        }));
    }

    // Pure metadata matching, no I/O: runs inline
    HttpResponse::Ok().json(validator.validate(phone))
}

/// Configures phone validation routes
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(validate_phone);
}
