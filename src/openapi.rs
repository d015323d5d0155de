use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa procedural
/// macros. Generated at compile time; changes to the API surface should be
/// reflected here to keep the documentation accurate.
///
/// # Endpoints
/// - API metadata: `GET /`
/// - Health check: `GET /api/health`
/// - Email validation: `POST /api/validate/email`
/// - Phone validation: `POST /api/validate/phone`
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::index::api_info,
        crate::routes::health::health,
        crate::routes::email::validate_email,
        crate::routes::phone::validate_phone,
    ),
    components(
        schemas(
            crate::models::health::HealthResponse,
            crate::models::email::EmailRequest,
            crate::models::email::EmailValidationResult,
            crate::models::email::EmailDetails,
            crate::models::phone::PhoneRequest,
            crate::models::phone::PhoneValidationResult,
            crate::models::phone::LineType,
        )
    ),
    tags(
        (name = "Info", description = "Service metadata endpoints"),
        (name = "Health Check", description = "Service health monitoring endpoints"),
        (name = "Validation", description = "Email and phone validation endpoints")
    ),
    info(
        title = "Advanced Email & Phone Validation API",
        description = "Professional API for validating emails and phone numbers with advanced features",
        version = "1.0.0",
    )
)]
pub struct ApiDoc;
