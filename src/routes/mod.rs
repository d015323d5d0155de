use actix_web::web;

/// # Email Validation Endpoint
///
/// Validates an email address through syntax, DNS/MX, disposable-domain,
/// and provider checks and reports a confidence score.
pub mod email;

/// # Health Check Endpoint
///
/// Returns the current health status of the service along with a timestamp.
pub mod health;

/// # API Metadata Endpoint
///
/// Root endpoint describing the service and its endpoints.
pub mod index;

/// # Phone Validation Endpoint
///
/// Validates a phone number through number-plan parsing, line-type
/// classification, and carrier/timezone lookup and reports a confidence
/// score.
pub mod phone;

/// # API Route Configuration
///
/// Mounts the root metadata endpoint and the `/api` scope.
///
/// ## Endpoints
///
/// ```text
/// GET  /                    - API metadata
/// GET  /api/health          - Service health status
/// POST /api/validate/email  - Email validation
/// POST /api/validate/phone  - Phone validation
/// ```
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(index::api_info).service(
        web::scope("/api")
            .configure(health::configure_routes)
            .configure(email::configure_routes)
            .configure(phone::configure_routes),
    );
}
