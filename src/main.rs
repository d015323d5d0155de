use actix_cors::Cors;
use actix_web::{App, HttpServer, middleware::Logger, web::Data};
use contact_validator::config::AppConfig;
use contact_validator::openapi::ApiDoc;
use contact_validator::validation::{email::EmailValidator, phone::PhoneValidator};
use tracing::info;
use tracing_subscriber::EnvFilter;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Contact Validator Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Email and phone validation endpoints under `/api`
/// - Swagger UI for API documentation
/// - Permissive CORS (the API is meant to be called from anywhere)
/// - Environment configuration via `.env` file
///
/// # Endpoints
/// - Metadata: `GET /`
/// - Health: `GET /api/health`
/// - Validation: `POST /api/validate/email`, `POST /api/validate/phone`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - Binds to `HOST:PORT` (default `127.0.0.1:8001`)
/// - Environment variables loaded from `.env` file (if present)
/// - Log filtering via `RUST_LOG`
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    info!("starting contact-validator on {}", config.bind_addr());
    info!(
        "phone fallback regions: {:?}, DNS timeout: {:?}",
        config.phone_fallback_regions, config.dns_timeout
    );

    // Built once, shared read-only across all workers and requests
    let email_validator = Data::new(EmailValidator::new(&config));
    let phone_validator = Data::new(PhoneValidator::new(&config));

    let bind_addr = (config.bind_address.clone(), config.bind_port);

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(Logger::default())
            .wrap(Cors::permissive())
            .app_data(email_validator.clone())
            .app_data(phone_validator.clone())
            .configure(contact_validator::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
    })
    .bind(bind_addr)?
    .run()
    .await
}
