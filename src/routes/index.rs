use actix_web::{HttpResponse, Responder, get};
use serde_json::json;

/// # API Metadata Endpoint
///
/// Root endpoint describing the service: name, version, available
/// endpoints, and where to find the generated documentation.
#[utoipa::path(
    get,
    path = "/",
    responses(
        (status = 200, description = "API metadata")
    ),
    tag = "Info"
)]
#[get("/")]
pub async fn api_info() -> impl Responder {
    HttpResponse::Ok().json(json!({
        "message": "Advanced Email & Phone Validation API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": ["/api/validate/email", "/api/validate/phone"],
        "documentation": "/swagger-ui/",
        "status": "active"
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{App, test};

    #[actix_web::test]
    async fn test_api_info() {
        let app = test::init_service(App::new().service(api_info)).await;

        let req = test::TestRequest::get().uri("/").to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["status"], "active");
        assert_eq!(body["version"], env!("CARGO_PKG_VERSION"));
        assert!(
            body["endpoints"]
                .as_array()
                .unwrap()
                .contains(&serde_json::json!("/api/validate/email"))
        );
    }
}
