use actix_web::{HttpResponse, Result};
use serde::Serialize;

#[derive(Serialize)]
struct HealthResponse {
    status: &'static str,
    message: &'static str,
    version: &'static str,
}

/// Health check endpoint
///
/// # Errors
///
/// This function does not return errors but uses `Result` for consistency with actix-web handlers
pub async fn health() -> Result<HttpResponse> {
    let response = HealthResponse {
        status: "ok",
        message: "Lift automator functions are running",
        version: crate::VERSION,
    };
    Ok(HttpResponse::Ok().json(response))
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn test_health_reports_ok() {
        let response = health().await.unwrap();
        assert!(response.status().is_success());
        let bytes = to_bytes(response.into_body()).await.unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["status"], "ok");
        assert_eq!(body["version"], crate::VERSION);
    }
}
