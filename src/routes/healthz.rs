use crate::models::health::HealthzResponse;
use actix_web::{HttpResponse, Responder, get};

/// # Health Check Endpoint
///
/// Returns a fixed liveness payload. External orchestration systems (load
/// balancers, orchestrators) poll this route to decide whether the process
/// is alive; it cannot fail under normal operation.
///
/// ## Response
///
/// - **200 OK**: Service is alive
///   - Content-Type: `application/json`
///   - Body: JSON object with `status` ("healthy")
///
/// ## Example Response
///
/// ```json
/// {
///   "status": "healthy"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/healthz",
    responses(
        (status = 200, description = "Service is alive", body = HealthzResponse)
    ),
    tag = "Health Check"
)]
#[get("/healthz")]
pub async fn healthz() -> impl Responder {
    HttpResponse::Ok().json(HealthzResponse::healthy())
}

/// Configures health check routes under /api/v1
pub fn configure_routes(cfg: &mut actix_web::web::ServiceConfig) {
    cfg.service(healthz);
}
