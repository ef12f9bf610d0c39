use actix_web::{HttpResponse, Responder, web};
use serde_json::json;

/// # Host Details Endpoint
///
/// Reports the server's identity: current local time, hostname, resolved
/// address, and a static status message.
///
/// ## Response
///
/// - **200 OK**: JSON object with `time`, `hostname`, `ip`, `status`, `message`
/// - **500 Internal Server Error**: hostname or address resolution failed
pub mod details;

/// # Health Check Endpoint
///
/// Returns a fixed liveness payload for external orchestration systems.
///
/// ## Response
///
/// - **200 OK**: Service is alive
///   - Body: JSON object with `status` ("healthy")
pub mod healthz;

/// # API Route Configuration
///
/// Sets up versioned API endpoints under the `/api/v1` base path.
///
/// ## Mounted Services
/// - Host details endpoint (see [`details::configure_routes`] for details)
/// - Health check endpoint (see [`healthz::configure_routes`] for details)
///
/// ## Example Endpoints
///
/// ```text
/// GET /api/v1/details - Host identity and status
/// GET /api/v1/healthz - Service liveness probe
/// ```
///
/// [`details::configure_routes`]: crate::routes::details::configure_routes
/// [`healthz::configure_routes`]: crate::routes::healthz::configure_routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .configure(details::configure_routes)
            .configure(healthz::configure_routes),
    );
}

/// Fallback handler for requests outside the configured routes. Registered
/// as the application default service.
pub async fn not_found() -> impl Responder {
    HttpResponse::NotFound().json(json!({
        "error": "NOT_FOUND",
        "message": "The requested resource does not exist"
    }))
}
