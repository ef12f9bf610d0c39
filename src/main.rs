use actix_web::{App, HttpServer, middleware, web};
use host_status_api::hostinfo::HostInfoService;
use host_status_api::openapi::ApiDoc;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

/// Host Status Service Entry Point
///
/// Configures and launches the Actix-web HTTP server with:
/// - Host details and healthz endpoints under `/api/v1`
/// - Swagger UI for API documentation
/// - Environment configuration via `.env` file
/// - Shared host-info capability state for the handlers
///
/// # Endpoints
/// - Host details: `GET /api/v1/details`
/// - Health check: `GET /api/v1/healthz`
/// - Swagger UI: `/swagger-ui/`
/// - OpenAPI spec: `/api-docs/openapi.json`
///
/// # Configuration
/// - Server binds to `0.0.0.0:8080` by default
/// - `HOST` and `PORT` environment variables override the bind address
/// - Environment variables loaded from `.env` file (if present)
#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = std::env::var("PORT")
        .ok()
        .and_then(|value| value.parse::<u16>().ok())
        .unwrap_or(8080);

    // Capability wiring shared across workers
    let host_info = web::Data::new(HostInfoService::system());

    log::info!("host status server listening on {}:{}", host, port);

    HttpServer::new(move || {
        let openapi = ApiDoc::openapi();

        App::new()
            .wrap(middleware::Logger::default())
            .app_data(host_info.clone())
            .app_data(web::Data::new(openapi.clone()))
            .configure(host_status_api::routes::configure)
            .service(SwaggerUi::new("/swagger-ui/{_:.*}").url("/api-docs/openapi.json", openapi))
            .default_service(web::route().to(host_status_api::routes::not_found))
    })
    .bind((host.as_str(), port))?
    .run()
    .await
}
