use utoipa::OpenApi;

/// OpenAPI Specification Documentation
///
/// Defines the API contract using OpenAPI 3.0 format with utoipa procedural
/// macros.
///
/// # Endpoints
/// - Host Details: `GET /api/v1/details`
/// - Health Check: `GET /api/v1/healthz`
///
/// # Schemas
/// - `DetailsResponse`: Host identity and status payload
/// - `HealthzResponse`: Liveness payload
///
/// # Note
/// The OpenAPI spec is generated at compile time from these annotations. Any
/// changes to the API surface should be reflected here first to maintain
/// documentation accuracy.
#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::details::details,
        crate::routes::healthz::healthz,
    ),
    components(
        schemas(
            crate::models::details::DetailsResponse,
            crate::models::health::HealthzResponse
        )
    ),
    tags(
        (name = "Host Details", description = "Host identity and status reporting endpoints"),
        (name = "Health Check", description = "Service health monitoring endpoints")
    ),
    info(
        description = "API reporting host identity, current time, and liveness",
        title = "Host Status API",
        version = "0.1.0",
    )
)]
pub struct ApiDoc;
