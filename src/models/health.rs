use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// # Health Status Response
///
/// Fixed payload returned by the healthz endpoint. Used by load balancers
/// and orchestrators as a liveness probe target.
///
/// ## Fields
/// - `status`: String constant `"healthy"`
///
/// ## Serialization
/// Automatically implements `Serialize` and `Deserialize` for JSON format.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "healthy"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct HealthzResponse {
    pub status: String,
}

impl HealthzResponse {
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
        }
    }
}
