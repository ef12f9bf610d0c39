/// # Host Details Response
///
/// Snapshot of the server's identity taken at request time: wall-clock
/// timestamp, hostname, resolved address, and the static status fields.
pub mod details;

/// # Health Status Response
///
/// Fixed liveness payload returned by the healthz endpoint.
///
/// ## Example JSON
/// ```json
/// {
///   "status": "healthy"
/// }
/// ```
pub mod health;
