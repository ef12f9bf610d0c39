use std::net::IpAddr;

use chrono::{DateTime, Local};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// Timestamp layout for the `time` field.
pub const TIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// # Host Details Response
///
/// Describes the identity of the host serving the request, captured at
/// request time. Constructed per request and discarded after serialization.
///
/// ## Fields
/// - `time`: Wall-clock timestamp, `YYYY-MM-DD HH:MM:SS`, local time zone
/// - `hostname`: Network host name of the machine running the process
/// - `ip`: Address the hostname resolved to at lookup time
/// - `status`: String constant `"up"`
/// - `message`: String constant `"You are doing great!"`
///
/// ## Example JSON
/// ```json
/// {
///   "time": "2024-01-01 00:00:00",
///   "hostname": "server1",
///   "ip": "10.0.0.5",
///   "status": "up",
///   "message": "You are doing great!"
/// }
/// ```
#[derive(Serialize, Debug, PartialEq, Deserialize, ToSchema)]
pub struct DetailsResponse {
    pub time: String,
    pub hostname: String,
    pub ip: String,
    pub status: String,
    pub message: String,
}

impl DetailsResponse {
    pub fn new(time: DateTime<Local>, hostname: String, ip: IpAddr) -> Self {
        Self {
            time: time.format(TIME_FORMAT).to_string(),
            hostname,
            ip: ip.to_string(),
            status: "up".to_string(),
            message: "You are doing great!".to_string(),
        }
    }
}
