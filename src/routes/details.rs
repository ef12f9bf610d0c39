use std::net::IpAddr;

use crate::hostinfo::{HostInfoError, HostInfoService};
use crate::models::details::DetailsResponse;
use actix_web::{HttpResponse, Responder, get, web};
use serde_json::json;

/// # Host Details Endpoint
///
/// Reports the identity of the host serving the request:
/// 1. Current local time, formatted `YYYY-MM-DD HH:MM:SS`
/// 2. The machine's network host name
/// 3. The address that host name resolves to at lookup time
/// 4. Static `status` and `message` fields
///
/// Name resolution runs on the blocking thread pool with a bounded resolver
/// timeout.
///
/// ## Responses
/// - **200 OK**: JSON object with `time`, `hostname`, `ip`, `status`, `message`
/// - **500 Internal Server Error**: hostname or address resolution failed
///
/// ## Example Success Response
/// ```json
/// {
///   "time": "2024-01-01 00:00:00",
///   "hostname": "server1",
///   "ip": "10.0.0.5",
///   "status": "up",
///   "message": "You are doing great!"
/// }
/// ```
#[utoipa::path(
    get,
    path = "/api/v1/details",
    responses(
        (status = 200, description = "Host identity and status", body = DetailsResponse),
        (status = 500, description = "Hostname or address resolution failed")
    ),
    tag = "Host Details"
)]
#[get("/details")]
pub async fn details(
    host_info: web::Data<HostInfoService>,
) -> Result<impl Responder, actix_web::Error> {
    let now = host_info.clock.now();

    // Hostname and address lookups hit the OS resolver; keep them off the
    // async workers
    let provider = host_info.provider.clone();
    let lookup = web::block(move || -> Result<(String, IpAddr), HostInfoError> {
        let hostname = provider.hostname()?;
        let ip = provider.resolve_ip(&hostname)?;
        Ok((hostname, ip))
    })
    .await
    .map_err(|e| {
        actix_web::error::ErrorInternalServerError(format!("host info lookup error: {}", e))
    })?;

    match lookup {
        Ok((hostname, ip)) => Ok(HttpResponse::Ok().json(DetailsResponse::new(now, hostname, ip))),
        Err(e) => Ok(HttpResponse::InternalServerError().json(json!({
            "error": "RESOLUTION_FAILURE",
            "message": e.to_string()
        }))),
    }
}

/// Configures host details routes under /api/v1
pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(details);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::hostinfo::{MockClock, MockHostInfoProvider, SystemClock};
    use actix_web::{App, test};
    use chrono::{Local, NaiveDateTime, TimeZone};
    use std::net::Ipv4Addr;
    use std::sync::Arc;

    // Helper function to create a test app around a given capability wiring
    async fn create_test_app(
        service: HostInfoService,
    ) -> impl actix_web::dev::Service<
        actix_http::Request,
        Response = actix_web::dev::ServiceResponse,
        Error = actix_web::Error,
    > {
        test::init_service(
            App::new()
                .app_data(web::Data::new(service))
                .configure(configure_routes),
        )
        .await
    }

    fn mock_provider(hostname: &'static str, ip: Ipv4Addr) -> MockHostInfoProvider {
        let mut provider = MockHostInfoProvider::new();
        provider
            .expect_hostname()
            .returning(move || Ok(hostname.to_string()));
        provider
            .expect_resolve_ip()
            .withf(move |h| h == hostname)
            .returning(move |_| Ok(IpAddr::V4(ip)));
        provider
    }

    #[actix_web::test]
    async fn test_details_success() {
        // Arrange: deterministic clock and host-info fakes
        let mut clock = MockClock::new();
        clock
            .expect_now()
            .returning(|| Local.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());

        let service = HostInfoService {
            clock: Arc::new(clock),
            provider: Arc::new(mock_provider("server1", Ipv4Addr::new(10, 0, 0, 5))),
        };
        let app = create_test_app(service).await;
        let req = test::TestRequest::get().uri("/details").to_request();

        // Act
        let resp = test::call_service(&app, req).await;

        // Assert
        assert_eq!(resp.status().as_u16(), 200);

        let content_type = resp
            .headers()
            .get("content-type")
            .expect("Content-Type header should be present");
        assert_eq!(content_type, "application/json");

        let body = test::read_body(resp).await;
        let body_str = std::str::from_utf8(&body).unwrap();
        assert_eq!(
            body_str,
            r#"{"time":"2024-01-01 00:00:00","hostname":"server1","ip":"10.0.0.5","status":"up","message":"You are doing great!"}"#
        );
    }

    #[actix_web::test]
    async fn test_details_contains_exactly_five_keys() {
        let mut clock = MockClock::new();
        clock
            .expect_now()
            .returning(|| Local.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());

        let service = HostInfoService {
            clock: Arc::new(clock),
            provider: Arc::new(mock_provider("server1", Ipv4Addr::new(10, 0, 0, 5))),
        };
        let app = create_test_app(service).await;
        let req = test::TestRequest::get().uri("/details").to_request();

        let resp = test::call_service(&app, req).await;
        let body = test::read_body(resp).await;
        let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        let object = body_json.as_object().expect("Body should be a JSON object");
        assert_eq!(object.len(), 5);
        for key in ["time", "hostname", "ip", "status", "message"] {
            assert!(object.contains_key(key), "Missing key: {}", key);
        }
    }

    #[actix_web::test]
    async fn test_details_time_matches_pattern() {
        // Real clock, fake host info: only the timestamp varies
        let service = HostInfoService {
            clock: Arc::new(SystemClock),
            provider: Arc::new(mock_provider("server1", Ipv4Addr::new(10, 0, 0, 5))),
        };
        let app = create_test_app(service).await;
        let req = test::TestRequest::get().uri("/details").to_request();

        let resp = test::call_service(&app, req).await;
        let body = test::read_body(resp).await;
        let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();

        let time = body_json["time"].as_str().expect("time should be a string");
        NaiveDateTime::parse_from_str(time, "%Y-%m-%d %H:%M:%S")
            .expect("time should match YYYY-MM-DD HH:MM:SS");
    }

    #[actix_web::test]
    async fn test_details_hostname_resolution_failure() {
        let mut clock = MockClock::new();
        clock.expect_now().returning(Local::now);

        let mut provider = MockHostInfoProvider::new();
        provider.expect_hostname().returning(|| {
            Err(HostInfoError::Io(std::io::Error::new(
                std::io::ErrorKind::Other,
                "resolver unavailable",
            )))
        });

        let service = HostInfoService {
            clock: Arc::new(clock),
            provider: Arc::new(provider),
        };
        let app = create_test_app(service).await;
        let req = test::TestRequest::get().uri("/details").to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 500);

        let body = test::read_body(resp).await;
        let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body_json["error"], "RESOLUTION_FAILURE");
        assert!(
            body_json["message"]
                .as_str()
                .unwrap()
                .contains("resolver unavailable")
        );
    }

    #[actix_web::test]
    async fn test_details_address_resolution_failure() {
        let mut clock = MockClock::new();
        clock.expect_now().returning(Local::now);

        let mut provider = MockHostInfoProvider::new();
        provider
            .expect_hostname()
            .returning(|| Ok("server1".to_string()));
        provider
            .expect_resolve_ip()
            .returning(|_| Err(HostInfoError::NoAddress("server1".to_string())));

        let service = HostInfoService {
            clock: Arc::new(clock),
            provider: Arc::new(provider),
        };
        let app = create_test_app(service).await;
        let req = test::TestRequest::get().uri("/details").to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 500);

        let body = test::read_body(resp).await;
        let body_json: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(body_json["error"], "RESOLUTION_FAILURE");
        assert_eq!(
            body_json["message"],
            "no address records found for server1"
        );
    }

    #[actix_web::test]
    async fn test_details_rejects_post() {
        let service = HostInfoService {
            clock: Arc::new(SystemClock),
            provider: Arc::new(mock_provider("server1", Ipv4Addr::new(10, 0, 0, 5))),
        };
        let app = create_test_app(service).await;
        let req = test::TestRequest::post().uri("/details").to_request();

        let resp = test::call_service(&app, req).await;

        assert_eq!(resp.status().as_u16(), 405);
    }
}
