//! Integration tests for HTTP handlers
#![allow(clippy::expect_used)]

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use application::{
    BlockRegistration, WeatherBlock,
    error::ApplicationError,
    ports::{ForecastPort, WeatherSnapshot},
};
use async_trait::async_trait;
use axum::http::StatusCode;
use axum_test::TestServer;
use domain::value_objects::Location;
use infrastructure::{AppConfig, ForecastAdapter, MokaWeatherCache, TemplateEngine};
use integration_weatherapi::WeatherApiConfig;
use parking_lot::Mutex;
use presentation_http::{routes::create_router, state::AppState};

/// Forecast body with hourly entries far in the future, so the hourly list
/// always renders
fn forecast_body() -> String {
    r#"{
        "location": {"name": "Los Angeles", "region": "California", "tz_id": "America/Los_Angeles"},
        "current": {
            "temp_c": 22.4, "temp_f": 72.3,
            "feelslike_c": 23.7, "feelslike_f": 74.6,
            "humidity": 55,
            "wind_mph": 12.5, "wind_kph": 20.1,
            "condition": {"text": "Partly cloudy", "icon": "//cdn.weatherapi.com/weather/64x64/day/116.png"},
            "last_updated_epoch": 1678129200
        },
        "forecast": {
            "forecastday": [{
                "day": {"daily_chance_of_rain": 20},
                "hour": [
                    {"time_epoch": 4102444800, "temp_c": 15.0, "temp_f": 59.0,
                     "condition": {"text": "Clear", "icon": "//cdn.weatherapi.com/weather/64x64/night/113.png"}},
                    {"time_epoch": 4102448400, "temp_c": 14.5, "temp_f": 58.1,
                     "condition": {"text": "Clear", "icon": "//cdn.weatherapi.com/weather/64x64/night/113.png"}}
                ]
            }]
        }
    }"#
    .to_string()
}

fn error_body() -> String {
    r#"{"error":{"code":1006,"message":"No matching location found."}}"#.to_string()
}

/// Stub forecast port: scripted transport, real decoding
struct StubForecast {
    body: Option<String>,
    decoder: ForecastAdapter,
    fetches: AtomicUsize,
    seen: Mutex<Vec<String>>,
}

impl StubForecast {
    fn returning(body: String) -> Self {
        Self {
            body: Some(body),
            decoder: ForecastAdapter::new(WeatherApiConfig::with_api_key("test-key"))
                .expect("adapter creation should succeed"),
            fetches: AtomicUsize::new(0),
            seen: Mutex::new(Vec::new()),
        }
    }

    fn failing() -> Self {
        Self {
            body: None,
            ..Self::returning(String::new())
        }
    }

    fn fetch_count(&self) -> usize {
        self.fetches.load(Ordering::SeqCst)
    }

    fn seen_locations(&self) -> Vec<String> {
        self.seen.lock().clone()
    }
}

#[async_trait]
impl ForecastPort for StubForecast {
    async fn fetch_raw(&self, location: &Location) -> Result<String, ApplicationError> {
        self.fetches.fetch_add(1, Ordering::SeqCst);
        self.seen.lock().push(location.as_str().to_string());
        self.body
            .clone()
            .ok_or_else(|| ApplicationError::Upstream("connection refused".to_string()))
    }

    fn parse(&self, raw: &str) -> Result<WeatherSnapshot, ApplicationError> {
        self.decoder.parse(raw)
    }
}

fn server_with(stub: Arc<StubForecast>) -> TestServer {
    let cache = MokaWeatherCache::new(Duration::from_secs(15 * 60), 64);
    let renderer = TemplateEngine::new().expect("templates should compile");

    let block = WeatherBlock::register(BlockRegistration {
        api_key_configured: true,
        forecast: stub,
        cache: Arc::new(cache),
        renderer: Arc::new(renderer),
    })
    .expect("registration should succeed");

    let state = AppState {
        block: Some(Arc::new(block)),
        config: Arc::new(AppConfig::default()),
    };

    TestServer::new(create_router(state)).expect("server should build")
}

fn server_without_block() -> TestServer {
    let state = AppState {
        block: None,
        config: Arc::new(AppConfig::default()),
    };
    TestServer::new(create_router(state)).expect("server should build")
}

// ============================================================================
// Health endpoints
// ============================================================================

#[tokio::test]
async fn health_returns_ok() {
    let server = server_with(Arc::new(StubForecast::returning(forecast_body())));

    let response = server.get("/health").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("ok"));
}

#[tokio::test]
async fn ready_reports_a_registered_block() {
    let server = server_with(Arc::new(StubForecast::returning(forecast_body())));

    let response = server.get("/ready").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body = response.text();
    assert!(body.contains("\"ready\":true"));
    assert!(body.contains("\"registered\":true"));
}

#[tokio::test]
async fn ready_without_a_block_is_service_unavailable() {
    let server = server_without_block();

    let response = server.get("/ready").await;
    assert_eq!(response.status_code(), StatusCode::SERVICE_UNAVAILABLE);
    assert!(response.text().contains("\"registered\":false"));
}

// ============================================================================
// Raw data endpoint
// ============================================================================

#[tokio::test]
async fn weatherdata_returns_the_raw_body_verbatim() {
    let stub = Arc::new(StubForecast::returning(forecast_body()));
    let server = server_with(Arc::clone(&stub));

    let response = server.get("/weatherblock/v1/weatherdata/Los%20Angeles").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert_eq!(response.text(), forecast_body());
    assert_eq!(stub.seen_locations(), vec!["Los Angeles".to_string()]);
}

#[tokio::test]
async fn weatherdata_serves_from_cache_within_the_ttl() {
    let stub = Arc::new(StubForecast::returning(forecast_body()));
    let server = server_with(Arc::clone(&stub));

    let first = server.get("/weatherblock/v1/weatherdata/Austin").await;
    let second = server.get("/weatherblock/v1/weatherdata/Austin").await;

    assert_eq!(first.status_code(), StatusCode::OK);
    assert_eq!(second.status_code(), StatusCode::OK);
    assert_eq!(first.text(), second.text());
    assert_eq!(stub.fetch_count(), 1);
}

#[tokio::test]
async fn weatherdata_cache_keys_are_per_location() {
    let stub = Arc::new(StubForecast::returning(forecast_body()));
    let server = server_with(Arc::clone(&stub));

    server.get("/weatherblock/v1/weatherdata/Austin").await;
    server.get("/weatherblock/v1/weatherdata/Dallas").await;

    assert_eq!(stub.fetch_count(), 2);
}

#[tokio::test]
async fn weatherdata_embedded_errors_are_served_but_never_cached() {
    let stub = Arc::new(StubForecast::returning(error_body()));
    let server = server_with(Arc::clone(&stub));

    let first = server.get("/weatherblock/v1/weatherdata/Atlantis").await;
    let second = server.get("/weatherblock/v1/weatherdata/Atlantis").await;

    assert_eq!(first.status_code(), StatusCode::OK);
    assert_eq!(first.text(), error_body());
    assert_eq!(second.text(), error_body());
    // No cache entry was written, so the upstream was called twice
    assert_eq!(stub.fetch_count(), 2);
}

#[tokio::test]
async fn weatherdata_transport_failure_is_a_bad_gateway() {
    let server = server_with(Arc::new(StubForecast::failing()));

    let response = server.get("/weatherblock/v1/weatherdata/Austin").await;
    assert_eq!(response.status_code(), StatusCode::BAD_GATEWAY);
    assert!(
        response
            .text()
            .contains("Sorry, something went wrong with the request.")
    );
}

#[tokio::test]
async fn weatherdata_blank_location_is_a_bad_request() {
    let server = server_with(Arc::new(StubForecast::returning(forecast_body())));

    let response = server.get("/weatherblock/v1/weatherdata/%20%20").await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn weatherdata_is_not_mounted_without_a_block() {
    let server = server_without_block();

    let response = server.get("/weatherblock/v1/weatherdata/Austin").await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);
}

// ============================================================================
// Static block render endpoint
// ============================================================================

#[tokio::test]
async fn block_renders_the_weather_markup() {
    let server = server_with(Arc::new(StubForecast::returning(forecast_body())));

    let response = server
        .get("/weatherblock/v1/block?location=Los%20Angeles")
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let html = response.text();
    assert!(html.contains(r#"<section class="weather-block">"#));
    assert!(html.contains("<h2>Los Angeles, <span>California</span></h2>"));
    assert!(html.contains("72&deg;<span>F</span>"));
    assert!(html.contains("Humidity: 55%"));
    // Hourly defaults to off
    assert!(!html.contains("<h3>Hourly</h3>"));
}

#[tokio::test]
async fn block_renders_metric_units_on_request() {
    let server = server_with(Arc::new(StubForecast::returning(forecast_body())));

    let response = server
        .get("/weatherblock/v1/block?location=Los%20Angeles&measurementunit=metric")
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let html = response.text();
    assert!(html.contains("22&deg;<span>C</span>"));
    assert!(html.contains("20.1kph"));
}

#[tokio::test]
async fn block_renders_the_hourly_list_when_enabled() {
    let server = server_with(Arc::new(StubForecast::returning(forecast_body())));

    let response = server
        .get("/weatherblock/v1/block?location=Los%20Angeles&showHourly=true")
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let html = response.text();
    assert!(html.contains("<h3>Hourly</h3>"));
    assert!(html.contains("59&deg;<span>F</span>"));
}

#[tokio::test]
async fn block_without_location_renders_the_required_notice() {
    let server = server_with(Arc::new(StubForecast::returning(forecast_body())));

    let response = server.get("/weatherblock/v1/block").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(response.text().contains("Location is required."));
}

#[tokio::test]
async fn block_shows_the_embedded_error_message() {
    let server = server_with(Arc::new(StubForecast::returning(error_body())));

    let response = server
        .get("/weatherblock/v1/block?location=Atlantis")
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let html = response.text();
    assert!(html.contains("No matching location found."));
    assert!(!html.contains("current-conditions"));
}

#[tokio::test]
async fn block_transport_failure_renders_the_apology() {
    let server = server_with(Arc::new(StubForecast::failing()));

    let response = server.get("/weatherblock/v1/block?location=Austin").await;
    assert_eq!(response.status_code(), StatusCode::OK);
    assert!(
        response
            .text()
            .contains("Sorry, something went wrong with the request.")
    );
}

#[tokio::test]
async fn block_rejects_an_unknown_measurement_unit() {
    let server = server_with(Arc::new(StubForecast::returning(forecast_body())));

    let response = server
        .get("/weatherblock/v1/block?location=Austin&measurementunit=nautical")
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}
