//! Integration tests for the infrastructure crate
//!
//! Runs the weather command service against mock OpenWeatherMap and
//! Nominatim servers through the real adapters.

use std::sync::Arc;

use application::WeatherCommandService;
use domain::BotCommand;
use infrastructure::{ConfigSettingsAdapter, GeocodingAdapter, WeatherAdapter};
use integration_geocoding::NominatimConfig;
use integration_weather::WeatherConfig;
use secrecy::SecretString;
use wiremock::matchers::{method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

const API_KEY: &str = "0123456789abcdef0123456789abcdef";

fn nominatim_hamburg() -> serde_json::Value {
    serde_json::json!([{
        "lat": "53.5503",
        "lon": "10.0007",
        "name": "Hamburg",
        "display_name": "Hamburg, Germany",
        "address": {"city": "Hamburg", "state": "Hamburg", "country": "Germany", "country_code": "de"},
        "extratags": {"population": "1841179"}
    }])
}

fn current_response() -> serde_json::Value {
    serde_json::json!({
        "coord": {"lon": 10.0007, "lat": 53.5503},
        "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10d"}],
        "main": {
            "temp": 7.42,
            "feels_like": 4.9,
            "temp_min": 6.6,
            "temp_max": 8.3,
            "pressure": 1008,
            "humidity": 93
        },
        "visibility": 6000,
        "wind": {"speed": 4.63, "deg": 240},
        "clouds": {"all": 100},
        "dt": 1_700_000_000,
        "sys": {"country": "DE", "sunrise": 1_699_944_000, "sunset": 1_699_975_000},
        "timezone": 3600,
        "name": "Hamburg",
        "cod": 200
    })
}

/// 2023-11-14 21:00 UTC, a Tuesday at 22:00 local time (UTC+1)
const FIRST_STEP: i64 = 1_699_995_600;

/// Temperature of forecast step `i`; hundredths never end in 5
fn step_temp(i: i32) -> f64 {
    f64::from(237 + 110 * i) / 100.0
}

/// Felt temperature of forecast step `i`
fn step_feels_like(i: i32) -> f64 {
    f64::from(-63 + 110 * i) / 100.0
}

/// A 24-step `/forecast` response: Tuesday 1 step, Wednesday 8, Thursday 8, Friday 7
fn forecast_response() -> serde_json::Value {
    let list: Vec<serde_json::Value> = (0..24)
        .map(|i| {
            let clouds = match i % 3 {
                0 => 5,
                1 => 40,
                _ => 100,
            };
            let mut step = serde_json::json!({
                "dt": FIRST_STEP + i64::from(i) * 10_800,
                "main": {
                    "temp": step_temp(i),
                    "feels_like": step_feels_like(i),
                    "temp_min": step_temp(i),
                    "temp_max": step_temp(i),
                    "pressure": 1012,
                    "humidity": 80
                },
                "weather": [{"id": 500, "main": "Rain", "description": "light rain", "icon": "10n"}],
                "clouds": {"all": clouds},
                "wind": {"speed": 3.2, "deg": 200}
            });
            if i == 5 {
                step["rain"] = serde_json::json!({"3h": 12.34});
            } else if i % 2 == 0 {
                step["rain"] = serde_json::json!({"3h": 0.31});
            }
            step
        })
        .collect();

    serde_json::json!({
        "cod": "200",
        "message": 0,
        "cnt": 24,
        "list": list,
        "city": {
            "id": 2_911_298,
            "name": "Hamburg",
            "coord": {"lat": 53.5503, "lon": 10.0007},
            "country": "DE",
            "population": 1_739_117,
            "timezone": 3600
        }
    })
}

/// Create a service wired to the mock servers
///
/// # Panics
///
/// Panics if the adapters cannot be created (should not happen in tests).
#[allow(clippy::expect_used)]
fn create_service(weather: &MockServer, geocoding: &MockServer, key: Option<&str>) -> WeatherCommandService {
    let weather = WeatherAdapter::with_config(WeatherConfig::for_testing(weather.uri()))
        .expect("Failed to create weather adapter");
    let locations = GeocodingAdapter::new(&NominatimConfig::for_testing(geocoding.uri()))
        .expect("Failed to create geocoding adapter");
    let settings = ConfigSettingsAdapter::new(key.map(|k| SecretString::from(k.to_string())));
    WeatherCommandService::new(Arc::new(weather), Arc::new(locations), Arc::new(settings))
}

async fn setup_geocoding(mock_server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(nominatim_hamburg()))
        .mount(mock_server)
        .await;
}

fn weather_cmd(location: &str) -> BotCommand {
    BotCommand::CurrentWeather {
        location: location.to_string(),
    }
}

// ============================================================================
// Success scenarios
// ============================================================================

#[tokio::test]
async fn current_weather_end_to_end() {
    let weather = MockServer::start().await;
    let geocoding = MockServer::start().await;
    setup_geocoding(&geocoding).await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .and(query_param("lat", "53.5503"))
        .and(query_param("lon", "10.0007"))
        .and(query_param("appid", API_KEY))
        .respond_with(ResponseTemplate::new(200).set_body_json(current_response()))
        .expect(1)
        .mount(&weather)
        .await;

    let service = create_service(&weather, &geocoding, Some(API_KEY));
    let reply = service.handle(&weather_cmd("Hamburg")).await;

    assert_eq!(
        reply.summary,
        "The weather for <highlight>Hamburg, Germany<end> is <highlight>7.4°C<end> with light rain"
    );
    let blob = reply.blob.unwrap();
    assert_eq!(blob.title, "Details");
    assert!(blob.body.contains("Population: <highlight>1,841,179<end>\n"));
    assert!(blob.body.contains("Humidity: <highlight>93%<end>\n"));
    assert!(blob.body.contains("Pressure: <highlight>1008 hPa<end>"));
}

#[tokio::test]
async fn forecast_end_to_end() {
    let weather = MockServer::start().await;
    let geocoding = MockServer::start().await;
    setup_geocoding(&geocoding).await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .and(query_param("lat", "53.5503"))
        .and(query_param("appid", API_KEY))
        .and(query_param("cnt", "24"))
        .respond_with(ResponseTemplate::new(200).set_body_json(forecast_response()))
        .expect(1)
        .mount(&weather)
        .await;

    let service = create_service(&weather, &geocoding, Some(API_KEY));
    let reply = service
        .handle(&BotCommand::Forecast {
            location: "Hamburg".to_string(),
        })
        .await;

    assert_eq!(reply.summary, "Weather forecast for Hamburg, Germany");
    let blob = reply.blob.unwrap();
    assert_eq!(blob.title, "Weather forecast for Hamburg, Germany");
    let body = blob.body;

    assert!(body.contains("Population: <highlight>1,841,179<end>\n"));
    assert!(body.contains("Timezone: <highlight>UTC+01:00<end>\n"));
    assert!(body.contains("<header2>Tuesday<end>"));
    assert!(body.contains("<header2>Wednesday<end>"));
    assert!(body.contains("<header2>Thursday<end>"));
    assert!(!body.contains("<header2>Friday<end>"));
    assert_eq!(body.matches("<tab>").count(), 17);
    assert!(body.contains("<tab>22:00: "));

    for i in 0..17 {
        assert!(body.contains(&format!("<highlight>{:.1}°C<end>", step_temp(i))));
        assert!(body.contains(&format!("<highlight>{:.1}°C<end>", step_feels_like(i))));
    }
    for i in 17..24 {
        assert!(!body.contains(&format!("<highlight>{:.1}°C<end>", step_temp(i))));
    }

    assert!(body.contains(", <black>00<end><highlight>5%<end> clouds"));
    assert!(body.contains(", <black>0<end><highlight>40%<end> clouds"));
    assert!(body.contains(", <highlight>100%<end> clouds"));
    assert!(body.contains(", <black>0<end><highlight>0.3mm<end> rain"));
    assert!(body.contains(", <highlight>12.3mm<end> rain"));
}

// ============================================================================
// Error scenarios
// ============================================================================

#[tokio::test]
async fn missing_key_makes_no_requests() {
    let weather = MockServer::start().await;
    let geocoding = MockServer::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&weather)
        .await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&geocoding)
        .await;

    let service = create_service(&weather, &geocoding, None);
    let reply = service.handle(&weather_cmd("Hamburg")).await;

    assert_eq!(
        reply.summary,
        "There is either no API key or an invalid one was set."
    );
}

#[tokio::test]
async fn invalid_api_key_is_shown_to_the_user() {
    let weather = MockServer::start().await;
    let geocoding = MockServer::start().await;
    setup_geocoding(&geocoding).await;

    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(401).set_body_json(serde_json::json!({
            "cod": 401,
            "message": "Invalid API key"
        })))
        .mount(&weather)
        .await;

    let service = create_service(&weather, &geocoding, Some(API_KEY));
    let reply = service
        .handle(&BotCommand::Forecast {
            location: "Hamburg".to_string(),
        })
        .await;

    assert_eq!(
        reply.summary,
        "Error looking up the weather: <highlight>Invalid API key<end>."
    );
}

#[tokio::test]
async fn server_error_is_generic() {
    let weather = MockServer::start().await;
    let geocoding = MockServer::start().await;
    setup_geocoding(&geocoding).await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(502).set_body_string("Bad Gateway"))
        .mount(&weather)
        .await;

    let service = create_service(&weather, &geocoding, Some(API_KEY));
    let reply = service.handle(&weather_cmd("Hamburg")).await;

    assert_eq!(reply.summary, "Error looking up the weather.");
}

#[tokio::test]
async fn malformed_payload_is_a_parse_error() {
    let weather = MockServer::start().await;
    let geocoding = MockServer::start().await;
    setup_geocoding(&geocoding).await;

    Mock::given(method("GET"))
        .and(path("/weather"))
        .respond_with(ResponseTemplate::new(200).set_body_string("{\"cod\": 200"))
        .mount(&weather)
        .await;

    let service = create_service(&weather, &geocoding, Some(API_KEY));
    let reply = service.handle(&weather_cmd("Hamburg")).await;

    assert_eq!(reply.summary, "Error parsing weather data.");
}

#[tokio::test]
async fn unknown_location() {
    let weather = MockServer::start().await;
    let geocoding = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .mount(&geocoding)
        .await;

    let service = create_service(&weather, &geocoding, Some(API_KEY));
    let reply = service.handle(&weather_cmd("Atlantis")).await;

    assert_eq!(
        reply.summary,
        "Unable to find a location matching <highlight>Atlantis<end>."
    );
}
