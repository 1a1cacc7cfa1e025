//! End-to-end tests for the `/info` route against mocked upstream services

use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;
use wiremock::matchers::{header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};
use world_info::config::CorsConfig;
use world_info::{WorldInfoConfig, WorldInfoService, web};

struct Upstreams {
    geocoding: MockServer,
    forecast: MockServer,
}

impl Upstreams {
    async fn start() -> Self {
        Self {
            geocoding: MockServer::start().await,
            forecast: MockServer::start().await,
        }
    }

    fn app(&self) -> Router {
        let mut config = WorldInfoConfig::default();
        config.geocoding.base_url = self.geocoding.uri();
        config.forecast.base_url = self.forecast.uri();
        let service = WorldInfoService::from_config(&config).expect("service");
        web::app(service, &CorsConfig::default())
    }

    async fn geocode_rome(&self) {
        Mock::given(method("GET"))
            .and(path("/search"))
            .and(query_param("q", "Rome"))
            .and(header("user-agent", "world-info-app"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"lat": "41.9", "lon": "12.5", "display_name": "Rome, Italy"}
            ])))
            .mount(&self.geocoding)
            .await;
    }

    async fn forecast_rome(&self) {
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .and(query_param("latitude", "41.9"))
            .and(query_param("longitude", "12.5"))
            .and(query_param("current_weather", "true"))
            .and(query_param("timezone", "auto"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "timezone": "Europe/Rome",
                "current_weather": {
                    "time": "2024-01-01T12:00",
                    "temperature": 15.2,
                    "windspeed": 10.0,
                    "weathercode": 3
                }
            })))
            .mount(&self.forecast)
            .await;
    }
}

async fn get(app: Router, uri: &str) -> (StatusCode, Value) {
    let response = app
        .oneshot(Request::builder().uri(uri).body(Body::empty()).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body: Value = serde_json::from_slice(&bytes).unwrap();
    (status, body)
}

#[tokio::test]
async fn test_info_for_known_city() {
    let upstreams = Upstreams::start().await;
    upstreams.geocode_rome().await;
    upstreams.forecast_rome().await;

    let (status, body) = get(upstreams.app(), "/info?city=Rome").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["città"], json!("Rome, Italy"));
    assert_eq!(body["latitudine"], json!(41.9));
    assert_eq!(body["longitudine"], json!(12.5));
    assert_eq!(body["fuso_orario"], json!("Europe/Rome"));
    assert_eq!(body["orario_locale"], json!("2024-01-01T12:00"));
    assert_eq!(
        body["meteo"],
        json!({"temperatura_°C": 15.2, "vento_km/h": 10.0, "codice_meteo": 3})
    );
}

#[tokio::test]
async fn test_unknown_city_is_404() {
    let upstreams = Upstreams::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "Nowhereville"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([])))
        .mount(&upstreams.geocoding)
        .await;

    let (status, body) = get(upstreams.app(), "/info?city=Nowhereville").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({"errore": "Città non trovata"}));
}

#[tokio::test]
async fn test_forecast_outage_is_500() {
    let upstreams = Upstreams::start().await;
    upstreams.geocode_rome().await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&upstreams.forecast)
        .await;

    let (status, body) = get(upstreams.app(), "/info?city=Rome").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        body,
        json!({"errore": "Errore nel recupero dati meteo/orario"})
    );
}

#[tokio::test]
async fn test_forecast_without_current_block_is_500() {
    let upstreams = Upstreams::start().await;
    upstreams.geocode_rome().await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"timezone": "Europe/Rome"})))
        .mount(&upstreams.forecast)
        .await;

    let (status, body) = get(upstreams.app(), "/info?city=Rome").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert!(body["errore"].is_string());
}

#[tokio::test]
async fn test_missing_city_parameter_is_rejected() {
    let upstreams = Upstreams::start().await;
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&upstreams.geocoding)
        .await;

    let (status, body) = get(upstreams.app(), "/info").await;

    assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    assert!(body["errore"].is_string());
}

#[tokio::test]
async fn test_city_name_is_url_decoded() {
    let upstreams = Upstreams::start().await;
    Mock::given(method("GET"))
        .and(path("/search"))
        .and(query_param("q", "New York"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!([
            {"lat": "40.7127", "lon": "-74.0060", "display_name": "New York, United States"}
        ])))
        .expect(1)
        .mount(&upstreams.geocoding)
        .await;
    Mock::given(method("GET"))
        .and(path("/forecast"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "timezone": "America/New_York",
            "current_weather": {
                "time": "2024-01-01T06:00",
                "temperature": -2.5,
                "windspeed": 18.4,
                "weathercode": 71
            }
        })))
        .mount(&upstreams.forecast)
        .await;

    let (status, body) = get(upstreams.app(), "/info?city=New%20York").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["città"], json!("New York, United States"));
    assert_eq!(body["longitudine"], json!(-74.006));
    assert_eq!(body["meteo"]["codice_meteo"], json!(71));
}

#[tokio::test]
async fn test_repeated_city_parameter_uses_last_value() {
    let upstreams = Upstreams::start().await;
    upstreams.geocode_rome().await;
    upstreams.forecast_rome().await;

    let (status, body) = get(upstreams.app(), "/info?city=Paris&city=Rome").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["città"], json!("Rome, Italy"));
}
