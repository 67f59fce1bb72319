use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use serde_json::{Value, json};
use snowcast::config::ModelConfig;
use snowcast::model::load_model;
use snowcast::web::{AppState, create_router};
use tower::ServiceExt;

fn heuristic_app() -> Router {
    let config = ModelConfig {
        holdout_size: 200,
        ..ModelConfig::heuristic()
    };
    let loaded = load_model(&config).unwrap();
    create_router(AppState::from(loaded), None)
}

async fn send(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    (status, serde_json::from_slice(&bytes).unwrap())
}

async fn get(uri: &str) -> (StatusCode, Value) {
    let request = Request::get(uri).body(Body::empty()).unwrap();
    send(heuristic_app(), request).await
}

async fn post(body: &str) -> (StatusCode, Value) {
    let request = Request::post("/api/predict")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_owned()))
        .unwrap();
    send(heuristic_app(), request).await
}

#[tokio::test]
async fn health_reports_ok() {
    let (status, body) = get("/health").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({"status": "ok"}));
}

#[tokio::test]
async fn heavy_snow_scenario() {
    let (status, body) = get("/api/predict?temperature=-5&humidity=80").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["prediction"], 2);
    assert_eq!(body["label"], "Heavy Snow");
    assert_eq!(body["probabilities"], json!([0.05, 0.2, 0.75]));
    assert_eq!(body["input"], json!({"temperature": -5.0, "humidity": 80.0}));
}

#[tokio::test]
async fn light_and_no_snow_scenarios() {
    let (_, light) = get("/api/predict?temperature=1&humidity=60").await;
    assert_eq!(light["prediction"], 1);
    assert_eq!(light["label"], "Light Snow");

    let (_, none) = get("/api/predict?temperature=5&humidity=30").await;
    assert_eq!(none["prediction"], 0);
    assert_eq!(none["label"], "No Snow");
}

#[tokio::test]
async fn missing_parameters_take_defaults() {
    let (status, body) = get("/api/predict").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["input"], json!({"temperature": 0.0, "humidity": 50.0}));
    // light snow needs humidity strictly above 50
    assert_eq!(body["label"], "No Snow");
}

#[tokio::test]
async fn post_json_body() {
    let (status, body) = post(r#"{"temperature": -8, "humidity": "90"}"#).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["label"], "Heavy Snow");
    assert_eq!(body["input"]["humidity"], 90.0);
}

#[tokio::test]
async fn non_numeric_query_is_rejected() {
    let (status, body) = get("/api/predict?temperature=abc&humidity=50").await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "Invalid input or server error");
    assert!(body["detail"].as_str().unwrap().contains("temperature"));
}

#[tokio::test]
async fn malformed_bodies_are_rejected() {
    for raw in ["{not json", "[1, 2]", r#"{"humidity": true}"#] {
        let (status, body) = post(raw).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{raw}");
        assert!(body["error"].is_string(), "{raw}");
    }
}

#[tokio::test]
async fn model_endpoint_describes_backend() {
    let (status, body) = get("/api/model").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["backend"], "heuristic");
    assert_eq!(body["classifier"], "heuristic");
    assert_eq!(body["holdout"]["samples"], 200);
    assert!(body.get("cache").is_none());
}
