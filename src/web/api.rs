use crate::core::{ClassDistribution, Sample};
use crate::model::ModelDescription;
use crate::prediction::{
    DEFAULT_HUMIDITY, DEFAULT_TEMPERATURE, InputError, Prediction, ensure_finite, parse_reading,
};
use crate::web::{ApiError, AppState};
use axum::Json;
use axum::body::Bytes;
use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::HashMap;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
}

/// Body of a successful `/api/predict` call.
#[derive(Debug, Serialize)]
pub struct PredictResponse {
    pub prediction: usize,
    pub label: &'static str,
    pub probabilities: ClassDistribution,
    pub input: Sample,
}

impl From<Prediction> for PredictResponse {
    fn from(p: Prediction) -> Self {
        Self {
            prediction: p.label.index(),
            label: p.label.name(),
            probabilities: p.probabilities,
            input: p.input,
        }
    }
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

pub async fn model(State(state): State<AppState>) -> Json<ModelDescription> {
    Json(state.model.as_ref().clone())
}

/// `GET /api/predict?temperature=..&humidity=..`
pub async fn predict_query(
    State(state): State<AppState>,
    query: Result<Query<HashMap<String, String>>, QueryRejection>,
) -> Result<Json<PredictResponse>, ApiError> {
    let Query(params) = query.map_err(|e| ApiError::MalformedQuery(e.body_text()))?;

    let read = |field: &'static str, default: f64| -> Result<f64, InputError> {
        match params.get(field) {
            Some(raw) => parse_reading(field, raw),
            None => Ok(default),
        }
    };
    let temperature = read("temperature", DEFAULT_TEMPERATURE)?;
    let humidity = read("humidity", DEFAULT_HUMIDITY)?;

    let prediction = state.predictor.predict(temperature, humidity)?;
    Ok(Json(prediction.into()))
}

/// `POST /api/predict` with a JSON object body. The body is parsed
/// regardless of its content type.
pub async fn predict_body(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<Json<PredictResponse>, ApiError> {
    let value: Value =
        serde_json::from_slice(&body).map_err(|e| ApiError::MalformedBody(e.to_string()))?;
    let Value::Object(fields) = value else {
        return Err(ApiError::MalformedBody("expected a JSON object".into()));
    };

    let temperature = reading_from_json(&fields, "temperature", DEFAULT_TEMPERATURE)?;
    let humidity = reading_from_json(&fields, "humidity", DEFAULT_HUMIDITY)?;

    let prediction = state.predictor.predict(temperature, humidity)?;
    Ok(Json(prediction.into()))
}

/// Accepts JSON numbers and numeric strings; a missing field takes the
/// default.
fn reading_from_json(
    fields: &Map<String, Value>,
    field: &'static str,
    default: f64,
) -> Result<f64, InputError> {
    match fields.get(field) {
        None => Ok(default),
        Some(Value::String(raw)) => parse_reading(field, raw),
        Some(Value::Number(n)) => match n.as_f64() {
            Some(x) => ensure_finite(field, x),
            None => Err(InputError::NotANumber {
                field,
                raw: n.to_string(),
            }),
        },
        Some(other) => Err(InputError::NotANumber {
            field,
            raw: other.to_string(),
        }),
    }
}
