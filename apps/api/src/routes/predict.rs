use axum::Json;
use serde::Serialize;
use serde_json::{Map, Value};

#[derive(Debug, Serialize)]
pub struct PredictionResponse {
    pub prediction: &'static str,
}

/// POST /predict
/// Placeholder: accepts any JSON object and returns a fixed prediction.
pub async fn predict_handler(Json(_payload): Json<Map<String, Value>>) -> Json<PredictionResponse> {
    Json(PredictionResponse {
        prediction: "Your prediction result here",
    })
}
