use axum::{http::Uri, response::Json};
use serde_json::{Value, json};

use super::ApiError;

pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "version": env!("CARGO_PKG_VERSION")
    }))
}

pub async fn not_found(uri: Uri) -> ApiError {
    ApiError::not_found(format!("route not found: {}", uri.path()))
}
