use serde_json::{json, Value};
use vercel_runtime::{Body, Response, StatusCode};

use crate::{error::AppError, http::cors::ALLOW_ORIGIN};

pub fn error_response(err: &AppError) -> (StatusCode, Value) {
    let status = match err {
        AppError::Upstream { status, .. } => {
            StatusCode::from_u16(*status).unwrap_or(StatusCode::BAD_GATEWAY)
        }
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, json!({ "error": err.to_string() }))
}

pub fn json_response<T: serde::Serialize>(status: StatusCode, value: &T) -> anyhow::Result<Response<Body>> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header(ALLOW_ORIGIN.0, ALLOW_ORIGIN.1)
        .body(Body::Text(serde_json::to_string(value)?))?)
}
