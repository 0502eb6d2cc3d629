use vercel_runtime::{Body, Response, StatusCode};

pub const ALLOW_ORIGIN: (&str, &str) = ("Access-Control-Allow-Origin", "*");
pub const ALLOW_METHODS: (&str, &str) = ("Access-Control-Allow-Methods", "POST, OPTIONS");
pub const ALLOW_HEADERS: (&str, &str) = ("Access-Control-Allow-Headers", "Content-Type");
pub const MAX_AGE: (&str, &str) = ("Access-Control-Max-Age", "86400");

/// Empty 200 answering a browser preflight.
pub fn preflight() -> anyhow::Result<Response<Body>> {
    Ok(Response::builder()
        .status(StatusCode::OK)
        .header(ALLOW_ORIGIN.0, ALLOW_ORIGIN.1)
        .header(ALLOW_METHODS.0, ALLOW_METHODS.1)
        .header(ALLOW_HEADERS.0, ALLOW_HEADERS.1)
        .header(MAX_AGE.0, MAX_AGE.1)
        .body(Body::Empty)?)
}
