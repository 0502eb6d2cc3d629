use serde_json::json;
use vercel_runtime::{Body, Error, Request, Response, StatusCode};

use crate::{
    clients::openai::ChatBackend,
    config::QuizConfig,
    http::{
        cors,
        response::{error_response, json_response},
    },
    services::quiz::generate_quiz,
};

/// Entry point shared by the function binary and the tests.
///
/// Every failure becomes a JSON `{"error": ...}` response; the `Err` arm is
/// only reached if a response cannot be built at all.
pub async fn handle<C: ChatBackend + ?Sized>(
    req: Request,
    config: &QuizConfig,
    chat: &C,
) -> Result<Response<Body>, Error> {
    let method = req.method().as_str();
    tracing::info!(method, "generate-test request");

    match method {
        "OPTIONS" => return Ok(cors::preflight()?),
        "POST" => {}
        _ => {
            let mut resp = json_response(StatusCode::METHOD_NOT_ALLOWED, &json!({"error": "Method not allowed"}))?;
            resp.headers_mut().insert("Allow", cors::ALLOW_METHODS.1.parse()?);
            return Ok(resp);
        }
    }

    match generate_quiz(req.body(), config, chat).await {
        Ok(quiz) => Ok(json_response(StatusCode::OK, &quiz)?),
        Err(err) => {
            let (status, body) = error_response(&err);
            tracing::error!(status = status.as_u16(), error = %err, "quiz generation failed");
            Ok(json_response(status, &body)?)
        }
    }
}
