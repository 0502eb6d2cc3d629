use quizgen::{
    clients::openai::OpenAiClient,
    handler::handle,
    http::response::{error_response, json_response},
    logging, QuizConfig,
};
use vercel_runtime::{run, Body, Error, Request, Response};

#[tokio::main]
async fn main() -> Result<(), Error> {
    logging::init();
    run(handler).await
}

pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    let config = QuizConfig::from_env();
    let client = match OpenAiClient::new(&config) {
        Ok(client) => client,
        Err(err) => {
            let (status, body) = error_response(&err);
            return Ok(json_response(status, &body)?);
        }
    };
    handle(req, &config, &client).await
}
