use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("OpenAI API key not configured")]
    MissingApiKey,
    #[error("OpenAI API error: {body}")]
    Upstream { status: u16, body: String },
    #[error("Failed to parse AI response: {0}")]
    Parse(String),
    #[error("{0}")]
    External(String),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
