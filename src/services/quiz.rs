use crate::{
    clients::openai::ChatBackend,
    config::QuizConfig,
    error::{AppError, Result},
    models::{
        prompt::ChatPrompt,
        quiz::{GeneratedQuestion, Quiz, QuizQuestion, TopicRequest, OPTION_COUNT, QUESTION_COUNT},
    },
};

/// Runs the generation pipeline for one request body.
///
/// Order matters: the topic is validated and the API key checked before the
/// backend is called, so neither failure costs a network round trip.
pub async fn generate_quiz<C: ChatBackend + ?Sized>(
    body: &[u8],
    config: &QuizConfig,
    chat: &C,
) -> Result<Quiz> {
    let req = parse_request(body)?;
    let topic = req.validate().map_err(AppError::Validation)?;
    tracing::info!(topic.len = topic.len(), "generating quiz");
    let api_key = config.api_key()?;

    let prompt = ChatPrompt::for_topic(topic);
    let content = chat.complete(api_key, &prompt).await?;
    let questions = parse_questions(&content)?;
    tracing::info!(count = questions.len(), "quiz generated");

    Ok(Quiz { questions, topic: topic.to_string() })
}

fn parse_request(body: &[u8]) -> Result<TopicRequest> {
    if body.iter().all(u8::is_ascii_whitespace) {
        return Ok(TopicRequest::default());
    }
    serde_json::from_slice(body).map_err(|e| AppError::Validation(format!("invalid JSON body: {e}")))
}

/// Drops a Markdown code fence the model sometimes wraps its JSON in.
pub fn strip_code_fence(content: &str) -> &str {
    let mut s = content.trim();
    s = s.strip_prefix("```json").unwrap_or(s);
    s = s.strip_prefix("```").unwrap_or(s);
    s = s.strip_suffix("```").unwrap_or(s);
    s.trim()
}

/// Parses completion text into numbered questions, rejecting anything that
/// is not exactly five four-option questions with an in-range answer.
pub fn parse_questions(content: &str) -> Result<Vec<QuizQuestion>> {
    let raw: Vec<GeneratedQuestion> =
        serde_json::from_str(strip_code_fence(content)).map_err(|e| AppError::Parse(e.to_string()))?;

    if raw.len() != QUESTION_COUNT {
        return Err(AppError::Parse(format!(
            "expected {QUESTION_COUNT} questions, got {}",
            raw.len()
        )));
    }

    raw.into_iter()
        .enumerate()
        .map(|(i, q)| {
            let id = i + 1;
            if q.options.len() != OPTION_COUNT {
                return Err(AppError::Parse(format!(
                    "question {id}: expected {OPTION_COUNT} options, got {}",
                    q.options.len()
                )));
            }
            if q.correct_answer >= q.options.len() {
                return Err(AppError::Parse(format!(
                    "question {id}: correctAnswer {} is out of range",
                    q.correct_answer
                )));
            }
            Ok(QuizQuestion {
                id,
                question: q.question,
                options: q.options,
                correct_answer: q.correct_answer,
            })
        })
        .collect()
}
