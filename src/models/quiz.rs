use serde::{Deserialize, Serialize};

pub const QUESTION_COUNT: usize = 5;
pub const OPTION_COUNT: usize = 4;

#[derive(Deserialize, Debug, Default)]
pub struct TopicRequest {
    #[serde(default)]
    pub topic: Option<String>,
}

impl TopicRequest {
    /// Returns the topic when it is present and not blank.
    pub fn validate(&self) -> Result<&str, String> {
        match self.topic.as_deref() {
            None => Err("topic is required".into()),
            Some(t) if t.trim().is_empty() => Err("topic must be a non-empty string".into()),
            Some(t) => Ok(t),
        }
    }
}

/// A question as the model returns it, before numbering.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GeneratedQuestion {
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct QuizQuestion {
    pub id: usize,
    pub question: String,
    pub options: Vec<String>,
    pub correct_answer: usize,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Quiz {
    pub questions: Vec<QuizQuestion>,
    pub topic: String,
}
