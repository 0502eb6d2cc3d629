use crate::models::quiz::{OPTION_COUNT, QUESTION_COUNT};

const SYSTEM_INSTRUCTION: &str =
    "You are an assistant that writes educational tests. Respond only with valid JSON.";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatPrompt {
    pub system: String,
    pub user: String,
}

impl ChatPrompt {
    /// Prompt asking for a multiple-choice test on `topic`. Grade or level
    /// hints are left inside the topic text for the model to pick up.
    pub fn for_topic(topic: &str) -> Self {
        let user = format!(
            r#"Create a test on the topic: {topic}

Requirements:
- Write exactly {QUESTION_COUNT} questions
- Give each question exactly {OPTION_COUNT} answer options
- Match the difficulty to the level in the request (if a grade or level is given)
- Questions must check understanding of the topic
- Write in the same language as the topic

Answer format is strictly a JSON array of objects:
[
  {{
    "question": "Question text?",
    "options": ["Option 1", "Option 2", "Option 3", "Option 4"],
    "correctAnswer": 0
  }}
]

where correctAnswer is the index of the correct option (0-{max_index}).

Return ONLY the JSON, with no extra text."#,
            max_index = OPTION_COUNT - 1,
        );
        Self {
            system: SYSTEM_INSTRUCTION.to_string(),
            user,
        }
    }
}
