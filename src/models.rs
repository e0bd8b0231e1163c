use crate::utils::decode_entities;
use serde::{Deserialize, Serialize};

/// One question exactly as the question bank sent it (entity-encoded).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawQuestion {
    #[serde(rename = "question")]
    pub text: String,
    pub correct_answer: String,
    pub incorrect_answers: Vec<String>,
    #[serde(default)]
    pub category: String,
    #[serde(default, rename = "type")]
    pub question_type: String,
    #[serde(default)]
    pub difficulty: String,
}

impl RawQuestion {
    pub fn new(
        text: impl Into<String>,
        correct_answer: impl Into<String>,
        incorrect_answers: Vec<String>,
    ) -> Self {
        Self {
            text: text.into(),
            correct_answer: correct_answer.into(),
            incorrect_answers,
            category: String::new(),
            question_type: String::new(),
            difficulty: String::new(),
        }
    }

    pub fn decoded_text(&self) -> String {
        decode_entities(&self.text)
    }

    pub fn decoded_correct_answer(&self) -> String {
        decode_entities(&self.correct_answer)
    }

    pub fn decoded_incorrect_answers(&self) -> Vec<String> {
        self.incorrect_answers
            .iter()
            .map(|answer| decode_entities(answer))
            .collect()
    }
}

/// What the quiz screen shows for the current question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PresentedQuestion {
    pub text: String,
    pub category: String,
    pub difficulty: String,
    pub answer_choices: Vec<String>,
}

/// A selectable option on the configuration form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    pub id: String,
    pub name: String,
}

impl Choice {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
        }
    }
}

pub fn any_category() -> Choice {
    Choice::new(crate::config::ANY_CATEGORY, "Any Category")
}

pub fn type_choices() -> Vec<Choice> {
    vec![
        Choice::new(crate::config::ANY, "Any Type"),
        Choice::new("multiple", "Multiple Choice"),
        Choice::new("boolean", "True / False"),
    ]
}

pub fn difficulty_choices() -> Vec<Choice> {
    vec![
        Choice::new(crate::config::ANY, "Any Difficulty"),
        Choice::new("easy", "Easy"),
        Choice::new("medium", "Medium"),
        Choice::new("hard", "Hard"),
    ]
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppState {
    Configure,
    Loading,
    Quiz,
    QuizQuitConfirm,
    Result,
    Failed(String),
}
