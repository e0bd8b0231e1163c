pub mod client;
pub mod request;
pub mod response;

pub use client::OpenTdbClient;
pub use request::QuestionRequest;

use crate::error::GatewayError;
use crate::models::{Choice, RawQuestion};
use async_trait::async_trait;

/// Remote source of trivia questions.
#[async_trait]
pub trait QuestionBank: Send + Sync {
    /// One-shot fetch. May return fewer questions than `request.amount`.
    async fn fetch_questions(
        &self,
        request: &QuestionRequest,
    ) -> Result<Vec<RawQuestion>, GatewayError>;

    async fn categories(&self) -> Result<Vec<Choice>, GatewayError>;
}

#[cfg(test)]
use std::sync::Mutex;

/// In-memory question bank for tests; records every request it sees.
#[cfg(test)]
pub struct MockQuestionBank {
    questions: Vec<RawQuestion>,
    fail: bool,
    pub requests: Mutex<Vec<QuestionRequest>>,
}

#[cfg(test)]
impl MockQuestionBank {
    pub fn with_questions(questions: Vec<RawQuestion>) -> Self {
        Self {
            questions,
            fail: false,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn failing() -> Self {
        Self {
            questions: Vec::new(),
            fail: true,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }
}

#[cfg(test)]
#[async_trait]
impl QuestionBank for MockQuestionBank {
    async fn fetch_questions(
        &self,
        request: &QuestionRequest,
    ) -> Result<Vec<RawQuestion>, GatewayError> {
        self.requests.lock().unwrap().push(request.clone());
        if self.fail {
            return Err(GatewayError::HttpStatus(
                reqwest::StatusCode::SERVICE_UNAVAILABLE,
            ));
        }
        if self.questions.is_empty() {
            return Err(GatewayError::Empty);
        }
        Ok(self
            .questions
            .iter()
            .take(request.amount as usize)
            .cloned()
            .collect())
    }

    async fn categories(&self) -> Result<Vec<Choice>, GatewayError> {
        if self.fail {
            return Err(GatewayError::Empty);
        }
        Ok(vec![
            Choice::new("9", "General Knowledge"),
            Choice::new("17", "Science & Nature"),
        ])
    }
}
