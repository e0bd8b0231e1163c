use crate::error::GatewayError;
use crate::gateway::response::{CategoriesResponse, QuestionsResponse};
use crate::gateway::{QuestionBank, QuestionRequest};
use crate::logger;
use crate::models::{Choice, RawQuestion};
use async_trait::async_trait;
use reqwest::Client;

/// HTTP client for the Open Trivia Database.
#[derive(Debug, Clone)]
pub struct OpenTdbClient {
    client: Client,
    base_url: String,
}

impl OpenTdbClient {
    pub fn new(base_url: impl Into<String>) -> Self {
        // Requests run on short-lived per-worker runtimes, so pooled
        // connections must not outlive the runtime that opened them.
        let client = Client::builder()
            .pool_max_idle_per_host(0)
            .build()
            .unwrap_or_else(|_| Client::new());
        Self {
            client,
            base_url: base_url.into(),
        }
    }

    pub fn questions_url(&self) -> String {
        format!("{}/api.php", self.base_url.trim_end_matches('/'))
    }

    pub fn categories_url(&self) -> String {
        format!("{}/api_category.php", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl QuestionBank for OpenTdbClient {
    async fn fetch_questions(
        &self,
        request: &QuestionRequest,
    ) -> Result<Vec<RawQuestion>, GatewayError> {
        let pairs = request.query_pairs();
        logger::log(&format!(
            "Fetching questions from {} with {:?}",
            self.questions_url(),
            pairs
        ));

        let response = self
            .client
            .get(self.questions_url())
            .query(&pairs)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(GatewayError::HttpStatus(response.status()));
        }

        let body: QuestionsResponse = response.json().await?;
        let questions = body.into_questions()?;
        logger::log(&format!(
            "Question bank returned {} of {} requested questions",
            questions.len(),
            request.amount
        ));
        Ok(questions)
    }

    async fn categories(&self) -> Result<Vec<Choice>, GatewayError> {
        let response = self.client.get(self.categories_url()).send().await?;
        if !response.status().is_success() {
            return Err(GatewayError::HttpStatus(response.status()));
        }
        let body: CategoriesResponse = response.json().await?;
        Ok(body.into_choices())
    }
}
